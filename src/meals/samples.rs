use super::model::{MealRecord, RestaurantStatus};

/// Built-in meals shown when the very first page fetch fails, so the screen
/// still has something to render. None of these carry a server id, which
/// keeps edits and deletes of them purely local.
pub(crate) fn sample_meals() -> Vec<MealRecord> {
    vec![
        MealRecord {
            id: String::new(),
            food_name: "Margherita Pizza".into(),
            rating: 4.6,
            price: 8.99,
            image_url: "https://images.mealboard.dev/meals/margherita.jpg".into(),
            restaurant_name: "Bella Napoli".into(),
            restaurant_logo: "https://images.mealboard.dev/logos/bella-napoli.png".into(),
            restaurant_status: RestaurantStatus::Open,
        },
        MealRecord {
            id: String::new(),
            food_name: "Beef Burger".into(),
            rating: 4.2,
            price: 10.5,
            image_url: "https://images.mealboard.dev/meals/beef-burger.jpg".into(),
            restaurant_name: "Grill House".into(),
            restaurant_logo: "https://images.mealboard.dev/logos/grill-house.png".into(),
            restaurant_status: RestaurantStatus::Open,
        },
        MealRecord {
            id: String::new(),
            food_name: "Sushi Platter".into(),
            rating: 4.8,
            price: 15.0,
            image_url: "https://images.mealboard.dev/meals/sushi-platter.jpg".into(),
            restaurant_name: "Tokyo Table".into(),
            restaurant_logo: "https://images.mealboard.dev/logos/tokyo-table.png".into(),
            restaurant_status: RestaurantStatus::Closed,
        },
        MealRecord {
            id: String::new(),
            food_name: "Caesar Salad".into(),
            rating: 3.9,
            price: 6.25,
            image_url: "https://images.mealboard.dev/meals/caesar-salad.jpg".into(),
            restaurant_name: "Green Fork".into(),
            restaurant_logo: "https://images.mealboard.dev/logos/green-fork.png".into(),
            restaurant_status: RestaurantStatus::Open,
        },
    ]
}
