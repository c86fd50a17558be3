use std::sync::Arc;

use mealboard::config::AppConfig;
use mealboard::meals::{HttpMealGateway, MealListController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "mealboard=debug,reqwest=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env();
    tracing::info!(url = %config.api_base_url, limit = config.page_limit, "loading meals");

    let gateway = Arc::new(HttpMealGateway::new(&config.api_base_url));
    let mut controller = MealListController::new(gateway).with_limit(config.page_limit);

    // An optional first argument becomes the search term.
    match std::env::args().nth(1) {
        Some(term) => controller.set_search(term).await,
        None => controller.load_initial().await,
    }

    for meal in controller.meals() {
        println!(
            "{:<28} {:>4.1}  {:<20} {}",
            meal.food_name, meal.rating, meal.restaurant_name, meal.restaurant_status
        );
    }
    if controller.has_more_meals() {
        println!("-- more available, raise MEALS_PAGE_LIMIT to fetch a bigger page --");
    }

    Ok(())
}
