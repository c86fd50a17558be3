mod controller;
mod gateway;
mod model;
mod samples;

pub use controller::{MealListController, ViewState};
pub use gateway::{HttpMealGateway, MealGateway, DEFAULT_LIMIT};
pub use model::{
    CreateMealRequest, MealDraft, MealPage, MealRecord, RestaurantStatus, UpdateMealRequest,
    WireMeal, WireRestaurant,
};
