use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Open/closed state of the restaurant serving a meal.
///
/// The API carries this lower-case; the UI shows the capitalized form,
/// which is what `Display` renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantStatus {
    #[default]
    Open,
    Closed,
}

impl std::fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestaurantStatus::Open => f.write_str("Open"),
            RestaurantStatus::Closed => f.write_str("Closed"),
        }
    }
}

/// The nested restaurant object as the API sends and receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRestaurant {
    pub name: String,
    pub logo: String,
    pub status: RestaurantStatus,
}

/// A meal as the backend sends it.
///
/// Identifier naming has drifted across backend revisions (`id`, `_id`,
/// `mealId`); all three collapse into `id` here, and a record may arrive
/// with none at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMeal {
    #[serde(default, alias = "_id", alias = "mealId")]
    pub id: Option<String>,
    pub food_name: String,
    pub rating: f64,
    pub image_url: String,
    pub restaurant: WireRestaurant,
}

/// Flattened, UI-facing meal.
///
/// `price` has no wire counterpart and defaults to zero on inbound
/// translation. An empty `id` marks a record that was never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRecord {
    pub id: String,
    pub food_name: String,
    pub rating: f64,
    pub price: f64,
    pub image_url: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: RestaurantStatus,
}

impl MealRecord {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

impl From<WireMeal> for MealRecord {
    fn from(wire: WireMeal) -> Self {
        Self {
            id: wire.id.unwrap_or_default(),
            food_name: wire.food_name,
            rating: wire.rating,
            price: 0.0,
            image_url: wire.image_url,
            restaurant_name: wire.restaurant.name,
            restaurant_logo: wire.restaurant.logo,
            restaurant_status: wire.restaurant.status,
        }
    }
}

/// Body of `POST /meals`. `restaurant.status` serializes lower-case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub food_name: String,
    pub rating: f64,
    pub image_url: String,
    pub restaurant: WireRestaurant,
}

/// Body of `PUT /meals/{id}`. Only name and rating are updatable; price,
/// image and restaurant fields stay as they are on the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub food_name: String,
    pub rating: f64,
}

/// One bounded slice of the meal collection plus pagination metadata.
/// `total_pages` is taken from the server verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPage {
    pub items: Vec<MealRecord>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListEnvelope {
    pub message: Option<String>,
    pub data: Option<Vec<WireMeal>>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl ListEnvelope {
    pub(crate) fn into_page(self) -> Result<MealPage> {
        let ListEnvelope {
            message,
            data,
            page,
            limit,
            total,
            total_pages,
        } = self;
        let wires = data.ok_or_else(|| Error::MalformedResponse {
            detail: message.unwrap_or_else(|| "list response missing `data`".into()),
        })?;
        Ok(MealPage {
            items: wires.into_iter().map(MealRecord::from).collect(),
            page,
            limit,
            total,
            total_pages,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemEnvelope {
    pub message: Option<String>,
    pub data: Option<WireMeal>,
}

impl ItemEnvelope {
    pub(crate) fn into_record(self) -> Result<MealRecord> {
        let ItemEnvelope { message, data } = self;
        let wire = data.ok_or_else(|| Error::MalformedResponse {
            detail: message.unwrap_or_else(|| "response missing `data`".into()),
        })?;
        Ok(wire.into())
    }
}

/// Form state for the add/edit dialog.
///
/// Numeric fields hold the raw text the user typed; parsing happens at
/// submit time. An unparseable price silently becomes zero, an unparseable
/// rating is a validation error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealDraft {
    pub id: String,
    pub food_name: String,
    pub rating: String,
    pub price: String,
    pub image_url: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: RestaurantStatus,
}

impl MealDraft {
    pub fn from_record(record: &MealRecord) -> Self {
        Self {
            id: record.id.clone(),
            food_name: record.food_name.clone(),
            rating: record.rating.to_string(),
            price: record.price.to_string(),
            image_url: record.image_url.clone(),
            restaurant_name: record.restaurant_name.clone(),
            restaurant_logo: record.restaurant_logo.clone(),
            restaurant_status: record.restaurant_status,
        }
    }

    pub fn parse_rating(&self) -> Result<f64> {
        self.rating
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::Validation {
                field: "rating",
                value: self.rating.clone(),
            })
    }

    pub fn parse_price(&self) -> f64 {
        self.price.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn to_create_request(&self) -> Result<CreateMealRequest> {
        Ok(CreateMealRequest {
            food_name: self.food_name.clone(),
            rating: self.parse_rating()?,
            image_url: self.image_url.clone(),
            restaurant: WireRestaurant {
                name: self.restaurant_name.clone(),
                logo: self.restaurant_logo.clone(),
                status: self.restaurant_status,
            },
        })
    }

    pub fn to_update_request(&self) -> Result<UpdateMealRequest> {
        Ok(UpdateMealRequest {
            food_name: self.food_name.clone(),
            rating: self.parse_rating()?,
        })
    }

    /// Materializes the draft without going through the API, for records
    /// that only live in the local list.
    pub fn to_record(&self) -> Result<MealRecord> {
        Ok(MealRecord {
            id: self.id.clone(),
            food_name: self.food_name.clone(),
            rating: self.parse_rating()?,
            price: self.parse_price(),
            image_url: self.image_url.clone(),
            restaurant_name: self.restaurant_name.clone(),
            restaurant_logo: self.restaurant_logo.clone(),
            restaurant_status: self.restaurant_status,
        })
    }
}


#[cfg(test)]
mod draft_tests {
    use super::*;

    #[test]
    fn unparseable_price_defaults_to_zero() {
        let draft = MealDraft {
            price: "not a price".into(),
            ..MealDraft::default()
        };
        assert_eq!(draft.parse_price(), 0.0);
    }

    #[test]
    fn unparseable_rating_is_a_validation_error() {
        let draft = MealDraft {
            rating: "five stars".into(),
            ..MealDraft::default()
        };
        let err = draft.parse_rating().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "rating", .. }));
    }

    #[test]
    fn draft_round_trips_through_a_record() {
        let record = MealRecord {
            id: "m-9".into(),
            food_name: "Ramen".into(),
            rating: 4.5,
            price: 11.25,
            image_url: "ramen.jpg".into(),
            restaurant_name: "Noodle Bar".into(),
            restaurant_logo: "nb.png".into(),
            restaurant_status: RestaurantStatus::Closed,
        };
        let rebuilt = MealDraft::from_record(&record)
            .to_record()
            .expect("draft from a record parses back");
        assert_eq!(rebuilt, record);
    }
}
