use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::error::{Error, Result};

use super::model::{
    CreateMealRequest, ItemEnvelope, ListEnvelope, MealPage, MealRecord, UpdateMealRequest,
    WireMeal,
};

/// Page size the UI starts with.
pub const DEFAULT_LIMIT: u32 = 8;

/// Everything the controller needs from the meals API. One result or error
/// per call; no retries, no timeouts beyond the HTTP client's own.
#[async_trait]
pub trait MealGateway: Send + Sync {
    async fn list(&self, page: u32, limit: u32, search: &str) -> Result<MealPage>;
    async fn get_by_id(&self, id: &str) -> Result<MealRecord>;
    async fn create(&self, req: &CreateMealRequest) -> Result<MealRecord>;
    async fn update(&self, id: &str, req: &UpdateMealRequest) -> Result<MealRecord>;
    async fn delete(&self, id: &str) -> Result<()>;

    /// Alias over `list` for call sites that read better with the term first.
    async fn search_meals(&self, term: &str, page: u32, limit: u32) -> Result<MealPage> {
        self.list(page, limit, term).await
    }
}

/// Production gateway speaking JSON to `<host>/api/version-01/meals`.
#[derive(Clone)]
pub struct HttpMealGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMealGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn meal_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn malformed(err: reqwest::Error) -> Error {
    Error::MalformedResponse {
        detail: err.to_string(),
    }
}

#[async_trait]
impl MealGateway for HttpMealGateway {
    #[instrument(skip(self))]
    async fn list(&self, page: u32, limit: u32, search: &str) -> Result<MealPage> {
        let mut query: Vec<(&str, String)> =
            vec![("page", page.to_string()), ("limit", limit.to_string())];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        let resp = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        let envelope: ListEnvelope = resp.json().await.map_err(malformed)?;
        let fetched = envelope.into_page()?;
        debug!(count = fetched.items.len(), total = fetched.total, "meals listed");
        Ok(fetched)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<MealRecord> {
        let resp = self.client.get(self.meal_url(id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id: id.to_string() });
        }
        let envelope: ItemEnvelope = resp
            .error_for_status()?
            .json()
            .await
            .map_err(malformed)?;
        envelope.into_record()
    }

    #[instrument(skip(self, req), fields(food_name = %req.food_name))]
    async fn create(&self, req: &CreateMealRequest) -> Result<MealRecord> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        // The create endpoint answers with the bare created meal, not the
        // `{message, data}` envelope the read paths use.
        let wire: WireMeal = resp.json().await.map_err(malformed)?;
        debug!(id = ?wire.id, "meal created");
        Ok(wire.into())
    }

    #[instrument(skip(self, req), fields(food_name = %req.food_name))]
    async fn update(&self, id: &str, req: &UpdateMealRequest) -> Result<MealRecord> {
        let resp = self.client.put(self.meal_url(id)).json(req).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id: id.to_string() });
        }
        let envelope: ItemEnvelope = resp
            .error_for_status()?
            .json()
            .await
            .map_err(malformed)?;
        envelope.into_record()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<()> {
        let resp = self.client.delete(self.meal_url(id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id: id.to_string() });
        }
        resp.error_for_status()?;
        Ok(())
    }
}
