/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("MEALS_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/version-01/meals".into()),
            page_limit: std::env::var("MEALS_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(crate::meals::DEFAULT_LIMIT),
        }
    }
}
