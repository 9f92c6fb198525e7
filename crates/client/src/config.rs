//! Client configuration

/// Client configuration loaded from environment variables
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ADMISSIONS_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
        }
    }
}
