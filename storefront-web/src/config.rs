//! Frontend configuration module
//!
//! Values are baked in at compile time from environment variables so the
//! static bundle can be pointed at a different API without code changes.

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const DEFAULT_STORE_NAME: &str = "ProductStore";
const DEFAULT_LANGUAGE: &str = "es";

/// Frontend configuration for the API endpoint and branding
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Brand shown in the navbar
    pub store_name: String,
    /// Language used until the visitor picks another one
    pub default_language: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("STOREFRONT_API_URL"),
            option_env!("STOREFRONT_NAME"),
            option_env!("STOREFRONT_LANGUAGE"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(api: Option<&str>, name: Option<&str>, language: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            api_base_url: pick(api, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            store_name: pick(name, DEFAULT_STORE_NAME),
            default_language: pick(language, DEFAULT_LANGUAGE),
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the store name
    pub fn store_name(&self) -> &str {
        &self.store_name
    }
}
