use crate::config::FrontendConfig;
use crate::error::ApiError;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::CategoryFilter;
use shared::models::{
    ApiResponse, AuthResponse, Category, LoginRequest, Product, RegisterRequest,
};
use std::sync::{Arc, Mutex};

thread_local! {
    static SHARED_CLIENT: OnceCell<StorefrontClient> = const { OnceCell::new() };
}

/// Lightweight API client for the storefront REST backend.
#[derive(Clone, Debug)]
pub struct StorefrontClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl StorefrontClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Client shared by every component, pointed at the configured API.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Remember (or forget) the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token.filter(|token| !token.is_empty());
        }
    }

    /// Bearer token attached to outgoing requests, if signed in.
    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Send a request and unwrap its envelope. The body is decoded whatever
    /// the HTTP status, since failures are reported inside the envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await.inspect_err(|err| {
            log::error!("request failed: {err}");
        })?;
        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await.inspect_err(|err| {
            log::error!("could not decode response ({status}): {err}");
        })?;
        if !envelope.success {
            log::warn!("request rejected ({status}): {}", envelope.message);
        }
        envelope.into_result().map_err(ApiError::from)
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let auth: AuthResponse = self.send(self.client.post(url).json(payload)).await?;
        self.set_token(Some(auth.token.clone()));
        Ok(auth)
    }

    /// Create an account and sign in with it.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/register");
        let auth: AuthResponse = self.send(self.client.post(url).json(payload)).await?;
        self.set_token(Some(auth.token.clone()));
        Ok(auth)
    }

    /// Forget the session on the client side. The API has no logout endpoint.
    pub fn logout(&self) {
        self.set_token(None);
    }

    /// List every category.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.api_url("categories");
        self.send(self.client.get(url)).await
    }

    fn products_request(&self, filter: CategoryFilter) -> RequestBuilder {
        let request = self.client.get(self.api_url("products"));
        let query = filter.query();
        if query.is_empty() {
            request
        } else {
            request.query(&query)
        }
    }

    /// List products, optionally restricted to one category.
    pub async fn list_products(&self, filter: CategoryFilter) -> Result<Vec<Product>, ApiError> {
        self.send(self.products_request(filter)).await
    }

    /// Fetch a single product.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.api_url(&format!("products/{id}"));
        self.send(self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_segments() {
        let client = StorefrontClient::new("http://localhost:3001/api/");
        assert_eq!(client.api_url("auth/login"), "http://localhost:3001/api/auth/login");
        assert_eq!(client.api_url("/categories"), "http://localhost:3001/api/categories");
    }

    #[test]
    fn test_products_request_without_filter() {
        let client = StorefrontClient::new("http://localhost:3001/api");
        let request = client.products_request(CategoryFilter::All).build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:3001/api/products");
        assert_eq!(request.method(), reqwest::Method::GET);
    }

    #[test]
    fn test_products_request_with_category() {
        let client = StorefrontClient::new("http://localhost:3001/api");
        let request = client
            .products_request(CategoryFilter::Category(7))
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3001/api/products?categoryId=7"
        );
    }

    #[test]
    fn test_token_attached_when_known() {
        let client = StorefrontClient::new("http://localhost:3001/api");
        let anonymous = client.authorize(client.client.get(client.api_url("products")));
        assert!(anonymous.build().unwrap().headers().get("authorization").is_none());

        client.set_token(Some("abc".to_string()));
        assert_eq!(client.current_token().as_deref(), Some("abc"));
        let request = client
            .authorize(client.client.get(client.api_url("products")))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer abc"
        );

        client.logout();
        assert_eq!(client.current_token(), None);
    }

    #[test]
    fn test_empty_token_is_not_sent() {
        let client = StorefrontClient::new("http://localhost:3001/api");
        client.set_token(Some(String::new()));
        assert_eq!(client.current_token(), None);
        let request = client
            .authorize(client.client.get(client.api_url("products")))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_clones_share_token() {
        let client = StorefrontClient::new("http://localhost:3001/api");
        let other = client.clone();
        client.set_token(Some("shared".to_string()));
        assert_eq!(other.current_token().as_deref(), Some("shared"));
    }
}
