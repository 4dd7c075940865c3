//! REST client for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the transport is unavailable and every
//! call fails with `ApiError::Network`, since these endpoints only make sense
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Callers decide between
//! session teardown and a transient notice through
//! `ApiError::is_session_invalid`; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, LoginResponse, Product, ProductInput, SignupRequest};

/// Base URL of the backend, fixed at build time. Empty means same origin,
/// which routes through the host's `/api` forwarder.
pub const API_BASE_URL: Option<&str> = option_env!("CATALOG_API_URL");

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// 401 and 400 both mean the stored token is no longer usable.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::Status { status: 400 | 401, .. })
    }

    /// Message supplied by the backend in the error body, if any. A blank
    /// message counts as none.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Authentication endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
    /// Returns the backend's `success` flag for `token`.
    async fn validate(&self, token: &str) -> Result<bool, ApiError>;
}

/// Product CRUD endpoints. Every call carries the session token.
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError>;
    async fn add_product(&self, token: &str, input: &ProductInput) -> Result<(), ApiError>;
    async fn edit_product(&self, token: &str, id: &str, input: &ProductInput) -> Result<(), ApiError>;
    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError>;
}

/// `gloo-net` backed implementation of [`AuthApi`] and [`CatalogApi`].
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    /// Client configured from the build-time `CATALOG_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(API_BASE_URL.unwrap_or_default())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
pub(crate) const SIGNUP_PATH: &str = "/api/auth/signup";
pub(crate) const VALIDATE_PATH: &str = "/api/auth/validate";
pub(crate) const PRODUCTS_PATH: &str = "/api/products/all";
pub(crate) const ADD_PRODUCT_PATH: &str = "/api/products/add";

fn edit_product_path(id: &str) -> String {
    format!("/api/products/edit/{id}")
}

fn delete_product_path(id: &str) -> String {
    format!("/api/products/delete/{id}")
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::net::types::MessageBody;

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    /// Send a built request and turn non-2xx statuses into `ApiError::Status`.
    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let resp = request.map_err(network)?.send().await.map_err(network)?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<MessageBody>().await.ok().and_then(|body| body.message);
        Err(ApiError::Status { status, message })
    }

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &super::bearer(token))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url(LOGIN_PATH)).json(request);
            let resp = transport::send(req).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, self.url(LOGIN_PATH));
            unavailable()
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url(SIGNUP_PATH)).json(request);
            transport::send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, self.url(SIGNUP_PATH));
            unavailable()
        }
    }

    async fn validate(&self, token: &str) -> Result<bool, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(VALIDATE_PATH));
            let req = transport::authorized(builder, token).json(&serde_json::json!({}));
            let resp = transport::send(req).await?;
            let body: crate::net::types::ValidateResponse = transport::decode(resp).await?;
            Ok(body.success)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.url(VALIDATE_PATH));
            unavailable()
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpApi {
    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::get(&self.url(PRODUCTS_PATH));
            let resp = transport::send(transport::authorized(builder, token).build()).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.url(PRODUCTS_PATH));
            unavailable()
        }
    }

    async fn add_product(&self, token: &str, input: &ProductInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(ADD_PRODUCT_PATH));
            transport::send(transport::authorized(builder, token).json(input))
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, input, self.url(ADD_PRODUCT_PATH));
            unavailable()
        }
    }

    async fn edit_product(&self, token: &str, id: &str, input: &ProductInput) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::put(&self.url(&edit_product_path(id)));
            transport::send(transport::authorized(builder, token).json(input))
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, input, self.url(&edit_product_path(id)));
            unavailable()
        }
    }

    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::delete(&self.url(&delete_product_path(id)));
            transport::send(transport::authorized(builder, token).build())
                .await
                .map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.url(&delete_product_path(id)));
            unavailable()
        }
    }
}
