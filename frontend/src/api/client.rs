use std::rc::Rc;

use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client, Request, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ServerErrorBody},
    config,
    utils::{
        navigation::{default_navigator, Navigator},
        storage::{default_token_store, TokenStore},
    },
};

/// Shared HTTP client for every backend call.
///
/// Each request passes through [`ApiClient::authorize`] before it is sent and
/// every response through [`ApiClient::inspect_response`] before the caller
/// sees it.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_parts(None, default_token_store(), default_navigator())
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_parts(
            Some(base_url.into()),
            default_token_store(),
            default_navigator(),
        )
    }

    pub fn with_parts(
        base_url: Option<String>,
        tokens: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            tokens,
            navigator,
        }
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }

    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.tokens)
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::clone(&self.navigator)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    /// Request hook: attach the held token unless the caller already set one.
    pub fn authorize(&self, mut request: Request) -> Request {
        if request.headers().contains_key(AUTHORIZATION) {
            return request;
        }
        if let Some(token) = self.tokens.get() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    request.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored token is not a valid header value"),
            }
        }
        request
    }

    /// Response hook: a 401 drops the session and sends the browser to the
    /// login view.
    pub fn inspect_response(&self, response: Response) -> Result<Response, ApiError> {
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        log::warn!("{} answered 401, clearing session", response.url().path());
        self.tokens.clear();
        self.navigator.redirect_to_login();
        Err(ApiError::unauthorized())
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let request = self.authorize(request);
        let method = request.method().clone();
        let path = request.url().path().to_string();
        log::debug!("{} {}", method, path);
        let response = with_timeout(self.client.execute(request))
            .await?
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::timeout()
                } else {
                    log::error!("{} {} failed: {}", method, path, e);
                    ApiError::request_failed(format!("Request failed: {}", e))
                }
            })?;
        self.inspect_response(response)
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let response = error_for_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        error_for_status(response).await.map(|_| ())
    }
}

async fn error_for_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let raw = response.text().await.unwrap_or_default();
    let details = serde_json::from_str::<serde_json::Value>(&raw).ok();
    let message = details
        .clone()
        .and_then(|value| serde_json::from_value::<ServerErrorBody>(value).ok())
        .and_then(|body| body.human_message())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    Err(ApiError::server(message, details))
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: std::future::Future>(future: F) -> Result<F::Output, ApiError> {
    // The native client enforces the timeout itself.
    Ok(future.await)
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: std::future::Future>(future: F) -> Result<F::Output, ApiError> {
    use futures::future::{select, Either};

    let timer = gloo_timers::future::sleep(config::REQUEST_TIMEOUT);
    futures::pin_mut!(future);
    futures::pin_mut!(timer);
    match select(future, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::timeout()),
    }
}
