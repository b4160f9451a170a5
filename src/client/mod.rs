use std::sync::Arc;
use std::time::Duration;

use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ApiConfig,
    error::{AppError, Result},
};

/// Source of the bearer token attached to outgoing requests. The embedding
/// application owns the session; this crate only reads from it.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Token provider over a value fixed at construction time (config, env).
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// The one HTTP client for the class-tracking backend, constructed once per
/// process and passed explicitly to every API implementation. Owns base-URL
/// joining, token attachment and the response-error mapping.
pub struct HttpClient {
    inner: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.authorize(self.inner.get(self.url(path))).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.inner.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T> {
        let response = self
            .authorize(self.inner.post(self.url(path)))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AppError::Decode(e.to_string()));
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Err(match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound(detail_message(&body)),
            StatusCode::UNPROCESSABLE_ENTITY => AppError::from_unprocessable(&body),
            _ => AppError::Api {
                status: status.as_u16(),
                message: detail_message(&body),
            },
        })
    }
}

fn detail_message(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .unwrap_or("Request failed")
        .to_string()
}
