use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::{credentials::CredentialHolder, types::ApiError},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    credentials: CredentialHolder,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            credentials: CredentialHolder::new(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
            credentials: CredentialHolder::new(),
        }
    }

    /// Credential slot consulted on every outbound request.
    pub fn credentials(&self) -> &CredentialHolder {
        &self.credentials
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .client
            .request(method, format!("{}{}", base_url, path));
        match self.credentials.authorization_value() {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            let mocked = responder.respond(&request)?;
            return Ok(RawResponse {
                status: StatusCode::from_u16(mocked.status)
                    .map_err(|e| ApiError::unknown(e.to_string()))?,
                body: mocked.body,
            });
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path).await;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await?.json()
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let builder = self.request(Method::GET, path).await;
        self.execute(builder).await?.into_body()
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.execute(builder).await?.json()
    }

    /// POST whose success body is irrelevant to the caller.
    pub(crate) async fn post_json_discard<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.execute(builder).await?.into_body().map(|_| ())
    }
}

pub(crate) struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl RawResponse {
    fn into_body(self) -> Result<Vec<u8>, ApiError> {
        if self.status.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::from_status(self.status.as_u16(), &self.body))
        }
    }

    fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let body = self.into_body()?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_registry::{find_mock, register_mock, MockResponse, TestResponder};
