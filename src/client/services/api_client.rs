use crate::client::config::ClientConfig;
use crate::client::models::generation::RequestKind;
use crate::common::error::ApiError;
use crate::common::models::{ErrorBody, GenerationRequest, ImagesResponse, SignupRequest, TokenResponse};
use log::{debug, warn};

/// HTTP client for the generation and auth backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self { base_url, client: reqwest::Client::new() })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&cfg.api_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `/token` as a form. Only HTTP 200 counts as success; the token itself is read best-effort.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<TokenResponse>, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(error_from_response(response).await);
        }
        match response.json::<TokenResponse>().await {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                warn!("[API] Login accepted but token body unreadable: {}", e);
                Ok(None)
            }
        }
    }

    /// POST `/signup` as JSON. The created user in the response body is not used.
    pub async fn register(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self.client.post(self.endpoint("/signup")).json(request).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    pub async fn generate_images(&self, request: &GenerationRequest) -> Result<ImagesResponse, ApiError> {
        self.submit(RequestKind::Generate, request).await
    }

    pub async fn remove_background(&self, request: &GenerationRequest) -> Result<ImagesResponse, ApiError> {
        self.submit(RequestKind::RemoveBackground, request).await
    }

    pub async fn submit(&self, kind: RequestKind, request: &GenerationRequest) -> Result<ImagesResponse, ApiError> {
        debug!("[API] POST {} ({} prompts)", kind.path(), request.text_prompts.len());
        let response = self.client.post(self.endpoint(kind.path())).json(request).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response.json::<ImagesResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .and_then(|body| body.detail_text());
    ApiError::Status { status, detail }
}
