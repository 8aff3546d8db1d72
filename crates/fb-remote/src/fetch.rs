//! Fetching options from a remote endpoint.
//!
//! The [`OptionSource`] capability is what the editor talks to; the HTTP
//! implementation lives behind it so controller tests can substitute a
//! canned source. Requests resolve sequentially per render pass — a
//! fetched list must land before the next component renders, so document
//! order is preserved without interleaving.

use crate::paths::{leaf_paths, locate_array, map_options};
use async_trait::async_trait;
use fb_core::model::{ChoiceOption, ChoiceProps, HeaderPair, HttpMethod};
use serde_json::Value;
use thiserror::Error;

/// Everything needed to resolve one component's remote options.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<HeaderPair>,
    pub response_path: String,
    pub label_key: String,
    pub value_key: String,
}

impl From<&ChoiceProps> for OptionsRequest {
    fn from(props: &ChoiceProps) -> Self {
        Self {
            url: props.api_url.clone(),
            method: props.api_method,
            headers: props.api_headers.clone(),
            response_path: props.api_response_path.clone(),
            label_key: props.api_label_key.clone(),
            value_key: props.api_value_key.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("response body is not valid JSON: {0}")]
    Json(reqwest::Error),
    #[error("no array found in the response")]
    NoArray,
}

/// Result of the panel's "test endpoint" action: the HTTP status, the
/// located option items, and the dotted paths the picker can offer.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointProbe {
    pub status: u16,
    pub items: Vec<Value>,
    pub paths: Vec<String>,
}

/// Where remote options come from. The editor depends on this trait, not
/// on reqwest.
#[async_trait(?Send)]
pub trait OptionSource {
    async fn fetch_options(&self, req: &OptionsRequest)
    -> Result<Vec<ChoiceOption>, FetchError>;

    /// Fetch once and report what the endpoint looks like.
    async fn probe(&self, req: &OptionsRequest) -> Result<EndpointProbe, FetchError>;
}

/// `reqwest`-backed source used by the real application.
#[derive(Default)]
pub struct HttpOptionSource {
    client: reqwest::Client,
}

impl HttpOptionSource {
    pub fn new() -> Self {
        Self::default()
    }

    async fn request_json(&self, req: &OptionsRequest) -> Result<(u16, Value), FetchError> {
        let mut builder = match req.method {
            HttpMethod::Get => self.client.get(&req.url),
            HttpMethod::Post => self.client.post(&req.url),
        };
        for header in &req.headers {
            // Blank rows come from the panel's empty header editor.
            if !header.key.is_empty() && !header.value.is_empty() {
                builder = builder.header(&header.key, &header.value);
            }
        }

        let response = builder.send().await.map_err(FetchError::Transport)?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.json::<Value>().await.map_err(FetchError::Json)?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl OptionSource for HttpOptionSource {
    async fn fetch_options(
        &self,
        req: &OptionsRequest,
    ) -> Result<Vec<ChoiceOption>, FetchError> {
        let (_, body) = self.request_json(req).await?;
        let items = locate_array(&body, &req.response_path).ok_or(FetchError::NoArray)?;
        log::debug!("fetched {} options from {}", items.len(), req.url);
        Ok(map_options(items, &req.label_key, &req.value_key))
    }

    async fn probe(&self, req: &OptionsRequest) -> Result<EndpointProbe, FetchError> {
        let (status, body) = self.request_json(req).await?;
        let items = locate_array(&body, &req.response_path)
            .ok_or(FetchError::NoArray)?
            .clone();
        let paths = items.first().map(leaf_paths).unwrap_or_default();
        Ok(EndpointProbe { status, items, paths })
    }
}
