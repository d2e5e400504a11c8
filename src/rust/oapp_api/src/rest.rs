use crate::{ApiError, GraphQlRequest, GraphQlTransport, TransportResponse};
use async_trait::async_trait;
use oapp_config::Config;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, error};

/// Normalizes the configured endpoint: surrounding whitespace and trailing
/// slashes are removed, the path is otherwise left alone.
pub fn endpoint_fixup(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn default_headers(config: &Config) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some((name, value)) = config.auth.header() {
        let header_name = HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name))?;
        let mut header_value =
            HeaderValue::from_str(&value).map_err(|_| ApiError::InvalidHeader(name))?;
        header_value.set_sensitive(true);
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

/// Posts GraphQL requests over HTTP(S) with reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Builds a client carrying the content-type and auth headers from the
    /// configuration, plus the timeout if one is set.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().default_headers(default_headers(config)?);
        if let Some(secs) = config.endpoint.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            error!("Error building reqwest client: {e:?}");
            ApiError::ClientBuild(e.to_string())
        })?;

        Ok(Self {
            client,
            url: endpoint_fixup(&config.endpoint.url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn post(&self, request: &GraphQlRequest) -> Result<TransportResponse, ApiError> {
        debug!("POST {}", self.url);
        let res = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Error contacting {}: {e:?}", self.url);
                ApiError::Transport(e.to_string())
            })?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| {
            error!("Error reading response body: {e:?}");
            ApiError::Transport(e.to_string())
        })?;

        Ok(TransportResponse { status, body })
    }
}
