use crate::domain::ports::ContentSource;
use crate::utils::error::{ConvertError, Result};
use reqwest::Client;

/// Fetches pages over plain HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ConvertError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
