// Upstream client implementation

use bytes::Bytes;
use reqwest::{header, Client, Response};
use secrecy::{ExposeSecret, Secret};
use tokio::time::Duration;

use crate::error::AppResult;

pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Build the generateContent URL. The key travels as a query
    /// credential, as the generative-language API requires.
    fn build_url(&self, model: &str, api_key: &Secret<String>) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            model,
            api_key.expose_secret()
        )
    }

    /// POST the caller's raw JSON body to generateContent, unmodified.
    /// No retry: each request is forwarded exactly once.
    pub async fn generate_content(
        &self,
        model: &str,
        api_key: &Secret<String>,
        body: Bytes,
    ) -> AppResult<Response> {
        let url = self.build_url(model, api_key);

        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = UpstreamClient::new("https://generativelanguage.googleapis.com/v1beta", 120);
        let url = client.build_url(
            "gemini-2.5-flash-preview-09-2025",
            &Secret::new("test-key".to_string()),
        );

        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_build_url_against_local_base() {
        let client = UpstreamClient::new("http://127.0.0.1:9099", 5);
        let url = client.build_url("gemini-pro", &Secret::new("k".to_string()));

        assert_eq!(
            url,
            "http://127.0.0.1:9099/models/gemini-pro:generateContent?key=k"
        );
    }
}
