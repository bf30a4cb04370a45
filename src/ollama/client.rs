use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait OllamaApi: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Client pointed at the given server URL with default settings.
    pub fn for_url(url: impl Into<String>) -> Result<Self> {
        Self::new(OllamaConfig {
            url: url.into(),
            ..OllamaConfig::default()
        })
    }
}

#[async_trait]
impl OllamaApi for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let endpoint = format!("{}/api/generate", self.url);

        debug!(
            model = %request.model,
            images = request.images.as_ref().map_or(0, |i| i.len()),
            "Sending generate request to {}",
            endpoint
        );

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status, body));
        }

        let generate_response: GenerateResponse = response.json().await?;

        debug!(
            model = %generate_response.model,
            done = generate_response.done,
            "Received generate response"
        );

        Ok(generate_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OllamaConfig;

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = OllamaClient::for_url("http://127.0.0.1:11434/").unwrap();
        assert_eq!(client.url, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_client_from_config() {
        let config = OllamaConfig {
            url: "http://192.168.1.100:11434".to_string(),
            model: None,
            timeout_secs: 120,
        };

        let client = OllamaClient::new(config).unwrap();
        assert_eq!(client.url, "http://192.168.1.100:11434");
    }
}
