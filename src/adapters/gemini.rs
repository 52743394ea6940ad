use crate::domain::ports::{ConfigProvider, NamingProvider};
use crate::utils::error::{Result, ToolboxError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Gemini-backed naming provider. One `generateContent` call per request, no
/// retry; every internal failure collapses to an empty label list at the port
/// boundary so callers never see a collaborator error.
pub struct GeminiNamer {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiNamer {
    /// `endpoint` is the API base URL (overridable so tests can point at a
    /// mock server). The remote call carries a defensive timeout.
    pub fn new(
        endpoint: String,
        model: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
        })
    }

    /// Build from runtime configuration. The API key is read from the env var
    /// the config names; a missing key still builds, the remote call then
    /// fails and falls back to placeholders like any other failure.
    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        let api_key = std::env::var(config.api_key_env()).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "Env var {} is empty, team naming will fall back to placeholders",
                config.api_key_env()
            );
        }
        Self::new(
            config.naming_endpoint().to_string(),
            config.naming_model().to_string(),
            api_key,
            Duration::from_secs(config.naming_timeout_seconds()),
        )
    }

    async fn request_names(&self, count: usize, theme: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let prompt = format!(
            "Generate exactly {} creative and fun team names based on the theme: \"{}\". \
             Return only a JSON array of strings.",
            count, theme
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "ARRAY", "items": { "type": "STRING" } }
            }
        });

        tracing::debug!("Requesting {} team names from {}", count, url);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| ToolboxError::ProcessingError {
                message: "No text in model response".to_string(),
            })?;

        let names: Vec<String> = serde_json::from_str(text.trim())?;
        Ok(names)
    }
}

#[async_trait]
impl NamingProvider for GeminiNamer {
    async fn generate_names(&self, count: usize, theme: &str) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        match self.request_names(count, theme).await {
            Ok(mut names) => {
                // Contract: at most `count` labels.
                names.truncate(count);
                names
            }
            Err(e) => {
                tracing::warn!("Team naming failed, falling back to placeholders: {}", e);
                Vec::new()
            }
        }
    }
}
