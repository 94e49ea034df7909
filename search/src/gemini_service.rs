use crate::error::QueryError;
use crate::models::*;
use crate::secrets::{SecretProvider, GEMINI_API_KEY};
use reqwest::Client;
use std::sync::Arc;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Persona and rules sent with every request. Caller text never reaches it;
/// the query travels as separate user content.
pub const SYSTEM_INSTRUCTION: &str = "You are Pregnancy Pal, a cautious AI assistant. \
Summarize web search results about safety for pregnant women. \
Rules: \
1. Base the summary ONLY on the provided Google Search results. \
2. Be clear, balanced, and easy to understand, using neutral language. \
3. If sources conflict, state it. \
4. **Do NOT give direct medical advice.** \
5. Keep the summary to 1-2 concise paragraphs.";

/// A parsed upstream answer together with the body it was parsed from, so
/// diagnostics can show fields the model types do not carry.
#[derive(Debug)]
pub struct UpstreamReply {
    pub response: GenerateContentResponse,
    pub raw: String,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
    secrets: Arc<dyn SecretProvider>,
}

impl GeminiService {
    pub fn new(config: GeminiConfig, secrets: Arc<dyn SecretProvider>) -> Self {
        Self::with_client(Client::new(), config, secrets)
    }

    pub fn with_client(
        client: Client,
        config: GeminiConfig,
        secrets: Arc<dyn SecretProvider>,
    ) -> Self {
        Self {
            client,
            config,
            secrets,
        }
    }

    pub fn build_request(query: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: query.to_string(),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch::default(),
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Single POST, no retry. The key goes in a header so transport errors,
    /// which embed the URL, never carry it into the logs.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, QueryError> {
        let api_key = self.secrets.secret(GEMINI_API_KEY).map_err(|e| {
            log::error!("Unable to resolve upstream API key: {}", e);
            QueryError::Internal
        })?;

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Error calling Gemini API: {}", e);
                QueryError::Internal
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gemini API error response ({}): {}", status, error_text);
            return Err(QueryError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            log::error!("Failed to read Gemini API response body: {}", e);
            QueryError::Internal
        })?;

        let raw = String::from_utf8_lossy(&body).into_owned();
        let response = serde_json::from_slice(&body).map_err(|e| {
            log::error!("Malformed Gemini API response ({}): {}", e, raw);
            QueryError::Internal
        })?;

        Ok(UpstreamReply { response, raw })
    }
}
