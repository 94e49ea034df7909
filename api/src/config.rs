use anyhow::{bail, Result};
use grounded_search::gemini_service::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use grounded_search::GeminiConfig;
use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub gemini: GeminiConfig,
    /// Accepted bearer tokens, keyed by token, valued by subject.
    pub api_tokens: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let gemini = GeminiConfig {
            endpoint: env::var("GEMINI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        };

        let api_tokens = parse_tokens(&env::var("API_TOKENS").unwrap_or_default())?;
        if api_tokens.is_empty() {
            log::warn!("API_TOKENS is empty; every query will be rejected as unauthenticated");
        }

        Ok(Config {
            bind_addr,
            gemini,
            api_tokens,
        })
    }
}

/// Parses `subject:token,subject:token`.
pub fn parse_tokens(raw: &str) -> Result<HashMap<String, String>> {
    let mut tokens = HashMap::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((subject, token)) = entry.split_once(':') else {
            bail!("API_TOKENS entry is not subject:token");
        };
        let (subject, token) = (subject.trim(), token.trim());
        if subject.is_empty() || token.is_empty() {
            bail!("API_TOKENS entry has an empty subject or token");
        }
        tokens.insert(token.to_string(), subject.to_string());
    }
    Ok(tokens)
}
