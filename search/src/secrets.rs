use crate::error::SecretError;
use std::collections::HashMap;
use std::env;

/// Name under which the upstream API key is stored.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Supplies secrets on demand. Implementations are consulted on every call,
/// so a rotated key is picked up without a restart.
pub trait SecretProvider: Send + Sync {
    fn secret(&self, name: &str) -> Result<String, SecretError>;
}

/// Reads secrets from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvSecretProvider;

impl SecretProvider for EnvSecretProvider {
    fn secret(&self, name: &str) -> Result<String, SecretError> {
        let value = env::var(name).map_err(|_| SecretError::Missing(name.to_string()))?;
        if value.trim().is_empty() {
            return Err(SecretError::Empty(name.to_string()));
        }
        Ok(value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

impl SecretProvider for StaticSecretProvider {
    fn secret(&self, name: &str) -> Result<String, SecretError> {
        match self.secrets.get(name) {
            Some(value) if value.trim().is_empty() => Err(SecretError::Empty(name.to_string())),
            Some(value) => Ok(value.clone()),
            None => Err(SecretError::Missing(name.to_string())),
        }
    }
}
