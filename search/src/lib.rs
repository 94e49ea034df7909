pub mod error;
pub mod gemini_service;
pub mod models;
pub mod normalize;
pub mod query_handler;
pub mod secrets;

pub use error::{QueryError, SecretError};
pub use gemini_service::{GeminiConfig, GeminiService, UpstreamReply};
pub use models::*;
pub use normalize::{Outcome, FALLBACK_SUMMARY};
pub use query_handler::QueryHandler;
pub use secrets::{EnvSecretProvider, SecretProvider, StaticSecretProvider};
