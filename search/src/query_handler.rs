use crate::error::QueryError;
use crate::gemini_service::GeminiService;
use crate::models::*;
use crate::normalize::{normalize, Outcome};

/// Validate, call the upstream once, normalize. Holds no per-call state, so a
/// single handler can serve any number of concurrent callers.
pub struct QueryHandler {
    gemini_service: GeminiService,
}

impl QueryHandler {
    pub fn new(gemini_service: GeminiService) -> Self {
        Self { gemini_service }
    }

    pub async fn handle(
        &self,
        identity: Option<&CallerIdentity>,
        query: Option<&str>,
    ) -> Result<SearchSummary, QueryError> {
        let identity = identity.ok_or(QueryError::Unauthenticated)?;
        let query = query
            .filter(|q| !q.is_empty())
            .ok_or(QueryError::InvalidArgument)?;

        log::info!("Summarizing search results for {}", identity.subject());

        let request = GeminiService::build_request(query);
        let reply = self.gemini_service.generate(&request).await?;

        let outcome = normalize(&reply.response);
        match &outcome {
            Outcome::Summarized(summary) => {
                log::info!("Generated summary with {} sources", summary.sources.len());
            }
            Outcome::NoSummary => {
                log::warn!("No text found in Gemini response: {}", reply.raw);
            }
        }

        Ok(outcome.into())
    }
}
