use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::TypedHeader;
use grounded_search::CallerIdentity;
use headers::{authorization::Bearer, Authorization};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps bearer tokens to the subjects they authenticate.
#[derive(Debug, Default, Clone)]
pub struct TokenVerifier {
    tokens: HashMap<String, String>,
}

impl TokenVerifier {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }

    pub fn verify(&self, token: &str) -> Option<CallerIdentity> {
        self.tokens.get(token).map(|subject| CallerIdentity::new(subject.as_str()))
    }
}

/// Attaches a `CallerIdentity` extension when the bearer token verifies.
/// Never rejects by itself: the query handler owns the unauthenticated
/// response so every error leaves the service in the same shape.
pub async fn identity_middleware(
    State(verifier): State<Arc<TokenVerifier>>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Response {
    match auth {
        Some(TypedHeader(auth)) => match verifier.verify(auth.token()) {
            Some(identity) => {
                log::debug!("Authenticated caller {}", identity.subject());
                request.extensions_mut().insert(identity);
            }
            None => log::warn!("Rejected unknown bearer token"),
        },
        None => log::debug!("Request carries no bearer token"),
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_known_tokens_only() {
        let verifier = TokenVerifier::new(HashMap::from([(
            "tok-alice".to_string(),
            "alice".to_string(),
        )]));

        assert_eq!(
            verifier.verify("tok-alice"),
            Some(CallerIdentity::new("alice"))
        );
        assert_eq!(verifier.verify("tok-mallory"), None);
        assert_eq!(verifier.verify(""), None);
    }
}
