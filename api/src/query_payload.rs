use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QueryPayload {
    #[serde(default)]
    pub query: Option<String>,
}
