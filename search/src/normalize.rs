use crate::models::*;
use std::collections::HashMap;

pub const FALLBACK_SUMMARY: &str = "The AI analysis completed, but no summary could be generated. \
This might happen for very broad or unanswerable queries. Please try a more specific search.";

/// What a successful upstream exchange produced. Neither variant is an error:
/// an upstream with nothing to say is a legitimate answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Summarized(SearchSummary),
    NoSummary,
}

impl From<Outcome> for SearchSummary {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Summarized(summary) => summary,
            Outcome::NoSummary => SearchSummary {
                summary: FALLBACK_SUMMARY.to_string(),
                sources: Vec::new(),
            },
        }
    }
}

pub fn normalize(response: &GenerateContentResponse) -> Outcome {
    let candidate = response.candidates.as_ref().and_then(|c| c.first());

    let text = candidate
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.first())
        .and_then(|part| part.text.as_deref())
        .filter(|text| !text.is_empty());

    let Some(text) = text else {
        return Outcome::NoSummary;
    };

    let metadata = candidate
        .and_then(|c| c.grounding_metadata.as_ref())
        .or(response.grounding_metadata.as_ref());

    Outcome::Summarized(SearchSummary {
        summary: text.to_string(),
        sources: metadata.map(collect_sources).unwrap_or_default(),
    })
}

fn collect_sources(metadata: &GroundingMetadata) -> Vec<Source> {
    let attributions = metadata
        .grounding_attributions
        .iter()
        .flatten()
        .filter_map(|a| a.web.as_ref().and_then(to_source));
    dedupe_sources(attributions)
}

fn to_source(web: &WebSource) -> Option<Source> {
    let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
    let title = web.title.as_deref().filter(|t| !t.is_empty())?;
    Some(Source {
        uri: uri.to_string(),
        title: title.to_string(),
    })
}

/// One entry per URI. A repeated URI keeps the slot where it first appeared
/// and takes the later entry's title.
pub fn dedupe_sources(sources: impl IntoIterator<Item = Source>) -> Vec<Source> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Source> = Vec::new();

    for source in sources {
        match positions.get(&source.uri) {
            Some(&index) => unique[index] = source,
            None => {
                positions.insert(source.uri.clone(), unique.len());
                unique.push(source);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(body: Value) -> GenerateContentResponse {
        serde_json::from_value(body).unwrap()
    }

    fn source(uri: &str, title: &str) -> Source {
        Source {
            uri: uri.to_string(),
            title: title.to_string(),
        }
    }

    fn attribution(uri: &str, title: &str) -> Value {
        json!({ "web": { "uri": uri, "title": title } })
    }

    #[test]
    fn duplicate_uris_collapse_to_one_source() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Folic acid is generally recommended." }] },
                "groundingMetadata": {
                    "groundingAttributions": [
                        attribution("https://a.example", "First title"),
                        attribution("https://a.example", "Second title")
                    ]
                }
            }]
        }));

        let summary = SearchSummary::from(normalize(&response));
        assert_eq!(summary.summary, "Folic acid is generally recommended.");
        assert_eq!(summary.sources.len(), 1);
        assert_eq!(summary.sources[0].uri, "https://a.example");
    }

    #[test]
    fn dedupe_keeps_first_seen_order_and_last_title() {
        let deduped = dedupe_sources(vec![
            source("B", "b1"),
            source("A", "a"),
            source("B", "b2"),
            source("C", "c"),
        ]);
        assert_eq!(
            deduped,
            vec![source("B", "b2"), source("A", "a"), source("C", "c")]
        );
    }

    #[test]
    fn empty_candidates_fall_back() {
        let outcome = normalize(&parse(json!({ "candidates": [] })));
        assert_eq!(outcome, Outcome::NoSummary);

        let summary = SearchSummary::from(outcome);
        assert_eq!(summary.summary, FALLBACK_SUMMARY);
        assert!(summary.sources.is_empty());
    }

    #[test]
    fn tool_call_without_text_falls_back() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [
                    { "functionCall": { "name": "google_search", "args": {} } },
                    { "text": "ignored because it is not the first part" }
                ] }
            }]
        }));
        assert_eq!(normalize(&response), Outcome::NoSummary);
    }

    #[test]
    fn empty_text_falls_back() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }));
        assert_eq!(normalize(&response), Outcome::NoSummary);
    }

    #[test]
    fn missing_metadata_gives_no_sources() {
        for metadata in [json!(null), json!({}), json!({ "groundingAttributions": [] })] {
            let response = parse(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "answer" }] },
                    "groundingMetadata": metadata
                }]
            }));
            let summary = SearchSummary::from(normalize(&response));
            assert_eq!(summary.summary, "answer");
            assert!(summary.sources.is_empty());
        }
    }

    #[test]
    fn incomplete_attributions_are_dropped() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "answer" }] },
                "groundingMetadata": {
                    "groundingAttributions": [
                        {},
                        { "web": null },
                        { "web": { "uri": "https://no-title.example" } },
                        { "web": { "title": "No uri" } },
                        { "web": { "uri": "", "title": "Blank uri" } },
                        attribution("https://ok.example", "Ok")
                    ]
                }
            }]
        }));
        let summary = SearchSummary::from(normalize(&response));
        assert_eq!(summary.sources, vec![source("https://ok.example", "Ok")]);
    }

    #[test]
    fn top_level_metadata_is_used_when_candidate_has_none() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "answer" }] } }],
            "groundingMetadata": {
                "groundingAttributions": [attribution("https://top.example", "Top")]
            }
        }));
        let summary = SearchSummary::from(normalize(&response));
        assert_eq!(summary.sources, vec![source("https://top.example", "Top")]);
    }

    #[test]
    fn chunks_without_attributions_give_no_sources() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "t" }] },
                "groundingMetadata": {
                    "groundingChunks": [attribution("https://c.example", "C")]
                }
            }]
        }));
        let summary = SearchSummary::from(normalize(&response));
        assert_eq!(summary.summary, "t");
        assert!(summary.sources.is_empty());
    }
}
