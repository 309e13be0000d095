use std::fmt;

use serde::{Deserialize, Serialize};

/// User-entered search text with surrounding whitespace removed.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trims `raw`; returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Query> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Query(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe to place in a URL query component.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record returned by the search service.
///
/// `id` is only unique within a single response and `score` is opaque to us;
/// both are kept so the record round-trips unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub description: String,
    pub score: f64,
}

/// Results in the order the service returned them.
pub type SearchResponse = Vec<SearchResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse_trims() {
        let query = Query::parse("  rust concepts  ").unwrap();
        assert_eq!(query.as_str(), "rust concepts");
        assert_eq!(query.encoded(), "rust%20concepts");
    }

    #[test]
    fn test_query_parse_rejects_blank() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse(" \t\n ").is_none());
    }

    #[test]
    fn test_search_result_from_json() {
        let json = r#"[{"id":1,"url":"https://x","title":"X","description":"d","score":0.9}]"#;
        let results: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://x");
        assert_eq!(results[0].score, 0.9);
    }
}
