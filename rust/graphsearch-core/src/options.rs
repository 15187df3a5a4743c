use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Upper bound on finalized nodes before the search is abandoned.
    pub max_expansions: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: DEFAULT_MAX_EXPANSIONS }
    }
}

impl SearchOptions {
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self { max_expansions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        assert_eq!(SearchOptions::default().max_expansions, DEFAULT_MAX_EXPANSIONS);
    }

    #[test]
    fn deserializes_with_defaults_when_missing_fields() {
        let o: SearchOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(o, SearchOptions::default());
        let o: SearchOptions = serde_json::from_value(json!({ "max_expansions": 7 })).unwrap();
        assert_eq!(o.max_expansions, 7);
    }
}
