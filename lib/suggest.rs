//! Fuzzy matching for service identifiers outside the catalog.

use strsim::jaro_winkler;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Minimum similarity threshold for suggestions (0.0 to 1.0).
const MIN_SIMILARITY: f64 = 0.7;

/// Maximum number of suggestions to show.
const MAX_SUGGESTIONS: usize = 2;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Find catalog identifiers similar to `query`, best match first.
///
/// Comparison is case-insensitive so `MySQL` still points at `mysql`.
pub fn find_similar_services<'a>(
    query: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let query = query.to_lowercase();
    let mut scored: Vec<(&str, f64)> = available
        .into_iter()
        .map(|id| (id, jaro_winkler(&query, id)))
        .filter(|(_, score)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(id, _)| id)
        .collect()
}

/// Format suggestions in cargo style, or `None` when there are none.
pub fn format_suggestions(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [one] => Some(format!("Did you mean `{}`?", one)),
        many => {
            let formatted: Vec<String> = many.iter().map(|s| format!("`{}`", s)).collect();
            Some(format!("Did you mean one of: {}?", formatted.join(", ")))
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
