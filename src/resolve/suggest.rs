/// "Did you mean" candidates for an unknown alias.
use std::cmp::Reverse;

use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Maximum number of suggestions attached to an `AliasNotFound` error.
const MAX_SUGGESTIONS: usize = 3;

/// Fuzzy-rank `aliases` against `query`, best first.
///
/// Ties keep the order of `aliases`.
#[must_use]
pub fn suggest<'a>(aliases: impl IntoIterator<Item = &'a str>, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = aliases
        .into_iter()
        .filter_map(|alias| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(alias, &mut buf);
            pattern.score(haystack, &mut matcher).map(|s| (alias, s))
        })
        .collect();

    scored.sort_by_key(|&(_, score)| Reverse(score));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(alias, _)| alias.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_subsequence() {
        let out = suggest(["api", "infra", "web"], "inf");
        assert_eq!(out, vec!["infra"]);
    }

    #[test]
    fn test_suggest_nothing_close() {
        assert!(suggest(["api", "infra"], "zzz").is_empty());
    }

    #[test]
    fn test_suggest_empty_query() {
        assert!(suggest(["api"], "").is_empty());
    }

    #[test]
    fn test_suggest_caps_results() {
        let out = suggest(["ab1", "ab2", "ab3", "ab4"], "ab");
        assert_eq!(out.len(), MAX_SUGGESTIONS);
    }
}
