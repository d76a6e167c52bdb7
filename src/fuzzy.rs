//! Subsequence matching used to narrow the branch list while typing.

/// Returns true when every character of `query` occurs in `candidate` in the
/// same order, not necessarily adjacent. Comparison is case-insensitive and an
/// empty query matches everything.
pub(crate) fn is_subsequence(candidate: &str, query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    // The cursor only moves forward, so the scan is linear in the candidate.
    let mut cursor = candidate.chars();
    query
        .chars()
        .all(|wanted| cursor.by_ref().any(|ch| ch == wanted))
}

/// Indices of the candidates matching `query`, in their original order.
pub(crate) fn filter<S: AsRef<str>>(candidates: &[S], query: &str) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| is_subsequence(candidate.as_ref(), query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(is_subsequence("main", ""));
        assert!(is_subsequence("", ""));
        assert!(is_subsequence("feature/login", ""));
    }

    #[test]
    fn test_empty_candidate_rejects_non_empty_query() {
        assert!(!is_subsequence("", "a"));
    }

    #[test]
    fn test_ordered_non_contiguous_match() {
        assert!(is_subsequence("feature/login", "ftl"));
        assert!(is_subsequence("abcr", "br"));
        assert!(is_subsequence("branch", "br"));
    }

    #[test]
    fn test_order_violation_rejected() {
        assert!(!is_subsequence("feature/login", "lft"));
        assert!(!is_subsequence("dev", "ved"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_subsequence("Feature/Login", "FL"));
        assert!(is_subsequence("release", "REL"));
        assert!(is_subsequence("ÄRGER", "är"));
    }

    #[test]
    fn test_repeated_characters_need_distinct_positions() {
        assert!(is_subsequence("aab", "aa"));
        assert!(!is_subsequence("ab", "aa"));
    }

    #[test]
    fn test_query_longer_than_candidate() {
        assert!(!is_subsequence("dev", "develop"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let branches = ["main", "dev", "feature/x", "fix/max"];
        assert_eq!(filter(&branches, "x"), vec![2, 3]);
        assert_eq!(filter(&branches, "fx"), vec![2, 3]);
        assert_eq!(filter(&branches, "ftx"), vec![2]);
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let branches = vec!["main".to_string(), "dev".to_string()];
        assert_eq!(filter(&branches, ""), vec![0, 1]);
    }

    #[test]
    fn test_filter_no_match() {
        let branches = ["main", "dev"];
        assert!(filter(&branches, "zzz").is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let branches = ["dev", "dev", "main"];
        assert_eq!(filter(&branches, "dv"), vec![0, 1]);
    }

    #[test]
    fn test_filter_is_ordered_subset_for_many_queries() {
        let branches = [
            "main",
            "develop",
            "feature/login",
            "feature/logout",
            "hotfix/LOGIN-42",
            "release/1.2",
        ];
        for query in ["", "l", "lo", "fl", "LOG", "r1", "ee", "xyz", "/"] {
            let indices = filter(&branches, query);
            assert!(
                indices.windows(2).all(|pair| pair[0] < pair[1]),
                "order broken for {query:?}: {indices:?}"
            );
            for idx in &indices {
                assert!(is_subsequence(branches[*idx], query));
            }
            let dropped = (0..branches.len()).filter(|idx| !indices.contains(idx));
            for idx in dropped {
                assert!(!is_subsequence(branches[idx], query));
            }
        }
    }
}
