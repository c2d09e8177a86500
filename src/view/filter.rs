//! Search filter

use crate::metrics::Metric;

/// Metrics whose name contains `query`, ignoring case
///
/// An empty query keeps everything. Order is preserved.
pub fn filter_metrics(metrics: &[Metric], query: &str) -> Vec<Metric> {
    metrics
        .iter()
        .filter(|m| m.name_contains(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{seed_metrics, Trend};

    #[test]
    fn test_empty_query_returns_all() {
        let seed = seed_metrics();
        assert_eq!(filter_metrics(&seed, ""), seed);
    }

    #[test]
    fn test_bounce_query() {
        let filtered = filter_metrics(&seed_metrics(), "bounce");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bounce Rate");
        assert_eq!(filtered[0].value, "34.2%");
        assert_eq!(filtered[0].change, "-2.1%");
        assert_eq!(filtered[0].trend, Trend::Down);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let seed = seed_metrics();

        assert_eq!(filter_metrics(&seed, "PAGE").len(), 1);
        assert_eq!(filter_metrics(&seed, "uNiQuE")[0].id, 2);
    }

    #[test]
    fn test_preserves_seed_order() {
        // "s" appears in Page Views, Unique Visitors and Avg Session
        let ids: Vec<_> = filter_metrics(&seed_metrics(), "s")
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, [1, 2, 4]);
    }

    #[test]
    fn test_matches_substring_definition_for_every_query() {
        let seed = seed_metrics();
        let queries = ["", "a", "rate", "VIEW", "ss", " ", "zzz", "avg session"];

        for q in queries {
            let expected: Vec<_> = seed
                .iter()
                .filter(|m| m.name.to_lowercase().contains(&q.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(filter_metrics(&seed, q), expected, "query {:?}", q);
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter_metrics(&seed_metrics(), "revenue").is_empty());
    }
}
