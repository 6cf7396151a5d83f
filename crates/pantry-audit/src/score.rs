//! Completeness scoring.

/// Percentage of required fields satisfied, clamped to `[0, 100]`.
///
/// Every issue deducts one field, so repeated per-ingredient gaps deduct
/// repeatedly. A registry with no fields scores `0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completeness_score(total_fields: usize, issue_count: usize) -> f64 {
    if total_fields == 0 {
        return 0.0;
    }
    let satisfied = total_fields.saturating_sub(issue_count);
    satisfied as f64 / total_fields as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18, 0, 100.0)]
    #[case(18, 9, 50.0)]
    #[case(18, 18, 0.0)]
    #[case(18, 40, 0.0)]
    #[case(0, 0, 0.0)]
    #[case(0, 3, 0.0)]
    fn score_cases(#[case] total: usize, #[case] issues: usize, #[case] expected: f64) {
        assert!((completeness_score(total, issues) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn score_stays_in_range() {
        for issues in 0..50 {
            let score = completeness_score(18, issues);
            assert!((0.0..=100.0).contains(&score), "{issues} -> {score}");
        }
    }

    #[test]
    fn four_issues_of_eighteen() {
        let expected = 14.0 / 18.0 * 100.0;
        assert!((completeness_score(18, 4) - expected).abs() < 1e-9);
    }
}
