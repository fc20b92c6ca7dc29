/// Number of leading timestamp characters that make up the date key.
const DATE_LEN: usize = 10;

/// A single data row reduced to the date it happened on and what it cost.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRecord {
    pub date: String,
    pub cost: f64,
}

impl CostRecord {
    /// Builds a record from the raw timestamp column.
    ///
    /// The date is just the first ten characters of the timestamp, nothing
    /// checks that they form a real calendar day.
    pub fn new(timestamp: &str, cost: f64) -> Self {
        Self {
            date: timestamp.chars().take(DATE_LEN).collect(),
            cost,
        }
    }
}

/// Parses a cost column as a float, ignoring surrounding whitespace.
pub fn parse_cost(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_timestamp_prefix() {
        let record = CostRecord::new("2024-01-01T10:00:00Z", 1.0);
        assert_eq!(record.date, "2024-01-01");
    }

    #[test]
    fn short_timestamp_is_kept_whole() {
        let record = CostRecord::new("2024-1-1", 1.0);
        assert_eq!(record.date, "2024-1-1");
    }

    #[test]
    fn date_is_not_validated() {
        let record = CostRecord::new("not a date at all", 1.0);
        assert_eq!(record.date, "not a date");
    }

    #[test]
    fn parses_plain_costs() {
        assert_eq!(parse_cost("10.00"), Some(10.0));
        assert_eq!(parse_cost(" 0.5 "), Some(0.5));
        assert_eq!(parse_cost("-3"), Some(-3.0));
    }

    #[test]
    fn parses_scientific_and_huge_costs() {
        assert_eq!(parse_cost("1.5e3"), Some(1500.0));
        assert_eq!(parse_cost("2E-2"), Some(0.02));
        assert_eq!(parse_cost("1e30"), Some(1e30));
        assert_eq!(parse_cost("50000000000000000000000000000"), Some(5e28));
    }

    #[test]
    fn parses_non_finite_costs() {
        assert_eq!(parse_cost("inf"), Some(f64::INFINITY));
        assert!(parse_cost("nan").is_some_and(f64::is_nan));
    }

    #[test]
    fn rejects_non_numeric_costs() {
        assert_eq!(parse_cost("abc"), None);
        assert_eq!(parse_cost(""), None);
        assert_eq!(parse_cost("1,50"), None);
    }
}
