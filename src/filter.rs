use chrono::NaiveDate;
use thiserror::Error;

/// Date-range restriction applied to every data fetch. Either both bounds are
/// set or neither; a partial range is rejected up front instead of being
/// silently treated as unbounded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DateRangeFilter {
    #[default]
    AllTime,
    Bounded {
        start: NaiveDate,
        end: NaiveDate,
    },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Please select both start and end dates")]
    PartialRange,
    #[error("Start date must not be after end date")]
    Inverted,
    #[error("Dates must be valid YYYY-MM-DD values")]
    Unparseable,
}

impl DateRangeFilter {
    /// Builds a filter from the two date inputs as the user typed them.
    pub fn from_inputs(start: &str, end: &str) -> Result<Self, FilterError> {
        let start = start.trim();
        let end = end.trim();
        match (start.is_empty(), end.is_empty()) {
            (true, true) => Ok(DateRangeFilter::AllTime),
            (false, false) => {
                let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| FilterError::Unparseable)?;
                let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| FilterError::Unparseable)?;
                if start > end {
                    return Err(FilterError::Inverted);
                }
                Ok(DateRangeFilter::Bounded { start, end })
            }
            _ => Err(FilterError::PartialRange),
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, DateRangeFilter::Bounded { .. })
    }

    /// Query suffix for API urls; empty for the all-time filter.
    pub fn query_string(&self) -> String {
        match self {
            DateRangeFilter::AllTime => String::new(),
            DateRangeFilter::Bounded { start, end } => format!(
                "?start_date={}&end_date={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_is_all_time() {
        assert_eq!(
            DateRangeFilter::from_inputs("", "  "),
            Ok(DateRangeFilter::AllTime)
        );
    }

    #[test]
    fn partial_range_is_rejected() {
        assert_eq!(
            DateRangeFilter::from_inputs("2024-01-01", ""),
            Err(FilterError::PartialRange)
        );
        assert_eq!(
            DateRangeFilter::from_inputs("", "2024-01-31"),
            Err(FilterError::PartialRange)
        );
    }

    #[test]
    fn ordered_range_is_accepted() {
        let filter = DateRangeFilter::from_inputs("2024-01-01", "2024-01-31").unwrap();
        assert!(filter.is_bounded());
        assert_eq!(
            filter.query_string(),
            "?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn same_day_range_is_accepted() {
        assert!(DateRangeFilter::from_inputs("2024-01-01", "2024-01-01").is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            DateRangeFilter::from_inputs("2024-02-01", "2024-01-01"),
            Err(FilterError::Inverted)
        );
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert_eq!(
            DateRangeFilter::from_inputs("yesterday", "today"),
            Err(FilterError::Unparseable)
        );
    }

    #[test]
    fn all_time_adds_no_query() {
        assert_eq!(DateRangeFilter::AllTime.query_string(), "");
    }
}
