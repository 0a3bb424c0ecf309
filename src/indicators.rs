//! Indicator values for the dashboard's six-widget summary row.
//!
//! The presentation layer owns the widgets themselves; this module supplies each
//! widget's label and formatted value. Counts render as plain integers, percentages
//! to one decimal place with a `%` suffix.

use std::fmt;

use crate::quality::QualityReport;

/// A single indicator widget's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorValue {
    /// A literal count.
    Count(u64),
    /// A fraction (0.05), rendered as a percentage (`5.0%`).
    Percent(f64),
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Count(n) => write!(f, "{n}"),
            IndicatorValue::Percent(fraction) => write!(f, "{:.1}%", fraction * 100.0),
        }
    }
}

/// One labeled indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    /// Widget title.
    pub label: &'static str,
    /// Widget value.
    pub value: IndicatorValue,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl QualityReport {
    /// The six indicators in dashboard order.
    pub fn indicators(&self) -> [Indicator; 6] {
        [
            Indicator {
                label: "Rows",
                value: IndicatorValue::Count(self.rows as u64),
            },
            Indicator {
                label: "Columns",
                value: IndicatorValue::Count(self.columns as u64),
            },
            Indicator {
                label: "Empty Cells",
                value: IndicatorValue::Count(self.empty_cells as u64),
            },
            Indicator {
                label: "% Empty Cells",
                value: IndicatorValue::Percent(self.empty_cell_fraction),
            },
            Indicator {
                label: "Duplicate Rows",
                value: IndicatorValue::Count(self.duplicate_rows as u64),
            },
            Indicator {
                label: "% Duplicate Rows",
                value: IndicatorValue::Percent(self.duplicate_row_fraction),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::IndicatorValue;
    use crate::quality::QualityReport;

    #[test]
    fn percent_formats_to_one_decimal_with_suffix() {
        assert_eq!(IndicatorValue::Percent(0.05).to_string(), "5.0%");
        assert_eq!(IndicatorValue::Percent(0.1).to_string(), "10.0%");
        assert_eq!(IndicatorValue::Percent(0.12345).to_string(), "12.3%");
        assert_eq!(IndicatorValue::Percent(0.0).to_string(), "0.0%");
    }

    #[test]
    fn count_formats_as_plain_integer() {
        assert_eq!(IndicatorValue::Count(42).to_string(), "42");
    }

    #[test]
    fn indicators_follow_dashboard_order() {
        let report = QualityReport {
            rows: 10,
            columns: 4,
            empty_cells: 2,
            empty_cell_fraction: 0.05,
            duplicate_rows: 1,
            duplicate_row_fraction: 0.1,
        };
        let indicators = report.indicators();
        let rendered: Vec<String> = indicators.iter().map(|i| i.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Rows: 10",
                "Columns: 4",
                "Empty Cells: 2",
                "% Empty Cells: 5.0%",
                "Duplicate Rows: 1",
                "% Duplicate Rows: 10.0%",
            ]
        );
    }
}
