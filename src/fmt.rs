//! Formatting utilities for the dashboard
//!
//! Pure functions shared by the table/grid renderers and the wasm exports.
//! Placeholders (`$--`, `--%`) match what the page shows while data loads.

use chrono::{DateTime, NaiveDateTime};

/// CSS class bucket for a signed P&L amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnlClass {
    Positive,
    Negative,
    Neutral,
}

impl PnlClass {
    /// Classify a signed amount
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            PnlClass::Positive
        } else if value < 0.0 {
            PnlClass::Negative
        } else {
            PnlClass::Neutral
        }
    }

    /// Classify an already formatted amount ("+$12.00", "$-3.50", "--")
    pub fn of_text(text: &str) -> Self {
        if text.starts_with('+') || (text.starts_with('$') && !text.contains('-')) {
            PnlClass::Positive
        } else if text.contains('-') {
            PnlClass::Negative
        } else {
            PnlClass::Neutral
        }
    }

    /// CSS class name used by the dashboard styles
    pub fn as_css(self) -> &'static str {
        match self {
            PnlClass::Positive => "positive",
            PnlClass::Negative => "negative",
            PnlClass::Neutral => "neutral",
        }
    }
}

/// Fixed-decimal number rendering
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Render a backend timestamp in the dashboard's day-first style
///
/// Accepts RFC 3339 (`2024-03-01T10:15:00+00:00`) and the bare
/// `YYYY-MM-DD HH:MM:SS` form some endpoints emit. Unparsable input is
/// returned unchanged; the page prefers a raw string over an error cell.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%-d/%-m/%Y, %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// Dollar amount with the dashboard's loading placeholder
pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${v:.2}"),
        _ => "$--".to_string(),
    }
}

/// Percentage with explicit sign and loading placeholder
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}%")
        }
        _ => "--%".to_string(),
    }
}

/// Parse a formatted percentage back to a number ("+2.50%" -> 2.5)
pub fn parse_percent(raw: &str) -> f64 {
    raw.trim()
        .trim_end_matches('%')
        .trim_start_matches('+')
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(3.0, 2), "3.00");
        assert_eq!(format_number(1.005, 0), "1");
        assert_eq!(format_number(-0.5, 3), "-0.500");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date("2024-03-01T10:15:00+00:00"),
            "1/3/2024, 10:15:00"
        );
        // Offset is preserved, not normalized to UTC
        assert_eq!(
            format_date("2024-12-31T23:59:59+01:00"),
            "31/12/2024, 23:59:59"
        );
    }

    #[test]
    fn test_format_date_naive_fallback() {
        assert_eq!(format_date("2024-03-01 10:15:00"), "1/3/2024, 10:15:00");
    }

    #[test]
    fn test_format_date_passthrough_on_garbage() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Some(1234.5)), "$1234.50");
        assert_eq!(format_usd(Some(-3.5)), "$-3.50");
        assert_eq!(format_usd(None), "$--");
        assert_eq!(format_usd(Some(f64::NAN)), "$--");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(2.5)), "+2.50%");
        assert_eq!(format_percent(Some(0.0)), "+0.00%");
        assert_eq!(format_percent(Some(-1.25)), "-1.25%");
        assert_eq!(format_percent(None), "--%");
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("+2.50%"), 2.5);
        assert_eq!(parse_percent("-1.25%"), -1.25);
        assert_eq!(parse_percent("garbage"), 0.0);
    }

    #[test]
    fn test_pnl_class() {
        assert_eq!(PnlClass::of(12.0), PnlClass::Positive);
        assert_eq!(PnlClass::of(-0.01), PnlClass::Negative);
        assert_eq!(PnlClass::of(0.0), PnlClass::Neutral);

        assert_eq!(PnlClass::of_text("+$12.00"), PnlClass::Positive);
        assert_eq!(PnlClass::of_text("$45.10"), PnlClass::Positive);
        assert_eq!(PnlClass::of_text("$-3.50"), PnlClass::Negative);
        assert_eq!(PnlClass::of_text("--"), PnlClass::Negative);
        assert_eq!(PnlClass::of_text(""), PnlClass::Neutral);
        assert_eq!(PnlClass::as_css(PnlClass::Positive), "positive");
    }
}
