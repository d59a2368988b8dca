//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the reports, the command-line
//! output and the terminal dashboard.

use crate::models::Money;

/// Placeholder shown for missing text fields and undefined ratios
pub const PLACEHOLDER: &str = "N/A";

/// Format an amount compactly: "$1.23B", "$4.50M", "$7.00K", "$950"
pub fn format_currency(amount: Money) -> String {
    if amount.is_zero() {
        return "$0".to_string();
    }
    let value = amount.as_f64();
    let abs = value.abs();
    let sign = if value < 0.0 { "-$" } else { "$" };

    if abs >= 1e9 {
        format!("{}{:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.2}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.2}K", sign, abs / 1e3)
    } else {
        format!("{}{:.0}", sign, abs)
    }
}

/// Format a count with thousands separators: 1234567 -> "1,234,567"
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a ratio with one decimal, or the placeholder when undefined
pub fn format_percent(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{:.1}%", p),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a growth figure with an explicit sign: "+12.5%", "-3.0%"
pub fn format_growth(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p >= 0.0 => format!("+{:.1}%", p),
        Some(p) => format!("{:.1}%", p),
        None => PLACEHOLDER.to_string(),
    }
}

/// Optional text, or the placeholder
pub fn text_or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 1 {
        "…".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_scales() {
        assert_eq!(format_currency(Money::from_dollars(1_234_000_000)), "$1.23B");
        assert_eq!(format_currency(Money::from_dollars(4_500_000)), "$4.50M");
        assert_eq!(format_currency(Money::from_dollars(7_000)), "$7.00K");
        assert_eq!(format_currency(Money::from_dollars(950)), "$950");
        assert_eq!(format_currency(Money::zero()), "$0");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Money::from_dollars(-2_500_000)), "-$2.50M");
        assert_eq!(format_currency(Money::from_dollars(-12)), "-$12");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(83.333)), "83.3%");
        assert_eq!(format_percent(None), "N/A");
        assert_eq!(format_growth(Some(12.54)), "+12.5%");
        assert_eq!(format_growth(Some(-3.0)), "-3.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "Hell…");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Éducation spéciale", 4), "Édu…");
    }
}
