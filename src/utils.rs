//! Formatting helpers shared across components and pages.

use chrono::{DateTime, Local};

// =============================================================================
// Address formatting
// =============================================================================

/// Shorten a hex address for display: `0x1234...abcd`.
///
/// Addresses at or below the shortened length pass through untouched.
pub fn format_address(address: &str) -> String {
    const CHARS: usize = 4;
    if address.len() <= CHARS * 2 + 2 {
        return address.to_string();
    }
    format!(
        "{}...{}",
        &address[..CHARS + 2],
        &address[address.len() - CHARS..]
    )
}

// =============================================================================
// Value formatting
// =============================================================================

/// Format a numeric string with K/M suffixes, e.g. `$1.7M`.
///
/// `None` renders as an ellipsis placeholder while data loads, and an
/// unparseable value renders as `Error`.
pub fn format_value(value: Option<&str>, prefix: &str) -> String {
    let Some(value) = value else {
        return "...".to_string();
    };
    let Ok(num) = value.parse::<f64>() else {
        return "Error".to_string();
    };
    if num >= 1_000_000.0 {
        format!("{}{:.1}M", prefix, num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{}{:.1}K", prefix, num / 1_000.0)
    } else {
        format!("{}{:.2}", prefix, num)
    }
}

/// Format a price string with a fixed number of decimals, e.g. `$1.001`.
pub fn format_price(value: Option<&str>, decimals: usize) -> String {
    let Some(value) = value else {
        return "...".to_string();
    };
    let Ok(num) = value.parse::<f64>() else {
        return "Error".to_string();
    };
    format!("${:.*}", decimals, num)
}

/// Value formatting that also reflects loading and error states.
pub fn format_value_with_state(
    value: Option<&str>,
    is_loading: bool,
    error: Option<&str>,
    prefix: &str,
) -> String {
    if is_loading {
        return "...".to_string();
    }
    if error.is_some() {
        return "Error".to_string();
    }
    format_value(value, prefix)
}

/// Price formatting that also reflects loading and error states.
pub fn format_price_with_state(
    value: Option<&str>,
    is_loading: bool,
    error: Option<&str>,
    decimals: usize,
) -> String {
    if is_loading {
        return "...".to_string();
    }
    if error.is_some() {
        return "Error".to_string();
    }
    format_price(value, decimals)
}

/// Format a number with thousands separators: `1234567.5` -> `1,234,567.5`.
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let whole = abs.trunc() as u64;
    let frac = abs.fract();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0.0 {
        // Keep up to 2 fractional digits, trimming trailing zeros.
        let frac_str = format!("{:.2}", frac);
        let trimmed = frac_str.trim_start_matches("0.").trim_end_matches('0');
        if !trimmed.is_empty() {
            out.push('.');
            out.push_str(trimmed);
        }
    }
    out
}

// =============================================================================
// Time formatting
// =============================================================================

/// Format a unix timestamp as a local date and time.
pub fn format_timestamp(secs: u64) -> String {
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => secs.to_string(),
    }
}

/// Format a unix timestamp as a local date.
pub fn format_date(secs: u64) -> String {
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => secs.to_string(),
    }
}

/// Format a unix timestamp as a local time of day.
pub fn format_time(secs: u64) -> String {
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => secs.to_string(),
    }
}

/// Current unix time in seconds, from the browser clock.
pub fn unix_now() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}
