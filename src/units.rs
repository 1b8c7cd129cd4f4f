//! Engineering notation: value parsing with SI suffixes and prefixed formatting.

use crate::error::{BiasError, Result};

const PREFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Parse a number string with optional unit suffix.
///
/// Accepts the usual component-value shorthand: `100k`, `4.7M`, `1m`, `2.2`,
/// `1e-9`. A bare `m` is milli, `M` is mega.
pub fn parse_value(text: &str) -> Result<f64> {
    let text = text.trim();
    let invalid = || BiasError::InvalidValue {
        text: text.to_string(),
    };

    let last = text.chars().last().ok_or_else(invalid)?;
    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|_| invalid())
}

/// Format a value with an SI prefix, e.g. `0.003909` A becomes `3.909 mA`.
pub fn format_si(value: f64, unit: &str) -> String {
    if !value.is_finite() {
        return format!("{} {}", value, unit);
    }
    if value == 0.0 {
        return format!("0 {}", unit);
    }

    let magnitude = value.abs();
    let mut index = PREFIXES
        .iter()
        .position(|(scale, _)| magnitude >= *scale)
        .unwrap_or(PREFIXES.len() - 1);

    // Rounding to the printed precision can carry into the next prefix
    let rounded = |index: usize| (value / PREFIXES[index].0 * 1e4).round() / 1e4;
    if index > 0 && rounded(index).abs() >= 1000.0 {
        index -= 1;
    }

    let (scale, prefix) = PREFIXES[index];
    let scaled = value / scale;
    let text = format!("{:.4}", scaled);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}{}", text, prefix, unit)
}
