//! Decimal formatting helpers for views

/// Insert `,` between every group of three digits
///
/// Accepts any decimal rendering, optionally prefixed with `-`.
pub fn group_thousands(decimal: &str) -> String {
    let (sign, digits) = match decimal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", decimal),
    };

    let mut grouped = String::with_capacity(decimal.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a number in decimal, grouped when requested
pub fn format_decimal(value: &impl std::fmt::Display, group: bool) -> String {
    let plain = value.to_string();
    if group {
        group_thousands(&plain)
    } else {
        plain
    }
}

/// Power-of-two notation for a bit position, e.g. `2^31`
pub fn power_of_two(position: u8) -> String {
    format!("2^{position}")
}
