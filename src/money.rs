/// Price parsing and currency display

/// Parse a price the way the storefront markup supplies it: leading
/// whitespace, an optional sign, then digits. Anything after the digits is
/// ignored ("15000.50" -> 15000, "42px" -> 42). Digit runs too long for an
/// `i64` saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_price(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10)
            .saturating_add(sign * i64::from(d - b'0'))
    });
    Some(value)
}

/// Format an integer amount with Indonesian digit grouping,
/// e.g. `format_currency(1250000, "IDR")` -> `"IDR 1.250.000"`.
pub fn format_currency(amount: i64, prefix: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };

    if prefix.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{} {}{}", prefix, sign, grouped)
    }
}
