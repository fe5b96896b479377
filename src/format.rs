// src/format.rs
//
// Display-side number formatting. Cells stay strings everywhere else.

const MAX_FRACTION_DIGITS: usize = 3;

/// Thousands-group a numeric-looking cell (`"1234567"` → `"1,234,567"`).
///
/// Up to three fraction digits are kept, trailing zeros dropped. Anything
/// that isn't a finite number, including blank cells, comes back unchanged.
pub fn fmt(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return s!(value);
    }
    let num = match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return s!(value),
    };

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = s!();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if num.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Insert `,` every three digits from the right. Expects ASCII digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Leading-integer parse in the spirit of a lenient `parseInt`: skips leading
/// whitespace, accepts an optional sign, then needs at least one digit.
/// Trailing junk is ignored (`"12th"` → 12).
pub fn leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    // Digit runs too long for i64 are still integers.
    let mag: i64 = rest[..end].parse().unwrap_or(i64::MAX);
    Some(if neg { -mag } else { mag })
}
