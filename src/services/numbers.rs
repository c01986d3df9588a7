//! Number systems: radix conversion and roman numerals.

use crate::domain::errors::ToolError;
use crate::domain::models::{AllBasesReport, BaseReport, RomanReport};

/// Largest integer exactly representable as an IEEE-754 double.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

fn check_radix(radix: u32) -> Result<(), ToolError> {
    if !(2..=36).contains(&radix) {
        return Err(ToolError::InvalidRadix(radix));
    }
    Ok(())
}

fn check_safe(n: i64) -> Result<i64, ToolError> {
    if n.abs() > MAX_SAFE_INTEGER {
        return Err(ToolError::OutOfSafeRange);
    }
    Ok(n)
}

pub fn parse_radix(raw: &str, radix: u32) -> Result<i64, ToolError> {
    check_radix(radix)?;
    let trimmed = raw.trim().replace('_', "");
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(&trimmed)),
    };
    let digits = match radix {
        2 => digits.strip_prefix("0b").unwrap_or(digits),
        8 => digits.strip_prefix("0o").unwrap_or(digits),
        16 => digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits),
        _ => digits,
    };
    if digits.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let mut value: i64 = 0;
    for c in digits.chars() {
        let d = c.to_digit(radix).ok_or(ToolError::InvalidDigit { digit: c, radix })?;
        value = value
            .checked_mul(radix as i64)
            .and_then(|v| v.checked_add(d as i64))
            .ok_or(ToolError::OutOfSafeRange)?;
        check_safe(value)?;
    }
    Ok(if negative { -value } else { value })
}

pub fn format_radix(value: i64, radix: u32) -> Result<String, ToolError> {
    check_radix(radix)?;
    check_safe(value)?;
    if value == 0 {
        return Ok("0".to_string());
    }
    let mut n = value.unsigned_abs();
    let mut digits = Vec::new();
    while n > 0 {
        let d = (n % radix as u64) as u32;
        digits.push(std::char::from_digit(d, radix).unwrap_or('?'));
        n /= radix as u64;
    }
    if value < 0 {
        digits.push('-');
    }
    Ok(digits.iter().rev().collect())
}

pub fn convert_base(raw: &str, from: u32, to: u32) -> Result<BaseReport, ToolError> {
    let decimal = parse_radix(raw, from)?;
    Ok(BaseReport {
        input: raw.trim().to_string(),
        from,
        to,
        output: format_radix(decimal, to)?,
        decimal,
    })
}

pub fn all_bases(raw: &str, from: u32) -> Result<AllBasesReport, ToolError> {
    let decimal = parse_radix(raw, from)?;
    Ok(AllBasesReport {
        decimal,
        binary: format_radix(decimal, 2)?,
        octal: format_radix(decimal, 8)?,
        hexadecimal: format_radix(decimal, 16)?,
    })
}

const ROMAN: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn to_roman(n: i64) -> Result<String, ToolError> {
    if !(1..=3999).contains(&n) {
        return Err(ToolError::RomanRange(n));
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, symbol) in ROMAN {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    Ok(out)
}

/// Accepts only the canonical spelling, so `IIII` and `VX` are rejected.
pub fn from_roman(raw: &str) -> Result<i64, ToolError> {
    let upper = raw.trim().to_ascii_uppercase();
    let invalid = || ToolError::InvalidRoman(raw.trim().to_string());
    if upper.is_empty() {
        return Err(invalid());
    }

    let mut total = 0;
    let mut rest = upper.as_str();
    for (value, symbol) in ROMAN {
        while let Some(next) = rest.strip_prefix(symbol) {
            total += value;
            rest = next;
        }
    }
    if !rest.is_empty() {
        return Err(invalid());
    }
    if to_roman(total).ok().as_deref() != Some(upper.as_str()) {
        return Err(invalid());
    }
    Ok(total)
}

/// Converts in whichever direction the input implies.
pub fn roman(raw: &str) -> Result<RomanReport, ToolError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Ok(RomanReport {
            arabic: n,
            roman: to_roman(n)?,
        }),
        Err(_) => Ok(RomanReport {
            arabic: from_roman(trimmed)?,
            roman: trimmed.to_ascii_uppercase(),
        }),
    }
}
