//! Numeric literals.
//!
//! | Leaf | Grammar | Value |
//! |------|---------|-------|
//! | [`uintr`] | `digit+` | `u64`, saturating |
//! | [`intr`] | `sign? digit+` | `i64`, saturating |
//! | [`udble`] | `digit+ ('.' digit+)? (('e' \| 'E') sign? digit+)?` | `f64` |
//! | [`dble`] | `sign? udble` | `f64` |
//!
//! `sign` is `'+'` or `'-'`.

use ll1_core::{many1, opt, Rule};

use crate::chars::{chr, digit};

fn digits() -> Rule<char, String> {
    many1(digit()).map(|ds| ds.into_iter().collect())
}

fn sign() -> Rule<char, char> {
    chr('+').or(chr('-'))
}

/// Unsigned decimal integer.
pub fn uintr() -> Rule<char, u64> {
    many1(digit()).map(|ds| {
        ds.iter().fold(0u64, |acc, d| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(d.to_digit(10).unwrap_or_default()))
        })
    })
}

/// Optionally signed decimal integer.
pub fn intr() -> Rule<char, i64> {
    opt(sign()).and(uintr()).map(|sign, magnitude| {
        if sign == Some('-') {
            0i64.saturating_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).unwrap_or(i64::MAX)
        }
    })
}

/// Unsigned floating-point literal.
pub fn udble() -> Rule<char, f64> {
    let fraction = chr('.').and_r(digits());
    let exponent = chr('e')
        .or(chr('E'))
        .and_r(opt(sign()))
        .and(digits())
        .map(|sign, digits| match sign {
            Some(sign) => format!("{sign}{digits}"),
            None => digits,
        });
    digits()
        .and(opt(fraction))
        .and(opt(exponent))
        .map(|whole, fraction, exponent| {
            let mut literal = whole;
            if let Some(fraction) = fraction {
                literal.push('.');
                literal.push_str(&fraction);
            }
            if let Some(exponent) = exponent {
                literal.push('e');
                literal.push_str(&exponent);
            }
            literal.parse().unwrap_or(f64::NAN)
        })
}

/// Optionally signed floating-point literal.
pub fn dble() -> Rule<char, f64> {
    opt(sign()).and(udble()).map(|sign, value| {
        if sign == Some('-') {
            -value
        } else {
            value
        }
    })
}
