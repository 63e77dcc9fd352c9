//! SI-prefixed rendering of resistances, e.g. `4700` as `"4.7 k"`.
//!
//! A value with scientific exponent `e` is shown against the prefix for
//! `10^(3 * floor(e / 3))`, so its mantissa has one, two or three integer
//! digits depending on `e mod 3`. Precision is picked per exponent class so
//! that a two-digit value prints exactly two significant digits. Tolerance
//! bounds get a precision of their own from [`bound_precision`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    code::{self, pow10},
    Tolerance,
};

const SI_PREFIXES: [(i32, &str); 17] = [
    (24, "Y"),
    (21, "Z"),
    (18, "E"),
    (15, "P"),
    (12, "T"),
    (9, "G"),
    (6, "M"),
    (3, "k"),
    (0, ""),
    (-3, "m"),
    (-6, "μ"),
    (-9, "n"),
    (-12, "p"),
    (-15, "f"),
    (-18, "a"),
    (-21, "z"),
    (-24, "y"),
];

/// Prefix symbol for a power of ten that is a multiple of three.
pub fn prefix(power: i32) -> &'static str {
    SI_PREFIXES
        .iter()
        .find(|(exp, _)| *exp == power)
        .map(|(_, sym)| *sym)
        .unwrap_or("")
}

/// Power of ten the mantissa is divided by for a value of the given exponent.
fn engineering_power(exponent: i32) -> i32 {
    (3 * exponent.div_euclid(3)).clamp(-24, 24)
}

/// Decimals needed to show two significant digits: `1.0 k`, `10 k`, `100 k`.
pub fn base_precision(exponent: i32) -> u32 {
    if exponent.rem_euclid(3) == 0 { 1 } else { 0 }
}

/// Decimals for the min/max bounds of a two-digit value.
///
/// `exponent` is the scientific exponent of the nominal value and `second` its
/// second band digit; bounds are printed against the nominal value's prefix.
/// Starting from [`base_precision`], a 5% bound gains two decimals when
/// `second` is odd (except at exponents -2, 2, 5, 8 and 11) and one otherwise.
/// A 10% bound keeps the base precision at exponents 1, 3, 6 and 9 and gains
/// one decimal everywhere else.
pub fn bound_precision(exponent: i32, second: u8, tolerance: Tolerance) -> u32 {
    let precision = base_precision(exponent);
    let bound = match tolerance {
        Tolerance::FivePercent
            if second % 2 == 1 && !matches!(exponent, -2 | 2 | 5 | 8 | 11) =>
        {
            precision + 2
        }
        Tolerance::FivePercent => precision + 1,
        Tolerance::TenPercent if matches!(exponent, 1 | 3 | 6 | 9) => precision,
        Tolerance::TenPercent => precision + 1,
    };

    log::trace!(
        "bound precision {} for second digit {} at exponent {} and {}",
        bound,
        second,
        exponent,
        tolerance
    );
    bound
}

/// Render `value` against the prefix chosen by `exponent` with exactly
/// `precision` decimals.
pub fn format_scaled(value: Decimal, exponent: i32, precision: u32) -> String {
    let power = engineering_power(exponent);
    let mut mantissa = (value * pow10(-power))
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    mantissa.rescale(precision);

    match prefix(power) {
        // no dangling separator without a prefix
        "" => mantissa.to_string(),
        sym => format!("{mantissa} {sym}"),
    }
}

/// Render `value` with its own prefix. Without an explicit precision the
/// mantissa gets two significant digits.
pub fn format_si(value: Decimal, precision: Option<u32>) -> String {
    let exponent = code::exponent(value).unwrap_or(0);
    let precision = precision.unwrap_or_else(|| base_precision(exponent));
    format_scaled(value, exponent, precision)
}
