//! Resistance ⇄ four-band color code.
//!
//! A code is `[digit, digit, multiplier, tolerance]`. The value it stands for
//! is `(10 * first + second) * 10^multiplier`, with the multiplier band
//! ranging from silver (×0.01) up to white (×10^9). Encoding keeps the two
//! leading significant digits of the resistance and drops the rest, so
//! decoding an encoded value gives back that two-digit truncation. Below 0.1
//! the silver multiplier leaves room for a single significant digit behind a
//! black first band: `0.05` is black-green-silver.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Band, ResistorError, Tolerance};

/// Lowest multiplier exponent a band can carry (silver).
pub const MIN_MULTIPLIER: i8 = -2;
/// Highest multiplier exponent a band can carry (white).
pub const MAX_MULTIPLIER: i8 = 9;

#[inline]
pub(crate) fn pow10(exp: i32) -> Decimal {
    if exp >= 0 {
        Decimal::from_i128_with_scale(10i128.pow(exp as u32), 0)
    } else {
        Decimal::new(1, (-exp) as u32)
    }
}

/// Significant digits and scientific exponent of a non-zero value,
/// e.g. `4700` gives `("47", 3)`.
fn significand(value: Decimal) -> (String, i32) {
    let normalized = value.normalize();
    let digits = normalized.mantissa().unsigned_abs().to_string();
    let exponent = digits.len() as i32 - 1 - normalized.scale() as i32;
    (digits, exponent)
}

/// `floor(log10(|value|))`, `None` for zero.
pub fn exponent(value: Decimal) -> Option<i32> {
    if value.is_zero() {
        None
    } else {
        Some(significand(value).1)
    }
}

/// A resistance split into the pieces a color code is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    /// Digits of the first two bands.
    pub digits: (u8, u8),
    /// Power of ten carried by the third band.
    pub multiplier: i8,
    /// Scientific exponent of the resistance. This is `multiplier + 1`
    /// except below 0.1, where the first digit is a leading zero.
    pub exponent: i32,
}

/// Split a resistance into band digits and multiplier, truncating after the
/// digits a code can hold.
///
/// Fails with [`ResistorError::InvalidValue`] for negative values, zero and
/// anything outside `0.01 <= r < 1e11`.
pub fn decompose(resistance: Decimal) -> Result<Decomposition, ResistorError> {
    if resistance < Decimal::ZERO {
        return Err(ResistorError::invalid_value(
            resistance,
            "resistance must not be negative",
        ));
    }
    if resistance.is_zero() {
        return Err(ResistorError::invalid_value(
            resistance,
            "zero has no color code",
        ));
    }

    let (digits, exponent) = significand(resistance);
    if !(i32::from(MIN_MULTIPLIER)..=i32::from(MAX_MULTIPLIER) + 1).contains(&exponent) {
        return Err(ResistorError::invalid_value(
            resistance.normalize(),
            "outside the 0.01 to 99G range of a four-band code",
        ));
    }

    // "1" and "1000" both read as the digit pair 1, 0
    let mut significant = digits.bytes().map(|b| b - b'0');
    let multiplier = (exponent - 1).max(i32::from(MIN_MULTIPLIER));
    let digits = if exponent - 1 < multiplier {
        (0, significant.next().unwrap_or(0))
    } else {
        (
            significant.next().unwrap_or(0),
            significant.next().unwrap_or(0),
        )
    };

    Ok(Decomposition {
        digits,
        multiplier: multiplier as i8,
        exponent,
    })
}

/// An ordered, validated four-band code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Band; 4]", into = "[Band; 4]")]
pub struct ColorCode {
    bands: [Band; 4],
}

impl ColorCode {
    /// Validate band roles: two digit colors, any multiplier, then gold or silver.
    ///
    /// A black first band is only accepted in front of a non-black second band
    /// and a silver multiplier (0.01 to 0.09). Any other leading zero decodes to
    /// a value whose own code differs.
    pub fn new(bands: [Band; 4]) -> Result<Self, ResistorError> {
        let [first, second, multiplier, tolerance] = bands;
        for band in [first, second] {
            if band.digit().is_none() {
                return Err(ResistorError::unknown_color(
                    band,
                    "one of the ten digit colors",
                ));
            }
        }
        if !tolerance.is_tolerance_marker() {
            return Err(ResistorError::unknown_color(tolerance, "gold or silver"));
        }
        if first == Band::Black && (multiplier != Band::Silver || second == Band::Black) {
            return Err(ResistorError::MalformedCode {
                reason: "a black first band needs a silver multiplier and a non-black second band"
                    .to_string(),
            });
        }
        Ok(Self { bands })
    }

    /// Build a code from four color names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ResistorError> {
        let names: [&str; 4] = names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|names: Vec<&str>| ResistorError::MalformedCode {
                reason: format!("expected 4 colors, got {}", names.len()),
            })?;

        let mut bands = [Band::Black; 4];
        for (slot, name) in bands.iter_mut().zip(names) {
            *slot = name.parse().map_err(|err| ResistorError::MalformedCode {
                reason: format!("{err}"),
            })?;
        }
        Self::new(bands)
    }

    fn from_decomposition(
        decomposition: Decomposition,
        tolerance: Tolerance,
    ) -> Result<Self, ResistorError> {
        let (first, second) = decomposition.digits;
        let band = |digit: u8| {
            Band::from_digit(digit).ok_or_else(|| {
                ResistorError::invalid_value(digit, "significant digit out of range")
            })
        };
        let multiplier = Band::from_multiplier(decomposition.multiplier).ok_or_else(|| {
            ResistorError::invalid_value(decomposition.multiplier, "multiplier out of range")
        })?;
        Self::new([band(first)?, band(second)?, multiplier, tolerance.band()])
    }

    pub fn bands(&self) -> [Band; 4] {
        self.bands
    }

    pub fn names(&self) -> [&'static str; 4] {
        self.bands.map(Band::name)
    }

    pub fn digits(&self) -> (u8, u8) {
        let [first, second, ..] = self.bands;
        (
            first.digit().unwrap_or_default(),
            second.digit().unwrap_or_default(),
        )
    }

    pub fn multiplier(&self) -> i8 {
        self.bands[2].multiplier()
    }

    pub fn tolerance(&self) -> Tolerance {
        match self.bands[3] {
            Band::Silver => Tolerance::TenPercent,
            _ => Tolerance::FivePercent,
        }
    }
}

impl TryFrom<[Band; 4]> for ColorCode {
    type Error = ResistorError;

    fn try_from(bands: [Band; 4]) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<ColorCode> for [Band; 4] {
    fn from(code: ColorCode) -> Self {
        code.bands
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join("-"))
    }
}

impl FromStr for ColorCode {
    type Err = ResistorError;

    /// Accepts `brown-black-red-gold`, `brown, black, red, gold` or
    /// whitespace separated names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .collect();
        Self::from_names(&names)
    }
}

/// Encode a resistance and tolerance as a color code.
pub fn encode(resistance: Decimal, tolerance: Tolerance) -> Result<ColorCode, ResistorError> {
    let decomposition = decompose(resistance)?;
    let code = ColorCode::from_decomposition(decomposition, tolerance)?;
    log::debug!("encoded {} at {} as {}", resistance.normalize(), tolerance, code);
    Ok(code)
}

/// Recover the resistance and tolerance a color code stands for.
pub fn decode(code: &ColorCode) -> (Decimal, Tolerance) {
    let (first, second) = code.digits();
    let digits = Decimal::from(10 * u32::from(first) + u32::from(second));
    let resistance = (digits * pow10(i32::from(code.multiplier()))).normalize();
    let tolerance = code.tolerance();
    log::debug!("decoded {} as {} at {}", code, resistance, tolerance);
    (resistance, tolerance)
}
