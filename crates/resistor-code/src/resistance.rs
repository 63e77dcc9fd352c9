use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{code::pow10, si, ResistorError};

const UNIT_SUFFIXES: [&str; 5] = ["Ohms", "ohms", "Ohm", "ohm", "Ω"];

const PREFIXES: [(&str, i32); 11] = [
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("K", 3),
    ("m", -3),
    ("μ", -6),
    ("µ", -6),
    ("u", -6),
    ("n", -9),
    ("p", -12),
];

/// Convert through the shortest decimal rendering of the float, so `0.47`
/// stays `0.47` instead of picking up binary noise.
pub(crate) fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

/// A non-negative resistance, optionally pinned to a display precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Resistance {
    #[serde(with = "rust_decimal::serde::str")]
    value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<u32>,
}

impl Resistance {
    pub fn new(value: Decimal) -> Result<Self, ResistorError> {
        if value < Decimal::ZERO {
            return Err(ResistorError::invalid_value(
                value,
                "resistance must not be negative",
            ));
        }
        Ok(Self {
            value: value.normalize(),
            precision: None,
        })
    }

    pub fn from_f64(value: f64) -> Result<Self, ResistorError> {
        let decimal = decimal_from_f64(value)
            .ok_or_else(|| ResistorError::invalid_value(value, "not a finite decimal number"))?;
        Self::new(decimal)
    }

    pub fn with_precision(self, precision: u32) -> Self {
        Self {
            precision: Some(precision),
            ..self
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Decimals used by [`Resistance::si`].
    pub fn precision(&self) -> u32 {
        self.precision
            .unwrap_or_else(|| si::base_precision(self.exponent().unwrap_or(0)))
    }

    pub fn exponent(&self) -> Option<i32> {
        crate::code::exponent(self.value)
    }

    pub fn si(&self) -> String {
        si::format_si(self.value, self.precision)
    }
}

impl From<Resistance> for Decimal {
    fn from(resistance: Resistance) -> Self {
        resistance.value
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.si())
    }
}

fn rkm_multiplier(c: char) -> Option<Decimal> {
    match c {
        'R' => Some(Decimal::ONE),
        'k' | 'K' => Some(pow10(3)),
        'M' => Some(pow10(6)),
        'G' => Some(pow10(9)),
        _ => None,
    }
}

/// Helper for resistor "4k7" notation -> 4.7k, "R47" -> 0.47
fn parse_rkm_notation(s: &str) -> Option<Decimal> {
    let (pos, multiplier) = s
        .char_indices()
        .find_map(|(i, c)| rkm_multiplier(c).map(|m| (i, m)))?;
    let before = &s[..pos];
    let after = &s[pos + 1..];

    if after.is_empty()
        || !before.chars().all(|c| c.is_ascii_digit())
        || !after.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    // only "R47" may omit the integer part
    let before_num = if before.is_empty() {
        if multiplier != Decimal::ONE {
            return None;
        }
        Decimal::ZERO
    } else {
        before.parse::<Decimal>().ok()?
    };
    let after_num = after.parse::<Decimal>().ok()?;
    let fraction = after_num * pow10(-(after.len() as i32));
    Some((before_num + fraction) * multiplier)
}

fn parse_prefixed(s: &str) -> Option<Decimal> {
    // Find where number ends
    let split_pos = s
        .find(|ch: char| !ch.is_ascii_digit() && ch != '.' && ch != '-' && ch != '+')
        .unwrap_or(s.len());
    if split_pos == 0 {
        return None;
    }

    let (number_str, prefix_str) = s.split_at(split_pos);
    let number: Decimal = number_str.parse().ok()?;
    match prefix_str {
        "" | "R" => Some(number),
        _ => PREFIXES
            .iter()
            .find(|(sym, _)| *sym == prefix_str)
            .map(|(_, exp)| number * pow10(*exp)),
    }
}

impl FromStr for Resistance {
    type Err = ResistorError;

    /// Accepts `4700`, `4.7k`, `4k7`, `R47`, `2M2`, `470m`, optionally
    /// followed by `Ω` or `Ohm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.split_whitespace().collect();
        let body = UNIT_SUFFIXES
            .iter()
            .find_map(|unit| compact.strip_suffix(unit))
            .unwrap_or(&compact);
        if body.is_empty() {
            return Err(ResistorError::invalid_value(s, "empty resistance"));
        }

        let value = parse_rkm_notation(body)
            .or_else(|| parse_prefixed(body))
            .ok_or_else(|| ResistorError::invalid_value(s.trim(), "not a resistance"))?;
        Self::new(value)
    }
}
