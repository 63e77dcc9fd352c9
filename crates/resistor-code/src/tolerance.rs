use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{resistance::decimal_from_f64, Band, ResistorError, Series};

const ONE_HUNDRED: Decimal = dec!(100);

/// Tolerance of a four-band resistor. Each value owns exactly one band color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tolerance {
    /// ±10%, silver band.
    TenPercent,
    /// ±5%, gold band.
    FivePercent,
}

impl Tolerance {
    pub fn fraction(self) -> Decimal {
        match self {
            Tolerance::TenPercent => dec!(0.1),
            Tolerance::FivePercent => dec!(0.05),
        }
    }

    pub fn band(self) -> Band {
        match self {
            Tolerance::TenPercent => Band::Silver,
            Tolerance::FivePercent => Band::Gold,
        }
    }

    pub fn from_band(band: Band) -> Result<Self, ResistorError> {
        match band {
            Band::Silver => Ok(Tolerance::TenPercent),
            Band::Gold => Ok(Tolerance::FivePercent),
            other => Err(ResistorError::unknown_color(other, "gold or silver")),
        }
    }

    /// Preferred-value series manufactured at this tolerance.
    pub fn series(self) -> Series {
        Series::for_tolerance(self)
    }
}

impl TryFrom<Decimal> for Tolerance {
    type Error = ResistorError;

    fn try_from(fraction: Decimal) -> Result<Self, Self::Error> {
        [Tolerance::TenPercent, Tolerance::FivePercent]
            .into_iter()
            .find(|tolerance| tolerance.fraction() == fraction)
            .ok_or_else(|| ResistorError::UnknownTolerance {
                value: fraction.normalize().to_string(),
            })
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ResistorError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        let decimal = decimal_from_f64(fraction).ok_or_else(|| ResistorError::UnknownTolerance {
            value: fraction.to_string(),
        })?;
        Self::try_from(decimal)
    }
}

/// Parse percentage or decimal string to tolerance fraction
fn parse_percentish_decimal(s: &str) -> Option<Decimal> {
    if let Some(inner) = s.strip_suffix('%') {
        Some(inner.trim().parse::<Decimal>().ok()? / ONE_HUNDRED)
    } else {
        s.parse::<Decimal>().ok()
    }
}

impl FromStr for Tolerance {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(band) = s.parse::<Band>() {
            return Self::from_band(band).map_err(|_| ResistorError::UnknownTolerance {
                value: s.to_string(),
            });
        }
        parse_percentish_decimal(s)
            .and_then(|fraction| Self::try_from(fraction).ok())
            .ok_or_else(|| ResistorError::UnknownTolerance {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.fraction() * ONE_HUNDRED).normalize())
    }
}

impl From<Tolerance> for String {
    fn from(tolerance: Tolerance) -> String {
        tolerance.to_string()
    }
}

impl TryFrom<String> for Tolerance {
    type Error = ResistorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
