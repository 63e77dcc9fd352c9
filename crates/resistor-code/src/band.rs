//! Color bands and their digit / multiplier meaning.
//!
//! The mapping is split into two one-directional functions per role
//! (digit and multiplier) over the closed [`Band`] enumeration. Gold and
//! silver never stand for an ordinary digit; as a multiplier they mean
//! ×0.1 and ×0.01.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ResistorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
    White,
    Gold,
    Silver,
}

impl Band {
    /// The ten digit colors, indexed by the digit they encode.
    pub const DIGITS: [Band; 10] = [
        Band::Black,
        Band::Brown,
        Band::Red,
        Band::Orange,
        Band::Yellow,
        Band::Green,
        Band::Blue,
        Band::Purple,
        Band::Gray,
        Band::White,
    ];

    pub const ALL: [Band; 12] = [
        Band::Black,
        Band::Brown,
        Band::Red,
        Band::Orange,
        Band::Yellow,
        Band::Green,
        Band::Blue,
        Band::Purple,
        Band::Gray,
        Band::White,
        Band::Gold,
        Band::Silver,
    ];

    /// Color for a decimal digit, `None` outside 0..=9.
    pub fn from_digit(digit: u8) -> Option<Band> {
        Self::DIGITS.get(digit as usize).copied()
    }

    /// Digit encoded by this band, `None` for the gold and silver markers.
    pub fn digit(self) -> Option<u8> {
        match self {
            Band::Gold | Band::Silver => None,
            digit => Some(digit as u8),
        }
    }

    /// Color for a power-of-ten multiplier in -2..=9.
    pub fn from_multiplier(exponent: i8) -> Option<Band> {
        match exponent {
            -2 => Some(Band::Silver),
            -1 => Some(Band::Gold),
            0..=9 => Self::from_digit(exponent as u8),
            _ => None,
        }
    }

    /// Power of ten this band means in the multiplier position.
    pub fn multiplier(self) -> i8 {
        match self {
            Band::Gold => -1,
            Band::Silver => -2,
            digit => digit as i8,
        }
    }

    pub fn is_tolerance_marker(self) -> bool {
        matches!(self, Band::Gold | Band::Silver)
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Black => "black",
            Band::Brown => "brown",
            Band::Red => "red",
            Band::Orange => "orange",
            Band::Yellow => "yellow",
            Band::Green => "green",
            Band::Blue => "blue",
            Band::Purple => "purple",
            Band::Gray => "gray",
            Band::White => "white",
            Band::Gold => "gold",
            Band::Silver => "silver",
        }
    }

    /// Paint color used when drawing the band on a resistor body.
    pub fn hex(self) -> &'static str {
        match self {
            Band::Black => "#000000",
            Band::Brown => "#A05A2C",
            Band::Red => "#DA0000",
            Band::Orange => "#FF6600",
            Band::Yellow => "#FFCC00",
            Band::Green => "#008000",
            Band::Blue => "#000080",
            Band::Purple => "#800080",
            Band::Gray => "#666666",
            Band::White => "#FFFFFF",
            Band::Gold => "#D4A017",
            Band::Silver => "#B3B3B3",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Band {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let band = match name.as_str() {
            "grey" => Band::Gray,
            "violet" => Band::Purple,
            other => Self::ALL
                .into_iter()
                .find(|band| band.name() == other)
                .ok_or_else(|| ResistorError::unknown_color(s.trim(), "a resistor band color"))?,
        };
        Ok(band)
    }
}
