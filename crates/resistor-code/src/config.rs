use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{resistor::parse_with_default, Resistor, ResistorError, Tolerance};

/// Tolerance assumed when a resistor is built without one.
pub const DEFAULT_TOLERANCE: Tolerance = Tolerance::FivePercent;

/// Codec settings, usually read from a TOML table such as
///
/// ```toml
/// default-tolerance = "10%"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodecConfig {
    pub default_tolerance: Tolerance,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl CodecConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse resistor codec config: {e}"))
    }

    pub fn resistor(&self, resistance: Decimal) -> Result<Resistor, ResistorError> {
        Resistor::new(resistance, self.default_tolerance)
    }

    /// Like `str::parse::<Resistor>` but falling back to the configured tolerance.
    pub fn parse_resistor(&self, s: &str) -> Result<Resistor, ResistorError> {
        parse_with_default(s, self.default_tolerance)
    }
}
