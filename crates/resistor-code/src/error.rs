/// Everything that can go wrong while building, decoding or parsing a resistor.
///
/// Errors are raised at the point of construction; no partially derived
/// value is ever handed back alongside one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResistorError {
    #[error("Invalid resistance '{value}': {reason}")]
    InvalidValue { value: String, reason: &'static str },
    #[error("Malformed color code: {reason}")]
    MalformedCode { reason: String },
    #[error("Unknown color '{color}', expected {expected}")]
    UnknownColor {
        color: String,
        expected: &'static str,
    },
    #[error("Unknown tolerance '{value}', expected 10% or 5%")]
    UnknownTolerance { value: String },
}

impl ResistorError {
    pub(crate) fn invalid_value(value: impl ToString, reason: &'static str) -> Self {
        ResistorError::InvalidValue {
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn unknown_color(color: impl ToString, expected: &'static str) -> Self {
        ResistorError::UnknownColor {
            color: color.to_string(),
            expected,
        }
    }
}
