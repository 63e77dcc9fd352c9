//! Four-band resistor color codes.
//!
//! The crate maps a resistance and tolerance to the ordered bands printed on
//! a through-hole resistor and back, and renders resistances as SI-prefixed
//! strings (`4700` as `"4.7 k"`).
//!
//! * [`code`] – the value codec: [`code::encode`] / [`code::decode`] between
//!   a resistance and a [`ColorCode`].
//! * [`band`] / [`tolerance`] – per-band lookups for digits, multipliers and
//!   the gold/silver tolerance markers.
//! * [`si`] – prefix selection and the precision rules for nominal values and
//!   their tolerance bounds.
//! * [`Resistor`] – a value object holding the resistance, tolerance, code,
//!   bounds and display strings, all derived together.
//!
//! ```
//! use resistor_code::{Resistor, Tolerance};
//! use rust_decimal_macros::dec;
//!
//! let r = Resistor::new(dec!(1000), Tolerance::FivePercent).unwrap();
//! assert_eq!(r.code().to_string(), "brown-black-red-gold");
//! assert_eq!(r.si(), "1.0 k");
//! assert_eq!(r.min_si(), "0.95 k");
//! ```
//!
//! All tables are constants, and every type is a plain value that can be
//! shared across threads.

pub mod band;
pub mod code;
pub mod config;
mod error;
pub mod resistance;
pub mod resistor;
pub mod series;
pub mod si;
pub mod tolerance;

pub use band::Band;
pub use code::ColorCode;
pub use config::{CodecConfig, DEFAULT_TOLERANCE};
pub use error::ResistorError;
pub use resistance::Resistance;
pub use resistor::Resistor;
pub use series::Series;
pub use tolerance::Tolerance;
