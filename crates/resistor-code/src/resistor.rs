use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    code::{self, ColorCode},
    config::DEFAULT_TOLERANCE,
    si, Band, Resistance, ResistorError, Tolerance,
};

/// A four-band resistor.
///
/// Every field other than `resistance` and `tolerance` is derived from those
/// two when the value is built. Changing either one (or the code) builds a
/// whole new value, so the bands, bounds and strings always agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Resistor {
    #[serde(with = "rust_decimal::serde::str")]
    resistance: Decimal,
    tolerance: Tolerance,
    code: ColorCode,
    #[serde(with = "rust_decimal::serde::str")]
    min_resistance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    max_resistance: Decimal,
    si: String,
    min_si: String,
    max_si: String,
}

impl Resistor {
    pub fn new(resistance: Decimal, tolerance: Tolerance) -> Result<Self, ResistorError> {
        let resistance = Resistance::new(resistance)?.value();
        let decomposition = code::decompose(resistance)?;
        let code = code::encode(resistance, tolerance)?;

        let fraction = tolerance.fraction();
        let min_resistance = (resistance * (Decimal::ONE - fraction)).normalize();
        let max_resistance = (resistance * (Decimal::ONE + fraction)).normalize();

        let exponent = decomposition.exponent;
        let precision = si::base_precision(exponent);
        let bound_precision = si::bound_precision(exponent, decomposition.digits.1, tolerance);

        Ok(Self {
            resistance,
            tolerance,
            code,
            min_resistance,
            max_resistance,
            si: si::format_scaled(resistance, exponent, precision),
            min_si: si::format_scaled(min_resistance, exponent, bound_precision),
            max_si: si::format_scaled(max_resistance, exponent, bound_precision),
        })
    }

    /// Build with [`DEFAULT_TOLERANCE`].
    pub fn with_default_tolerance(resistance: Decimal) -> Result<Self, ResistorError> {
        Self::new(resistance, DEFAULT_TOLERANCE)
    }

    /// Construct from f64s that arrive from other APIs
    pub fn from_f64(resistance: f64, tolerance: f64) -> Result<Self, ResistorError> {
        let resistance = Resistance::from_f64(resistance)?.value();
        Self::new(resistance, Tolerance::try_from(tolerance)?)
    }

    pub fn from_code(code: ColorCode) -> Result<Self, ResistorError> {
        let (resistance, tolerance) = code::decode(&code);
        let resistor = Self::new(resistance, tolerance)?;
        debug_assert_eq!(resistor.code, code);
        Ok(resistor)
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ResistorError> {
        Self::from_code(ColorCode::from_names(names)?)
    }

    pub fn resistance(&self) -> Decimal {
        self.resistance
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn tolerance_value(&self) -> Decimal {
        self.tolerance.fraction()
    }

    pub fn code(&self) -> ColorCode {
        self.code
    }

    pub fn min_resistance(&self) -> Decimal {
        self.min_resistance
    }

    pub fn max_resistance(&self) -> Decimal {
        self.max_resistance
    }

    pub fn si(&self) -> &str {
        &self.si
    }

    pub fn min_si(&self) -> &str {
        &self.min_si
    }

    pub fn max_si(&self) -> &str {
        &self.max_si
    }

    pub fn display_string(&self) -> String {
        self.to_string()
    }

    /// Whether the resistance is exactly a preferred value of the series made
    /// at this tolerance.
    pub fn is_standard(&self) -> bool {
        self.tolerance.series().contains(self.code.digits())
            && code::decode(&self.code).0 == self.resistance
    }

    pub fn with_resistance(&self, resistance: Decimal) -> Result<Self, ResistorError> {
        Self::new(resistance, self.tolerance)
    }

    pub fn with_tolerance(&self, tolerance: Tolerance) -> Result<Self, ResistorError> {
        Self::new(self.resistance, tolerance)
    }

    pub fn with_code(&self, code: ColorCode) -> Result<Self, ResistorError> {
        Self::from_code(code)
    }

    /// Replace the resistance, leaving `self` untouched on error.
    pub fn set_resistance(&mut self, resistance: Decimal) -> Result<(), ResistorError> {
        *self = self.with_resistance(resistance)?;
        Ok(())
    }

    pub fn set_tolerance(&mut self, tolerance: Tolerance) -> Result<(), ResistorError> {
        *self = self.with_tolerance(tolerance)?;
        Ok(())
    }

    pub fn set_code(&mut self, code: ColorCode) -> Result<(), ResistorError> {
        *self = self.with_code(code)?;
        Ok(())
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R={}, CODE={}, R_MIN={}, R_MAX={}",
            self.si, self.code, self.min_si, self.max_si
        )
    }
}

/// Parse a resistance with an optional trailing tolerance, using `default`
/// when the tolerance is missing. A string of color names is read as a code.
pub(crate) fn parse_with_default(s: &str, default: Tolerance) -> Result<Resistor, ResistorError> {
    let s = s.trim();
    let first_token = s
        .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .find(|token| !token.is_empty());
    if first_token.is_some_and(|token| token.parse::<Band>().is_ok()) {
        return Resistor::from_code(s.parse()?);
    }

    let parts: Vec<&str> = s.split_whitespace().collect();
    let (value_str, tolerance) = match parts.split_last() {
        Some((last, rest))
            if !rest.is_empty() && (last.ends_with('%') || last.parse::<Band>().is_ok()) =>
        {
            (rest.join(""), last.parse::<Tolerance>()?)
        }
        _ => (parts.join(""), default),
    };

    let resistance = value_str.parse::<Resistance>()?;
    Resistor::new(resistance.value(), tolerance)
}

impl FromStr for Resistor {
    type Err = ResistorError;

    /// `"4.7k"`, `"4k7 10%"`, `"1M gold"` or `"brown-black-red-gold"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with_default(s, DEFAULT_TOLERANCE)
    }
}

impl TryFrom<(f64, f64)> for Resistor {
    type Error = ResistorError;

    fn try_from((resistance, tolerance): (f64, f64)) -> Result<Self, Self::Error> {
        Self::from_f64(resistance, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn resistor(value: Decimal) -> Resistor {
        Resistor::with_default_tolerance(value).expect("valid resistance")
    }

    #[test]
    fn test_property_resistance() {
        let r = resistor(dec!(1000));
        assert_eq!(r.resistance(), dec!(1000));
        assert_eq!(r.tolerance(), Tolerance::FivePercent);
        assert_eq!(r.tolerance_value(), dec!(0.05));
    }

    #[test]
    fn test_property_code() {
        let r = resistor(dec!(1000));
        assert_eq!(r.code().names(), ["brown", "black", "red", "gold"]);
    }

    #[test]
    fn test_codes() {
        for (value, expected) in [
            (dec!(1000), "brown black red gold"),
            (dec!(1100), "brown brown red gold"),
            (dec!(1200), "brown red red gold"),
            (dec!(1300), "brown orange red gold"),
            (dec!(1400), "brown yellow red gold"),
            (dec!(1500), "brown green red gold"),
            (dec!(1600), "brown blue red gold"),
            (dec!(1700), "brown purple red gold"),
            (dec!(1800), "brown gray red gold"),
            (dec!(1900), "brown white red gold"),
            (dec!(10), "brown black black gold"),
            (dec!(100), "brown black brown gold"),
            (dec!(10000), "brown black orange gold"),
            (dec!(100000), "brown black yellow gold"),
            (dec!(1000000), "brown black green gold"),
        ] {
            let names: Vec<&str> = expected.split(' ').collect();
            assert_eq!(resistor(value).code().names().to_vec(), names, "{value}");
        }
    }

    #[test]
    fn test_bounds() {
        let r = resistor(dec!(1000));
        assert_eq!(r.min_resistance(), dec!(950));
        assert_eq!(r.max_resistance(), dec!(1050));
        assert_eq!(r.si(), "1.0 k");
        assert_eq!(r.min_si(), "0.95 k");
        assert_eq!(r.max_si(), "1.05 k");

        let r = Resistor::new(dec!(4.7), Tolerance::TenPercent).unwrap();
        assert_eq!(r.min_resistance(), dec!(4.23));
        assert_eq!(r.max_resistance(), dec!(5.17));
        assert_eq!(r.si(), "4.7");
        assert_eq!(r.min_si(), "4.23");
        assert_eq!(r.max_si(), "5.17");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            resistor(dec!(1000)).display_string(),
            "R=1.0 k, CODE=brown-black-red-gold, R_MIN=0.95 k, R_MAX=1.05 k"
        );
        assert_eq!(
            resistor(dec!(1100)).to_string(),
            "R=1.1 k, CODE=brown-brown-red-gold, R_MIN=1.045 k, R_MAX=1.155 k"
        );
    }

    #[test]
    fn test_from_code() {
        let code: ColorCode = "yellow-purple-orange-silver".parse().unwrap();
        let r = Resistor::from_code(code).unwrap();
        assert_eq!(r.resistance(), dec!(47000));
        assert_eq!(r.tolerance(), Tolerance::TenPercent);
        assert_eq!(r.code(), code);
        assert_eq!(r.si(), "47 k");
        assert_eq!(r.min_si(), "42.3 k");
        assert_eq!(r.max_si(), "51.7 k");

        let r = Resistor::from_names(&["red", "red", "gold", "gold"]).unwrap();
        assert_eq!(r.resistance(), dec!(2.2));
    }

    #[test]
    fn test_from_code_errors() {
        assert!(matches!(
            Resistor::from_names(&["red", "red", "gold"]),
            Err(ResistorError::MalformedCode { .. })
        ));
        assert!(matches!(
            Resistor::from_names(&["red", "red", "gold", "pink"]),
            Err(ResistorError::MalformedCode { .. })
        ));
        assert!(matches!(
            Resistor::from_names(&["silver", "red", "gold", "gold"]),
            Err(ResistorError::UnknownColor { .. })
        ));
        assert!(matches!(
            Resistor::from_names(&["red", "red", "red", "red"]),
            Err(ResistorError::UnknownColor { .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        for value in [dec!(-1000), Decimal::ZERO, dec!(0.005), dec!(100000000000)] {
            assert!(
                matches!(
                    Resistor::with_default_tolerance(value),
                    Err(ResistorError::InvalidValue { .. })
                ),
                "Expected error for {value}"
            );
        }
        assert!(matches!(
            Resistor::from_f64(1000.0, 0.2),
            Err(ResistorError::UnknownTolerance { .. })
        ));
    }

    #[test]
    fn test_truncating_encode() {
        let r = resistor(dec!(1234));
        assert_eq!(r.resistance(), dec!(1234));
        assert_eq!(r.code().digits(), (1, 2));
        assert_eq!(code::decode(&r.code()).0, dec!(1200));
        assert!(!r.is_standard());
    }

    #[test]
    fn test_is_standard() {
        assert!(resistor(dec!(7500)).is_standard());
        assert!(!Resistor::new(dec!(7500), Tolerance::TenPercent)
            .unwrap()
            .is_standard());
        assert!(Resistor::new(dec!(4.7), Tolerance::TenPercent)
            .unwrap()
            .is_standard());
    }

    #[test]
    fn test_setters_recompute_everything() {
        let mut r = resistor(dec!(1000));

        r.set_resistance(dec!(2200)).unwrap();
        assert_eq!(r, resistor(dec!(2200)));
        assert_eq!(r.code().to_string(), "red-red-red-gold");
        assert_eq!(r.min_si(), "2.09 k");

        r.set_tolerance(Tolerance::TenPercent).unwrap();
        assert_eq!(r.code().to_string(), "red-red-red-silver");
        assert_eq!(r.min_resistance(), dec!(1980));
        assert_eq!(r.min_si(), "2.0 k");

        r.set_code("brown-black-blue-gold".parse().unwrap()).unwrap();
        assert_eq!(r.resistance(), dec!(10000000));
        assert_eq!(r.tolerance(), Tolerance::FivePercent);
        assert_eq!(r.si(), "10 M");
    }

    #[test]
    fn test_failed_set_leaves_value_intact() {
        let mut r = resistor(dec!(1000));
        let before = r.clone();
        assert!(r.set_resistance(dec!(-5)).is_err());
        assert_eq!(r, before);
    }

    #[test]
    fn test_with_builders_do_not_mutate() {
        let r = resistor(dec!(1000));
        let wider = r.with_tolerance(Tolerance::TenPercent).unwrap();
        assert_eq!(r.tolerance(), Tolerance::FivePercent);
        assert_eq!(wider.code().bands()[3], Band::Silver);
        assert_eq!(wider.min_si(), "0.9 k");
        assert_eq!(wider.max_si(), "1.1 k");
    }

    #[test]
    fn test_parse() {
        for (input, value, tolerance) in [
            ("4.7k", dec!(4700), Tolerance::FivePercent),
            ("4k7 10%", dec!(4700), Tolerance::TenPercent),
            ("4.7 k 10%", dec!(4700), Tolerance::TenPercent),
            ("1M gold", dec!(1000000), Tolerance::FivePercent),
            ("R47 silver", dec!(0.47), Tolerance::TenPercent),
            ("brown-black-red-gold", dec!(1000), Tolerance::FivePercent),
            ("yellow violet red silver", dec!(4700), Tolerance::TenPercent),
        ] {
            let r: Resistor = input.parse().unwrap();
            assert_eq!((r.resistance(), r.tolerance()), (value, tolerance), "{input}");
        }

        assert!(matches!(
            "4.7k 20%".parse::<Resistor>(),
            Err(ResistorError::UnknownTolerance { .. })
        ));
        assert!(matches!(
            "0".parse::<Resistor>(),
            Err(ResistorError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_try_from_tuple() {
        let r = Resistor::try_from((0.47, 0.05)).unwrap();
        assert_eq!(r.code().to_string(), "yellow-purple-silver-gold");
        assert_eq!(r.si(), "470 m");
        assert_eq!(r.min_si(), "446.50 m");
        assert_eq!(r.max_si(), "493.50 m");
    }

    #[test]
    fn test_below_one_tenth() {
        let r = resistor(dec!(0.05));
        assert_eq!(r.code().to_string(), "black-green-silver-gold");
        assert_eq!(r.si(), "50 m");
        assert_eq!(r.min_si(), "47.5 m");
        assert_eq!(r.max_si(), "52.5 m");
        assert!(!r.is_standard());

        let r = Resistor::from_names(&["black", "purple", "silver", "silver"]).unwrap();
        assert_eq!(r.resistance(), dec!(0.07));
        assert_eq!(r.tolerance(), Tolerance::TenPercent);
        assert_eq!(r.min_si(), "63.0 m");

        assert!(matches!(
            Resistor::from_names(&["black", "purple", "red", "gold"]),
            Err(ResistorError::MalformedCode { .. })
        ));
    }
}
