use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uom::si::f64::{Length, Time};
use uom::si::length::{angstrom, centimeter, meter, micrometer, millimeter, nanometer};
use uom::si::time::{day, hour, millisecond, minute, second};

use crate::error::{RainbowError, Result};

/// Physical dimension measured by a [`Unit`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    /// Wavelength-like axes
    Length,
    /// Time-like axes
    Time,
}

/// Display units accepted for wavelength and time axes
///
/// Units parse case-insensitively from their common spellings (`"micron"`,
/// `"um"`, `"µm"` all name [`Unit::Micron`]) and display as their symbol.
///
/// ```rust
/// use chromatic_rainbow::Unit;
///
/// let unit: Unit = "micron".parse().unwrap();
/// assert_eq!(unit, Unit::Micron);
/// assert_eq!(unit.to_string(), "µm");
/// ```
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Unit {
    #[strum(to_string = "Å", serialize = "angstrom", serialize = "AA", serialize = "A")]
    Angstrom,
    #[strum(to_string = "nm", serialize = "nanometer", serialize = "nanometre")]
    Nanometer,
    #[strum(
        to_string = "µm",
        serialize = "micron",
        serialize = "micrometer",
        serialize = "micrometre",
        serialize = "um"
    )]
    Micron,
    #[strum(to_string = "mm", serialize = "millimeter", serialize = "millimetre")]
    Millimeter,
    #[strum(to_string = "cm", serialize = "centimeter", serialize = "centimetre")]
    Centimeter,
    #[strum(to_string = "m", serialize = "meter", serialize = "metre")]
    Meter,
    #[strum(to_string = "ms", serialize = "millisecond")]
    Millisecond,
    #[strum(to_string = "s", serialize = "second", serialize = "sec")]
    Second,
    #[strum(to_string = "min", serialize = "minute")]
    Minute,
    #[strum(to_string = "h", serialize = "hour", serialize = "hr")]
    Hour,
    #[strum(to_string = "d", serialize = "day")]
    Day,
}

impl Unit {
    /// Parse a unit, mapping failures onto [`RainbowError::InvalidUnit`]
    pub fn parse(s: &str) -> Result<Self> {
        s.trim()
            .parse::<Unit>()
            .map_err(|_| RainbowError::invalid_unit(s))
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Angstrom
            | Unit::Nanometer
            | Unit::Micron
            | Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter => Dimension::Length,
            Unit::Millisecond | Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => {
                Dimension::Time
            }
        }
    }

    /// Whether values in `self` can be expressed in `other`
    pub fn is_convertible_to(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Fail with [`RainbowError::UnitConversion`] unless `self` converts to `to`
    pub fn ensure_convertible(&self, to: Unit) -> Result<()> {
        if self.is_convertible_to(&to) {
            Ok(())
        } else {
            Err(self.conversion_error(to))
        }
    }

    fn to_length(self, value: f64) -> Option<Length> {
        Some(match self {
            Unit::Angstrom => Length::new::<angstrom>(value),
            Unit::Nanometer => Length::new::<nanometer>(value),
            Unit::Micron => Length::new::<micrometer>(value),
            Unit::Millimeter => Length::new::<millimeter>(value),
            Unit::Centimeter => Length::new::<centimeter>(value),
            Unit::Meter => Length::new::<meter>(value),
            _ => return None,
        })
    }

    fn value_of_length(self, length: Length) -> Option<f64> {
        Some(match self {
            Unit::Angstrom => length.get::<angstrom>(),
            Unit::Nanometer => length.get::<nanometer>(),
            Unit::Micron => length.get::<micrometer>(),
            Unit::Millimeter => length.get::<millimeter>(),
            Unit::Centimeter => length.get::<centimeter>(),
            Unit::Meter => length.get::<meter>(),
            _ => return None,
        })
    }

    fn to_time(self, value: f64) -> Option<Time> {
        Some(match self {
            Unit::Millisecond => Time::new::<millisecond>(value),
            Unit::Second => Time::new::<second>(value),
            Unit::Minute => Time::new::<minute>(value),
            Unit::Hour => Time::new::<hour>(value),
            Unit::Day => Time::new::<day>(value),
            _ => return None,
        })
    }

    fn value_of_time(self, time: Time) -> Option<f64> {
        Some(match self {
            Unit::Millisecond => time.get::<millisecond>(),
            Unit::Second => time.get::<second>(),
            Unit::Minute => time.get::<minute>(),
            Unit::Hour => time.get::<hour>(),
            Unit::Day => time.get::<day>(),
            _ => return None,
        })
    }

    fn conversion_error(self, to: Unit) -> RainbowError {
        RainbowError::UnitConversion {
            from: self.to_string(),
            to: to.to_string(),
            from_dimension: self.dimension(),
            to_dimension: to.dimension(),
        }
    }
}

/// Convert `value` from one unit to another
///
/// Fails with [`RainbowError::UnitConversion`] when the two units measure
/// different dimensions; there is no implicit coercion between them.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64> {
    if from == to {
        return Ok(value);
    }
    let converted = match (from.dimension(), to.dimension()) {
        (Dimension::Length, Dimension::Length) => {
            from.to_length(value).and_then(|l| to.value_of_length(l))
        }
        (Dimension::Time, Dimension::Time) => from.to_time(value).and_then(|t| to.value_of_time(t)),
        _ => None,
    };
    converted.ok_or_else(|| from.conversion_error(to))
}

/// Convert a slice of values, failing on the first incompatible pair
pub fn convert_all(values: &[f64], from: Unit, to: Unit) -> Result<Vec<f64>> {
    from.ensure_convertible(to)?;
    values.iter().map(|&v| convert(v, from, to)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Unit::parse("micron").unwrap(), Unit::Micron);
        assert_eq!(Unit::parse("um").unwrap(), Unit::Micron);
        assert_eq!(Unit::parse("µm").unwrap(), Unit::Micron);
        assert_eq!(Unit::parse("NM").unwrap(), Unit::Nanometer);
        assert_eq!(Unit::parse("day").unwrap(), Unit::Day);
        assert_eq!(Unit::parse(" s ").unwrap(), Unit::Second);
        assert_eq!(Unit::parse("min").unwrap(), Unit::Minute);
        assert_eq!(Unit::parse("m").unwrap(), Unit::Meter);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = Unit::parse("parsec-ish").unwrap_err();
        assert!(matches!(err, RainbowError::InvalidUnit { .. }));
    }

    #[test]
    fn test_every_display_symbol_parses_back() {
        for unit in Unit::iter() {
            assert_eq!(Unit::parse(&unit.to_string()).unwrap(), unit);
        }
    }

    #[test]
    fn test_length_conversion() {
        assert_relative_eq!(
            convert(1.0, Unit::Micron, Unit::Nanometer).unwrap(),
            1000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(5000.0, Unit::Angstrom, Unit::Micron).unwrap(),
            0.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(2.5, Unit::Centimeter, Unit::Millimeter).unwrap(),
            25.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_time_conversion() {
        assert_relative_eq!(
            convert(1.0, Unit::Day, Unit::Hour).unwrap(),
            24.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(90.0, Unit::Minute, Unit::Hour).unwrap(),
            1.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(1500.0, Unit::Millisecond, Unit::Second).unwrap(),
            1.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_incompatible_dimensions() {
        let err = convert(1.0, Unit::Day, Unit::Micron).unwrap_err();
        assert_eq!(
            err,
            RainbowError::UnitConversion {
                from: "d".to_string(),
                to: "µm".to_string(),
                from_dimension: Dimension::Time,
                to_dimension: Dimension::Length,
            }
        );
        assert!(convert_all(&[1.0, 2.0], Unit::Nanometer, Unit::Second).is_err());
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        assert_eq!(convert(0.123456789, Unit::Day, Unit::Day).unwrap(), 0.123456789);
    }
}
