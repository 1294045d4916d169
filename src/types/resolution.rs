//! The subdivision factor applied within one pattern unit.

use std::fmt;
use std::str::FromStr;

use num_rational::Ratio;

use crate::error::ValidationError;
use crate::types::unit::parse_ratio_token;

/// How densely events subdivide one [`Unit`](crate::types::Unit).
///
/// A resolution of `2/3` squeezes events into two thirds of the unit for a
/// triplet feel; `5/4` stretches them for a quintuplet-over-four feel; `1`
/// leaves the unit evenly divided.
///
/// The record keeps whichever source form it was given: a plain number stays
/// [`Resolution::Numeric`], a `"n/d"` token stays [`Resolution::Ratio`] as an
/// exact rational. The two forms are interchangeable under
/// [`as_f64`](Resolution::as_f64) (`1.25` and `"5/4"` resolve to the same
/// factor) but compare unequal, so each serialized form round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Plain numeric factor, e.g. `0.5` or `2.0 / 3.0`.
    Numeric(f64),
    /// Exact ratio parsed from a `"n/d"` token.
    Ratio(Ratio<u32>),
}

impl Resolution {
    /// Create a numeric resolution. The factor must be finite and positive.
    pub fn numeric(factor: f64) -> Result<Self, ValidationError> {
        let resolution = Resolution::Numeric(factor);
        resolution.validate()?;
        Ok(resolution)
    }

    /// Create an exact ratio resolution. Both parts must be positive.
    pub fn ratio(numer: u32, denom: u32) -> Result<Self, ValidationError> {
        if numer == 0 || denom == 0 {
            return Err(ValidationError::Resolution(format!("{}/{}", numer, denom)));
        }
        Ok(Resolution::Ratio(Ratio::new(numer, denom)))
    }

    /// Resolve either form to its numeric subdivision factor.
    pub fn as_f64(&self) -> f64 {
        match self {
            Resolution::Numeric(factor) => *factor,
            Resolution::Ratio(ratio) => *ratio.numer() as f64 / *ratio.denom() as f64,
        }
    }

    // Variants can be built directly, so records re-check them on assembly.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let positive = match self {
            Resolution::Numeric(factor) => factor.is_finite() && *factor > 0.0,
            Resolution::Ratio(ratio) => *ratio.numer() != 0 && *ratio.denom() != 0,
        };
        if positive {
            Ok(())
        } else {
            Err(ValidationError::Resolution(self.to_string()))
        }
    }
}

impl Default for Resolution {
    /// Unity: the unit is divided evenly among its events.
    fn default() -> Self {
        Resolution::Numeric(1.0)
    }
}

impl FromStr for Resolution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ratio_token(s.trim())
            .map(Resolution::Ratio)
            .ok_or_else(|| ValidationError::Resolution(s.to_string()))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Numeric(factor) => write!(f, "{}", factor),
            Resolution::Ratio(ratio) => write!(f, "{}/{}", ratio.numer(), ratio.denom()),
        }
    }
}

impl TryFrom<f64> for Resolution {
    type Error = ValidationError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Resolution::numeric(factor)
    }
}

impl TryFrom<&str> for Resolution {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Resolution::Numeric(factor) => serializer.serialize_f64(*factor),
            Resolution::Ratio(_) => serializer.collect_str(self),
        }
    }
}

#[cfg(feature = "serde")]
struct ResolutionVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ResolutionVisitor {
    type Value = Resolution;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a positive number or a \"n/d\" ratio token")
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Resolution::numeric(value).map_err(serde::de::Error::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_f64(value as f64)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_f64(value as f64)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ResolutionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_constructor() {
        assert_eq!(Resolution::numeric(0.5).unwrap(), Resolution::Numeric(0.5));
        assert!(matches!(
            Resolution::numeric(0.0),
            Err(ValidationError::Resolution(_))
        ));
        assert!(Resolution::numeric(-1.5).is_err());
        assert!(Resolution::numeric(f64::NAN).is_err());
        assert!(Resolution::numeric(f64::INFINITY).is_err());
    }

    #[test]
    fn test_ratio_constructor() {
        assert_eq!(
            Resolution::ratio(5, 4).unwrap(),
            Resolution::Ratio(Ratio::new(5, 4))
        );
        assert!(Resolution::ratio(0, 4).is_err());
        assert!(Resolution::ratio(5, 0).is_err());
    }

    #[test]
    fn test_parse_ratio_tokens() {
        assert_eq!(
            "5/4".parse::<Resolution>().unwrap(),
            Resolution::Ratio(Ratio::new(5, 4))
        );
        assert_eq!(
            "2/3".parse::<Resolution>().unwrap(),
            Resolution::Ratio(Ratio::new(2, 3))
        );
        for token in ["", "fast", "0/3", "3/0", "1.5", "5/"] {
            assert!(
                matches!(token.parse::<Resolution>(), Err(ValidationError::Resolution(_))),
                "expected '{}' to be rejected",
                token
            );
        }
    }

    #[test]
    fn test_forms_are_equivalent_under_as_f64() {
        let numeric = Resolution::numeric(1.25).unwrap();
        let ratio = "5/4".parse::<Resolution>().unwrap();
        assert_eq!(numeric.as_f64(), ratio.as_f64());
        // ...but stay structurally distinct
        assert_ne!(numeric, ratio);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Resolution::numeric(0.5).unwrap().as_f64(), 0.5);
        assert_eq!(Resolution::ratio(2, 3).unwrap().as_f64(), 2.0 / 3.0);
    }

    #[test]
    fn test_default_is_unity() {
        assert_eq!(Resolution::default().as_f64(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::numeric(0.5).unwrap().to_string(), "0.5");
        assert_eq!(Resolution::ratio(5, 4).unwrap().to_string(), "5/4");
    }

    #[test]
    fn test_validate_rejects_raw_variants() {
        assert!(Resolution::Numeric(-2.0).validate().is_err());
        assert!(Resolution::Ratio(Ratio::new_raw(0, 4)).validate().is_err());
        assert!(Resolution::Numeric(1.0).validate().is_ok());
    }
}
