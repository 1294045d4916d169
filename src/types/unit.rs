//! The base duration token of a pattern.

use std::fmt;
use std::str::FromStr;

use num_rational::Ratio;

use crate::error::ValidationError;

/// Parse a `"n/d"` token with both parts positive.
///
/// Returns the reduced ratio, or `None` when the token is not a well-formed
/// positive fraction. Interior whitespace is not accepted.
pub(crate) fn parse_ratio_token(token: &str) -> Option<Ratio<u32>> {
    let (numer, denom) = token.split_once('/')?;
    let numer: u32 = numer.parse().ok()?;
    let denom: u32 = denom.parse().ok()?;
    if numer == 0 || denom == 0 {
        return None;
    }
    Some(Ratio::new(numer, denom))
}

/// The base duration one pattern step is measured in.
///
/// Either an exact fraction of a whole note (`"1/8"` is an eighth note,
/// `"3/16"` a dotted eighth) or one of the symbolic durations the hosting
/// sequencer resolves against its own time base (`"ms"`, `"seconds"`,
/// `"beats"`, `"bars"`).
///
/// Fractions are kept in reduced form, so `"2/4"` and `"1/2"` parse to the
/// same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Unit {
    /// Fraction of a whole note.
    Fraction(Ratio<u32>),
    /// Milliseconds of wall-clock time.
    Ms,
    /// Seconds of wall-clock time.
    Seconds,
    /// Beats of the hosting time base.
    Beats,
    /// Bars of the hosting time base.
    Bars,
}

impl Unit {
    /// The whole-note fraction, or `None` for symbolic units.
    pub fn fraction(&self) -> Option<Ratio<u32>> {
        match self {
            Unit::Fraction(ratio) => Some(*ratio),
            _ => None,
        }
    }

    /// Whether this unit is a symbolic duration rather than a fraction.
    pub fn is_symbolic(&self) -> bool {
        !matches!(self, Unit::Fraction(_))
    }

    // `Fraction` values can be built by hand, so records re-check them on
    // assembly.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if let Unit::Fraction(ratio) = self {
            if *ratio.numer() == 0 || *ratio.denom() == 0 {
                return Err(ValidationError::Unit(self.to_string()));
            }
        }
        Ok(())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_lowercase().as_str() {
            "ms" => Ok(Unit::Ms),
            "seconds" => Ok(Unit::Seconds),
            "beats" => Ok(Unit::Beats),
            "bars" => Ok(Unit::Bars),
            _ => parse_ratio_token(token)
                .map(Unit::Fraction)
                .ok_or_else(|| ValidationError::Unit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Fraction(ratio) => write!(f, "{}/{}", ratio.numer(), ratio.denom()),
            Unit::Ms => write!(f, "ms"),
            Unit::Seconds => write!(f, "seconds"),
            Unit::Beats => write!(f, "beats"),
            Unit::Bars => write!(f, "bars"),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.to_string()
    }
}
