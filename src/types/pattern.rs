//! The pattern record: a unit, a resolution, and an ordered event list.

use crate::error::ValidationError;
use crate::types::pitch::Pitch;
use crate::types::resolution::Resolution;
use crate::types::unit::Unit;

/// An immutable rhythmic fragment: which pitches sound within one duration
/// unit, and how that unit is subdivided.
///
/// Construction is the record's whole lifecycle. Every field is validated
/// once, up front, and a `Pattern` that exists is a `Pattern` that is valid;
/// afterwards it is read-only configuration for whatever scheduler or
/// sequencer consumes it.
///
/// ```
/// use hemiola::Pattern;
///
/// let pattern = Pattern::from_tokens("1/8", 2.0 / 3.0, &["c4", "e4", "g4"])?;
/// assert_eq!(pattern.unit().to_string(), "1/8");
/// assert_eq!(pattern.event().len(), 3);
/// # Ok::<(), hemiola::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PatternSchema")
)]
pub struct Pattern {
    unit: Unit,
    resolution: Resolution,
    event: Vec<Pitch>,
}

impl Pattern {
    /// Assemble a record from already-typed parts.
    ///
    /// Enum values can be built by hand, so the parts are re-validated here;
    /// a record never holds a zero fraction or non-positive resolution.
    /// Fails with the first offending field.
    pub fn new(
        unit: Unit,
        resolution: Resolution,
        event: Vec<Pitch>,
    ) -> Result<Self, ValidationError> {
        unit.validate()?;
        resolution.validate()?;
        if event.is_empty() {
            return Err(ValidationError::EmptyEvent);
        }
        Ok(Pattern {
            unit,
            resolution,
            event,
        })
    }

    /// Build a record from source-form tokens.
    ///
    /// `resolution` takes either a plain number (`2.0 / 3.0`) or a ratio
    /// token (`"5/4"`), matching the two forms the serialized schema accepts.
    ///
    /// # Arguments
    /// * `unit` - duration token, e.g. `"1/8"` or `"beats"`
    /// * `resolution` - subdivision factor, numeric or `"n/d"`
    /// * `event` - pitch tokens in playing order, e.g. `&["c4", "e4", "g4"]`
    pub fn from_tokens<R>(
        unit: &str,
        resolution: R,
        event: &[&str],
    ) -> Result<Self, ValidationError>
    where
        R: TryInto<Resolution, Error = ValidationError>,
    {
        let unit = unit.parse()?;
        let resolution = resolution.try_into()?;
        let event = event
            .iter()
            .map(|token| token.parse::<Pitch>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(unit, resolution, event)
    }

    /// The base duration one step of this pattern occupies.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The subdivision factor applied within one unit.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The pitches sounded within one unit, in playing order. Never empty.
    pub fn event(&self) -> &[Pitch] {
        &self.event
    }
}

/// Raw serialized shape of a record.
///
/// Deserialization funnels through [`Pattern::new`], so a loaded record
/// passes exactly the same validation as a constructed one. A missing
/// `resolution` falls back to unity.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PatternSchema {
    unit: Unit,
    #[serde(default)]
    resolution: Resolution,
    event: Vec<Pitch>,
}

#[cfg(feature = "serde")]
impl TryFrom<PatternSchema> for Pattern {
    type Error = ValidationError;

    fn try_from(schema: PatternSchema) -> Result<Self, Self::Error> {
        Pattern::new(schema.unit, schema.resolution, schema.event)
    }
}
