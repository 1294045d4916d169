//! # Hemiola
//!
//! Immutable, validated pattern records: a base note [`Unit`], a swing
//! [`Resolution`] factor, and an ordered list of [`Pitch`] events. A record
//! describes how pitches subdivide one duration unit and nothing more; the
//! schedulers and synths that play it live elsewhere and treat it as
//! read-only configuration.
//!
//! ## Features
//!
//! - **serde** (default): records serialize as `{ unit, resolution, event }`
//!   and every deserialization passes the same validation as construction
//!
//! ## Example
//!
//! ```
//! use hemiola::Pattern;
//!
//! // An eighth-note triplet arpeggio
//! let pattern = Pattern::from_tokens("1/8", 2.0 / 3.0, &["c4", "e4", "g4"])?;
//!
//! assert_eq!(pattern.unit().to_string(), "1/8");
//! assert_eq!(pattern.event().len(), 3);
//! assert_eq!(pattern.event()[0].midi(), 60);
//! # Ok::<(), hemiola::ValidationError>(())
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::ValidationError;
pub use types::{Pattern, Pitch, Resolution, Unit};
