//! Pitch-name tokens, the entries of a pattern's event list.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How an altered pitch was spelled in its source token.
///
/// Sharp and flat only ever pair with a black-key pitch class; natural only
/// with a white-key class. Every constructor upholds this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Accidental {
    Natural,
    Sharp,
    Flat,
}

/// A single pitched event token, e.g. `"c4"`, `"f#3"`, `"eb5"`.
///
/// The grammar is a letter `a`-`g` (either case), an optional accidental
/// (`#` or `b`), and a mandatory octave digit `0`-`9`. Only the five standard
/// sharp spellings (`c# d# f# g# a#`) and five flat spellings
/// (`db eb gb ab bb`) are accepted, so enharmonic oddities like `"e#"` or
/// `"cb"` are rejected rather than guessed at.
///
/// The spelling is preserved: `"eb4"` and `"d#4"` name the same key yet stay
/// distinct values, and each displays back as written (lowercased).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Pitch {
    pitch_class: u8, // 0-11 chromatic, 0 = C
    octave: u8,      // scientific pitch notation, "c4" = middle C
    accidental: Accidental,
}

impl Pitch {
    /// Chromatic pitch class, 0-11 with 0 = C.
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    /// Octave in scientific pitch notation (4 is the middle-C octave).
    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// MIDI note number with `"c4"` = 60.
    ///
    /// The top of octave 9 exceeds the MIDI range, so anything above `"g9"`
    /// clamps to 127 the way sequencer backends do.
    pub fn midi(&self) -> u8 {
        let semitones = (self.octave as u16 + 1) * 12 + self.pitch_class as u16;
        semitones.min(127) as u8
    }

    fn natural_name(pitch_class: u8) -> &'static str {
        match pitch_class {
            0 => "c",
            2 => "d",
            4 => "e",
            5 => "f",
            7 => "g",
            9 => "a",
            11 => "b",
            _ => "",
        }
    }

    fn sharp_name(pitch_class: u8) -> &'static str {
        match pitch_class {
            1 => "c#",
            3 => "d#",
            6 => "f#",
            8 => "g#",
            10 => "a#",
            _ => "",
        }
    }

    fn flat_name(pitch_class: u8) -> &'static str {
        match pitch_class {
            1 => "db",
            3 => "eb",
            6 => "gb",
            8 => "ab",
            10 => "bb",
            _ => "",
        }
    }
}

impl FromStr for Pitch {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let err = || ValidationError::Pitch(s.to_string());

        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(err)?;
        let base = match letter.to_ascii_lowercase() {
            'c' => 0,
            'd' => 2,
            'e' => 4,
            'f' => 5,
            'g' => 7,
            'a' => 9,
            'b' => 11,
            _ => return Err(err()),
        };

        let rest: Vec<char> = chars.collect();
        let (accidental, octave_char) = match rest.as_slice() {
            [digit] => (Accidental::Natural, *digit),
            ['#', digit] => (Accidental::Sharp, *digit),
            ['b' | 'B', digit] => (Accidental::Flat, *digit),
            _ => return Err(err()),
        };

        let pitch_class = match accidental {
            Accidental::Natural => base,
            // Only the five standard sharps: c# d# f# g# a#
            Accidental::Sharp if matches!(base, 0 | 2 | 5 | 7 | 9) => base + 1,
            // Only the five standard flats: db eb gb ab bb
            Accidental::Flat if matches!(base, 2 | 4 | 7 | 9 | 11) => base - 1,
            _ => return Err(err()),
        };

        let octave = octave_char.to_digit(10).ok_or_else(err)? as u8;

        Ok(Pitch {
            pitch_class,
            octave,
            accidental,
        })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.accidental {
            Accidental::Natural => Self::natural_name(self.pitch_class),
            Accidental::Sharp => Self::sharp_name(self.pitch_class),
            Accidental::Flat => Self::flat_name(self.pitch_class),
        };
        write!(f, "{}{}", name, self.octave)
    }
}

impl TryFrom<String> for Pitch {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naturals() {
        let pitch = "c4".parse::<Pitch>().unwrap();
        assert_eq!(pitch.pitch_class(), 0);
        assert_eq!(pitch.octave(), 4);

        assert_eq!("a0".parse::<Pitch>().unwrap().pitch_class(), 9);
        assert_eq!("g9".parse::<Pitch>().unwrap().octave(), 9);
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!("c#4".parse::<Pitch>().unwrap().pitch_class(), 1);
        assert_eq!("eb4".parse::<Pitch>().unwrap().pitch_class(), 3);
        assert_eq!("bb2".parse::<Pitch>().unwrap().pitch_class(), 10);
        assert_eq!("f#3".parse::<Pitch>().unwrap().pitch_class(), 6);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "C4".parse::<Pitch>().unwrap(),
            "c4".parse::<Pitch>().unwrap()
        );
        assert_eq!(
            "EB4".parse::<Pitch>().unwrap(),
            "eb4".parse::<Pitch>().unwrap()
        );
    }

    #[test]
    fn test_invalid_pitches() {
        // No octave digit, unknown letters, nonstandard enharmonics,
        // multi-digit octaves
        for token in ["", "c", "h4", "c#", "e#4", "b#3", "cb4", "fb2", "c10", "c-1", "4c", "c4x"] {
            let result = token.parse::<Pitch>();
            assert!(
                matches!(result, Err(ValidationError::Pitch(_))),
                "expected '{}' to be rejected, got {:?}",
                token,
                result
            );
        }
    }

    #[test]
    fn test_midi_numbers() {
        assert_eq!("c4".parse::<Pitch>().unwrap().midi(), 60); // middle C
        assert_eq!("a4".parse::<Pitch>().unwrap().midi(), 69);
        assert_eq!("c0".parse::<Pitch>().unwrap().midi(), 12);
        assert_eq!("g9".parse::<Pitch>().unwrap().midi(), 127);
    }

    #[test]
    fn test_midi_clamps_above_range() {
        assert_eq!("g#9".parse::<Pitch>().unwrap().midi(), 127);
        assert_eq!("b9".parse::<Pitch>().unwrap().midi(), 127);
    }

    #[test]
    fn test_spelling_is_preserved() {
        let flat = "eb4".parse::<Pitch>().unwrap();
        let sharp = "d#4".parse::<Pitch>().unwrap();
        // Same key on the keyboard...
        assert_eq!(flat.pitch_class(), sharp.pitch_class());
        assert_eq!(flat.midi(), sharp.midi());
        // ...but distinct spellings that each display as written
        assert_ne!(flat, sharp);
        assert_eq!(flat.to_string(), "eb4");
        assert_eq!(sharp.to_string(), "d#4");
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["c4", "f#3", "eb5", "b0", "a#9"] {
            let pitch = token.parse::<Pitch>().unwrap();
            assert_eq!(pitch.to_string(), token);
            assert_eq!(pitch.to_string().parse::<Pitch>().unwrap(), pitch);
        }
    }

    #[test]
    fn test_display_lowercases() {
        assert_eq!("C4".parse::<Pitch>().unwrap().to_string(), "c4");
        assert_eq!("Db5".parse::<Pitch>().unwrap().to_string(), "db5");
    }
}
