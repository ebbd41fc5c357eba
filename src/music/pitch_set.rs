// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class sets and their rotation fingerprints.
//!
//! A [`PitchSet`] is the raw 12-flag pattern of a scale, read from degree 0
//! upward. A [`Fingerprint`] packs that pattern, viewed from one of its
//! active degrees, into a 12-bit number usable as a direct table index.

use std::fmt;

/// Number of pitch classes in an octave
pub const OCTAVE: usize = 12;

/// Interval of a single chromatic step
pub const SEMITONE: usize = 1;

/// The degree just below the octave; activating it borders the wrap to degree 0
pub const LEADING_TONE: usize = 11;

/// Number of distinct fingerprints (2^12)
pub const FINGERPRINT_SPACE: usize = 1 << OCTAVE;

/// Twelve on/off flags, one per pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchSet {
    pitch_classes: [bool; OCTAVE],
}

impl PitchSet {
    /// The one-pitch scale containing only degree 0
    pub fn root() -> Self {
        let mut pitch_classes = [false; OCTAVE];
        pitch_classes[0] = true;
        Self { pitch_classes }
    }

    /// Build a scale from the degrees it contains.
    ///
    /// Returns `None` if a degree is outside 0..12 or degree 0 is missing.
    pub fn from_degrees(degrees: &[u8]) -> Option<Self> {
        let mut pitch_classes = [false; OCTAVE];
        for &degree in degrees {
            *pitch_classes.get_mut(degree as usize)? = true;
        }
        pitch_classes[0].then_some(Self { pitch_classes })
    }

    /// Parse a printed pattern such as `"101011010101"`
    pub fn from_pattern(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != OCTAVE {
            return None;
        }
        let mut pitch_classes = [false; OCTAVE];
        for (flag, ch) in pitch_classes.iter_mut().zip(s.chars()) {
            *flag = match ch {
                '1' => true,
                '0' => false,
                _ => return None,
            };
        }
        pitch_classes[0].then_some(Self { pitch_classes })
    }

    /// Check whether a pitch class is part of the scale
    pub fn is_active(&self, pitch_class: usize) -> bool {
        self.pitch_classes[pitch_class % OCTAVE]
    }

    pub(crate) fn activate(&mut self, pitch_class: usize) {
        self.pitch_classes[pitch_class] = true;
    }

    /// Number of active pitch classes
    pub fn active_count(&self) -> usize {
        self.pitch_classes.iter().filter(|&&on| on).count()
    }

    /// Active degrees in ascending order
    pub fn active_degrees(&self) -> impl Iterator<Item = usize> + '_ {
        (0..OCTAVE).filter(move |&pc| self.pitch_classes[pc])
    }

    /// Fingerprint of the pattern read from `offset`, wrapping past degree 11.
    ///
    /// The flag at `offset` weighs 2^0, the next one 2^1, and so on. An
    /// inactive offset is not a valid mode root and yields `None`.
    pub fn fingerprint(&self, offset: usize) -> Option<Fingerprint> {
        if !self.is_active(offset) {
            return None;
        }
        let bits = (0..OCTAVE)
            .filter(|&degree| self.is_active(offset + degree))
            .fold(0u16, |acc, degree| acc | (1 << degree));
        Some(Fingerprint(bits))
    }

    /// The mode starting on `offset`, renormalized so that `offset` becomes degree 0
    pub fn rotate(&self, offset: usize) -> Option<PitchSet> {
        self.fingerprint(offset).map(Fingerprint::to_pitch_set)
    }

    /// Every mode of this scale, one per active degree, in degree order
    pub fn rotations(&self) -> Vec<PitchSet> {
        self.active_degrees()
            .filter_map(|offset| self.rotate(offset))
            .collect()
    }

    /// Step sizes between consecutive active degrees, including the step
    /// from the highest degree back up to the octave.
    pub fn intervals(&self) -> Vec<u8> {
        let degrees: Vec<usize> = self.active_degrees().collect();
        degrees
            .iter()
            .zip(degrees.iter().skip(1).chain(std::iter::once(&OCTAVE)))
            .map(|(&from, &to)| (to - from) as u8)
            .collect()
    }

    /// Longest run of semitone steps around the circle.
    ///
    /// Runs crossing from degree 11 back to degree 0 are counted whole. The
    /// full chromatic set closes on itself and reports 12.
    pub fn longest_semitone_run(&self) -> usize {
        let Some(gap) = (0..OCTAVE).find(|&pc| !self.pitch_classes[pc]) else {
            return OCTAVE;
        };

        let mut longest = 0;
        let mut run_notes = 0;
        for step in 1..=OCTAVE {
            if self.is_active(gap + step) {
                run_notes += 1;
                longest = longest.max(run_notes - 1);
            } else {
                run_notes = 0;
            }
        }
        longest
    }

    /// The printed form: one `'1'`/`'0'` per degree, 0 through 11
    pub fn pattern(&self) -> String {
        self.pitch_classes
            .iter()
            .map(|&on| if on { '1' } else { '0' })
            .collect()
    }
}

impl Default for PitchSet {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

/// A 12-bit encoding of a scale viewed from one of its active degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u16);

impl Fingerprint {
    /// Raw value in 0..4096
    pub fn value(self) -> u16 {
        self.0
    }

    /// Table slot for this fingerprint
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Decode back into the scale whose degree-0 view this is
    pub fn to_pitch_set(self) -> PitchSet {
        let mut pitch_classes = [false; OCTAVE];
        for (degree, flag) in pitch_classes.iter_mut().enumerate() {
            *flag = self.0 & (1 << degree) != 0;
        }
        PitchSet { pitch_classes }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
