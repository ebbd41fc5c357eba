// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class model for scale enumeration.
//!
//! This module provides the 12-flag scale pattern and the rotation
//! fingerprints used to recognise two patterns as modes of one scale.

pub mod pitch_set;

pub use pitch_set::{Fingerprint, PitchSet, FINGERPRINT_SPACE, LEADING_TONE, OCTAVE, SEMITONE};
