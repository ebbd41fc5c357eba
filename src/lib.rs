// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enumeration of 12-tone scales.
//!
//! Lists every scale with a given number of pitches whose chromatic runs,
//! including runs that wrap past the octave, stay under a limit. Each scale
//! is reported once no matter how many of its modes the search reaches.

pub mod config;
pub mod error;
pub mod music;
pub mod report;
pub mod search;

pub use config::{QueryFile, SearchParams};
pub use error::{Error, Result};
pub use music::{Fingerprint, PitchSet};
pub use report::{EnumerationReport, ScaleEntry};
pub use search::{
    enumerate, enumerate_into, CanonicalRegistry, Enumeration, PartialScale, PatternWriter,
    ScaleBuilder, ScaleSink,
};
