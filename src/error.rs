// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for scale enumeration.

use std::io;

use thiserror::Error;

/// Errors raised before or while enumerating scales
#[derive(Debug, Error)]
pub enum Error {
    /// Scales hold between 1 and 12 pitches
    #[error("pitch count must be between 1 and 12, got {0}")]
    PitchCountOutOfRange(i64),

    /// The semitone run limit cannot be negative
    #[error("max semitone run must be zero or more, got {0}")]
    NegativeRunLimit(i64),

    /// An argument was not a whole number
    #[error("{name} must be a whole number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    /// Writing an accepted scale failed
    #[error("failed to write scale: {0}")]
    Output(#[from] io::Error),
}

/// Result alias for enumeration operations
pub type Result<T> = std::result::Result<T, Error>;
