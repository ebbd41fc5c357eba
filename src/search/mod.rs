// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale search engine.
//!
//! This module provides:
//! - The recursive interval search with run-length pruning
//! - The fingerprint registry that keeps one mode per scale
//! - Sinks that receive accepted scales as they are found

pub mod builder;
pub mod registry;
pub mod sink;

pub use builder::{enumerate, enumerate_into, Enumeration, PartialScale, ScaleBuilder};
pub use registry::CanonicalRegistry;
pub use sink::{PatternWriter, ScaleSink};
