// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Structured summary of an enumeration run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::PitchSet;
use crate::search::Enumeration;

/// One accepted scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleEntry {
    /// 12-character pattern, degree 0 first
    pub pattern: String,
    /// Steps between consecutive pitches, closing back to the octave
    pub intervals: Vec<u8>,
}

impl From<&PitchSet> for ScaleEntry {
    fn from(scale: &PitchSet) -> Self {
        Self {
            pattern: scale.pattern(),
            intervals: scale.intervals(),
        }
    }
}

/// Everything a run found, in discovery order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumerationReport {
    pub pitches: usize,
    pub max_run: usize,
    pub total: usize,
    #[serde(default)]
    pub scales: Vec<ScaleEntry>,
}

impl EnumerationReport {
    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize report to YAML")
    }

    /// Parse a report back from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML report")
    }
}

impl From<&Enumeration> for EnumerationReport {
    fn from(run: &Enumeration) -> Self {
        Self {
            pitches: run.params().pitches(),
            max_run: run.params().max_run(),
            total: run.count(),
            scales: run.scales().iter().map(ScaleEntry::from).collect(),
        }
    }
}
