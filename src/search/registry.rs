// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Seen-table for scale fingerprints.
//!
//! Every fingerprint of every accepted scale is marked here, so a later
//! candidate that is only a mode of an accepted scale is recognised from
//! its own degree-0 fingerprint alone.

use crate::music::{Fingerprint, PitchSet, FINGERPRINT_SPACE};

/// Direct-indexed table of fingerprints already claimed by an accepted scale
#[derive(Debug, Clone)]
pub struct CanonicalRegistry {
    seen: Box<[bool; FINGERPRINT_SPACE]>,
}

impl CanonicalRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            seen: Box::new([false; FINGERPRINT_SPACE]),
        }
    }

    /// Check whether a fingerprint has been marked
    pub fn is_seen(&self, fingerprint: Fingerprint) -> bool {
        self.seen[fingerprint.index()]
    }

    /// Mark the fingerprint of every mode of `scale`
    pub fn mark_all_rotations(&mut self, scale: &PitchSet) {
        for mode in scale.active_degrees() {
            if let Some(fingerprint) = scale.fingerprint(mode) {
                self.seen[fingerprint.index()] = true;
            }
        }
    }

    /// Accept `scale` if none of its modes has been seen yet.
    ///
    /// On acceptance every rotation is marked before returning, so the
    /// check and the mark happen as one step.
    pub fn try_accept(&mut self, scale: &PitchSet) -> bool {
        match scale.fingerprint(0) {
            Some(fingerprint) if !self.is_seen(fingerprint) => {
                self.mark_all_rotations(scale);
                true
            }
            _ => false,
        }
    }

    /// Number of fingerprints marked so far
    pub fn seen_count(&self) -> usize {
        self.seen.iter().filter(|&&seen| seen).count()
    }

    /// Forget everything, ready for a new run
    pub fn reset(&mut self) {
        self.seen.fill(false);
    }
}

impl Default for CanonicalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
