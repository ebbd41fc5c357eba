// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Branch-and-bound search over interval choices.
//!
//! A scale is grown from degree 0 by repeatedly choosing the interval to the
//! next active pitch. Branches whose chromatic run would reach the limit are
//! pruned before they are explored, and each complete candidate is checked
//! against the [`CanonicalRegistry`] so only one mode of every scale is kept.

use std::io;

use tracing::{debug, info, trace};

use super::registry::CanonicalRegistry;
use super::sink::ScaleSink;
use crate::config::SearchParams;
use crate::music::{PitchSet, LEADING_TONE, OCTAVE, SEMITONE};

/// A scale under construction, forked by value at every branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialScale {
    pitch_set: PitchSet,
    /// Most recently activated degree
    frontier: usize,
    /// Semitone steps in the run ending at `frontier`
    run_length: usize,
    /// Semitone steps in the run starting at degree 0
    leading_run: usize,
    has_jumped: bool,
}

impl PartialScale {
    /// The one-pitch scale {0}
    pub fn new() -> Self {
        Self {
            pitch_set: PitchSet::root(),
            frontier: 0,
            run_length: 0,
            leading_run: 0,
            has_jumped: false,
        }
    }

    pub fn pitch_set(&self) -> &PitchSet {
        &self.pitch_set
    }

    pub fn frontier(&self) -> usize {
        self.frontier
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn leading_run(&self) -> usize {
        self.leading_run
    }

    pub fn has_jumped(&self) -> bool {
        self.has_jumped
    }

    /// Largest interval that still leaves one degree for each remaining pitch
    pub fn max_interval(&self, pitches_remaining: usize) -> usize {
        OCTAVE - self.frontier - pitches_remaining
    }

    /// Check whether stepping up by `interval` would make a run of `max_run` or more.
    ///
    /// A semitone extends the trailing run. Landing on the leading tone joins
    /// the scale's end to the run at degree 0. When both happen the two
    /// contributions are added together.
    pub fn violates(&self, interval: usize, max_run: usize) -> bool {
        let mut adjusted = 0;
        if interval == SEMITONE {
            adjusted += self.run_length + 1;
        }
        if self.frontier + interval == LEADING_TONE {
            adjusted += self.leading_run + 1;
        }
        adjusted >= max_run
    }

    /// Fork with the next pitch `interval` semitones above the frontier
    pub fn advance(mut self, interval: usize) -> Self {
        self.frontier += interval;
        self.pitch_set.activate(self.frontier);
        if interval == SEMITONE {
            self.run_length += 1;
            if !self.has_jumped {
                self.leading_run += 1;
            }
        } else {
            // leading_run stays frozen from here on
            self.run_length = 0;
            self.has_jumped = true;
        }
        self
    }
}

impl Default for PartialScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one enumeration run against a registry and a sink
pub struct ScaleBuilder<'a, S: ScaleSink> {
    max_run: usize,
    registry: &'a mut CanonicalRegistry,
    sink: &'a mut S,
}

impl<'a, S: ScaleSink> ScaleBuilder<'a, S> {
    pub fn new(max_run: usize, registry: &'a mut CanonicalRegistry, sink: &'a mut S) -> Self {
        Self {
            max_run,
            registry,
            sink,
        }
    }

    /// Count the distinct scales reachable from `scale` with
    /// `pitches_remaining` pitches still to place.
    pub fn search(&mut self, scale: PartialScale, pitches_remaining: usize) -> io::Result<usize> {
        if pitches_remaining == 0 {
            return self.complete(scale.pitch_set());
        }

        let mut found = 0;
        for interval in SEMITONE..=scale.max_interval(pitches_remaining) {
            if scale.violates(interval, self.max_run) {
                trace!(frontier = scale.frontier, interval, "pruned");
                continue;
            }
            found += self.search(scale.advance(interval), pitches_remaining - 1)?;
        }
        Ok(found)
    }

    fn complete(&mut self, candidate: &PitchSet) -> io::Result<usize> {
        if !self.registry.try_accept(candidate) {
            return Ok(0);
        }
        debug!(scale = %candidate, "accepted");
        self.sink.accept(candidate)?;
        Ok(1)
    }
}

/// Run a full enumeration, sending every distinct scale to `sink`.
///
/// The registry is cleared first; on return it holds the fingerprints of
/// every mode of every accepted scale.
pub fn enumerate_into<S: ScaleSink>(
    params: SearchParams,
    registry: &mut CanonicalRegistry,
    sink: &mut S,
) -> crate::Result<usize> {
    info!(
        pitches = params.pitches(),
        max_run = params.max_run(),
        "enumerating scales"
    );
    registry.reset();

    let mut builder = ScaleBuilder::new(params.max_run(), registry, sink);
    let total = builder.search(PartialScale::new(), params.pitches() - 1)?;

    info!(total, "enumeration finished");
    Ok(total)
}

/// Scales collected from one run, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    params: SearchParams,
    scales: Vec<PitchSet>,
}

impl Enumeration {
    /// Run the search for the given inputs and collect every scale
    pub fn run(params: SearchParams) -> crate::Result<Self> {
        let mut registry = CanonicalRegistry::new();
        let mut scales = Vec::new();
        let total = enumerate_into(params, &mut registry, &mut scales)?;
        debug_assert_eq!(total, scales.len());
        Ok(Self { params, scales })
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn scales(&self) -> &[PitchSet] {
        &self.scales
    }

    /// Number of distinct scales found
    pub fn count(&self) -> usize {
        self.scales.len()
    }
}

/// Enumerate every distinct scale of `n_pitches` pitches whose chromatic
/// runs stay below `max_run` steps.
pub fn enumerate(n_pitches: i64, max_run: i64) -> crate::Result<Enumeration> {
    Enumeration::run(SearchParams::new(n_pitches, max_run)?)
}
