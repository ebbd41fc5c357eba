// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Destinations for accepted scales.

use std::io::{self, Write};

use crate::music::PitchSet;

/// Receives each scale the moment the search accepts it
pub trait ScaleSink {
    /// Handle one accepted scale
    fn accept(&mut self, scale: &PitchSet) -> io::Result<()>;
}

impl ScaleSink for Vec<PitchSet> {
    fn accept(&mut self, scale: &PitchSet) -> io::Result<()> {
        self.push(*scale);
        Ok(())
    }
}

/// Writes each accepted scale as its 12-character pattern on its own line
pub struct PatternWriter<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> PatternWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Write the closing `total: <count>` line
    pub fn finish(mut self, total: usize) -> io::Result<W> {
        writeln!(self.writer, "total: {}", total)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ScaleSink for PatternWriter<W> {
    fn accept(&mut self, scale: &PitchSet) -> io::Result<()> {
        writeln!(self.writer, "{}", scale)?;
        self.lines += 1;
        Ok(())
    }
}
