// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Search parameters for an enumeration run.
//!
//! The only inputs are the pitch count N and the semitone run limit M. They
//! arrive either as two command-line arguments or from a small query file,
//! and are validated here before any search starts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::music::OCTAVE;

/// Validated inputs for one enumeration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchParams {
    pitches: usize,
    max_run: usize,
}

impl SearchParams {
    /// Validate a pitch count and run limit.
    ///
    /// The pitch count must lie in 1..=12 and the run limit must not be
    /// negative.
    pub fn new(pitches: i64, max_run: i64) -> crate::Result<Self> {
        if !(1..=OCTAVE as i64).contains(&pitches) {
            return Err(Error::PitchCountOutOfRange(pitches));
        }
        let max_run = usize::try_from(max_run).map_err(|_| Error::NegativeRunLimit(max_run))?;
        Ok(Self {
            pitches: pitches as usize,
            max_run,
        })
    }

    /// Parse and validate the two positional arguments.
    ///
    /// Non-numeric text is rejected instead of being read as zero.
    pub fn from_args(pitches: &str, max_run: &str) -> crate::Result<Self> {
        Self::new(parse_whole("N", pitches)?, parse_whole("M", max_run)?)
    }

    /// Number of active pitches in every reported scale
    pub fn pitches(&self) -> usize {
        self.pitches
    }

    /// Run limit; a chromatic run of `max_run` steps or more is rejected
    pub fn max_run(&self) -> usize {
        self.max_run
    }
}

fn parse_whole(name: &'static str, value: &str) -> crate::Result<i64> {
    value.trim().parse().map_err(|_| Error::NotANumber {
        name,
        value: value.to_string(),
    })
}

/// The two search inputs as stored in a query file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryFile {
    /// Number of active pitches (N)
    pub pitches: i64,
    /// Maximum consecutive semitone run (M)
    pub max_run: i64,
}

impl QueryFile {
    /// Load a query from a YAML or TOML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a query from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML query")
    }

    /// Parse a query from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML query")
    }

    /// Validate the loaded values
    pub fn params(&self) -> crate::Result<SearchParams> {
        SearchParams::new(self.pitches, self.max_run)
    }
}

impl From<SearchParams> for QueryFile {
    fn from(params: SearchParams) -> Self {
        Self {
            pitches: params.pitches as i64,
            max_run: params.max_run as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_params_valid_range() {
        let params = SearchParams::new(7, 2).unwrap();
        assert_eq!(params.pitches(), 7);
        assert_eq!(params.max_run(), 2);

        assert!(SearchParams::new(1, 0).is_ok());
        assert!(SearchParams::new(12, 100).is_ok());
    }

    #[test]
    fn test_params_reject_bad_pitch_count() {
        assert!(matches!(
            SearchParams::new(0, 2),
            Err(Error::PitchCountOutOfRange(0))
        ));
        assert!(matches!(
            SearchParams::new(13, 2),
            Err(Error::PitchCountOutOfRange(13))
        ));
        assert!(matches!(
            SearchParams::new(-3, 2),
            Err(Error::PitchCountOutOfRange(-3))
        ));
    }

    #[test]
    fn test_params_reject_negative_run() {
        assert!(matches!(
            SearchParams::new(5, -1),
            Err(Error::NegativeRunLimit(-1))
        ));
    }

    #[test]
    fn test_from_args() {
        let params = SearchParams::from_args("7", " 3 ").unwrap();
        assert_eq!(params, SearchParams::new(7, 3).unwrap());

        match SearchParams::from_args("seven", "3") {
            Err(Error::NotANumber { name, value }) => {
                assert_eq!(name, "N");
                assert_eq!(value, "seven");
            }
            other => panic!("expected NotANumber, got {:?}", other),
        }
        assert!(matches!(
            SearchParams::from_args("7", "3x"),
            Err(Error::NotANumber { name: "M", .. })
        ));
    }

    #[test]
    fn test_query_from_yaml() {
        let query = QueryFile::from_yaml("pitches: 7\nmax_run: 2\n").unwrap();
        assert_eq!(query, QueryFile { pitches: 7, max_run: 2 });
        assert_eq!(query.params().unwrap(), SearchParams::new(7, 2).unwrap());
    }

    #[test]
    fn test_query_from_toml() {
        let query = QueryFile::from_toml("pitches = 5\nmax_run = 3\n").unwrap();
        assert_eq!(query, QueryFile { pitches: 5, max_run: 3 });
    }

    #[test]
    fn test_query_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("query.yaml");
        fs::write(&yaml_path, "pitches: 6\nmax_run: 4\n").unwrap();
        assert_eq!(QueryFile::load(&yaml_path).unwrap().pitches, 6);

        let toml_path = dir.path().join("query.toml");
        fs::write(&toml_path, "pitches = 4\nmax_run = 1\n").unwrap();
        assert_eq!(QueryFile::load(&toml_path).unwrap().max_run, 1);
    }

    #[test]
    fn test_query_load_errors() {
        let dir = tempdir().unwrap();
        assert!(QueryFile::load(dir.path().join("missing.yaml")).is_err());

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "this is not valid yaml: [").unwrap();
        assert!(QueryFile::load(&bad).is_err());

        let out_of_range = QueryFile::from_yaml("pitches: 20\nmax_run: 2\n").unwrap();
        assert!(out_of_range.params().is_err());
    }

    #[test]
    fn test_query_from_params() {
        let params = SearchParams::new(3, 2).unwrap();
        assert_eq!(QueryFile::from(params), QueryFile { pitches: 3, max_run: 2 });
    }
}
