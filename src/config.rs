// File: src/config.rs
//! Analyzer configuration, loadable from a JSON file.

use crate::error::{ChandasError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Upper bound for `PadaSplit::EqualParts`.
pub const MAX_EQUAL_PARTS: usize = 64;

/// Guru-fraction cut points for the heaviness label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeavinessThresholds {
    /// Below this the verse is light.
    pub light_below: f64,
    /// Above this the verse is heavy.
    pub heavy_above: f64,
}

impl Default for HeavinessThresholds {
    fn default() -> Self {
        Self {
            light_below: 0.33,
            heavy_above: 0.66,
        }
    }
}

/// How the per-pāda distribution groups the weight sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadaSplit {
    /// One group per input line.
    #[default]
    LineBreaks,
    /// Regroup the flat sequence into this many equal chunks, for verses
    /// entered on a single line.
    EqualParts(usize),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub heaviness: HeavinessThresholds,
    pub pada_split: PadaSplit,
    /// Treat `।` and `॥` as pāda boundaries in addition to line breaks.
    pub danda_splits_pada: bool,
}

impl AnalyzerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        log::debug!("Loaded analyzer config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let HeavinessThresholds {
            light_below,
            heavy_above,
        } = self.heaviness;
        if !(0.0..=1.0).contains(&light_below) || !(0.0..=1.0).contains(&heavy_above) {
            return Err(ChandasError::config(format!(
                "heaviness thresholds must lie in [0, 1], got {light_below} and {heavy_above}"
            )));
        }
        if light_below > heavy_above {
            return Err(ChandasError::config(format!(
                "light_below ({light_below}) exceeds heavy_above ({heavy_above})"
            )));
        }
        if let PadaSplit::EqualParts(parts) = self.pada_split {
            if parts == 0 || parts > MAX_EQUAL_PARTS {
                return Err(ChandasError::config(format!(
                    "equal_parts must be between 1 and {MAX_EQUAL_PARTS}, got {parts}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pada_split, PadaSplit::LineBreaks);
        assert!(!config.danda_splits_pada);
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        let mut config = AnalyzerConfig::default();
        config.heaviness.light_below = 0.8;
        assert!(config.validate().is_err());

        config.heaviness = HeavinessThresholds {
            light_below: -0.1,
            heavy_above: 0.5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_parts() {
        let config = AnalyzerConfig {
            pada_split: PadaSplit::EqualParts(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChandasError::Config(_))));
    }

    #[test]
    fn test_rejects_oversized_parts() {
        for parts in [MAX_EQUAL_PARTS + 1, usize::MAX] {
            let config = AnalyzerConfig {
                pada_split: PadaSplit::EqualParts(parts),
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ChandasError::Config(_))));
        }
        let config = AnalyzerConfig {
            pada_split: PadaSplit::EqualParts(MAX_EQUAL_PARTS),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_oversized_parts_in_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"pada_split": {{"equal_parts": 18446744073709551615}}}}"#).unwrap();
        assert!(matches!(
            AnalyzerConfig::from_file(file.path()),
            Err(ChandasError::Config(_))
        ));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"pada_split": {{"equal_parts": 4}}, "heaviness": {{"heavy_above": 0.5}}}}"#).unwrap();
        let config = AnalyzerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.pada_split, PadaSplit::EqualParts(4));
        assert_eq!(config.heaviness.light_below, 0.33);
        assert_eq!(config.heaviness.heavy_above, 0.5);
        assert!(!config.danda_splits_pada);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AnalyzerConfig::from_file(file.path()),
            Err(ChandasError::Json(_))
        ));
    }
}
