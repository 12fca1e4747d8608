//! Input and output locations of an analysis run

use std::path::{Path, PathBuf};

/// Dataset read when no other input is given, relative to the working directory
pub const DEFAULT_INPUT: &str = "sleep_health_and_lifestyle_dataset.csv";

/// Chart written when no other output is given
pub const DEFAULT_OUTPUT: &str = "sleep_analysis_plots.png";

/// Paths used by [`run`](crate::run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl AnalysisConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AnalysisConfig::default();
        assert_eq!(config.input(), Path::new("sleep_health_and_lifestyle_dataset.csv"));
        assert_eq!(config.output(), Path::new("sleep_analysis_plots.png"));
    }
}
