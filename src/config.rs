use std::path::PathBuf;

/// Directory layout for one rollup run.
///
/// Passed explicitly to the window processor instead of living in
/// process-wide constants.
#[derive(Debug, Clone)]
pub struct RollupConfig {
    /// Raw per-day action logs, one `<YYYY-MM-DD>.csv` per day
    pub input_dir: PathBuf,
    /// Cached per-day aggregates, written once per date
    pub cache_dir: PathBuf,
    /// Window reports, one per target date
    pub output_dir: PathBuf,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            cache_dir: PathBuf::from("intermediate"),
            output_dir: PathBuf::from("output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = RollupConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.cache_dir, PathBuf::from("intermediate"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }
}
