use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::RollupConfig;
use crate::services::WindowProcessor;

/// Roll up per-user action logs into a 7-day report
#[derive(Parser)]
#[command(name = "actrollup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target date (YYYY-MM-DD); the report covers the 7 days before it
    pub date: NaiveDate,

    /// Directory holding raw per-day action logs
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory for cached per-day aggregates
    #[arg(long, default_value = "intermediate")]
    pub cache_dir: PathBuf,

    /// Directory the window report is written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Directory for the error log file
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Cli {
    pub fn config(&self) -> RollupConfig {
        RollupConfig {
            input_dir: self.input_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    /// Run the pipeline. Quiet on success; the report on disk is the
    /// only output.
    pub fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        let processor = WindowProcessor::new(&config);
        processor.process(self.date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_date() {
        let cli = Cli::try_parse_from(["actrollup", "2024-03-10"]).unwrap();
        assert_eq!(cli.date, "2024-03-10".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_cli_default_dirs() {
        let cli = Cli::try_parse_from(["actrollup", "2024-03-10"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("input"));
        assert_eq!(cli.cache_dir, PathBuf::from("intermediate"));
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_cli_dir_overrides() {
        let cli = Cli::try_parse_from([
            "actrollup",
            "2024-03-10",
            "--input-dir",
            "/data/in",
            "--cache-dir",
            "/data/mid",
            "--output-dir",
            "/data/out",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("/data/in"));
        assert_eq!(config.cache_dir, PathBuf::from("/data/mid"));
        assert_eq!(config.output_dir, PathBuf::from("/data/out"));
    }

    #[test]
    fn test_cli_rejects_malformed_date() {
        assert!(Cli::try_parse_from(["actrollup", "10-03-2024"]).is_err());
        assert!(Cli::try_parse_from(["actrollup", "2024-13-40"]).is_err());
        assert!(Cli::try_parse_from(["actrollup", "yesterday"]).is_err());
    }

    #[test]
    fn test_cli_requires_date() {
        assert!(Cli::try_parse_from(["actrollup"]).is_err());
    }
}
