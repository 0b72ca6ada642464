//! Command-line arguments.

use crate::data::DEFAULT_PATH;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Load numeric sensor data from a CSV file and print it as one flat list.
///
/// The first line of the file is a header and is ignored. Every other line
/// holds comma-separated floating-point values.
#[derive(Parser, Debug, Clone)]
#[command(about, version)]
pub struct Args {
    /// CSV file to load.
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Keep one list per data row instead of flattening.
    #[arg(long)]
    pub rows: bool,

    /// Print descriptive statistics after the data.
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sensor_array"]);
        assert_eq!(args.path, PathBuf::from("active.csv"));
        assert_eq!(args.format, OutputFormat::List);
        assert!(!args.rows);
        assert!(!args.stats);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "sensor_array",
            "data.csv",
            "--format",
            "json",
            "--rows",
            "--stats",
            "-vv",
        ]);
        assert_eq!(args.path, PathBuf::from("data.csv"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.rows);
        assert!(args.stats);
        assert_eq!(args.log_level(), "debug");
    }
}
