//! Sensor Array - load numeric sensor CSV data
//!
//! Reads a CSV file, drops its header row and prints every value as one flat list.

use anyhow::Context;
use clap::Parser;
use sensor_array::cli::Args;
use sensor_array::data::DataLoader;
use sensor_array::report::{self, Values};
use sensor_array::stats::{StatsCalculator, ALL_VALUES_LABEL};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries data
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let output = run(&args)?;
    println!("{output}");
    Ok(())
}

/// Load the file and render everything that goes to stdout.
fn run(args: &Args) -> anyhow::Result<String> {
    let loader = DataLoader::new(&args.path);
    let table = loader
        .load_rows()
        .with_context(|| format!("Failed to load {}", loader.path().display()))?;

    let stats = args.stats.then(|| {
        let mut all = vec![StatsCalculator::compute_descriptive_stats(
            ALL_VALUES_LABEL,
            &table.clone().flatten(),
        )];
        all.extend(StatsCalculator::compute_column_stats(&table));
        all
    });

    let values = if args.rows {
        Values::Rows(table)
    } else {
        Values::Flat(table.flatten())
    };
    info!(
        path = %loader.path().display(),
        values = values.value_count(),
        "loaded sensor data"
    );

    let mut output = report::render_values(&values, args.format)?;
    if let Some(stats) = stats {
        output.push('\n');
        output.push_str(&report::render_stats(&stats, args.format)?);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_array::data::LoaderError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn args_for(file: &NamedTempFile, extra: &[&str]) -> Args {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["sensor_array", path];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_run_prints_flat_list() {
        let file = write_csv("a,b,c\n1,2,3\n4,5,6\n");
        let output = run(&args_for(&file, &[])).unwrap();
        assert_eq!(output, "[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]");
    }

    #[test]
    fn test_run_header_only() {
        let file = write_csv("a,b,c\n");
        assert_eq!(run(&args_for(&file, &[])).unwrap(), "[]");
    }

    #[test]
    fn test_run_rows_json() {
        let file = write_csv("a,b\n1,2\n3,4\n");
        let output = run(&args_for(&file, &["--rows", "--format", "json"])).unwrap();
        assert_eq!(output, "[[1.0,2.0],[3.0,4.0]]");
    }

    #[test]
    fn test_run_with_stats() {
        let file = write_csv("a,b\n1,10\n3,30\n");
        let output = run(&args_for(&file, &["--stats"])).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "[1.0, 10.0, 3.0, 30.0]");
        assert!(lines[1].starts_with("all: count=4"));
        assert!(lines[2].starts_with("col0: count=2 mean=2.000000"));
        assert!(lines[3].starts_with("col1: count=2 mean=20.000000"));
    }

    #[test]
    fn test_run_parse_failure_produces_no_output() {
        let file = write_csv("a,b,c\nx,2,3\n");
        let err = run(&args_for(&file, &[])).unwrap_err();
        assert!(err.downcast_ref::<LoaderError>().is_some());
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("active.csv");
        let args = Args::parse_from(["sensor_array", path.to_str().unwrap()]);
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::Read { .. })
        ));
    }
}
