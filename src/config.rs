/// Configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Applying per-mode defaults (input directory, output prefix)
/// - Resolving the report date and the date-stamped output path
use crate::cli::{CliArgs, DATE_FORMAT};
use crate::types::RunConfig;
use chrono::NaiveDate;
use log::debug;
use std::path::PathBuf;

/// Extension of the generated document
const OUTPUT_EXTENSION: &str = "docx";

/// Build a complete RunConfig from CLI arguments
///
/// `today` is the clock reading used when `--date` is not given, so callers
/// (and tests) decide where the date comes from.
pub fn build_run_config(args: &CliArgs, today: NaiveDate) -> Result<RunConfig, String> {
    debug!("Building run config from CLI args");

    let mode = args.mode;
    let input_dir = args.input_dir.clone().unwrap_or_else(|| mode.default_input_dir());
    let report_date = args.parsed_date()?.unwrap_or(today);
    let prefix = args.prefix.as_deref().unwrap_or(mode.default_prefix());
    let output_path = args.output_dir.join(output_file_name(prefix, report_date));

    debug!("Mode {}: scanning {:?} for .{} files", mode, input_dir, args.extension);
    debug!("Output document: {:?}", output_path);

    Ok(RunConfig { input_dir, extension: args.extension.clone(), mode, report_date, output_path })
}

/// Output file name: `<prefix>_<YYYYMMDD>.docx`
pub fn output_file_name(prefix: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{}_{}.{}", prefix, date.format(DATE_FORMAT), OUTPUT_EXTENSION))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
