//! Run statistics and the end-of-run console summary.

use std::path::PathBuf;

/// Counters collected while processing a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Workbooks matching the extension in the input directory
    pub files_found: usize,
    /// Workbooks opened and walked sheet by sheet
    pub files_processed: usize,
    /// Workbooks that could not be opened
    pub files_failed: usize,
    /// Sheets that produced a full analysis
    pub sheets_rendered: usize,
    /// Sheets skipped (unreadable, no useful data, or no grouping column)
    pub sheets_skipped: usize,
    /// Document written, if any
    pub output: Option<PathBuf>,
}

/// Format the summary block shown after a run.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let output = match &summary.output {
        Some(path) => path.display().to_string(),
        None => "(none)".to_string(),
    };

    format!(
        "=== Summary ===\n\
         Files found:     {}\n\
         Files processed: {}\n\
         Files failed:    {}\n\
         Sheets rendered: {}\n\
         Sheets skipped:  {}\n\
         Output:          {}\n",
        summary.files_found,
        summary.files_processed,
        summary.files_failed,
        summary.sheets_rendered,
        summary.sheets_skipped,
        output
    )
}

/// Print the summary block to stdout
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    print!("{}", format_run_summary(summary));
}
