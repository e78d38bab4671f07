/// Core run configuration types
///
/// This module defines the processing mode and the fully resolved,
/// immutable configuration handed to the runner.
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

use crate::report::RenderStyle;

/// How many workbooks a run processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Process only the first workbook found
    Single,
    /// Process every workbook found into one consolidated document
    Batch,
}

impl Mode {
    /// Output file prefix used when none is given
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Mode::Single => "datos_extraidos",
            Mode::Batch => "analisis_consolidado",
        }
    }

    /// Input directory used when none is given
    pub fn default_input_dir(&self) -> PathBuf {
        match self {
            Mode::Single => PathBuf::from("."),
            Mode::Batch => PathBuf::from("./por_procesar"),
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        match self {
            Mode::Single => RenderStyle::single(),
            Mode::Batch => RenderStyle::batch(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Batch => write!(f, "batch"),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory scanned for workbooks
    pub input_dir: PathBuf,
    /// Workbook extension without the leading dot
    pub extension: String,
    pub mode: Mode,
    /// Date stamped into the output file name
    pub report_date: NaiveDate,
    /// Where the document is written
    pub output_path: PathBuf,
}
