//! Report generation module - Document model and per-sheet rendering.
//!
//! This module handles:
//! - The append-only `Report` document model
//! - Grouping a sheet's rows by procedure type and rendering the sections
//! - Run summaries printed at the end of a run
//!
//! Serialization to `.docx` is handled by the docx module.
//!
//! # Module Organization
//!
//! - `types` - Document blocks, render style and sheet outcomes
//! - `builder` - Per-sheet grouping and section rendering
//! - `summary` - Run statistics and console summary

mod builder;
mod summary;
mod types;

// Re-export types
pub use types::{Block, RenderStyle, Report, SheetOutcome};

// Re-export builder
pub use builder::{GROUPING_COLUMN, build_sheet_report};

// Re-export summary
pub use summary::{RunSummary, print_run_summary};
