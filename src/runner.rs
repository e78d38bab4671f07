use crate::discover;
use crate::docx;
use crate::report::{GROUPING_COLUMN, RenderStyle, Report, RunSummary, SheetOutcome, build_sheet_report};
use crate::types::*;
use crate::ui;
use crate::workbook::{TableSource, WorkbookLoader};
use log::{debug, info, warn};
use std::env;

/// Run one report generation pass
///
/// This is the main entry point for processing. Every failure is reported
/// and skipped at the level of the unit that failed (file or sheet); nothing
/// here aborts the process.
pub fn run(config: &RunConfig, loader: &dyn WorkbookLoader) -> RunSummary {
    let mut summary = RunSummary::default();
    debug!("Run: mode {}, report date {}, output {:?}", config.mode, config.report_date, config.output_path);

    // Step 1: Discover workbooks
    let workbooks = match discover::find_workbooks(&config.input_dir, &config.extension) {
        Ok(found) => found,
        Err(e) => {
            ui::print_error(&format!("Cannot read directory {}: {}", config.input_dir.display(), e));
            return summary;
        }
    };

    if workbooks.is_empty() {
        ui::status(&format!("No .{} file found in {}", config.extension, config.input_dir.display()));
        return summary;
    }
    summary.files_found = workbooks.len();

    let names: Vec<String> = workbooks.iter().map(|p| discover::display_name(p)).collect();
    ui::status(&format!("Found {} workbook(s): {}", names.len(), names.join(", ")));

    // Step 2: Select what this mode processes
    let selected = match config.mode {
        Mode::Single => {
            if workbooks.len() > 1 {
                warn!("Single mode: processing {} and ignoring {} other file(s)", names[0], workbooks.len() - 1);
            }
            &workbooks[..1]
        }
        Mode::Batch => &workbooks[..],
    };

    // Step 3: Build the report
    let style = config.mode.render_style();
    let mut report = Report::new();

    for path in selected {
        let name = discover::display_name(path);
        ui::status(&format!("Processing file: {}", name));

        if config.mode == Mode::Batch {
            report.add_heading(1, format!("Analysis of file: {}", name));
        }

        let mut source = match loader.open(path) {
            Ok(source) => source,
            Err(e) => {
                ui::print_error(&format!("Error reading workbook {}: {}", name, e));
                summary.files_failed += 1;
                match config.mode {
                    Mode::Single => return summary,
                    Mode::Batch => continue,
                }
            }
        };

        process_workbook(&mut *source, &mut report, &style, &mut summary);
        summary.files_processed += 1;

        if config.mode == Mode::Batch {
            report.add_page_break();
        }
    }

    // Step 4: Save
    if report.is_empty() {
        warn!("No sheet produced any content; the document will be empty");
    }
    match docx::save_docx(&report, &config.output_path) {
        Ok(()) => {
            ui::status(&format!("Report written to {}", config.output_path.display()));
            summary.output = Some(config.output_path.clone());
        }
        Err(e) => {
            ui::print_error(&format!("Error writing document {}: {}", config.output_path.display(), e));
        }
    }

    if let Ok(cwd) = env::current_dir() {
        info!("Current directory: {}", cwd.display());
    }

    summary
}

/// Render every sheet of one workbook into the report
pub fn process_workbook(
    source: &mut dyn TableSource,
    report: &mut Report,
    style: &RenderStyle,
    summary: &mut RunSummary,
) {
    for sheet in source.sheet_names() {
        ui::status(&format!("  Processing sheet: {}", sheet));

        let table = match source.read_sheet(&sheet) {
            Ok(table) => table,
            Err(e) => {
                ui::print_error(&format!("Error reading sheet {}: {}", sheet, e));
                summary.sheets_skipped += 1;
                continue;
            }
        };

        match build_sheet_report(&sheet, table, report, style) {
            SheetOutcome::Rendered { groups, rows } => {
                debug!("Sheet {}: {} groups, {} rows", sheet, groups, rows);
                summary.sheets_rendered += 1;
            }
            SheetOutcome::NoUsefulData => {
                ui::print_warning(&format!("No useful data in sheet {}; skipped", sheet));
                summary.sheets_skipped += 1;
            }
            SheetOutcome::MissingGroupingColumn => {
                ui::print_warning(&format!(
                    "Column '{}' not found in sheet {}; detailed analysis skipped",
                    GROUPING_COLUMN,
                    sheet
                ));
                summary.sheets_skipped += 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
