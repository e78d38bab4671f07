//! Per-sheet report rendering.
//!
//! Groups a sheet's rows by procedure type and appends the sheet title,
//! the per-type counts and the per-row field listings to a `Report`.

use super::types::{RenderStyle, Report, SheetOutcome};
use crate::table::{CellValue, Table, column_title};
use log::{debug, info};

/// Columns dropped before any analysis (normalized names)
pub const IGNORED_COLUMNS: [&str; 3] = ["material utilizado", "status", "comisiones"];

/// Column whose values partition the rows into groups (normalized name)
pub const GROUPING_COLUMN: &str = "tipo de procedimiento";

/// Rows sharing one grouping value, in table order
struct Group {
    value: CellValue,
    rows: Vec<usize>,
}

/// Append the analysis of one sheet to `report`.
///
/// Never fails: a sheet without usable columns adds nothing, and a sheet
/// without the grouping column adds only its title. Blocks appended before
/// an early return stay in the report.
pub fn build_sheet_report(sheet_name: &str, table: Table, report: &mut Report, style: &RenderStyle) -> SheetOutcome {
    let table = table.normalized().without_columns(&IGNORED_COLUMNS);

    if table.column_count() == 0 || table.row_count() == 0 {
        info!("no useful data in sheet {}", sheet_name);
        return SheetOutcome::NoUsefulData;
    }

    report.push_heading(
        2,
        format!("Data from sheet: {}", sheet_name),
        Some(style.sheet_title_font_half_points),
        false,
    );
    if style.spacer_after_sheet_title {
        report.add_paragraph("");
    }

    let Some(group_col) = table.column_index(GROUPING_COLUMN) else {
        info!("column '{}' not found in sheet {}", GROUPING_COLUMN, sheet_name);
        return SheetOutcome::MissingGroupingColumn;
    };

    let groups = group_rows(&table, group_col);
    debug!("sheet {}: {} procedure types", sheet_name, groups.len());

    report.add_heading(3, "Count by Procedure Type");
    for group in counts_by_size(&groups) {
        report.add_paragraph(format!("{}: {} Procedimientos", group.value, group.rows.len()));
    }

    report.add_heading(3, "Data by Procedure Type");
    let mut rendered_rows = 0;
    for group in &groups {
        report.push_heading(4, format!("Procedure Type: {}", group.value), None, style.bold_group_titles);
        rendered_rows += render_group(&table, group, report);
    }

    SheetOutcome::Rendered { groups: groups.len(), rows: rendered_rows }
}

/// Partition rows by grouping value, in first-seen order; missing values are skipped
fn group_rows(table: &Table, group_col: usize) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for (idx, row) in table.rows().iter().enumerate() {
        let Some(value) = &row[group_col] else {
            continue;
        };
        match groups.iter_mut().find(|g| &g.value == value) {
            Some(group) => group.rows.push(idx),
            None => groups.push(Group { value: value.clone(), rows: vec![idx] }),
        }
    }

    groups
}

/// Groups ordered by descending size; equal sizes keep first-seen order
fn counts_by_size(groups: &[Group]) -> Vec<&Group> {
    let mut ordered: Vec<&Group> = groups.iter().collect();
    ordered.sort_by(|a, b| b.rows.len().cmp(&a.rows.len()));
    ordered
}

/// Append one paragraph per row of the group; returns the number appended
fn render_group(table: &Table, group: &Group, report: &mut Report) -> usize {
    let rows = table.rows();

    let retained: Vec<(usize, String)> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(col, _)| group.rows.iter().any(|&r| rows[r][*col].is_some()))
        .map(|(col, name)| (col, column_title(name)))
        .collect();

    let mut appended = 0;
    for &r in &group.rows {
        let fields: Vec<String> = retained
            .iter()
            .filter_map(|(col, title)| rows[r][*col].as_ref().map(|v| format!("{}: {}", title, v.display_trimmed())))
            .collect();

        if fields.is_empty() {
            continue;
        }
        report.add_paragraph(fields.join(", "));
        appended += 1;
    }

    appended
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
