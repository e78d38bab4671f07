/// Workbook loading
///
/// This module handles:
/// - The `TableSource` seam: named sheets that load into a `Table`
/// - The `WorkbookLoader` seam: opening a workbook file as a `TableSource`
/// - The calamine-backed implementation used by the binary
/// - An in-memory source for tests
use crate::table::{CellValue, Row, Table};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A workbook: an ordered set of named sheets
pub trait TableSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Load one sheet; the first row is the header
    fn read_sheet(&mut self, name: &str) -> Result<Table, String>;
}

/// Opens workbook files
pub trait WorkbookLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn TableSource>, String>;
}

/// Loader for spreadsheet formats calamine detects by extension (xlsx, xlsm, xls, ods, ...)
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineLoader;

impl WorkbookLoader for CalamineLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn TableSource>, String> {
        debug!("Opening workbook {:?}", path);
        let sheets = open_workbook_auto(path).map_err(|e| e.to_string())?;
        Ok(Box::new(CalamineSource { sheets }))
    }
}

/// A workbook opened through calamine
pub struct CalamineSource {
    sheets: Sheets<BufReader<File>>,
}

impl TableSource for CalamineSource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Table, String> {
        let range = self.sheets.worksheet_range(name).map_err(|e| e.to_string())?;
        Ok(range_to_table(&range))
    }
}

/// Convert a sheet's used range into a table, taking the first row as header
pub fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match convert_cell(cell) {
            Some(value) => value.to_string(),
            None => format!("Unnamed: {}", idx),
        })
        .collect();

    let body: Vec<Row> = rows.map(|row| row.iter().map(convert_cell).collect()).collect();
    debug!("Loaded sheet range with {} data rows", body.len());
    Table::new(columns, body)
}

/// Map a calamine cell to an optional cell value
pub fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => CellValue::from_text(s.as_str()),
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Float(f) => Some(CellValue::Float(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Some(CellValue::DateTime(naive)),
            None => Some(CellValue::Float(dt.as_f64())),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::from_text(s.as_str()),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}

/// Named tables held in memory, in insertion order
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: Vec<(String, Table)>,
}

#[cfg(test)]
impl MemorySource {
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Add a sheet (builder style)
    pub fn with_sheet(mut self, name: impl Into<String>, table: Table) -> Self {
        self.sheets.push((name.into(), table));
        self
    }
}

#[cfg(test)]
impl TableSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Table, String> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| format!("Sheet '{}' not found", name))
    }
}

#[cfg(test)]
#[path = "workbook_test.rs"]
mod workbook_test;
