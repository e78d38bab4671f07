/// Tabular data model for one worksheet
///
/// This module defines:
/// - `CellValue`, the typed value of a non-missing cell
/// - `Table`, an ordered set of columns and rows of optional cells
/// - Column-name normalization (lowercase, trimmed, first duplicate wins)
use chrono::NaiveDateTime;
use log::warn;
use std::fmt;

/// A present (non-missing) cell value.
///
/// Missing cells are represented as `None` in a row. Text that is empty or
/// only whitespace never becomes a `CellValue`; use [`CellValue::from_text`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Build a text cell, mapping blank text to a missing cell
    pub fn from_text(s: impl Into<String>) -> Option<CellValue> {
        let s = s.into();
        if s.trim().is_empty() { None } else { Some(CellValue::Text(s)) }
    }

    /// Text used in per-row field listings (strings are trimmed)
    pub fn display_trimmed(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => {
                // Spreadsheets store every number as a float
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{}", v)
                }
            }
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One row of a table: cells aligned with the table's columns
pub type Row = Vec<Option<CellValue>>;

/// A worksheet's data: ordered column names and ordered rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from a header and rows.
    ///
    /// Rows shorter than the header are padded with missing cells; extra
    /// trailing cells are dropped.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Return a copy with lowercased, trimmed column names.
    ///
    /// When two columns normalize to the same name, the first one is kept
    /// and later ones are dropped together with their cells.
    pub fn normalized(self) -> Table {
        let mut keep = Vec::with_capacity(self.columns.len());
        let mut names: Vec<String> = Vec::with_capacity(self.columns.len());

        for (idx, col) in self.columns.iter().enumerate() {
            let name = normalize_column_name(col);
            if names.contains(&name) {
                warn!("Duplicate column '{}' (from '{}') ignored; keeping the first occurrence", name, col);
                continue;
            }
            names.push(name);
            keep.push(idx);
        }

        if keep.len() == self.columns.len() {
            return Table { columns: names, rows: self.rows };
        }

        let rows = self.rows.into_iter().map(|row| select_cells(row, &keep)).collect();
        Table { columns: names, rows }
    }

    /// Return a copy without the named columns
    pub fn without_columns(self, drop: &[&str]) -> Table {
        let keep: Vec<usize> =
            (0..self.columns.len()).filter(|&i| !drop.contains(&self.columns[i].as_str())).collect();
        if keep.len() == self.columns.len() {
            return self;
        }

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self.rows.into_iter().map(|row| select_cells(row, &keep)).collect();
        Table { columns, rows }
    }
}

/// Lowercase and trim a column name
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Format a normalized column name for display.
///
/// Underscores become spaces, then every letter that follows a non-letter is
/// uppercased and every other letter lowercased.
pub fn column_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;

    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }

    out
}

fn select_cells(mut row: Row, keep: &[usize]) -> Row {
    keep.iter().map(|&i| row.get_mut(i).and_then(Option::take)).collect()
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
