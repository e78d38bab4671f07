//! Report document model.
//!
//! A `Report` is an append-only sequence of blocks (headings, paragraphs and
//! page breaks). It carries no layout beyond what the document writer needs.

/// One block of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading at nesting level 1..=4
    Heading {
        level: u8,
        text: String,
        /// Run font size in half-points (Word's `w:sz` unit)
        font_size_half_points: Option<u32>,
        bold: bool,
    },
    /// Plain paragraph; an empty string is a blank spacer line
    Paragraph(String),
    /// Hard page break
    PageBreak,
}

#[cfg(test)]
impl Block {
    /// Text carried by this block, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. } => Some(text),
            Block::Paragraph(text) => Some(text),
            Block::PageBreak => None,
        }
    }
}

/// Append-only document built over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    blocks: Vec<Block>,
}

impl Report {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a plain heading
    pub fn add_heading(&mut self, level: u8, text: impl Into<String>) {
        self.push_heading(level, text, None, false);
    }

    /// Append a heading with explicit run formatting
    pub fn push_heading(&mut self, level: u8, text: impl Into<String>, font_size_half_points: Option<u32>, bold: bool) {
        let level = level.clamp(1, 4);
        self.blocks.push(Block::Heading { level, text: text.into(), font_size_half_points, bold });
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph(text.into()));
    }

    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All block texts in order (page breaks are skipped)
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.blocks.iter().filter_map(Block::text).collect()
    }
}

/// Formatting options that differ between single-file and batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Font size of the sheet title run, in half-points
    pub sheet_title_font_half_points: u32,
    /// Add an empty paragraph after each sheet title
    pub spacer_after_sheet_title: bool,
    /// Render procedure-type headings in bold
    pub bold_group_titles: bool,
}

impl RenderStyle {
    /// Style used when a single workbook is processed
    pub fn single() -> Self {
        Self { sheet_title_font_half_points: 27, spacer_after_sheet_title: false, bold_group_titles: false }
    }

    /// Style used for consolidated multi-workbook reports
    pub fn batch() -> Self {
        Self { sheet_title_font_half_points: 27, spacer_after_sheet_title: true, bold_group_titles: true }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::single()
    }
}

/// What the builder did with one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOutcome {
    /// No columns left after dropping ignored ones, or no rows at all
    NoUsefulData,
    /// Sheet title written, but the grouping column is absent
    MissingGroupingColumn,
    /// Full analysis written
    Rendered { groups: usize, rows: usize },
}
