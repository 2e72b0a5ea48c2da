//! Native structural document tree.
//!
//! A rich document is an ordered sequence of [`Block`]s. Paragraphs hold text
//! runs that carry their own native start index; tables hold rows of cells,
//! and each cell holds a nested block sequence (tables may nest transitively).
//!
//! Native indices count UTF-16 code units, the index space used by the
//! document editing API. Text-run content is contiguous in that space, so the
//! native index of any character is the run start plus the UTF-16 width of
//! the characters before it in the run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The body of a document: its top-level blocks in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentBody {
    pub content: Vec<Block>,
}

/// A structural element of the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Structural marker with no text content.
    SectionBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
}

/// A contiguous run of text starting at `start_index` in native coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextRun {
    pub start_index: usize,
    pub end_index: usize,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableCell {
    pub content: Vec<Block>,
}

/// Width of `text` in native index units.
#[must_use]
pub fn native_len(text: &str) -> usize {
    text.encode_utf16().count()
}

impl TextRun {
    /// A run whose end index is derived from its content.
    #[must_use]
    pub fn new(start_index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            start_index,
            end_index: start_index + native_len(&content),
            content,
        }
    }
}

impl Paragraph {
    #[must_use]
    pub const fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }
}

impl TableCell {
    #[must_use]
    pub const fn new(content: Vec<Block>) -> Self {
        Self { content }
    }
}

impl Block {
    /// A paragraph consisting of a single run.
    #[must_use]
    pub fn text(start_index: usize, content: impl Into<String>) -> Self {
        Self::Paragraph(Paragraph::new(vec![TextRun::new(start_index, content)]))
    }

    /// A table built from rows of cells.
    #[must_use]
    pub fn table(rows: Vec<Vec<TableCell>>) -> Self {
        Self::Table(Table {
            rows: rows.into_iter().map(|cells| TableRow { cells }).collect(),
        })
    }
}

impl DocumentBody {
    #[must_use]
    pub const fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// Reconstruct the text covered by the native range `[start, end)`.
    ///
    /// Walks every text run (tables depth-first, row-major, cell-major) and
    /// keeps each character whose native index falls inside the range.
    #[must_use]
    pub fn text_in_range(&self, start: usize, end: usize) -> String {
        let mut out = String::new();
        collect_range(&self.content, start, end, &mut out);
        out
    }
}

fn collect_range(blocks: &[Block], start: usize, end: usize, out: &mut String) {
    for block in blocks {
        match block {
            Block::Paragraph(paragraph) => {
                for run in &paragraph.runs {
                    if run.end_index <= start || run.start_index >= end {
                        continue;
                    }
                    let mut index = run.start_index;
                    for ch in run.content.chars() {
                        if (start..end).contains(&index) {
                            out.push(ch);
                        }
                        index += ch.len_utf16();
                    }
                }
            }
            Block::Table(table) => {
                for row in &table.rows {
                    for cell in &row.cells {
                        collect_range(&cell.content, start, end, out);
                    }
                }
            }
            Block::SectionBreak => {}
        }
    }
}
