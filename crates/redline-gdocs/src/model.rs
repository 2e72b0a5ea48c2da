//! Google Docs `documents.get` response model and its conversion into the
//! native document tree.
//!
//! Only the fields needed for flattening are modelled. Paragraph elements
//! without a text run or without both indices are skipped, as are structural
//! elements other than paragraphs, tables and section breaks.

use redline_core::document::{Block, DocumentBody, Paragraph, Table, TableCell, TableRow, TextRun};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(default)]
    pub paragraph: Option<GParagraph>,
    #[serde(default)]
    pub table: Option<GTable>,
    #[serde(default)]
    pub section_break: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GParagraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(default)]
    pub start_index: Option<usize>,
    #[serde(default)]
    pub end_index: Option<usize>,
    #[serde(default)]
    pub text_run: Option<GTextRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GTextRun {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GTable {
    #[serde(default)]
    pub table_rows: Vec<GTableRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GTableRow {
    #[serde(default)]
    pub table_cells: Vec<GTableCell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GTableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl Document {
    /// The document body as a native tree. A missing body is empty.
    #[must_use]
    pub fn into_body(self) -> DocumentBody {
        self.body.map_or_else(DocumentBody::default, |body| {
            DocumentBody::new(convert_elements(body.content))
        })
    }
}

fn convert_elements(elements: Vec<StructuralElement>) -> Vec<Block> {
    elements.into_iter().filter_map(convert_element).collect()
}

fn convert_element(element: StructuralElement) -> Option<Block> {
    if let Some(paragraph) = element.paragraph {
        let runs = paragraph
            .elements
            .into_iter()
            .filter_map(|el| {
                let content = el.text_run?.content.filter(|c| !c.is_empty())?;
                Some(TextRun {
                    start_index: el.start_index?,
                    end_index: el.end_index?,
                    content,
                })
            })
            .collect();
        return Some(Block::Paragraph(Paragraph::new(runs)));
    }

    if let Some(table) = element.table {
        let rows = table
            .table_rows
            .into_iter()
            .map(|row| TableRow {
                cells: row
                    .table_cells
                    .into_iter()
                    .map(|cell| TableCell::new(convert_elements(cell.content)))
                    .collect(),
            })
            .collect();
        return Some(Block::Table(Table { rows }));
    }

    element.section_break.map(|_| Block::SectionBreak)
}
