//! Tagged document elements, the unit of reading-order reconstruction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BoundingRegion, Paragraph, Table};

/// A paragraph or a table extracted from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl DocumentElement {
    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            DocumentElement::Paragraph(_) => ElementKind::Paragraph,
            DocumentElement::Table(_) => ElementKind::Table,
        }
    }

    /// The first bounding region of the element.
    pub fn region(&self) -> Option<&BoundingRegion> {
        match self {
            DocumentElement::Paragraph(p) => p.region(),
            DocumentElement::Table(t) => t.region(),
        }
    }

    /// Page number of the first bounding region.
    pub fn page_number(&self) -> Option<u32> {
        self.region().map(|r| r.page_number)
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, DocumentElement::Paragraph(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, DocumentElement::Table(_))
    }

    /// Borrow the paragraph, if this is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            DocumentElement::Paragraph(p) => Some(p),
            DocumentElement::Table(_) => None,
        }
    }

    /// Borrow the table, if this is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            DocumentElement::Table(t) => Some(t),
            DocumentElement::Paragraph(_) => None,
        }
    }
}

impl From<Paragraph> for DocumentElement {
    fn from(p: Paragraph) -> Self {
        DocumentElement::Paragraph(p)
    }
}

impl From<Table> for DocumentElement {
    fn from(t: Table) -> Self {
        DocumentElement::Table(t)
    }
}

/// Element kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Paragraph element
    Paragraph,
    /// Table element
    Table,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Paragraph => f.write_str("paragraph"),
            ElementKind::Table => f.write_str("table"),
        }
    }
}
