//! Table types.

use serde::{Deserialize, Deserializer, Serialize};

use super::BoundingRegion;

/// A table with sparse, span-carrying cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of grid rows
    pub row_count: usize,

    /// Number of grid columns
    pub column_count: usize,

    /// Cells in extraction order
    #[serde(default)]
    pub cells: Vec<TableCell>,

    /// Where the table sits on its page(s)
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,
}

impl Table {
    /// Create an empty table with the given dimensions.
    pub fn new(row_count: usize, column_count: usize, region: BoundingRegion) -> Self {
        Self {
            row_count,
            column_count,
            cells: Vec::new(),
            bounding_regions: vec![region],
        }
    }

    /// Add a cell and return self.
    pub fn with_cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// The first bounding region, the only one used for placement.
    pub fn region(&self) -> Option<&BoundingRegion> {
        self.bounding_regions.first()
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if any cell spans more than one row or column.
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_merged)
    }

    /// Plain text of all cells, one cell per line.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table cell anchored at `(row_index, column_index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Anchor row
    pub row_index: usize,

    /// Anchor column
    pub column_index: usize,

    /// Number of rows this cell spans
    #[serde(default = "one", deserialize_with = "deserialize_span")]
    pub row_span: usize,

    /// Number of columns this cell spans
    #[serde(default = "one", deserialize_with = "deserialize_span")]
    pub column_span: usize,

    /// Header or content cell
    #[serde(default, deserialize_with = "deserialize_kind")]
    pub kind: CellKind,

    /// Cell text
    #[serde(default)]
    pub content: String,
}

impl TableCell {
    /// Create a content cell with no spans.
    pub fn new(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            row_span: 1,
            column_span: 1,
            kind: CellKind::Content,
            content: content.into(),
        }
    }

    /// Create a column header cell.
    pub fn header(row_index: usize, column_index: usize, content: impl Into<String>) -> Self {
        Self {
            kind: CellKind::ColumnHeader,
            ..Self::new(row_index, column_index, content)
        }
    }

    /// Set the row span and return self.
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span.max(1);
        self
    }

    /// Set the column span and return self.
    pub fn column_span(mut self, span: usize) -> Self {
        self.column_span = span.max(1);
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }

    /// Check if this is a header cell.
    pub fn is_header(&self) -> bool {
        self.kind == CellKind::ColumnHeader
    }
}

/// Cell kind. Every kind the service reports other than `columnHeader`
/// renders as content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Column header cell
    ColumnHeader,
    /// Ordinary cell
    #[default]
    #[serde(other)]
    Content,
}

fn one() -> usize {
    1
}

fn deserialize_span<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let span = Option::<usize>::deserialize(deserializer)?.unwrap_or(1);
    Ok(span.max(1))
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<CellKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CellKind>::deserialize(deserializer)?.unwrap_or_default())
}
