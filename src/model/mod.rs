//! Document model types.
//!
//! The input side mirrors what the layout service reports (paragraphs and
//! tables anchored to page regions). The output side is the chaptered
//! [`Book`] handed to a packager.

mod analysis;
mod book;
mod element;
mod geometry;
mod paragraph;
mod table;

pub use analysis::AnalyzeResult;
pub use book::{Book, Chapter, TocEntry};
pub use element::{DocumentElement, ElementKind};
pub use geometry::{intersects, BoundingBox, BoundingRegion};
pub use paragraph::{Paragraph, ParagraphRole};
pub use table::{CellKind, Table, TableCell};
