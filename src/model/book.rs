//! Chapters and the assembled book, the output boundary.

use serde::{Deserialize, Serialize};

use crate::render::BuildStats;

/// One chapter of the rebuilt document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable identifier (`chapter_N`)
    pub id: String,

    /// File the packager should write the chapter to (`chapter_N.xhtml`)
    pub file_name: String,

    /// Chapter title
    pub title: String,

    /// Heading depth (1-6)
    pub level: u8,

    /// HTML body
    pub content: String,
}

impl Chapter {
    /// Create a chapter numbered `number` (1-indexed).
    pub fn new(number: usize, title: impl Into<String>, level: u8, content: String) -> Self {
        Self {
            id: format!("chapter_{}", number),
            file_name: format!("chapter_{}.xhtml", number),
            title: title.into(),
            level: level.clamp(1, 6),
            content,
        }
    }

    /// Table-of-contents entry pointing at this chapter.
    pub fn toc_entry(&self) -> TocEntry {
        TocEntry {
            title: self.title.clone(),
            file_name: self.file_name.clone(),
            id: self.id.clone(),
            level: self.level,
        }
    }
}

/// A table-of-contents link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Link text
    pub title: String,

    /// Target file
    pub file_name: String,

    /// Target chapter id
    pub id: String,

    /// Nesting depth (1-6)
    pub level: u8,
}

/// The rebuilt document, ready for packaging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Chapters in reading order
    pub chapters: Vec<Chapter>,

    /// Table of contents, one entry per chapter
    pub toc: Vec<TocEntry>,

    /// Build statistics
    pub stats: BuildStats,
}

impl Book {
    /// Create a book from its chapters, deriving the table of contents.
    pub fn new(title: impl Into<String>, chapters: Vec<Chapter>, stats: BuildStats) -> Self {
        let toc = chapters.iter().map(Chapter::toc_entry).collect();
        Self {
            title: title.into(),
            chapters,
            toc,
            stats,
        }
    }

    /// Get the number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Get a chapter by id.
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Check if the book has no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
