//! Build statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected while rebuilding a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of distinct pages holding content
    pub page_count: u32,

    /// Number of paragraphs in the input
    pub paragraph_count: u32,

    /// Number of tables in the input
    pub table_count: u32,

    /// Paragraphs dropped because they overlap a table
    pub filtered_paragraph_count: u32,

    /// Number of chapters produced
    pub chapter_count: u32,

    /// Number of footnote blocks rendered
    pub footnote_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &BuildStats) {
        self.page_count += other.page_count;
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        self.filtered_paragraph_count += other.filtered_paragraph_count;
        self.chapter_count += other.chapter_count;
        self.footnote_count += other.footnote_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
