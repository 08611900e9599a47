//! # reprint
//!
//! Rebuilds scanned documents into chaptered, EPUB-ready HTML.
//!
//! The input is the layout analysis of a document: paragraphs and tables
//! anchored to regions on the page. The library restores reading order,
//! drops paragraphs that duplicate table text, splits the document into
//! chapters at section headings and repairs the text along the way.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reprint::{build_file, render};
//!
//! fn main() -> reprint::Result<()> {
//!     let book = build_file("analysis.json")?;
//!     for chapter in &book.chapters {
//!         println!("{} -> {}", chapter.title, chapter.file_name);
//!     }
//!     println!("{}", render::to_json(&book, render::JsonFormat::Compact)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order**: tables spliced between the paragraphs they sit among
//! - **Overlap filtering**: table text recognised as paragraphs is removed
//! - **Chaptering**: numbered headings become nested TOC entries
//! - **Text repair**: dehyphenation and URL linking
//! - **Parallel processing**: Uses Rayon to build many documents at once

pub mod builder;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use builder::{
    build_book, build_books, document_title, BuildOptions, DocumentBuilder, Packager,
};
pub use error::{Error, Result};
pub use model::{
    AnalyzeResult, Book, BoundingRegion, Chapter, DocumentElement, ElementKind, Paragraph,
    ParagraphRole, Table, TableCell, TocEntry,
};
pub use render::{FrontMatter, JsonFormat, RenderOptions, RepairOptions};

use std::io::Read;
use std::path::Path;

/// Load a layout analysis result from a JSON file.
///
/// # Example
///
/// ```no_run
/// use reprint::load_file;
///
/// let result = load_file("analysis.json").unwrap();
/// println!("Paragraphs: {}", result.paragraphs.len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AnalyzeResult> {
    let file = std::fs::File::open(path)?;
    AnalyzeResult::from_reader(std::io::BufReader::new(file))
}

/// Build a book from a layout analysis JSON file with default options.
///
/// The file stem is used as the title when the document has none.
pub fn build_file<P: AsRef<Path>>(path: P) -> Result<Book> {
    Reprint::new().build_file(path)
}

/// Build a book from layout analysis JSON read from `reader`.
pub fn build_reader<R: Read>(reader: R) -> Result<Book> {
    Reprint::new().build_reader(reader)
}

/// Convert a layout analysis JSON file straight to book JSON.
///
/// # Example
///
/// ```no_run
/// use reprint::{to_json, JsonFormat};
///
/// let json = to_json("analysis.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("book.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let book = build_file(path)?;
    render::to_json(&book, format)
}

/// Builder for rebuilding documents.
///
/// # Example
///
/// ```no_run
/// use reprint::Reprint;
///
/// let book = Reprint::new()
///     .with_title("Field Guide")
///     .drop_front_matter()
///     .without_links()
///     .build_file("analysis.json")?;
/// # Ok::<(), reprint::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reprint {
    options: BuildOptions,
}

impl Reprint {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Title to use when the document has no title paragraph.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_fallback_title(title);
        self
    }

    /// Drop content preceding the first section heading.
    pub fn drop_front_matter(mut self) -> Self {
        self.options.render = self.options.render.drop_front_matter();
        self
    }

    /// Give every footnote an identifier unique within the document.
    pub fn unique_footnote_ids(mut self) -> Self {
        self.options.render = self.options.render.with_unique_footnote_ids(true);
        self
    }

    /// Disable URL linking.
    pub fn without_links(mut self) -> Self {
        self.options.repair = self.options.repair.with_links(false);
        self
    }

    /// Disable dehyphenation.
    pub fn without_dehyphenation(mut self) -> Self {
        self.options.repair = self.options.repair.with_hyphenation(false);
        self
    }

    /// Replace the chapter stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.options = self.options.with_stylesheet(stylesheet);
        self
    }

    /// The accumulated build options.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a book from an in-memory analysis result.
    pub fn build(&self, result: &AnalyzeResult) -> Result<Book> {
        DocumentBuilder::new()
            .with_options(self.options.clone())
            .build(result)
    }

    /// Build a book from analysis JSON read from `reader`.
    pub fn build_reader<R: Read>(&self, reader: R) -> Result<Book> {
        let result = AnalyzeResult::from_reader(reader)?;
        self.build(&result)
    }

    /// Build a book from an analysis JSON file.
    ///
    /// Without an explicit title the file stem is the fallback.
    pub fn build_file<P: AsRef<Path>>(&self, path: P) -> Result<Book> {
        let path = path.as_ref();
        let result = load_file(path)?;

        let mut options = self.options.clone();
        if options.fallback_title.is_none() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                options = options.with_fallback_title(stem);
            }
        }

        DocumentBuilder::new().with_options(options).build(&result)
    }
}
