//! Document builder running the full rebuild pipeline.
//!
//! ```text
//! AnalyzeResult -> classify -> reconstruct -> filter_overlapping
//!               -> assemble chapters -> repair -> stylesheet -> Book
//! ```

use std::collections::BTreeSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Result;
use crate::layout::{classify, filter_overlapping, reconstruct};
use crate::model::{AnalyzeResult, Book, DocumentElement};
use crate::render::{
    apply_stylesheet, BuildStats, ChapterAssembler, DefaultVisitor, ElementVisitor,
    RenderOptions, RepairOptions, RepairPipeline, UrlExtractor, DEFAULT_STYLESHEET,
};

/// Title used when neither the document nor the caller provides one.
pub const UNTITLED: &str = "Untitled";

/// Options for building a book.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Element rendering options
    pub render: RenderOptions,

    /// Text repairs applied to chapter content
    pub repair: RepairOptions,

    /// Stylesheet prefixed to every chapter body
    pub stylesheet: String,

    /// Title to use when the document has no title paragraph
    pub fallback_title: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            repair: RepairOptions::default(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            fallback_title: None,
        }
    }
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Set repair options.
    pub fn with_repair_options(mut self, repair: RepairOptions) -> Self {
        self.repair = repair;
        self
    }

    /// Replace the chapter stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// Set the fallback title.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = Some(title.into());
        self
    }
}

/// Trait for writing a built book somewhere (EPUB container, directory, ...).
pub trait Packager {
    /// Package the book.
    fn package(&self, book: &Book) -> Result<()>;
}

/// Title for a document: its first title paragraph, else `fallback`, else
/// [`UNTITLED`].
pub fn document_title(result: &AnalyzeResult, fallback: Option<&str>) -> String {
    result
        .title()
        .filter(|t| !t.is_empty())
        .or_else(|| fallback.map(str::trim).filter(|t| !t.is_empty()))
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Build a book with default options.
pub fn build_book(result: &AnalyzeResult) -> Result<Book> {
    DocumentBuilder::new().build(result)
}

/// Build independent documents in parallel with default options.
pub fn build_books(results: &[AnalyzeResult]) -> Vec<Result<Book>> {
    DocumentBuilder::new().build_all(results)
}

/// Builder turning layout analysis results into chaptered books.
///
/// # Example
///
/// ```
/// use reprint::builder::{BuildOptions, DocumentBuilder};
/// use reprint::model::{AnalyzeResult, BoundingRegion, Paragraph, ParagraphRole};
///
/// let mut result = AnalyzeResult::new();
/// let region = BoundingRegion::rect(1, 0.0, 0.0, 5.0, 1.0);
/// result.add_paragraph(Paragraph::with_role("1. Intro", ParagraphRole::SectionHeading, region));
///
/// let book = DocumentBuilder::new()
///     .with_options(BuildOptions::new().with_fallback_title("Guide"))
///     .build(&result)?;
/// assert_eq!(book.title, "Guide");
/// assert_eq!(book.chapter_count(), 1);
/// # Ok::<(), reprint::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    options: BuildOptions,
    repair: RepairPipeline,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set build options.
    ///
    /// A URL extractor set with [`with_extractor`](Self::with_extractor)
    /// is kept.
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.repair = self.repair.with_options(options.repair);
        self.options = options;
        self
    }

    /// Replace the URL extractor used by the repair pipeline.
    pub fn with_extractor(mut self, extractor: Box<dyn UrlExtractor>) -> Self {
        self.repair = self.repair.with_extractor(extractor);
        self
    }

    /// The options this builder uses.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a book from a layout analysis result.
    pub fn build(&self, result: &AnalyzeResult) -> Result<Book> {
        self.build_with_visitor(result, &mut DefaultVisitor::new())
    }

    /// Build a book, letting `visitor` override element markup.
    pub fn build_with_visitor(
        &self,
        result: &AnalyzeResult,
        visitor: &mut dyn ElementVisitor,
    ) -> Result<Book> {
        let title = document_title(result, self.options.fallback_title.as_deref());

        let elements = classify(result);
        let page_count = elements
            .iter()
            .filter_map(DocumentElement::page_number)
            .collect::<BTreeSet<_>>()
            .len();

        let ordered = reconstruct(elements)?;
        let before = ordered.len();
        let kept = filter_overlapping(ordered)?;
        debug!(
            "{} elements in reading order, {} after overlap filtering",
            before,
            kept.len()
        );

        let mut render = self.options.render.clone();
        if render.front_matter_title.is_none() {
            render.front_matter_title = Some(title.clone());
        }

        let mut chapters = ChapterAssembler::new(render).assemble_with_visitor(&kept, visitor)?;
        for chapter in &mut chapters {
            let repaired = self.repair.process(&chapter.content);
            chapter.content = apply_stylesheet(&self.options.stylesheet, &repaired);
        }

        let mut stats = BuildStats {
            page_count: page_count as u32,
            paragraph_count: result.paragraphs.len() as u32,
            table_count: result.tables.len() as u32,
            filtered_paragraph_count: (before - kept.len()) as u32,
            chapter_count: chapters.len() as u32,
            ..Default::default()
        };
        for element in &kept {
            match element {
                DocumentElement::Paragraph(para) => {
                    if para.is_footnote() {
                        stats.footnote_count += 1;
                    }
                    stats.count_text(&para.content);
                }
                DocumentElement::Table(table) => stats.count_text(&table.plain_text()),
            }
        }

        info!("built \"{}\" with {} chapters", title, chapters.len());
        Ok(Book::new(title, chapters, stats))
    }

    /// Build independent documents in parallel.
    pub fn build_all(&self, results: &[AnalyzeResult]) -> Vec<Result<Book>> {
        results.par_iter().map(|result| self.build(result)).collect()
    }
}
