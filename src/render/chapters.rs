//! Segmentation of the reading-order sequence into chapters.

use log::{debug, warn};

use crate::error::Result;
use crate::model::{Chapter, DocumentElement};

use super::html::heading_depth;
use super::visitor::{DefaultVisitor, ElementVisitor, VisitorAction};
use super::{FrontMatter, HtmlRenderer, RenderOptions};

/// Title of the implicit first chapter when no document title is known.
pub const FRONT_MATTER_TITLE: &str = "Front Matter";

/// Walks reconstructed elements and cuts them into chapters at section
/// headings.
#[derive(Debug, Clone, Default)]
pub struct ChapterAssembler {
    renderer: HtmlRenderer,
}

impl ChapterAssembler {
    /// Create a new assembler.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: HtmlRenderer::new(options),
        }
    }

    /// Assemble chapters with default element markup.
    pub fn assemble(&self, elements: &[DocumentElement]) -> Result<Vec<Chapter>> {
        self.assemble_with_visitor(elements, &mut DefaultVisitor::new())
    }

    /// Assemble chapters, letting `visitor` override element markup.
    ///
    /// Every section heading seals the open chapter and opens a new one
    /// whose first fragment is the heading itself. Content before the
    /// first heading follows [`RenderOptions::front_matter`].
    pub fn assemble_with_visitor(
        &self,
        elements: &[DocumentElement],
        visitor: &mut dyn ElementVisitor,
    ) -> Result<Vec<Chapter>> {
        let mut chapters = Vec::new();
        let mut current: Option<OpenChapter> = None;
        let mut dropped = 0usize;

        for (position, element) in elements.iter().enumerate() {
            let fragment = match element {
                DocumentElement::Paragraph(para) if para.is_section_heading() => {
                    if let Some(open) = current.take() {
                        chapters.push(open.seal(chapters.len() + 1));
                    }

                    let title = para.content.trim().to_string();
                    let level = heading_depth(&title);
                    let heading = match visitor.visit_heading(&title, level) {
                        VisitorAction::Continue => {
                            let mut html = String::new();
                            self.renderer.render_heading(&mut html, &title);
                            Some(html)
                        }
                        VisitorAction::Replace(html) => Some(html),
                        VisitorAction::Skip => None,
                    };

                    let mut open = OpenChapter::new(title, level);
                    open.fragments.extend(heading);
                    current = Some(open);
                    continue;
                }
                DocumentElement::Paragraph(para) => match visitor.visit_paragraph(para) {
                    VisitorAction::Continue => {
                        let mut html = String::new();
                        self.renderer.render_paragraph(&mut html, para, position);
                        html
                    }
                    VisitorAction::Replace(html) => html,
                    VisitorAction::Skip => continue,
                },
                DocumentElement::Table(table) => match visitor.visit_table(table) {
                    VisitorAction::Continue => {
                        let mut html = String::new();
                        self.renderer.render_table(&mut html, table)?;
                        html
                    }
                    VisitorAction::Replace(html) => html,
                    VisitorAction::Skip => continue,
                },
            };

            match current.as_mut() {
                Some(open) => open.fragments.push(fragment),
                None => match self.renderer.options().front_matter {
                    FrontMatter::Chapter => {
                        let title = self
                            .renderer
                            .options()
                            .front_matter_title
                            .clone()
                            .unwrap_or_else(|| FRONT_MATTER_TITLE.to_string());
                        let mut open = OpenChapter::new(title, 1);
                        open.fragments.push(fragment);
                        current = Some(open);
                    }
                    FrontMatter::Drop => dropped += 1,
                },
            }
        }

        if let Some(open) = current.take() {
            chapters.push(open.seal(chapters.len() + 1));
        }

        if dropped > 0 {
            warn!("dropped {} elements preceding the first section heading", dropped);
        }
        debug!("assembled {} chapters from {} elements", chapters.len(), elements.len());

        Ok(chapters)
    }
}

/// A chapter still collecting fragments.
struct OpenChapter {
    title: String,
    level: u8,
    fragments: Vec<String>,
}

impl OpenChapter {
    fn new(title: String, level: u8) -> Self {
        Self {
            title,
            level,
            fragments: Vec::new(),
        }
    }

    fn seal(self, number: usize) -> Chapter {
        Chapter::new(number, self.title, self.level, self.fragments.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingRegion, Paragraph, ParagraphRole, Table, TableCell};

    fn region() -> BoundingRegion {
        BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0)
    }

    fn heading(text: &str) -> DocumentElement {
        Paragraph::with_role(text, ParagraphRole::SectionHeading, region()).into()
    }

    fn body(text: &str) -> DocumentElement {
        Paragraph::new(text, region()).into()
    }

    #[test]
    fn test_chapters_split_at_headings() {
        let elements = vec![
            heading("1. Intro"),
            body("first"),
            heading(" 1.1 Detail "),
            body("second"),
            Table::new(1, 1, region())
                .with_cell(TableCell::new(0, 0, "cell"))
                .into(),
        ];
        let chapters = ChapterAssembler::default().assemble(&elements).unwrap();

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "1. Intro");
        assert_eq!(chapters[0].level, 1);
        assert_eq!(chapters[0].content, "<h1>1. Intro</h1>\n<p>first</p>");
        assert_eq!(chapters[1].title, "1.1 Detail");
        assert_eq!(chapters[1].level, 2);
        assert_eq!(chapters[1].id, "chapter_2");
        assert!(chapters[1].content.starts_with("<h2>1.1 Detail</h2>\n<p>second</p>\n<div"));
        assert!(chapters[1].content.contains("<td>cell</td>"));
    }

    #[test]
    fn test_front_matter_chapter() {
        let elements = vec![
            Paragraph::with_role("The Book", ParagraphRole::Title, region()).into(),
            heading("1. Intro"),
        ];
        let options = RenderOptions::new().with_front_matter_title("The Book");
        let chapters = ChapterAssembler::new(options).assemble(&elements).unwrap();

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "The Book");
        assert_eq!(chapters[0].content, "<h1>The Book</h1>");
        assert_eq!(chapters[0].id, "chapter_1");
        assert_eq!(chapters[1].id, "chapter_2");
    }

    #[test]
    fn test_front_matter_default_title() {
        let chapters = ChapterAssembler::default().assemble(&[body("preface")]).unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, FRONT_MATTER_TITLE);
    }

    #[test]
    fn test_front_matter_dropped() {
        let elements = vec![body("preface"), heading("Chapter"), body("text")];
        let options = RenderOptions::new().drop_front_matter();
        let chapters = ChapterAssembler::new(options).assemble(&elements).unwrap();

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].content, "<h1>Chapter</h1>\n<p>text</p>");
        assert_eq!(chapters[0].id, "chapter_1");
    }

    #[test]
    fn test_empty_sequence() {
        assert!(ChapterAssembler::default().assemble(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_visitor_overrides() {
        struct Override;
        impl ElementVisitor for Override {
            fn visit_table(&mut self, _table: &Table) -> VisitorAction {
                VisitorAction::Replace("<p>[table]</p>".to_string())
            }
            fn visit_heading(&mut self, _title: &str, _level: u8) -> VisitorAction {
                VisitorAction::Skip
            }
        }

        let elements = vec![heading("2 Data"), Table::new(1, 1, region()).into()];
        let chapters = ChapterAssembler::default()
            .assemble_with_visitor(&elements, &mut Override)
            .unwrap();

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "2 Data");
        assert_eq!(chapters[0].content, "<p>[table]</p>");
    }

    #[test]
    fn test_table_error_propagates() {
        let bad = Table::new(1, 1, region()).with_cell(TableCell::new(2, 0, "x"));
        let elements = vec![heading("1 A"), bad.into()];
        assert!(ChapterAssembler::default().assemble(&elements).is_err());
    }
}
