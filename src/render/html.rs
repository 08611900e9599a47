//! HTML rendering of paragraphs, headings and tables.

use log::warn;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::model::{Paragraph, ParagraphRole, Table};

use super::RenderOptions;

/// Convert a table to HTML with default options.
pub fn table_to_html(table: &Table) -> Result<String> {
    let mut output = String::new();
    HtmlRenderer::default().render_table(&mut output, table)?;
    Ok(output)
}

/// Convert a paragraph to HTML with default options.
pub fn paragraph_to_html(paragraph: &Paragraph) -> String {
    let mut output = String::new();
    HtmlRenderer::default().render_paragraph(&mut output, paragraph, 0);
    output
}

/// Convert a chapter heading to HTML with default options.
pub fn heading_to_html(title: &str) -> String {
    let mut output = String::new();
    HtmlRenderer::default().render_heading(&mut output, title);
    output
}

/// HTML renderer for document elements.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a paragraph according to its role.
    ///
    /// `position` is the paragraph's index in the reading order; it only
    /// matters when unique footnote identifiers are enabled.
    pub fn render_paragraph(&self, output: &mut String, para: &Paragraph, position: usize) {
        let text = self.text(&para.content);
        match para.role {
            ParagraphRole::Title => push_element(output, "h1", &text),
            ParagraphRole::SectionHeading => push_element(output, "h2", &text),
            ParagraphRole::PageHeader => push_element(output, "header", &text),
            ParagraphRole::PageFooter | ParagraphRole::Footnote => {
                let id = if self.options.unique_footnote_ids {
                    footnote_id_salted(&para.content, position)
                } else {
                    footnote_id(&para.content)
                };
                output.push_str(&format!(
                    "<aside epub:type=\"footnote\" id=\"{}\"><p>{}</p></aside>",
                    id, text
                ));
            }
            ParagraphRole::Body => push_element(output, "p", &text),
        }
    }

    /// Render a chapter heading at the depth implied by its numbering.
    pub fn render_heading(&self, output: &mut String, title: &str) {
        let title = title.trim();
        let tag = format!("h{}", heading_depth(title));
        push_element(output, &tag, &self.text(title));
    }

    /// Render a table by rebuilding its grid from the sparse cell list.
    ///
    /// Each grid slot holds the index of the cell covering it; only the
    /// slot at a cell's own anchor emits markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] when a cell is anchored outside the
    /// declared grid. Spans running past the grid edge are clipped.
    pub fn render_table(&self, output: &mut String, table: &Table) -> Result<()> {
        let rows = table.row_count;
        let columns = table.column_count;
        let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; columns]; rows];

        for (idx, cell) in table.cells.iter().enumerate() {
            if cell.row_index >= rows || cell.column_index >= columns {
                return Err(Error::CellOutOfBounds {
                    row: cell.row_index,
                    column: cell.column_index,
                    rows,
                    columns,
                });
            }

            let row_end = cell.row_index.saturating_add(cell.row_span.max(1));
            let column_end = cell.column_index.saturating_add(cell.column_span.max(1));
            if row_end > rows || column_end > columns {
                warn!(
                    "clipping cell at ({}, {}) spanning {}x{} to a {}x{} table",
                    cell.row_index, cell.column_index, cell.row_span, cell.column_span, rows, columns
                );
            }

            for row in &mut grid[cell.row_index..row_end.min(rows)] {
                for slot in &mut row[cell.column_index..column_end.min(columns)] {
                    *slot = Some(idx);
                }
            }
        }

        output.push_str("<div class=\"table-container\">\n<table class=\"epub-table\">\n");
        for (row_index, row) in grid.iter().enumerate() {
            output.push_str("<tr>");
            for (column_index, slot) in row.iter().enumerate() {
                let Some(idx) = *slot else { continue };
                let cell = &table.cells[idx];
                if cell.row_index != row_index || cell.column_index != column_index {
                    continue;
                }

                let tag = if cell.is_header() { "th" } else { "td" };
                let mut attrs = String::new();
                let row_span = cell.row_span.min(rows - row_index);
                let column_span = cell.column_span.min(columns - column_index);
                if row_span > 1 {
                    attrs.push_str(&format!(" rowspan=\"{}\"", row_span));
                }
                if column_span > 1 {
                    attrs.push_str(&format!(" colspan=\"{}\"", column_span));
                }
                output.push_str(&format!(
                    "<{}{}>{}</{}>",
                    tag,
                    attrs,
                    self.text(&cell.content),
                    tag
                ));
            }
            output.push_str("</tr>\n");
        }
        output.push_str("</table>\n</div>");

        Ok(())
    }

    fn text(&self, text: &str) -> String {
        if self.options.escape_html {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

fn push_element(output: &mut String, tag: &str, text: &str) {
    output.push_str(&format!("<{}>{}</{}>", tag, text, tag));
}

/// Heading depth implied by a hierarchical numbering prefix.
///
/// The leading token of the title is inspected; one trailing `.` is
/// ignored, and a token made of digit groups separated by `.` gives one
/// level per group. Titles without numbering are depth 1. The result is
/// clamped to 1..=6.
///
/// ```
/// use reprint::render::heading_depth;
///
/// assert_eq!(heading_depth("1. Intro"), 1);
/// assert_eq!(heading_depth("2.3 Scope"), 2);
/// assert_eq!(heading_depth("4.1.2. Notes"), 3);
/// assert_eq!(heading_depth("Appendix"), 1);
/// ```
pub fn heading_depth(title: &str) -> u8 {
    let token = title.split_whitespace().next().unwrap_or("");
    let token = token.strip_suffix('.').unwrap_or(token);

    let groups: Vec<&str> = token.split('.').collect();
    let numbered = !token.is_empty()
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit()));
    if !numbered {
        return 1;
    }

    groups.len().clamp(1, 6) as u8
}

/// Deterministic footnote identifier derived from the footnote text.
///
/// Identical texts yield identical identifiers; use
/// [`footnote_id_salted`] where that matters.
pub fn footnote_id(content: &str) -> String {
    digest_id(&[content.as_bytes()])
}

/// Footnote identifier that also depends on the footnote's position.
pub fn footnote_id_salted(content: &str, position: usize) -> String {
    digest_id(&[content.as_bytes(), &[0], &position.to_be_bytes()])
}

fn digest_id(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    format!("fn{:08x}", prefix)
}

/// Escape HTML special characters in text content.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingRegion, TableCell};

    fn region() -> BoundingRegion {
        BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_grid_without_spans() {
        let table = Table::new(2, 2, region())
            .with_cell(TableCell::header(0, 0, "Name"))
            .with_cell(TableCell::header(0, 1, "Age"))
            .with_cell(TableCell::new(1, 0, "Alice"))
            .with_cell(TableCell::new(1, 1, "30"));

        let html = table_to_html(&table).unwrap();
        assert_eq!(html.matches("<th>").count() + html.matches("<td>").count(), 4);
        assert!(!html.contains("rowspan"));
        assert!(!html.contains("colspan"));
        assert!(html.contains("<tr><th>Name</th><th>Age</th></tr>"));
        assert!(html.contains("<tr><td>Alice</td><td>30</td></tr>"));
        assert!(html.starts_with("<div class=\"table-container\">"));
    }

    #[test]
    fn test_row_span_emitted_once() {
        let table = Table::new(2, 2, region())
            .with_cell(TableCell::new(0, 0, "tall").row_span(2))
            .with_cell(TableCell::new(0, 1, "b"))
            .with_cell(TableCell::new(1, 1, "d"));

        let html = table_to_html(&table).unwrap();
        assert_eq!(html.matches("rowspan=\"2\"").count(), 1);
        assert_eq!(html.matches("tall").count(), 1);
        assert!(html.contains("<tr><td rowspan=\"2\">tall</td><td>b</td></tr>"));
        assert!(html.contains("<tr><td>d</td></tr>"));
    }

    #[test]
    fn test_column_span() {
        let table = Table::new(1, 3, region())
            .with_cell(TableCell::header(0, 0, "wide").column_span(2))
            .with_cell(TableCell::new(0, 2, "c"));

        let html = table_to_html(&table).unwrap();
        assert!(html.contains("<tr><th colspan=\"2\">wide</th><td>c</td></tr>"));
    }

    #[test]
    fn test_span_clipped_to_grid() {
        let table = Table::new(2, 2, region())
            .with_cell(TableCell::new(1, 1, "overflow").row_span(3).column_span(3))
            .with_cell(TableCell::new(0, 0, "a"));

        let html = table_to_html(&table).unwrap();
        assert!(html.contains("<td>a</td>"));
        assert_eq!(html.matches("overflow").count(), 1);
        assert!(html.contains("<td>overflow</td>"));
        assert!(!html.contains("rowspan"));
        assert!(!html.contains("colspan"));

        let table = Table::new(3, 3, region())
            .with_cell(TableCell::new(1, 0, "tall").row_span(5).column_span(4));
        let html = table_to_html(&table).unwrap();
        assert!(html.contains("<td rowspan=\"2\" colspan=\"3\">tall</td>"));
    }

    #[test]
    fn test_huge_span_saturates() {
        let table = Table::new(2, 2, region())
            .with_cell(TableCell::new(1, 0, "x").row_span(usize::MAX))
            .with_cell(TableCell::new(0, 1, "y").column_span(usize::MAX));

        let html = table_to_html(&table).unwrap();
        assert!(html.contains("<td>x</td>"));
        assert!(html.contains("<td>y</td>"));
        assert!(!html.contains("rowspan"));
        assert!(!html.contains("colspan"));
    }

    #[test]
    fn test_anchor_out_of_bounds() {
        let table = Table::new(1, 1, region()).with_cell(TableCell::new(0, 4, "lost"));
        assert!(matches!(
            table_to_html(&table),
            Err(Error::CellOutOfBounds { column: 4, .. })
        ));
    }

    #[test]
    fn test_empty_slots_skipped() {
        let table = Table::new(2, 2, region()).with_cell(TableCell::new(1, 0, "only"));
        let html = table_to_html(&table).unwrap();
        assert!(html.contains("<tr></tr>\n<tr><td>only</td></tr>"));
    }

    #[test]
    fn test_paragraph_roles() {
        let title = Paragraph::with_role("Book", ParagraphRole::Title, region());
        let heading = Paragraph::with_role("Part", ParagraphRole::SectionHeading, region());
        let header = Paragraph::with_role("Running", ParagraphRole::PageHeader, region());
        let body = Paragraph::new("Text & more", region());

        assert_eq!(paragraph_to_html(&title), "<h1>Book</h1>");
        assert_eq!(paragraph_to_html(&heading), "<h2>Part</h2>");
        assert_eq!(paragraph_to_html(&header), "<header>Running</header>");
        assert_eq!(paragraph_to_html(&body), "<p>Text &amp; more</p>");
    }

    #[test]
    fn test_footnote_markup() {
        let note = Paragraph::with_role("See page 2", ParagraphRole::Footnote, region());
        let html = paragraph_to_html(&note);
        let id = footnote_id("See page 2");
        assert_eq!(
            html,
            format!("<aside epub:type=\"footnote\" id=\"{}\"><p>See page 2</p></aside>", id)
        );
    }

    #[test]
    fn test_footnote_id_stable() {
        let id = footnote_id("note");
        assert_eq!(id, footnote_id("note"));
        assert_ne!(id, footnote_id("other note"));
        assert_eq!(id.len(), 10);
        assert!(id.starts_with("fn"));
        assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_footnote_id_salted() {
        assert_ne!(footnote_id_salted("note", 1), footnote_id_salted("note", 2));
        let renderer = HtmlRenderer::new(RenderOptions::new().with_unique_footnote_ids(true));
        let note = Paragraph::with_role("note", ParagraphRole::PageFooter, region());
        let mut a = String::new();
        let mut b = String::new();
        renderer.render_paragraph(&mut a, &note, 3);
        renderer.render_paragraph(&mut b, &note, 7);
        assert_ne!(a, b);
    }

    #[test]
    fn test_heading_depth() {
        assert_eq!(heading_depth("1. Intro"), 1);
        assert_eq!(heading_depth("1 Intro"), 1);
        assert_eq!(heading_depth("2.3 Scope"), 2);
        assert_eq!(heading_depth("4.1.2. Notes"), 3);
        assert_eq!(heading_depth("1.2.3.4.5.6.7 Deep"), 6);
        assert_eq!(heading_depth("Appendix A"), 1);
        assert_eq!(heading_depth("v1.0 release"), 1);
        assert_eq!(heading_depth(""), 1);
        assert_eq!(heading_depth("..."), 1);
    }

    #[test]
    fn test_heading_markup() {
        assert_eq!(heading_to_html("  2.1 Results "), "<h2>2.1 Results</h2>");
        assert_eq!(heading_to_html("Summary"), "<h1>Summary</h1>");
    }

    #[test]
    fn test_unescaped_text() {
        let renderer = HtmlRenderer::new(RenderOptions::new().with_escape_html(false));
        let mut html = String::new();
        renderer.render_paragraph(&mut html, &Paragraph::new("<b>x</b>", region()), 0);
        assert_eq!(html, "<p><b>x</b></p>");
    }
}
