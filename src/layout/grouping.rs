//! Element classification and per-page, per-kind grouping.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::model::{AnalyzeResult, BoundingRegion, DocumentElement, ElementKind};

/// Tag every paragraph and table of an analysis result as a document element.
///
/// Paragraphs come first, then tables, each stream in extraction order.
pub fn classify(result: &AnalyzeResult) -> Vec<DocumentElement> {
    let mut elements = Vec::with_capacity(result.paragraphs.len() + result.tables.len());
    elements.extend(result.paragraphs.iter().cloned().map(DocumentElement::Paragraph));
    elements.extend(result.tables.iter().cloned().map(DocumentElement::Table));
    elements
}

/// Owned-input variant of [`classify`].
pub fn classify_owned(result: AnalyzeResult) -> Vec<DocumentElement> {
    let AnalyzeResult { paragraphs, tables } = result;
    let mut elements = Vec::with_capacity(paragraphs.len() + tables.len());
    elements.extend(paragraphs.into_iter().map(DocumentElement::Paragraph));
    elements.extend(tables.into_iter().map(DocumentElement::Table));
    elements
}

/// Elements grouped by kind, then by page number.
///
/// Entries are indices into the slice the grouping was built from, in the
/// slice's order, so each page list keeps extraction order.
#[derive(Debug, Clone, Default)]
pub struct PageGrouping {
    paragraphs: BTreeMap<u32, Vec<usize>>,
    tables: BTreeMap<u32, Vec<usize>>,
}

impl PageGrouping {
    /// Group elements by kind and by the page of their first bounding region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBoundingRegion`] when an element has no region.
    /// The reported index counts elements of the same kind.
    pub fn build(elements: &[DocumentElement]) -> Result<Self> {
        let mut grouping = PageGrouping::default();
        let mut seen_paragraphs = 0;
        let mut seen_tables = 0;

        for (idx, element) in elements.iter().enumerate() {
            let kind = element.kind();
            let ordinal = match kind {
                ElementKind::Paragraph => &mut seen_paragraphs,
                ElementKind::Table => &mut seen_tables,
            };
            let page = element
                .page_number()
                .ok_or(Error::MissingBoundingRegion {
                    kind,
                    index: *ordinal,
                })?;
            *ordinal += 1;

            let by_page = match kind {
                ElementKind::Paragraph => &mut grouping.paragraphs,
                ElementKind::Table => &mut grouping.tables,
            };
            by_page.entry(page).or_default().push(idx);
        }

        Ok(grouping)
    }

    /// Every page that holds at least one element, ascending.
    pub fn pages(&self) -> Vec<u32> {
        self.paragraphs
            .keys()
            .chain(self.tables.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Indices of the paragraphs on a page (empty if none).
    pub fn paragraphs_on(&self, page: u32) -> &[usize] {
        self.paragraphs.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the tables on a page (empty if none).
    pub fn tables_on(&self, page: u32) -> &[usize] {
        self.tables.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the elements of one kind on a page.
    pub fn on_page(&self, kind: ElementKind, page: u32) -> &[usize] {
        match kind {
            ElementKind::Paragraph => self.paragraphs_on(page),
            ElementKind::Table => self.tables_on(page),
        }
    }
}

/// First bounding region of an element that [`PageGrouping::build`] accepted.
///
/// Like [`PageGrouping::build`], a missing region is reported by the
/// element's position among elements of the same kind.
pub(crate) fn region_of(elements: &[DocumentElement], idx: usize) -> Result<&BoundingRegion> {
    let element = &elements[idx];
    element.region().ok_or_else(|| {
        let kind = element.kind();
        Error::MissingBoundingRegion {
            kind,
            index: elements[..idx].iter().filter(|e| e.kind() == kind).count(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table};

    fn para(page: u32, text: &str) -> DocumentElement {
        Paragraph::new(text, BoundingRegion::rect(page, 0.0, 0.0, 1.0, 1.0)).into()
    }

    fn table(page: u32) -> DocumentElement {
        Table::new(1, 1, BoundingRegion::rect(page, 0.0, 0.0, 1.0, 1.0)).into()
    }

    #[test]
    fn test_classify_order() {
        let mut result = AnalyzeResult::new();
        result.add_table(Table::new(1, 1, BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0)));
        result.add_paragraph(Paragraph::new("a", BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0)));
        result.add_paragraph(Paragraph::new("b", BoundingRegion::rect(2, 0.0, 0.0, 1.0, 1.0)));

        let elements = classify(&result);
        let kinds: Vec<_> = elements.iter().map(DocumentElement::kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Paragraph, ElementKind::Paragraph, ElementKind::Table]
        );
        assert_eq!(classify_owned(result), elements);
    }

    #[test]
    fn test_grouping_by_page() {
        let elements = vec![para(2, "a"), para(1, "b"), table(3), para(2, "c"), table(2)];
        let grouping = PageGrouping::build(&elements).unwrap();

        assert_eq!(grouping.pages(), vec![1, 2, 3]);
        assert_eq!(grouping.paragraphs_on(2), &[0, 3]);
        assert_eq!(grouping.paragraphs_on(1), &[1]);
        assert_eq!(grouping.tables_on(2), &[4]);
        assert_eq!(grouping.on_page(ElementKind::Table, 3), &[2]);
        assert!(grouping.paragraphs_on(3).is_empty());
        assert!(grouping.tables_on(9).is_empty());
    }

    #[test]
    fn test_grouping_missing_region() {
        let mut bare = Table::new(1, 1, BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0));
        bare.bounding_regions.clear();
        let elements = vec![para(1, "a"), table(1), bare.into()];

        let err = PageGrouping::build(&elements).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingBoundingRegion {
                kind: ElementKind::Table,
                index: 1
            }
        ));
    }

    #[test]
    fn test_region_of_reports_kind_ordinal() {
        let mut bare = Table::new(1, 1, BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0));
        bare.bounding_regions.clear();
        let elements = vec![para(1, "a"), para(1, "b"), table(1), bare.into()];

        assert_eq!(region_of(&elements, 2).unwrap().page_number, 1);
        let err = region_of(&elements, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingBoundingRegion {
                kind: ElementKind::Table,
                index: 1
            }
        ));
        assert_eq!(
            PageGrouping::build(&elements).unwrap_err().to_string(),
            err.to_string()
        );
    }
}
