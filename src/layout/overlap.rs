//! Removal of paragraphs that duplicate table content.
//!
//! The layout service re-detects table cell text as standalone paragraphs.
//! Those paragraphs sit inside the table's region, so any paragraph whose
//! box touches a table on the same page is dropped.

use log::debug;

use super::grouping::{region_of, PageGrouping};
use crate::error::Result;
use crate::model::DocumentElement;

/// Drop every paragraph that intersects a table on its page.
///
/// Tables are always kept and the relative order of the survivors is
/// unchanged. Returns the filtered elements.
pub fn filter_overlapping(elements: Vec<DocumentElement>) -> Result<Vec<DocumentElement>> {
    let keep = retained(&elements)?;
    Ok(elements
        .into_iter()
        .zip(keep)
        .filter_map(|(element, keep)| keep.then_some(element))
        .collect())
}

/// Per-element keep flags for [`filter_overlapping`].
pub fn retained(elements: &[DocumentElement]) -> Result<Vec<bool>> {
    let grouping = PageGrouping::build(elements)?;
    let mut keep = vec![true; elements.len()];

    for page in grouping.pages() {
        let tables = grouping.tables_on(page);
        if tables.is_empty() {
            continue;
        }

        for &para_idx in grouping.paragraphs_on(page) {
            let para_region = region_of(elements, para_idx)?;
            for &table_idx in tables {
                if para_region.intersects(region_of(elements, table_idx)?)? {
                    keep[para_idx] = false;
                    break;
                }
            }
        }
    }

    let dropped = keep.iter().filter(|k| !**k).count();
    if dropped > 0 {
        debug!("dropped {} paragraphs overlapping tables", dropped);
    }
    Ok(keep)
}
