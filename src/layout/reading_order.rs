//! Reading-order reconstruction.
//!
//! The layout service reports paragraphs and tables as two independent
//! streams. Each stream is already in raster order within a page, so the
//! paragraph stream is kept as the spine of the page and every table is
//! spliced in where it visually collides with the text.

use log::debug;

use super::grouping::{region_of, PageGrouping};
use crate::error::Result;
use crate::model::DocumentElement;

/// Merge paragraphs and tables into one reading-order sequence.
///
/// Pages are visited in ascending order. On each page, tables are taken in
/// extraction order; a table is placed immediately before the first
/// paragraph whose bounding box intersects its own. Once a table is placed,
/// the paragraphs from that point on are claimed, so later tables only
/// search the paragraphs in front of it. A table that collides with no
/// remaining paragraph is placed after the page's paragraphs.
///
/// The output is a permutation of the input.
///
/// # Errors
///
/// Fails when an element has no bounding region or a region's polygon is
/// malformed.
pub fn reconstruct(elements: Vec<DocumentElement>) -> Result<Vec<DocumentElement>> {
    let order = reading_order(&elements)?;

    let mut slots: Vec<Option<DocumentElement>> = elements.into_iter().map(Some).collect();
    Ok(order.into_iter().filter_map(|idx| slots[idx].take()).collect())
}

/// Compute the reading order as indices into `elements`.
pub fn reading_order(elements: &[DocumentElement]) -> Result<Vec<usize>> {
    let grouping = PageGrouping::build(elements)?;
    let mut order = Vec::with_capacity(elements.len());

    for page in grouping.pages() {
        let paragraphs = grouping.paragraphs_on(page);
        let tables = grouping.tables_on(page);

        // anchors[i] = table placed right before paragraph i
        let mut anchors: Vec<Option<usize>> = vec![None; paragraphs.len()];
        let mut trailing = Vec::new();
        let mut front = paragraphs.len();

        for &table_idx in tables {
            let table_region = region_of(elements, table_idx)?;
            let mut hit = None;
            for (pos, &para_idx) in paragraphs[..front].iter().enumerate() {
                if region_of(elements, para_idx)?.intersects(table_region)? {
                    hit = Some(pos);
                    break;
                }
            }

            match hit {
                Some(pos) => {
                    debug!(
                        "page {}: table {} placed before paragraph {}",
                        page, table_idx, paragraphs[pos]
                    );
                    anchors[pos] = Some(table_idx);
                    front = pos;
                }
                None => {
                    debug!("page {}: table {} collides with no paragraph", page, table_idx);
                    trailing.push(table_idx);
                }
            }
        }

        for (pos, &para_idx) in paragraphs.iter().enumerate() {
            if let Some(table_idx) = anchors[pos] {
                order.push(table_idx);
            }
            order.push(para_idx);
        }
        order.extend(trailing);
    }

    Ok(order)
}
