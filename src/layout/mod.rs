//! Layout reconstruction: classification, reading order, overlap filtering.

mod grouping;
mod overlap;
mod reading_order;

pub use grouping::{classify, classify_owned, PageGrouping};
pub use overlap::{filter_overlapping, retained};
pub use reading_order::{reading_order, reconstruct};
