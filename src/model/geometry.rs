//! Page geometry: bounding regions and axis-aligned boxes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A page number plus the polygon that outlines an element on that page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Flat coordinate list: `[x0, y0, x1, y1, ...]`
    #[serde(default)]
    pub polygon: Vec<f64>,
}

impl BoundingRegion {
    /// Create a new bounding region.
    pub fn new(page_number: u32, polygon: Vec<f64>) -> Self {
        Self {
            page_number,
            polygon,
        }
    }

    /// Create an axis-aligned rectangular region from two corners.
    pub fn rect(page_number: u32, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(page_number, vec![x0, y0, x1, y0, x1, y1, x0, y1])
    }

    /// Derive the bounding box of this region's polygon.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        BoundingBox::from_polygon(&self.polygon)
    }

    /// Check whether this region's box intersects another region's box.
    ///
    /// Only the boxes are compared; page numbers are the caller's concern.
    pub fn intersects(&self, other: &BoundingRegion) -> Result<bool> {
        Ok(intersects(&self.bounding_box()?, &other.bounding_box()?))
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge
    pub min_x: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub min_y: f64,
    /// Bottom edge
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a box from its edges, normalizing so that `min <= max`.
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            max_x: x0.max(x1),
            min_y: y0.min(y1),
            max_y: y0.max(y1),
        }
    }

    /// Derive the box spanned by a flat `[x, y, x, y, ...]` polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolygon`] when the list is empty or has an odd
    /// number of coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use reprint::model::BoundingBox;
    ///
    /// let bbox = BoundingBox::from_polygon(&[1.0, 2.0, 4.0, 2.0, 4.0, 6.0, 1.0, 6.0]).unwrap();
    /// assert_eq!((bbox.min_x, bbox.max_x), (1.0, 4.0));
    /// assert_eq!((bbox.min_y, bbox.max_y), (2.0, 6.0));
    /// ```
    pub fn from_polygon(polygon: &[f64]) -> Result<Self> {
        if polygon.is_empty() {
            return Err(Error::InvalidPolygon("polygon has no points".to_string()));
        }
        if polygon.len() % 2 != 0 {
            return Err(Error::InvalidPolygon(format!(
                "odd coordinate count {}",
                polygon.len()
            )));
        }

        let mut bbox = BoundingBox {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for point in polygon.chunks_exact(2) {
            bbox.min_x = bbox.min_x.min(point[0]);
            bbox.max_x = bbox.max_x.max(point[0]);
            bbox.min_y = bbox.min_y.min(point[1]);
            bbox.max_y = bbox.max_y.max(point[1]);
        }
        Ok(bbox)
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check intersection with another box. See [`intersects`].
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        intersects(self, other)
    }
}

/// Check whether two boxes overlap. Touching edges count as overlap.
pub fn intersects(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.max_y < b.min_y || b.max_y < a.min_y || a.min_x > b.max_x || b.min_x > a.max_x)
}
