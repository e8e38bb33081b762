//! Pixel-space geometry for the map view: points, sizes, rects, and the
//! pivot scaling and translation used to zoom and pan drawn content.

pub mod error;
pub mod geometry;
pub mod text;
pub mod transform;

pub use error::{ParseGeometryError, Result};
pub use geometry::{Point, Rect, Size};
pub use transform::{scale_point_about, scale_rect_about, translate_point_by, translate_rect_by};
