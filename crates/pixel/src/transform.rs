//! Zoom and pan transforms.
//!
//! All four are total over `f64`. Nothing is validated or normalized: a zero
//! factor collapses onto the pivot, a negative factor reflects through it and
//! leaves rects with negative sizes, and NaN propagates.

use crate::geometry::{Point, Rect, Size};

/// Scales `point`'s offset from `pivot` by `factor`.
///
/// Computes `pivot + (point - pivot) * factor` on each axis. The pivot is a
/// fixed point for every factor.
#[inline]
pub fn scale_point_about(point: Point, factor: f64, pivot: Point) -> Point {
	pivot + (point - pivot) * factor
}

/// Scales a rect about `pivot`.
///
/// The origin moves like [`scale_point_about`]. The size has no fixed point
/// and is multiplied by `factor` directly.
#[inline]
pub fn scale_rect_about(rect: Rect, factor: f64, pivot: Point) -> Rect {
	Rect::new(scale_point_about(rect.origin, factor, pivot), rect.size * factor)
}

/// Moves `point` by the displacement `delta`.
#[inline]
pub fn translate_point_by(point: Point, delta: Size) -> Point {
	point + delta
}

/// Moves a rect's origin by `delta`, keeping its size.
#[inline]
pub fn translate_rect_by(rect: Rect, delta: Size) -> Rect {
	Rect::new(translate_point_by(rect.origin, delta), rect.size)
}

impl Point {
	/// Method form of [`scale_point_about`].
	pub fn scale_about(self, factor: f64, pivot: Point) -> Point {
		scale_point_about(self, factor, pivot)
	}

	/// Method form of [`translate_point_by`].
	pub fn translate_by(self, delta: Size) -> Point {
		translate_point_by(self, delta)
	}
}

impl Rect {
	/// Method form of [`scale_rect_about`].
	pub fn scale_about(self, factor: f64, pivot: Point) -> Rect {
		scale_rect_about(self, factor, pivot)
	}

	/// Method form of [`translate_rect_by`].
	pub fn translate_by(self, delta: Size) -> Rect {
		translate_rect_by(self, delta)
	}
}
