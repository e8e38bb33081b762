//! Value types for pixel coordinates.
//!
//! These carry no invariants: any `f64` is a valid component, including
//! negative sizes, NaN and infinities. Arithmetic is component-wise and never
//! validates its inputs.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};


/// A location in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	/// The origin.
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Creates a new point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A width/height pair.
///
/// Used both as the extent of a [`Rect`] and as a displacement added to a
/// [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const ZERO: Self = Self::new(0.0, 0.0);

	/// Creates a new size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// An axis-aligned rectangle with an origin and a signed size.
///
/// Nothing keeps `size` non-negative. Use [`Rect::standardized`] when a
/// consumer needs the origin at the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	pub origin: Point,
	pub size: Size,
}

impl Rect {
	pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);

	/// Creates a new rectangle.
	pub const fn new(origin: Point, size: Size) -> Self {
		Self { origin, size }
	}

	/// Creates a rectangle from raw components.
	pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self::new(Point::new(x, y), Size::new(width, height))
	}

	/// Returns the signed width.
	pub const fn width(&self) -> f64 {
		self.size.width
	}

	/// Returns the signed height.
	pub const fn height(&self) -> f64 {
		self.size.height
	}

	/// Returns the smallest x coordinate covered by the rect.
	///
	/// NaN in either component gives NaN.
	pub fn min_x(&self) -> f64 {
		if self.size.width >= 0.0 {
			self.origin.x
		} else {
			self.origin.x + self.size.width
		}
	}

	/// Returns the largest x coordinate covered by the rect.
	pub fn max_x(&self) -> f64 {
		if self.size.width < 0.0 {
			self.origin.x
		} else {
			self.origin.x + self.size.width
		}
	}

	/// Returns the smallest y coordinate covered by the rect.
	pub fn min_y(&self) -> f64 {
		if self.size.height >= 0.0 {
			self.origin.y
		} else {
			self.origin.y + self.size.height
		}
	}

	/// Returns the largest y coordinate covered by the rect.
	pub fn max_y(&self) -> f64 {
		if self.size.height < 0.0 {
			self.origin.y
		} else {
			self.origin.y + self.size.height
		}
	}

	/// Returns the midpoint of the rect.
	pub fn center(&self) -> Point {
		Point::new(
			self.origin.x + self.size.width / 2.0,
			self.origin.y + self.size.height / 2.0,
		)
	}

	/// Returns true if neither dimension is negative.
	///
	/// NaN dimensions are not standardized.
	pub fn is_standardized(&self) -> bool {
		self.size.width >= 0.0 && self.size.height >= 0.0
	}

	/// Returns the same covered area with a non-negative size.
	///
	/// A negative dimension moves the origin to the opposite edge and flips
	/// the sign. NaN components are left as they are.
	pub fn standardized(&self) -> Self {
		let mut rect = *self;
		if rect.size.width < 0.0 {
			rect.origin.x += rect.size.width;
			rect.size.width = -rect.size.width;
		}
		if rect.size.height < 0.0 {
			rect.origin.y += rect.size.height;
			rect.size.height = -rect.size.height;
		}
		rect
	}
}

impl Add<Size> for Point {
	type Output = Point;

	fn add(self, delta: Size) -> Point {
		Point::new(self.x + delta.width, self.y + delta.height)
	}
}

impl Sub<Size> for Point {
	type Output = Point;

	fn sub(self, delta: Size) -> Point {
		Point::new(self.x - delta.width, self.y - delta.height)
	}
}

/// The offset that carries `rhs` onto `self`.
impl Sub for Point {
	type Output = Size;

	fn sub(self, rhs: Point) -> Size {
		Size::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Add for Size {
	type Output = Size;

	fn add(self, rhs: Size) -> Size {
		Size::new(self.width + rhs.width, self.height + rhs.height)
	}
}

impl Mul<f64> for Size {
	type Output = Size;

	fn mul(self, factor: f64) -> Size {
		Size::new(self.width * factor, self.height * factor)
	}
}

impl Neg for Size {
	type Output = Size;

	fn neg(self) -> Size {
		Size::new(-self.width, -self.height)
	}
}
