//! Brace notation for geometry values.
//!
//! * Point: `{x, y}`
//! * Size: `{width, height}`
//! * Rect: `{{x, y}, {width, height}}`
//!
//! Formatting honors a precision if one is given (`{:.2}`), otherwise it uses
//! the shortest representation that parses back to the same `f64`.
//! Parsing accepts ASCII whitespace between tokens and any component
//! `f64::from_str` accepts, including `inf` and `NaN`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseGeometryError, Result};
use crate::geometry::{Point, Rect, Size};

#[cfg(test)]
mod tests;

fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
	match f.precision() {
		Some(precision) => write!(f, "{value:.precision$}"),
		None => write!(f, "{value}"),
	}
}

fn write_pair(f: &mut fmt::Formatter<'_>, a: f64, b: f64) -> fmt::Result {
	f.write_str("{")?;
	write_component(f, a)?;
	f.write_str(", ")?;
	write_component(f, b)?;
	f.write_str("}")
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_pair(f, self.x, self.y)
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_pair(f, self.width, self.height)
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		fmt::Display::fmt(&self.origin, f)?;
		f.write_str(", ")?;
		fmt::Display::fmt(&self.size, f)?;
		f.write_str("}")
	}
}

fn is_ascii_whitespace(c: char) -> bool {
	c.is_ascii_whitespace()
}

fn trim_ascii_whitespace(s: &str) -> &str {
	s.trim_matches(is_ascii_whitespace)
}

/// Byte cursor over the input being parsed.
struct Cursor<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(input: &'a str) -> Result<Self> {
		if trim_ascii_whitespace(input).is_empty() {
			return Err(ParseGeometryError::Empty);
		}
		Ok(Self { input, pos: 0 })
	}

	fn skip_whitespace(&mut self) {
		let rest = &self.input[self.pos..];
		self.pos += rest.len() - rest.trim_start_matches(is_ascii_whitespace).len();
	}

	fn peek(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	fn expect(&mut self, expected: char) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			Some(c) if c == expected => {
				self.pos += c.len_utf8();
				Ok(())
			}
			found => Err(ParseGeometryError::Expected {
				expected,
				found,
				offset: self.pos,
			}),
		}
	}

	/// Reads one component up to the next structural character.
	fn number(&mut self) -> Result<f64> {
		let rest = &self.input[self.pos..];
		let len = rest.find([',', '{', '}']).unwrap_or(rest.len());
		let text = trim_ascii_whitespace(&rest[..len]);
		self.pos += len;
		text.parse().map_err(|source| ParseGeometryError::Number {
			text: text.to_string(),
			source,
		})
	}

	fn pair(&mut self) -> Result<(f64, f64)> {
		self.expect('{')?;
		let a = self.number()?;
		self.expect(',')?;
		let b = self.number()?;
		self.expect('}')?;
		Ok((a, b))
	}

	fn finish(mut self) -> Result<()> {
		self.skip_whitespace();
		if self.pos < self.input.len() {
			return Err(ParseGeometryError::Trailing { offset: self.pos });
		}
		Ok(())
	}
}

impl FromStr for Point {
	type Err = ParseGeometryError;

	fn from_str(s: &str) -> Result<Self> {
		let mut cursor = Cursor::new(s)?;
		let (x, y) = cursor.pair()?;
		cursor.finish()?;
		Ok(Point::new(x, y))
	}
}

impl FromStr for Size {
	type Err = ParseGeometryError;

	fn from_str(s: &str) -> Result<Self> {
		let mut cursor = Cursor::new(s)?;
		let (width, height) = cursor.pair()?;
		cursor.finish()?;
		Ok(Size::new(width, height))
	}
}

impl FromStr for Rect {
	type Err = ParseGeometryError;

	fn from_str(s: &str) -> Result<Self> {
		let mut cursor = Cursor::new(s)?;
		cursor.expect('{')?;
		let (x, y) = cursor.pair()?;
		cursor.expect(',')?;
		let (width, height) = cursor.pair()?;
		cursor.expect('}')?;
		cursor.finish()?;
		Ok(Rect::from_xywh(x, y, width, height))
	}
}
