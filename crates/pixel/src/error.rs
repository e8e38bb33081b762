//! Error types for parsing geometry text.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors that can occur when parsing a [`Point`](crate::Point),
/// [`Size`](crate::Size) or [`Rect`](crate::Rect) from brace notation.
///
/// Offsets are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGeometryError {
	/// The input was empty or only whitespace.
	#[error("empty input")]
	Empty,

	/// A structural character was missing.
	#[error("expected '{expected}' at offset {offset}, found {}", describe(*found))]
	Expected {
		/// The character that should have appeared.
		expected: char,
		/// What was there instead, or `None` at end of input.
		found: Option<char>,
		/// Where the character was expected.
		offset: usize,
	},

	/// A component could not be read as a number.
	#[error("invalid number '{text}': {source}")]
	Number {
		/// The offending component text.
		text: String,
		/// The underlying float parse error.
		source: ParseFloatError,
	},

	/// Input continued after a complete value.
	#[error("unexpected trailing input at offset {offset}")]
	Trailing {
		/// Start of the trailing input.
		offset: usize,
	},
}

fn describe(found: Option<char>) -> String {
	match found {
		Some(c) => format!("'{c}'"),
		None => "end of input".to_string(),
	}
}

/// Result type for geometry parsing.
pub type Result<T> = std::result::Result<T, ParseGeometryError>;
