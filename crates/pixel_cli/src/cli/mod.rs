//! CLI schema and evaluation for the wm-pixel binary.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use waymark_pixel::{Point, Rect, Size};


/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "wm-pixel")]
#[command(about = "Scale and translate pixel points and rects")]
#[command(version)]
pub struct Cli {
	/// Output format for the result
	#[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
	pub format: OutputFormat,

	/// Log at debug level unless WAYMARK_LOG says otherwise
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Transform to evaluate.
	#[command(subcommand)]
	pub command: Command,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
	/// Brace notation, e.g. `{{0, 0}, {5, 5}}`.
	#[default]
	Text,
	/// JSON object with named fields.
	Json,
}

/// Available transforms. Values use brace notation: `{x, y}` for points and
/// sizes, `{{x, y}, {w, h}}` for rects.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
	/// Scale a point about a pivot
	ScalePoint {
		/// Point to scale
		point: Point,
		/// Scale factor (negative reflects through the pivot)
		#[arg(short, long, allow_negative_numbers = true)]
		factor: f64,
		/// Fixed point of the scaling
		#[arg(short, long, default_value = "{0, 0}")]
		pivot: Point,
	},
	/// Scale a rect's origin about a pivot and its size by the factor
	ScaleRect {
		/// Rect to scale
		rect: Rect,
		/// Scale factor (negative sizes are kept as-is)
		#[arg(short, long, allow_negative_numbers = true)]
		factor: f64,
		/// Fixed point of the scaling
		#[arg(short, long, default_value = "{0, 0}")]
		pivot: Point,
	},
	/// Move a point by an offset
	TranslatePoint {
		/// Point to move
		point: Point,
		/// Offset as `{dx, dy}`
		#[arg(short, long)]
		by: Size,
	},
	/// Move a rect's origin by an offset
	TranslateRect {
		/// Rect to move
		rect: Rect,
		/// Offset as `{dx, dy}`
		#[arg(short, long)]
		by: Size,
	},
}

/// The value a [`Command`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
	Point(Point),
	Rect(Rect),
}

impl Command {
	/// Applies the transform.
	pub fn evaluate(&self) -> Outcome {
		match *self {
			Command::ScalePoint { point, factor, pivot } => {
				Outcome::Point(point.scale_about(factor, pivot))
			}
			Command::ScaleRect { rect, factor, pivot } => Outcome::Rect(rect.scale_about(factor, pivot)),
			Command::TranslatePoint { point, by } => Outcome::Point(point.translate_by(by)),
			Command::TranslateRect { rect, by } => Outcome::Rect(rect.translate_by(by)),
		}
	}
}

impl Outcome {
	/// Renders the outcome for stdout.
	///
	/// JSON has no encoding for NaN or infinities, so a non-finite component
	/// is an error in [`OutputFormat::Json`]. Text output prints them as-is.
	pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
		Ok(match format {
			OutputFormat::Text => self.to_string(),
			OutputFormat::Json => {
				anyhow::ensure!(
					self.components().iter().all(|c| c.is_finite()),
					"result {} has a non-finite component and cannot be written as JSON",
					self
				);
				serde_json::to_string(self)?
			}
		})
	}

	fn components(&self) -> Vec<f64> {
		match *self {
			Outcome::Point(point) => vec![point.x, point.y],
			Outcome::Rect(rect) => vec![
				rect.origin.x,
				rect.origin.y,
				rect.size.width,
				rect.size.height,
			],
		}
	}
}

impl std::fmt::Display for Outcome {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Outcome::Point(point) => std::fmt::Display::fmt(point, f),
			Outcome::Rect(rect) => std::fmt::Display::fmt(rect, f),
		}
	}
}
