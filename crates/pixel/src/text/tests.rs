use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{ParseGeometryError, Point, Rect, Size};

#[test]
fn display_point() {
	assert_eq!(Point::new(10.0, -2.5).to_string(), "{10, -2.5}");
}

#[test]
fn display_rect() {
	let rect = Rect::from_xywh(0.0, 1.0, 10.0, 0.25);
	assert_eq!(rect.to_string(), "{{0, 1}, {10, 0.25}}");
}

#[test]
fn display_honors_precision() {
	let rect = Rect::from_xywh(1.0 / 3.0, 2.0, 3.0, 4.0);
	assert_eq!(format!("{rect:.2}"), "{{0.33, 2.00}, {3.00, 4.00}}");
}

#[test]
fn display_non_finite() {
	assert_eq!(Size::new(f64::INFINITY, f64::NAN).to_string(), "{inf, NaN}");
}

#[test]
fn parse_point_with_whitespace() {
	assert_eq!(" { 3 ,4 } ".parse::<Point>(), Ok(Point::new(3.0, 4.0)));
	assert_eq!("{-1e3,0.5}".parse::<Point>(), Ok(Point::new(-1000.0, 0.5)));
}

#[test]
fn parse_size() {
	assert_eq!("{1, -1}".parse::<Size>(), Ok(Size::new(1.0, -1.0)));
}

#[test]
fn parse_rect() {
	assert_eq!(
		"{{0, 0}, {10, 10}}".parse::<Rect>(),
		Ok(Rect::from_xywh(0.0, 0.0, 10.0, 10.0))
	);
	assert_eq!(
		"{{1,2},{-3,4}}".parse::<Rect>(),
		Ok(Rect::from_xywh(1.0, 2.0, -3.0, 4.0))
	);
}

#[test]
fn parse_non_finite() {
	let p: Point = "{inf, NaN}".parse().unwrap();
	assert_eq!(p.x, f64::INFINITY);
	assert!(p.y.is_nan());
}

#[test]
fn parse_empty() {
	assert_eq!("".parse::<Point>(), Err(ParseGeometryError::Empty));
	assert_eq!("  \t".parse::<Rect>(), Err(ParseGeometryError::Empty));
}

#[test]
fn parse_missing_brace() {
	assert_eq!(
		"3, 4}".parse::<Point>(),
		Err(ParseGeometryError::Expected {
			expected: '{',
			found: Some('3'),
			offset: 0,
		})
	);
	assert_eq!(
		"{3, 4".parse::<Point>(),
		Err(ParseGeometryError::Expected {
			expected: '}',
			found: None,
			offset: 5,
		})
	);
}

#[test]
fn parse_missing_comma() {
	assert_eq!(
		"{{0, 0} {1, 1}}".parse::<Rect>(),
		Err(ParseGeometryError::Expected {
			expected: ',',
			found: Some('{'),
			offset: 8,
		})
	);
}

#[test]
fn parse_bad_number() {
	let err = "{3, four}".parse::<Point>().unwrap_err();
	assert!(matches!(&err, ParseGeometryError::Number { text, .. } if text == "four"));
	assert!(err.to_string().starts_with("invalid number 'four'"));

	let err = "{, 4}".parse::<Point>().unwrap_err();
	assert!(matches!(&err, ParseGeometryError::Number { text, .. } if text.is_empty()));
}

#[test]
fn parse_rejects_non_ascii_whitespace() {
	assert!(matches!(
		"{\u{2003}1, 2}".parse::<Point>(),
		Err(ParseGeometryError::Number { text, .. }) if text == "\u{2003}1"
	));
	assert_eq!(
		"\u{2003}{1, 2}".parse::<Point>(),
		Err(ParseGeometryError::Expected {
			expected: '{',
			found: Some('\u{2003}'),
			offset: 0,
		})
	);
	assert_eq!(
		"\u{00A0}".parse::<Size>(),
		Err(ParseGeometryError::Expected {
			expected: '{',
			found: Some('\u{00A0}'),
			offset: 0,
		})
	);
}

#[test]
fn parse_trailing_input() {
	assert_eq!(
		"{1, 2} x".parse::<Point>(),
		Err(ParseGeometryError::Trailing { offset: 7 })
	);
}

#[test]
fn error_messages() {
	let err = ParseGeometryError::Expected {
		expected: '}',
		found: None,
		offset: 5,
	};
	assert_eq!(err.to_string(), "expected '}' at offset 5, found end of input");
}

proptest! {
	#[test]
	fn display_parses_back(
		x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
		y in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
		w in -1.0e9..1.0e9f64,
		h in -1.0e9..1.0e9f64,
	) {
		let rect = Rect::from_xywh(x, y, w, h);
		prop_assert_eq!(rect.to_string().parse::<Rect>(), Ok(rect));
	}
}
