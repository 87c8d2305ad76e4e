//! Regex scanners that locate color tokens in a document.
//!
//! Each scanner returns its tokens in document order. Matches never overlap and
//! are never deduplicated: a color that appears twice yields two tokens.
//!
//! Documents are raw bytes, so text in any ASCII-compatible encoding scans the
//! same way. Unicode mode is off: `\s` and case folding are ASCII only, which
//! keeps every match pure ASCII.

use lazy_static::lazy_static;
use regex::bytes::{Captures, Regex};
use std::{fmt, str};

lazy_static! {
	static ref RE_HEX: Regex = Regex::new(r"(?i-u)#[a-f0-9]+").unwrap();
	static ref RE_RGBA: Regex =
		Regex::new(r"(?i-u)rgba\(\s?([0-9]+),\s?([0-9]+),\s?([0-9]+),\s?([0-9.]+)\s?\)").unwrap();
	static ref RE_RGB: Regex = Regex::new(r"(?i-u)rgb\(\s?([0-9]+),\s?([0-9]+),\s?([0-9]+)\s?\)").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
	Hex,
	Rgba,
	Rgb,
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			TokenKind::Hex => "hex",
			TokenKind::Rgba => "rgba",
			TokenKind::Rgb => "rgb",
		})
	}
}

/// A matched color expression, borrowed from the scanned document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorToken<'a> {
	pub kind: TokenKind,
	/// Full matched text, including any inner spacing.
	pub text: &'a str,
	/// Byte offset of `text` in the document.
	pub offset: usize,
	/// Captured channel values: the hex digits for [`TokenKind::Hex`],
	/// otherwise r, g, b and (for rgba) alpha.
	pub values: Vec<&'a str>,
}

/// Finds `#` followed by any number of hex digits.
///
/// The match is greedy and does not check the digit count, so `#abcd` is a
/// token here and only fails once it is parsed.
pub fn find_hex_tokens(document: &[u8]) -> Vec<ColorToken<'_>> {
	RE_HEX
		.find_iter(document)
		.map(|m| ColorToken {
			kind: TokenKind::Hex,
			text: ascii(m.as_bytes()),
			offset: m.start(),
			values: vec![ascii(&m.as_bytes()[1..])],
		})
		.collect()
}

/// Finds `rgba(r, g, b, a)` with at most one whitespace character after `(`,
/// after each comma and before `)`.
pub fn find_rgba_tokens(document: &[u8]) -> Vec<ColorToken<'_>> {
	RE_RGBA
		.captures_iter(document)
		.map(|c| from_captures(TokenKind::Rgba, &c))
		.collect()
}

/// Finds `rgb(r, g, b)` with the same spacing rules as [`find_rgba_tokens`].
pub fn find_rgb_tokens(document: &[u8]) -> Vec<ColorToken<'_>> {
	RE_RGB
		.captures_iter(document)
		.map(|c| from_captures(TokenKind::Rgb, &c))
		.collect()
}

fn from_captures<'a>(kind: TokenKind, captures: &Captures<'a>) -> ColorToken<'a> {
	let whole = captures.get(0).unwrap();
	ColorToken {
		kind,
		text: ascii(whole.as_bytes()),
		offset: whole.start(),
		values: captures.iter().skip(1).flatten().map(|m| ascii(m.as_bytes())).collect(),
	}
}

// the patterns only match ASCII bytes
fn ascii(bytes: &[u8]) -> &str {
	str::from_utf8(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn texts<'a>(tokens: &[ColorToken<'a>]) -> Vec<&'a str> {
		tokens.iter().map(|t| t.text).collect()
	}

	#[test]
	fn hex_tokens_in_order_with_duplicates() {
		let doc = "a { color: #FFF; } b { color: #123456; } c { color: #fff; } d { color: #FFF; }";
		let tokens = find_hex_tokens(doc.as_bytes());
		assert_eq!(texts(&tokens), vec!["#FFF", "#123456", "#fff", "#FFF"]);
		assert_eq!(tokens[0].offset, 11);
		assert_eq!(tokens[1].values, vec!["123456"]);
		assert!(tokens.iter().all(|t| t.kind == TokenKind::Hex));
	}

	#[rstest]
	#[case("#abcd;", "#abcd")]
	#[case("#a", "#a")]
	#[case("#deadbeef0", "#deadbeef0")]
	#[case("#12z", "#12")]
	fn hex_tokens_are_greedy(#[case] doc: &str, #[case] expected: &str) {
		assert_eq!(texts(&find_hex_tokens(doc.as_bytes())), vec![expected]);
	}

	#[test]
	fn no_hex_tokens() {
		assert!(find_hex_tokens(b"body { margin: 0 } # heading").is_empty());
	}

	#[rstest]
	#[case("rgba(1,2,3,0.4)", vec!["1", "2", "3", "0.4"])]
	#[case("rgba( 1, 2, 3, 0.4 )", vec!["1", "2", "3", "0.4"])]
	#[case("RGBA(10, 20, 30, 1)", vec!["10", "20", "30", "1"])]
	#[case("rgba(0,0,0,.5)", vec!["0", "0", "0", ".5"])]
	fn rgba_tokens_capture_values(#[case] doc: &str, #[case] expected: Vec<&str>) {
		let tokens = find_rgba_tokens(doc.as_bytes());
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].text, doc);
		assert_eq!(tokens[0].values, expected);
	}

	#[rstest]
	#[case("rgba(1 ,2,3,0.4)")]
	#[case("rgba(1,  2,3,0.4)")]
	#[case("rgba(1,2,3)")]
	#[case("rgba(.10, 255, ..0, 00.50)")]
	#[case("rgba(-1,2,3,0.4)")]
	#[case("rgba(\u{a0}1,2,3,0.4)")]
	#[case("rgba(1,\u{3000}2,3,0.4)")]
	#[case("rgba(1,2,3,0.4\u{85})")]
	fn rgba_tokens_reject(#[case] doc: &str) {
		assert!(find_rgba_tokens(doc.as_bytes()).is_empty());
	}

	#[test]
	fn rgb_tokens_do_not_match_rgba() {
		let doc = "a: rgb(1, 2, 3); b: rgba(1, 2, 3, 1); c: RGB( 4,5,6 )";
		let tokens = find_rgb_tokens(doc.as_bytes());
		assert_eq!(texts(&tokens), vec!["rgb(1, 2, 3)", "RGB( 4,5,6 )"]);
		assert_eq!(tokens[1].values, vec!["4", "5", "6"]);
		assert_eq!(tokens[1].kind, TokenKind::Rgb);
	}

	#[test]
	fn tokens_are_found_around_non_utf8_bytes() {
		let doc = b"/* caf\xE9 */ a { color: #fff; border: rgba(1, 2, 3, 0.5) } /* \xFF */";
		assert_eq!(texts(&find_hex_tokens(doc)), vec!["#fff"]);
		assert_eq!(find_hex_tokens(doc)[0].offset, 22);
		assert_eq!(texts(&find_rgba_tokens(doc)), vec!["rgba(1, 2, 3, 0.5)"]);
	}

	#[test]
	fn ascii_whitespace_is_still_optional_spacing() {
		let tokens = find_rgba_tokens(b"rgba(\t1,\n2,\r3, 0.4\x0C)");
		assert_eq!(tokens[0].values, vec!["1", "2", "3", "0.4"]);
	}
}
