//! The three rewrite passes over a document.
//!
//! Rewriting is plain text substitution: for every token, each occurrence of its
//! exact text in the current document is replaced by the canonical form. Tokens
//! are collected from the document as it was when the pass started.

use crate::{
	color::{Rgba, hex_to_rgb},
	error::Result,
	scan::{TokenKind, find_hex_tokens, find_rgb_tokens, find_rgba_tokens},
};
use std::fmt;

/// One substitution performed by a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
	pub kind: TokenKind,
	pub original: String,
	pub formatted: String,
}

impl fmt::Display for Replacement {
	/// Renders the report line, e.g. `Replacement:    #fff => rgba(255, 255, 255, 01.00)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.kind {
			TokenKind::Hex => write!(f, "Replacement: {:>7} => {}", self.original, self.formatted),
			TokenKind::Rgba | TokenKind::Rgb => write!(
				f,
				"Replacement: {} => {}",
				self.original.replace(' ', ""),
				self.formatted
			),
		}
	}
}

/// Runs the rewrite passes and remembers every replacement made, in order.
///
/// Documents are bytes; everything outside the matched tokens is copied through
/// untouched, whatever its encoding.
#[derive(Debug, Default)]
pub struct ColorNormalizer {
	replacements: Vec<Replacement>,
}

impl ColorNormalizer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Applies the rgba, rgb and hex passes in that order.
	///
	/// On error the replacements recorded before the failing token are still
	/// available through [`ColorNormalizer::replacements`].
	pub fn normalize(&mut self, document: impl AsRef<[u8]>) -> Result<Vec<u8>> {
		let document = self.convert_rgba(document);
		let document = self.convert_rgb(document);
		self.convert_hex(document)
	}

	/// Rewrites `rgba(...)` expressions into canonical form.
	pub fn convert_rgba(&mut self, document: impl AsRef<[u8]>) -> Vec<u8> {
		let document = document.as_ref();
		let tokens = find_rgba_tokens(document);
		log::debug!("found {} rgba tokens", tokens.len());

		let mut result = document.to_vec();
		for token in tokens {
			let [r, g, b, a] = token.values.as_slice() else {
				unreachable!("rgba pattern has four groups")
			};
			let formatted = Rgba::from_strs(r, g, b, a).to_string();
			result = replace_all(&result, token.text.as_bytes(), formatted.as_bytes());
			self.record(TokenKind::Rgba, token.text, formatted);
		}
		result
	}

	/// Scans for `rgb(...)` expressions but leaves the document untouched.
	///
	/// Three-channel colors are detected only. Nothing is rewritten and nothing
	/// is recorded.
	#[allow(clippy::unused_self)]
	pub fn convert_rgb(&mut self, document: impl AsRef<[u8]>) -> Vec<u8> {
		let document = document.as_ref();
		let tokens = find_rgb_tokens(document);
		log::trace!("found {} rgb tokens, leaving them unchanged", tokens.len());
		document.to_vec()
	}

	/// Rewrites `#hex` tokens into canonical `rgba(...)` form.
	///
	/// Fails on the first token that does not hold exactly 3 or 6 hex digits.
	/// A document without hex tokens is returned as is.
	pub fn convert_hex(&mut self, document: impl AsRef<[u8]>) -> Result<Vec<u8>> {
		let document = document.as_ref();
		let tokens = find_hex_tokens(document);
		log::debug!("found {} hex tokens", tokens.len());
		if tokens.is_empty() {
			return Ok(document.to_vec());
		}

		let mut result = document.to_vec();
		for token in tokens {
			let formatted = Rgba::from_rgb(hex_to_rgb(token.text)?).to_string();
			result = replace_all(&result, token.text.as_bytes(), formatted.as_bytes());
			self.record(TokenKind::Hex, token.text, formatted);
		}
		Ok(result)
	}

	pub fn replacements(&self) -> &[Replacement] {
		&self.replacements
	}

	pub fn into_replacements(self) -> Vec<Replacement> {
		self.replacements
	}

	fn record(&mut self, kind: TokenKind, original: &str, formatted: String) {
		log::trace!("replace {kind} token {original:?} with {formatted:?}");
		self.replacements.push(Replacement {
			kind,
			original: original.to_string(),
			formatted,
		});
	}
}

/// Replaces every non-overlapping occurrence of `from`, scanning left to right.
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
	if from.is_empty() {
		return haystack.to_vec();
	}
	let mut result = Vec::with_capacity(haystack.len());
	let mut rest = haystack;
	while let Some(pos) = rest.windows(from.len()).position(|window| window == from) {
		result.extend_from_slice(&rest[..pos]);
		result.extend_from_slice(to);
		rest = &rest[pos + from.len()..];
	}
	result.extend_from_slice(rest);
	result
}
