//! Color values and their canonical text form.
//!
//! [`hex_to_rgb`] turns a hex token into three channels and [`Rgba`] renders
//! any color as `rgba(RRR, GGG, BBB, AA.AA)`, where the channels are padded
//! with `.` to a width of three and alpha always carries two decimals.

use crate::error::{ColorError, Result};
use std::fmt;

/// Largest channel value; longer digit runs saturate here, like a signed 64-bit
/// integer cast would.
pub const CHANNEL_MAX: u64 = i64::MAX.unsigned_abs();

/// A normalized color. Channel and alpha ranges are not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u64,
	pub g: u64,
	pub b: u64,
	pub a: f64,
}

impl Rgba {
	pub fn new(r: u64, g: u64, b: u64, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Opaque color from a parsed hex triple.
	pub fn from_rgb(rgb: [u8; 3]) -> Self {
		let [r, g, b] = rgb;
		Self::new(u64::from(r), u64::from(g), u64::from(b), 1.0)
	}

	/// Builds a color from captured text, coercing each value leniently.
	///
	/// Channels use their leading decimal digits and saturate at [`CHANNEL_MAX`].
	/// Alpha uses its leading `digits[.digits]` prefix, so `"1.2.3"` becomes `1.2`
	/// and text without any number becomes `0`.
	pub fn from_strs(r: &str, g: &str, b: &str, a: &str) -> Self {
		Self::new(coerce_channel(r), coerce_channel(g), coerce_channel(b), coerce_alpha(a))
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({:.>3}, {:.>3}, {:.>3}, {:05.2})", self.r, self.g, self.b, self.a)
	}
}

/// Parses a 3- or 6-digit hex color.
///
/// Every character that is not a hex digit is dropped first, so `"#a1f"` and
/// `"a1f"` are equivalent. A 3-digit color doubles each digit on its own:
/// `"a1f"` reads as `"aa11ff"`.
pub fn hex_to_rgb(input: &str) -> Result<[u8; 3]> {
	let nibbles: Vec<u8> = input.bytes().filter(u8::is_ascii_hexdigit).map(nibble).collect();

	let nibbles = match nibbles.len() {
		3 => nibbles.iter().flat_map(|n| [*n, *n]).collect(),
		6 => nibbles,
		_ => return Err(ColorError::InvalidInput(input.to_string())),
	};

	let mut rgb = [0u8; 3];
	for (channel, pair) in rgb.iter_mut().zip(nibbles.chunks_exact(2)) {
		*channel = (pair[0] << 4) | pair[1];
	}
	Ok(rgb)
}

/// Canonical css text for a color, e.g. `make_rgba_css(10, 255, 0, 0.5)` gives
/// `rgba(.10, 255, ..0, 00.50)`.
pub fn make_rgba_css(r: u64, g: u64, b: u64, a: f64) -> String {
	Rgba::new(r, g, b, a).to_string()
}

fn nibble(digit: u8) -> u8 {
	match digit {
		b'0'..=b'9' => digit - b'0',
		b'a'..=b'f' => digit - b'a' + 10,
		b'A'..=b'F' => digit - b'A' + 10,
		_ => 0,
	}
}

fn coerce_channel(value: &str) -> u64 {
	let value = value.trim_start();
	let len = value.bytes().take_while(u8::is_ascii_digit).count();
	if len == 0 {
		return 0;
	}
	// only overflow can fail here
	value[..len].parse::<u64>().map_or(CHANNEL_MAX, |v| v.min(CHANNEL_MAX))
}

fn coerce_alpha(value: &str) -> f64 {
	let value = value.trim_start();
	let mut end = value.bytes().take_while(u8::is_ascii_digit).count();
	if value[end..].starts_with('.') {
		end += 1 + value[end + 1..].bytes().take_while(u8::is_ascii_digit).count();
	}
	value[..end].parse().unwrap_or(0.0)
}
