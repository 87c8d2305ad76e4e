//! # colornorm core
//!
//! Finds color expressions in text and rewrites them into one canonical
//! `rgba()` form. Documents are handled as bytes, so any ASCII-compatible
//! encoding passes through unchanged outside the rewritten tokens.
//!
//! Recognized inputs:
//! - `#rgb` and `#rrggbb` hex tokens
//! - `rgba(r, g, b, a)`
//! - `rgb(r, g, b)` (detected only, left unchanged)
//!
//! ## Usage Example
//!
//! ```rust
//! use colornorm_core::ColorNormalizer;
//!
//! let mut normalizer = ColorNormalizer::new();
//! let css = normalizer.normalize("a { color: #fff }").unwrap();
//!
//! assert_eq!(css, b"a { color: rgba(255, 255, 255, 01.00) }");
//! assert_eq!(
//!     normalizer.replacements()[0].to_string(),
//!     "Replacement:    #fff => rgba(255, 255, 255, 01.00)"
//! );
//! ```

pub mod color;
pub mod error;
pub mod normalizer;
pub mod scan;

pub use color::{CHANNEL_MAX, Rgba, hex_to_rgb, make_rgba_css};
pub use error::{ColorError, Result};
pub use normalizer::{ColorNormalizer, Replacement};
pub use scan::{ColorToken, TokenKind};
