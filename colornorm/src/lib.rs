//! # colornorm
//!
//! Rewrites the color expressions in a text file into one canonical `rgba()`
//! form. `#rgb`, `#rrggbb` and `rgba(r, g, b, a)` are rewritten, while
//! `rgb(r, g, b)` is left as it is.
//!
//! ## Usage Example
//!
//! ```rust
//! use colornorm::{Config, run};
//! use std::fs;
//!
//! let path = std::env::temp_dir().join("colornorm_doc_example.css");
//! fs::write(&path, "a { color: #0a0 }").unwrap();
//!
//! // report only, the file stays as it is
//! let mut report = Vec::new();
//! let summary = run(&path, &Config::default(), &mut report).unwrap();
//!
//! assert_eq!(summary.replacements[0].formatted, "rgba(..0, 170, ..0, 01.00)");
//! assert_eq!(fs::read_to_string(&path).unwrap(), "a { color: #0a0 }");
//! ```

pub mod config;
pub mod driver;

pub use colornorm_core as core;
pub use config::Config;
pub use driver::{RunSummary, run};
