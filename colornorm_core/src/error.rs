use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a normalization run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
	/// A hex token did not contain exactly 3 or 6 hex digits.
	#[error("Invalid hex color string provided: {0}")]
	InvalidInput(String),

	#[error("Invalid file path provided: {}", .0.display())]
	FileNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ColorError>;
