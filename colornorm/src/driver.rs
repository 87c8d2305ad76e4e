//! Runs the normalizer against a file on disk.
//!
//! The report goes to the given writer, one line per replacement followed by
//! notices about what happens to the file. Diagnostics go through `log`.

use crate::config::Config;
use anyhow::{Context, Result};
use colornorm_core::{ColorError, ColorNormalizer, Replacement};
use std::{
	fs,
	io::Write,
	path::{Path, PathBuf},
};

/// What a run did.
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
	pub replacements: Vec<Replacement>,
	/// Where the original was copied to, if the file was written.
	pub backup: Option<PathBuf>,
	pub written: bool,
}

/// Normalizes the colors in `path` and, if `config.write` is set, replaces
/// the file after copying the original into `config.backup_dir`.
///
/// Nothing touches the disk unless every pass succeeded.
pub fn run(path: &Path, config: &Config, out: &mut impl Write) -> Result<RunSummary> {
	log::debug!("normalizing colors in {path:?}");
	let contents = read_file_contents(path)?;

	let mut normalizer = ColorNormalizer::new();
	let normalized = normalizer.normalize(&contents);
	for replacement in normalizer.replacements() {
		writeln!(out, "{replacement}")?;
	}
	let normalized = normalized?;

	let mut summary = RunSummary {
		replacements: normalizer.into_replacements(),
		..RunSummary::default()
	};

	if !config.write {
		writeln!(out, "Exiting without writing input file with replacements...")?;
		return Ok(summary);
	}

	let backup = config.backup_path(path)?;
	writeln!(out, "Writing backup file to: {}", backup.display())?;
	fs::copy(path, &backup).with_context(|| format!("copying {path:?} to {backup:?}"))?;

	writeln!(out, "Writing file with replacements to: {}", path.display())?;
	fs::write(path, normalized).with_context(|| format!("writing file {path:?}"))?;

	writeln!(out, "Exiting...")?;
	log::debug!("wrote {} replacements, backup at {backup:?}", summary.replacements.len());

	summary.backup = Some(backup);
	summary.written = true;
	Ok(summary)
}

/// Reads the raw bytes of the file, failing with [`ColorError::FileNotFound`]
/// if it does not exist. The content does not have to be UTF-8.
pub fn read_file_contents(path: &Path) -> Result<Vec<u8>> {
	if !path.exists() {
		return Err(ColorError::FileNotFound(path.to_path_buf()).into());
	}
	fs::read(path).with_context(|| format!("reading file {path:?}"))
}
