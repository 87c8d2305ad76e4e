use anyhow::{Context, Result};
use std::{
	env,
	path::{Path, PathBuf},
};

/// Options for a single normalization run.
#[derive(Clone, Debug)]
pub struct Config {
	/// Write the result back to the input file after backing it up.
	pub write: bool,
	/// Raise diagnostics to debug level. Never changes the report on stdout.
	pub verbose: bool,
	/// Directory that receives the backup copy, the system temp dir by default.
	pub backup_dir: PathBuf,
}

impl Config {
	pub fn with_write(mut self, write: bool) -> Self {
		self.write = write;
		self
	}

	pub fn with_backup_dir(mut self, backup_dir: impl Into<PathBuf>) -> Self {
		self.backup_dir = backup_dir.into();
		self
	}

	/// Backup location for `input`: its base name inside the backup directory.
	///
	/// Backups of equally named files from different directories share a path.
	pub fn backup_path(&self, input: &Path) -> Result<PathBuf> {
		let name = input
			.file_name()
			.with_context(|| format!("determining file name of {input:?}"))?;
		Ok(self.backup_dir.join(name))
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			write: false,
			verbose: false,
			backup_dir: env::temp_dir(),
		}
	}
}
