use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colornorm::Config;
use log::LevelFilter;
use std::{io, path::PathBuf};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	arg_required_else_help = true,
)]
struct Cli {
	/// text file to scan for hex and rgba() colors
	#[arg()]
	file: PathBuf,

	/// 0 only reports the replacements, any other number writes them back
	/// to FILE after copying the original into the backup directory
	#[arg(default_value_t = 0, allow_negative_numbers = true, verbatim_doc_comment)]
	write: i64,

	/// any number other than 0 turns on debug diagnostics on stderr
	#[arg(default_value_t = 0, allow_negative_numbers = true)]
	verbosity: i64,

	/// directory for the backup copy [default: system temp directory]
	#[arg(long, value_name = "DIR")]
	backup_dir: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

impl Cli {
	fn config(&self) -> Config {
		let mut config = Config {
			write: self.write != 0,
			verbose: self.verbosity != 0,
			..Config::default()
		};
		if let Some(dir) = &self.backup_dir {
			config.backup_dir = dir.clone();
		}
		config
	}

	fn log_level_filter(&self) -> LevelFilter {
		let level = self.verbose.log_level_filter();
		if self.verbosity != 0 {
			level.max(LevelFilter::Debug)
		} else {
			level
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flags
	env_logger::Builder::new()
		.filter_level(cli.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	let config = cli.config();
	log::trace!("running with {config:?}");
	colornorm::run(&cli.file, &config, &mut io::stdout().lock())?;
	Ok(())
}
