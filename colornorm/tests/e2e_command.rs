#![cfg(feature = "cli")]

use assert_cmd::cargo;
use predicates::str;
use test_utilities::*;

#[test]
fn command() {
	let o = colornorm_output(&[]);
	assert!(!o.success);
	assert_eq!(o.code, 2);
	assert!(o.stdout.is_empty());
	assert_contains!(o.stderr, &format!("Usage: {BINARY_NAME} [OPTIONS] <FILE> [WRITE] [VERBOSITY]"));
}

#[test]
fn help() -> Result<(), Box<dyn std::error::Error>> {
	colornorm_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(str::contains("--backup-dir <DIR>"))
		.stdout(str::contains("--verbose"));
	Ok(())
}

#[test]
fn version() -> Result<(), Box<dyn std::error::Error>> {
	assert_cmd::Command::new(cargo::cargo_bin!())
		.arg("-V")
		.assert()
		.success()
		.stdout(str::starts_with(format!("colornorm {}", env!("CARGO_PKG_VERSION"))));
	Ok(())
}

#[test]
fn non_numeric_write_flag() {
	let o = colornorm_output(&["style.css", "yes"]);
	assert_eq!(o.code, 2);
	assert_contains!(o.stderr, "invalid value 'yes'");
}
