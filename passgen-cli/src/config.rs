//! Command-line parsing and the configuration derived from it.
//!
//! Flags are parsed once into [`Cli`] and immediately turned into a
//! [`Mode`]; operations only ever see the `Mode`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

pub const AUTHOR: &str = "Abanoub Hanna";
pub const SOURCE: &str = "https://github.com/abanoubha/PassGen";
pub const X_PLATFORM: &str = "https://x.com/@AbanoubHA";
pub const WEBSITE: &str = "https://AbanoubHanna.com";

const EXAMPLES: &str = "\
Examples:
  passgen -v                     # show the app version
  passgen -c textfile.txt        # show the count of each character occurrences
  passgen -p 8 -f charfreq.csv   # generate passwords until interrupted
  passgen -p 8 -f charfreq.csv -n 10 -s 42   # ten reproducible passwords
  passgen -h                     # show (this) help screen";

/// Raw command-line flags.
#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "password generator based on character frequency", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
	/// Show version number and release info
	#[arg(short = 'v', long)]
	pub version: bool,

	/// Show help screen
	#[arg(short = 'h', long)]
	pub help: bool,

	/// Count occurrences of each character in a plain text file
	#[arg(short = 'c', long, value_name = "FILE")]
	pub count: Option<PathBuf>,

	/// Generate passwords of this length (requires --charfreq)
	#[arg(short = 'p', long, value_name = "LENGTH")]
	pub password: Option<usize>,

	/// Character frequency table (CSV: character,weight)
	#[arg(short = 'f', long, value_name = "FILE")]
	pub charfreq: Option<PathBuf>,

	/// Stop after generating this many passwords
	#[arg(short = 'n', long, value_name = "COUNT")]
	pub number: Option<u64>,

	/// Seed for reproducible output
	#[arg(short = 's', long)]
	pub seed: Option<u64>,
}

/// What the program has been asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
	Version,
	Help,
	Count { input: PathBuf },
	Generate { length: usize, table: PathBuf, limit: Option<u64>, seed: Option<u64> },
	/// No usable combination of flags.
	Usage,
}

impl From<Cli> for Mode {
	fn from(cli: Cli) -> Self {
		if cli.version {
			return Mode::Version;
		}
		if cli.help {
			return Mode::Help;
		}
		if let Some(input) = cli.count {
			return Mode::Count { input };
		}
		match (cli.password, cli.charfreq) {
			(Some(length), Some(table)) if length > 0 => Mode::Generate {
				length,
				table,
				limit: cli.number,
				seed: cli.seed,
			},
			_ => Mode::Usage,
		}
	}
}

pub fn version_text() -> String {
	format!(
		"passgen v{}\n\n\
		Software Developer  : {AUTHOR}\n\
		Source Code         : {SOURCE}\n\
		X platform          : {X_PLATFORM}\n\
		Developer's Website : {WEBSITE}",
		env!("CARGO_PKG_VERSION")
	)
}

pub fn help_text() -> String {
	let usage = Cli::command().render_help();
	format!("{}\n\n{usage}\n{EXAMPLES}", version_text())
}
