mod config;

use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use passgen_core::{CharacterCount, Error, FrequencyTable, PasswordGenerator};

use config::{Cli, Mode};

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let mode = Mode::from(Cli::parse());
	log::debug!("mode: {:?}", mode);

	exit_code(run(mode))
}

/// 0 on success or closed stdout, 1 on any other error; usage errors
/// already carry their own code.
fn exit_code(result: Result<ExitCode, Error>) -> ExitCode {
	match result {
		Ok(code) => code,
		Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
		Err(err) => {
			log::debug!("fatal: {err:?}");
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(mode: Mode) -> Result<ExitCode, Error> {
	match mode {
		Mode::Version => println!("{}", config::version_text()),
		Mode::Help => println!("{}", config::help_text()),
		Mode::Count { input } => count(&input)?,
		Mode::Generate { length, table, limit, seed } => generate(length, &table, limit, seed)?,
		Mode::Usage => {
			eprintln!("You did not use the correct arguments.");
			eprintln!("{}", config::help_text());
			return Ok(ExitCode::from(2));
		}
	}
	Ok(ExitCode::SUCCESS)
}

fn count(input: &Path) -> Result<(), Error> {
	log::info!("counting frequency of character occurrences in {} ...", input.display());
	let counts = CharacterCount::from_file(input)?;
	log::info!("{} characters, {} distinct", counts.total(), counts.len());
	counts.write_sorted(BufWriter::new(io::stdout().lock()))
}

fn generate(length: usize, table: &Path, limit: Option<u64>, seed: Option<u64>) -> Result<(), Error> {
	log::info!(
		"generating passwords with length of {length} respecting the character frequency in {} ...",
		table.display()
	);
	let table = FrequencyTable::from_file(table)?;
	let mut generator = match seed {
		Some(seed) => PasswordGenerator::with_seed(table, length, seed)?,
		None => PasswordGenerator::new(table, length)?,
	};

	let running = Arc::new(AtomicBool::new(true));
	let handler_flag = Arc::clone(&running);
	if let Err(err) = ctrlc::set_handler(move || handler_flag.store(false, Ordering::Relaxed)) {
		log::warn!("cannot install interrupt handler: {err}");
	}

	// Stdout is line-buffered; each password shows up as soon as it is made
	let written = generator.run(io::stdout().lock(), &running, limit)?;
	log::info!("generated {written} passwords");
	Ok(())
}
