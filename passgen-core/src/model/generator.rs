use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::model::distribution::CumulativeDistribution;
use crate::model::frequency_table::FrequencyTable;

/// Generates fixed-length strings whose symbols follow a frequency table.
///
/// # Responsibilities
/// - Build the cumulative distribution once, at construction
/// - Own a single random source, seeded once and reused for every string
/// - Stream strings to a writer until told to stop
///
/// The random source is a type parameter so tests (and `--seed`) can use
/// a deterministic one. It is not cryptographically secure.
#[derive(Debug)]
pub struct PasswordGenerator<R = StdRng> {
	table: FrequencyTable,
	distribution: CumulativeDistribution,
	length: usize,
	rng: R,
}

impl PasswordGenerator<StdRng> {
	/// Creates a generator seeded from OS entropy.
	///
	/// # Errors
	/// - [`Error::InvalidLength`] if `length` is zero
	/// - [`Error::EmptyDistribution`] / [`Error::WeightOverflow`] if the
	///   table cannot be sampled
	pub fn new(table: FrequencyTable, length: usize) -> Result<Self> {
		Self::with_rng(table, length, StdRng::from_os_rng())
	}

	/// Creates a generator whose output is fully determined by `seed`.
	pub fn with_seed(table: FrequencyTable, length: usize, seed: u64) -> Result<Self> {
		Self::with_rng(table, length, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> PasswordGenerator<R> {
	/// Creates a generator drawing from the given random source.
	pub fn with_rng(table: FrequencyTable, length: usize, rng: R) -> Result<Self> {
		if length == 0 {
			return Err(Error::InvalidLength);
		}
		let distribution = CumulativeDistribution::new(&table)?;
		log::debug!(
			"distribution over {} entries, total weight {}",
			distribution.len(),
			distribution.total()
		);
		Ok(Self { table, distribution, length, rng })
	}

	/// Number of symbols in each generated string.
	pub fn length(&self) -> usize {
		self.length
	}

	pub fn distribution(&self) -> &CumulativeDistribution {
		&self.distribution
	}

	/// Generates one string of `length` sampled symbols.
	pub fn generate(&mut self) -> String {
		let entries = self.table.entries();
		let mut password = String::with_capacity(self.length);
		for _ in 0..self.length {
			let index = self.distribution.sample(&mut self.rng);
			password.push_str(&entries[index].character);
		}
		password
	}

	/// Writes one generated string per line to `out`, flushing after
	/// every line.
	///
	/// Stops when `running` becomes false, after `limit` strings if a
	/// limit is given, or when the reader of `out` goes away (broken
	/// pipe). Returns the number of strings written.
	///
	/// # Errors
	/// Any write error other than a broken pipe.
	pub fn run<W: Write>(&mut self, mut out: W, running: &AtomicBool, limit: Option<u64>) -> Result<u64> {
		let mut written: u64 = 0;
		while running.load(Ordering::Relaxed) && limit.is_none_or(|max| written < max) {
			let mut line = self.generate();
			line.push('\n');
			match out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
				Ok(()) => written += 1,
				Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
					log::debug!("output closed after {written} passwords");
					return Ok(written);
				}
				Err(err) => return Err(err.into()),
			}
		}

		Ok(written)
	}
}

/// Endless stream of generated strings.
impl<R: Rng> Iterator for PasswordGenerator<R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		Some(self.generate())
	}
}
