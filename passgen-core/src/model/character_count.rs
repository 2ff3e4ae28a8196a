use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::{for_each_line, open_file};

/// Occurrence counts of every character seen in a text source.
///
/// Characters are code points, not bytes nor graphemes. Line terminators
/// are never counted.
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - `total` equals the sum of all stored counts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterCount {
	/// Occurrences indexed by character.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, usize>,

	/// Number of characters scanned.
	total: usize,
}

impl CharacterCount {
	/// Creates an empty count.
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts the characters of a plain text file.
	///
	/// # Errors
	/// Returns [`Error::FileOpen`] if the file cannot be opened or read.
	pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
		let path = filename.as_ref();
		let reader = open_file(path)?;
		Self::from_reader(reader).map_err(|err| match err {
			Error::Io(source) => Error::FileOpen { path: path.to_path_buf(), source },
			other => other,
		})
	}

	/// Counts the characters of any buffered reader, line by line.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		let mut count = Self::new();
		for_each_line(reader, |line| count.add_line(line))?;
		log::debug!("scanned {} characters, {} distinct", count.total, count.len());
		Ok(count)
	}

	/// Records every character of `line`.
	pub fn add_line(&mut self, line: &str) {
		for c in line.chars() {
			self.add_char(c);
		}
	}

	/// Records one occurrence of `c`.
	pub fn add_char(&mut self, c: char) {
		*self.counts.entry(c).or_insert(0) += 1;
		self.total += 1;
	}

	/// Occurrences of `c` (0 if never seen).
	pub fn get(&self, c: char) -> usize {
		self.counts.get(&c).copied().unwrap_or(0)
	}

	/// Number of characters scanned.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct characters.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Returns all counts, most frequent first.
	///
	/// Equal counts are ordered by ascending character so that the
	/// output is stable between runs.
	pub fn sorted(&self) -> Vec<(char, usize)> {
		let mut pairs: Vec<(char, usize)> = self.counts.iter().map(|(c, n)| (*c, *n)).collect();
		pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
		pairs
	}

	/// Writes one `<character>: <count>` line per character, most frequent first.
	pub fn write_sorted<W: Write>(&self, mut out: W) -> Result<()> {
		for (c, n) in self.sorted() {
			writeln!(out, "{c}: {n}")?;
		}
		out.flush()?;
		Ok(())
	}
}
