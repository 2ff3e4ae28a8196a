use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io::open_file;

/// One row of a frequency table: a symbol and its sampling weight.
///
/// The symbol is kept as written in the table and appended verbatim to
/// generated strings, so it is usually (but not necessarily) one character.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
	pub character: String,
	pub weight: u64,
}

impl FrequencyEntry {
	pub fn new(character: impl Into<String>, weight: u64) -> Self {
		Self { character: character.into(), weight }
	}
}

/// Ordered list of frequency entries.
///
/// File order is preserved: entry `i` lines up with index `i` of the
/// cumulative distribution built from this table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
	/// Loads a headerless `<character>,<weight>` CSV file.
	///
	/// # Errors
	/// - [`Error::FileOpen`] if the file cannot be opened
	/// - [`Error::Csv`] if the file is not valid CSV
	/// - [`Error::Parse`] if a record does not have two fields or its
	///   weight is not a non-negative integer
	///
	/// # Notes
	/// An empty file yields an empty table; it is rejected later, when a
	/// distribution is built from it.
	pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
		let path = filename.as_ref();
		let reader = open_file(path)?;
		let table = Self::read_records(reader, path)?;
		log::info!("loaded {} frequency entries from {}", table.len(), path.display());
		Ok(table)
	}

	/// Loads a table from any reader. See [`FrequencyTable::from_file`].
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Self::read_records(reader, Path::new("<input>"))
	}

	fn read_records<R: Read>(reader: R, path: &Path) -> Result<Self> {
		let mut csv_reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_reader(reader);

		let mut entries = Vec::new();
		for (index, record) in csv_reader.records().enumerate() {
			let record = record.map_err(|source| Error::Csv { path: path.to_path_buf(), source })?;
			let number = index as u64 + 1;

			if record.len() != 2 {
				return Err(Error::Parse {
					record: number,
					message: format!("expected 2 fields, found {}", record.len()),
				});
			}

			// The character column is free text, so only the weight can fail
			let entry: FrequencyEntry = record.deserialize(None).map_err(|err| Error::Parse {
				record: number,
				message: format!("invalid weight '{}': {err}", &record[1]),
			})?;

			entries.push(entry);
		}

		Ok(Self { entries })
	}

	pub fn entries(&self) -> &[FrequencyEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<Vec<FrequencyEntry>> for FrequencyTable {
	fn from(entries: Vec<FrequencyEntry>) -> Self {
		Self { entries }
	}
}

impl FromIterator<FrequencyEntry> for FrequencyTable {
	fn from_iter<I: IntoIterator<Item = FrequencyEntry>>(iter: I) -> Self {
		Self { entries: iter.into_iter().collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_file_order() {
		let table = FrequencyTable::from_reader("z,5\na,1\nm,3\n".as_bytes()).unwrap();
		let chars: Vec<&str> = table.entries().iter().map(|e| e.character.as_str()).collect();
		assert_eq!(chars, vec!["z", "a", "m"]);
		assert_eq!(table.entries()[0].weight, 5);
	}

	#[test]
	fn quoted_fields_are_unescaped() {
		let table = FrequencyTable::from_reader("\",\",7\n\"\"\"\",2\n".as_bytes()).unwrap();
		assert_eq!(table.entries(), &[FrequencyEntry::new(",", 7), FrequencyEntry::new("\"", 2)]);
	}

	#[test]
	fn records_map_to_entries_by_position() {
		let table = FrequencyTable::from_reader(",4\nab,0\n".as_bytes()).unwrap();
		assert_eq!(table.entries(), &[FrequencyEntry::new("", 4), FrequencyEntry::new("ab", 0)]);
	}

	#[test]
	fn non_integer_weight_is_a_parse_error() {
		let err = FrequencyTable::from_reader("a,1\nb,abc\n".as_bytes()).unwrap_err();
		match err {
			Error::Parse { record, message } => {
				assert_eq!(record, 2);
				assert!(message.contains("abc"));
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn negative_weight_is_a_parse_error() {
		let err = FrequencyTable::from_reader("a,-4\n".as_bytes()).unwrap_err();
		assert!(matches!(err, Error::Parse { record: 1, .. }));
	}

	#[test]
	fn wrong_field_count_is_a_parse_error() {
		let err = FrequencyTable::from_reader("a,1,2\n".as_bytes()).unwrap_err();
		assert!(matches!(err, Error::Parse { record: 1, .. }));

		let err = FrequencyTable::from_reader("a\n".as_bytes()).unwrap_err();
		assert!(matches!(err, Error::Parse { record: 1, .. }));
	}

	#[test]
	fn invalid_utf8_is_a_csv_error() {
		let err = FrequencyTable::from_reader(&b"\xff,1\n"[..]).unwrap_err();
		assert!(matches!(err, Error::Csv { .. }));
	}

	#[test]
	fn empty_input_gives_empty_table() {
		let table = FrequencyTable::from_reader("".as_bytes()).unwrap();
		assert!(table.is_empty());
	}
}
