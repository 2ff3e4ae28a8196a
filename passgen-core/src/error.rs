use std::io;
use std::path::PathBuf;

/// Errors produced while counting characters or generating passwords.
///
/// Every variant is fatal for the command that raised it: there is no
/// retry and no partial result.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// The input text or the frequency table could not be opened or read.
	#[error("cannot read '{}': {source}", path.display())]
	FileOpen {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The frequency table is not well-formed CSV.
	#[error("malformed CSV in '{}': {source}", path.display())]
	Csv {
		path: PathBuf,
		#[source]
		source: csv::Error,
	},

	/// A frequency table record could not be turned into an entry.
	#[error("record {record}: {message}")]
	Parse { record: u64, message: String },

	/// The frequency table has no entries, or all weights are zero.
	#[error("empty distribution: the frequency table has no usable weight")]
	EmptyDistribution,

	/// The sum of all weights does not fit in a `u64`.
	#[error("total weight overflows a 64-bit integer")]
	WeightOverflow,

	/// A password of length zero was requested.
	#[error("password length must be greater than zero")]
	InvalidLength,

	/// Writing the output failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
