use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Opens a file for buffered reading.
///
/// Failures are reported as [`Error::FileOpen`] carrying the path.
pub(crate) fn open_file<P: AsRef<Path>>(filename: P) -> Result<BufReader<File>> {
	let path = filename.as_ref();
	File::open(path)
		.map(BufReader::new)
		.map_err(|source| Error::FileOpen { path: path.to_path_buf(), source })
}

/// Calls `f` once per line of `reader`, without the line terminator.
///
/// - Splits on `\n`; a `\r` right before it is dropped too
/// - Invalid UTF-8 is replaced with U+FFFD instead of failing
/// - A final line without terminator is still reported
pub(crate) fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<()>
where
	R: BufRead,
	F: FnMut(&str),
{
	let mut buffer = Vec::new();
	loop {
		buffer.clear();
		if reader.read_until(b'\n', &mut buffer)? == 0 {
			return Ok(());
		}

		let mut line: &[u8] = &buffer;
		if let Some(stripped) = line.strip_suffix(b"\n") {
			line = stripped;
		}
		if let Some(stripped) = line.strip_suffix(b"\r") {
			line = stripped;
		}

		let text: Cow<'_, str> = String::from_utf8_lossy(line);
		f(&text);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(input: &[u8]) -> Vec<String> {
		let mut lines = Vec::new();
		for_each_line(input, |line| lines.push(line.to_owned())).unwrap();
		lines
	}

	#[test]
	fn strips_unix_and_windows_terminators() {
		assert_eq!(collect(b"ab\ncd\r\nef"), vec!["ab", "cd", "ef"]);
	}

	#[test]
	fn keeps_empty_lines() {
		assert_eq!(collect(b"\n\nx\n"), vec!["", "", "x"]);
	}

	#[test]
	fn replaces_invalid_utf8() {
		assert_eq!(collect(b"a\xffb\n"), vec!["a\u{FFFD}b"]);
	}

	#[test]
	fn missing_file_is_a_file_open_error() {
		let err = open_file("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, Error::FileOpen { .. }));
	}
}
