use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

/// Header of the single CSV column.
pub const CSV_HEADER: &str = "title";

/// File name used when the caller gives none.
pub const DEFAULT_OUTPUT: &str = "generated_titles.csv";

const LINE_TERMINATOR: &str = "\r\n";

/// Writes titles as a single-column CSV document.
///
/// - First row is the `title` header
/// - Rows end with `\r\n`
/// - A field containing `,`, `"`, `\r` or `\n` is quoted, inner quotes doubled
pub fn write_titles<W: Write, S: AsRef<str>>(mut writer: W, titles: &[S]) -> io::Result<()> {
	writer.write_all(CSV_HEADER.as_bytes())?;
	writer.write_all(LINE_TERMINATOR.as_bytes())?;
	for title in titles {
		writer.write_all(escape_field(title.as_ref()).as_bytes())?;
		writer.write_all(LINE_TERMINATOR.as_bytes())?;
	}
	writer.flush()
}

/// Saves titles to `path` as CSV, replacing any existing file.
///
/// Returns the number of titles written.
pub fn save_titles<P: AsRef<Path>, S: AsRef<str>>(path: P, titles: &[S]) -> io::Result<usize> {
	let path = path.as_ref();
	let file = File::create(path)?;
	write_titles(BufWriter::new(file), titles)?;
	info!("Saved {} titles to {}", titles.len(), path.display());
	Ok(titles.len())
}

/// Quotes a CSV field when needed.
fn escape_field(field: &str) -> String {
	if field.contains([',', '"', '\r', '\n']) {
		format!("\"{}\"", field.replace('"', "\"\""))
	} else {
		field.to_owned()
	}
}

/// Builds an output path with the given extension.
///
/// Example:
/// `out/titles` + `"csv"` → `out/titles.csv`
///
/// # Errors
/// Returns `InvalidInput` if the path has no file name.
pub fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Output path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}
