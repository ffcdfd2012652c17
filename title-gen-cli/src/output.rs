use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use title_gen_core::io::{build_output_path, save_titles, DEFAULT_OUTPUT};

/// Output options shared by every subcommand.
#[derive(Args, Debug)]
pub struct OutputArgs {
	/// CSV file receiving the titles (".csv" is added when missing)
	#[arg(long, short, env = "TITLE_GEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
	pub output: PathBuf,

	/// Print the titles without writing the CSV file
	#[arg(long)]
	pub no_save: bool,

	/// Print a JSON report instead of the numbered list
	#[arg(long)]
	pub json: bool,
}

impl Default for OutputArgs {
	fn default() -> Self {
		Self {
			output: PathBuf::from(DEFAULT_OUTPUT),
			no_save: false,
			json: false,
		}
	}
}

/// Prints titles as a numbered list.
pub fn print_titles<W: Write>(out: &mut W, titles: &[String]) -> io::Result<()> {
	writeln!(out, "\nGenerated Titles:\n")?;
	for (i, title) in titles.iter().enumerate() {
		writeln!(out, "{}. {}", i + 1, title)?;
	}
	Ok(())
}

/// Prints any report as pretty JSON.
pub fn print_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> io::Result<()> {
	serde_json::to_writer_pretty(&mut *out, report)?;
	writeln!(out)
}

/// Adds the `.csv` extension to extension-less paths.
pub fn resolve_output_path(path: &Path) -> io::Result<PathBuf> {
	if path.extension().is_some() {
		Ok(path.to_path_buf())
	} else {
		build_output_path(path, "csv")
	}
}

/// Writes or prints the titles according to `args`.
///
/// Returns the saved file path, if any.
pub fn emit<W: Write>(
	out: &mut W,
	args: &OutputArgs,
	titles: &[String],
	report: &impl Serialize,
) -> io::Result<Option<PathBuf>> {
	let saved_to = if args.no_save {
		None
	} else {
		let path = resolve_output_path(&args.output)?;
		save_titles(&path, titles)?;
		Some(path)
	};

	if args.json {
		print_json(out, report)?;
	} else {
		print_titles(out, titles)?;
		if let Some(path) = &saved_to {
			writeln!(out, "\nSaved {} titles to '{}'", titles.len(), path.display())?;
		}
	}

	Ok(saved_to)
}
