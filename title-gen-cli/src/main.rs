use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod output;
mod prompt;

use commands::{templates, tutorials};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "title-gen")]
#[command(version = VERSION)]
#[command(about = "Generate catchy titles from word banks and templates")]
struct Cli {
	/// Enable debug logging (overridden by RUST_LOG)
	#[arg(long, short, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Fill sentence templates around a topic (prompts for missing input)
	Templates(templates::TemplatesArgs),
	/// Rotate keywords through "<Word> <Keyword> Tutorial" titles
	Tutorials(tutorials::TutorialsArgs),
}

fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

/// Entry point.
///
/// Dispatches to the selected subcommand; any error is reported on
/// stderr and turns into a failure exit code.
fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let result = match cli.command {
		Commands::Templates(args) => templates::run(args),
		Commands::Tutorials(args) => tutorials::run(args),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}. Exiting.");
			ExitCode::FAILURE
		}
	}
}
