use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use title_gen_core::model::request::{parse_length_or_default, parse_positive_or_default};
use title_gen_core::model::tutorial::{
	generate_tutorial_titles, TutorialStyle, DEFAULT_KEYWORDS, DEFAULT_TUTORIAL_COUNT,
};

use super::CmdResult;
use crate::output::{emit, OutputArgs};

#[derive(Args, Debug, Default)]
pub struct TutorialsArgs {
	/// Comma-separated keywords (default: python, coding, tutorial, programming, development)
	#[arg(long, short, value_delimiter = ',')]
	pub keywords: Vec<String>,

	/// professional, casual or exciting (unknown values mean professional)
	#[arg(long)]
	pub style: Option<String>,

	/// Number of titles; invalid values fall back to 5
	#[arg(long, short)]
	pub count: Option<String>,

	/// Max characters per title; invalid values fall back to 60
	#[arg(long)]
	pub max_length: Option<String>,

	#[command(flatten)]
	pub output: OutputArgs,
}

#[derive(Serialize)]
struct TutorialsReport<'a> {
	keywords: &'a [String],
	style: TutorialStyle,
	count: usize,
	max_length: usize,
	titles: &'a [String],
}

pub fn run(args: TutorialsArgs) -> CmdResult {
	execute(args, &mut io::stdout())
}

fn execute<W: Write>(args: TutorialsArgs, out: &mut W) -> CmdResult {
	let keywords: Vec<String> = if args.keywords.is_empty() {
		DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect()
	} else {
		args.keywords.clone()
	};
	let style = args.style.as_deref().map(TutorialStyle::parse_lossy).unwrap_or_default();
	let count = parse_positive_or_default(
		args.count.as_deref().unwrap_or_default(),
		DEFAULT_TUTORIAL_COUNT,
		"count",
	);
	let max_length = parse_length_or_default(args.max_length.as_deref().unwrap_or_default());

	let titles = generate_tutorial_titles(&keywords, style, count, max_length)?;

	let report = TutorialsReport {
		keywords: &keywords,
		style,
		count,
		max_length,
		titles: &titles,
	};
	emit(out, &args.output, &titles, &report)?;
	Ok(())
}
