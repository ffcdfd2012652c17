use std::io::{self, BufRead, Write};

use clap::Args;
use log::debug;
use serde::Serialize;

use title_gen_core::model::generator::Generator;
use title_gen_core::model::request::{parse_count_or_default, parse_length_or_default, GenerationRequest};
use title_gen_core::model::tone::Tone;
use title_gen_core::TitleError;

use super::CmdResult;
use crate::output::{emit, OutputArgs};
use crate::prompt::Prompter;

const TOPIC_PROMPT: &str = "Keywords / Topic (e.g. 'python web scraping'): ";
const TONE_PROMPT: &str = "Tone? (neutral / clickbait / informative) [neutral]: ";
const COUNT_PROMPT: &str = "How many titles to generate? [20]: ";
const LENGTH_PROMPT: &str = "Max title length (chars) [60]: ";

#[derive(Args, Debug, Default)]
pub struct TemplatesArgs {
	/// Topic or keywords; prompts for every missing option when omitted
	#[arg(long, short)]
	pub topic: Option<String>,

	/// neutral, clickbait or informative (unknown values mean neutral)
	#[arg(long)]
	pub tone: Option<String>,

	/// Number of titles; invalid values fall back to 20
	#[arg(long, short)]
	pub count: Option<String>,

	/// Max characters per title; invalid values fall back to 60
	#[arg(long)]
	pub max_length: Option<String>,

	/// Seed for reproducible output
	#[arg(long)]
	pub seed: Option<u64>,

	#[command(flatten)]
	pub output: OutputArgs,
}

/// JSON report of one run.
#[derive(Serialize)]
struct TemplatesReport<'a> {
	request: &'a GenerationRequest,
	seed: Option<u64>,
	titles: &'a [String],
}

/// Raw answers, before validation.
struct RawInput {
	topic: String,
	tone: String,
	count: String,
	max_length: String,
}

pub fn run(args: TemplatesArgs) -> CmdResult {
	let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
	execute(args, &mut prompter, &mut io::stdout())
}

/// Collects input, generates titles and emits them.
fn execute<R: BufRead, P: Write, W: Write>(
	args: TemplatesArgs,
	prompter: &mut Prompter<R, P>,
	out: &mut W,
) -> CmdResult {
	let raw = collect_input(&args, prompter)?;
	let request = build_request(&raw)?;
	debug!("Request: {:?}", request);

	let titles = match args.seed {
		Some(seed) => Generator::from_seed(seed).generate(&request),
		None => Generator::new().generate(&request),
	};

	let report = TemplatesReport {
		request: &request,
		seed: args.seed,
		titles: &titles,
	};
	emit(out, &args.output, &titles, &report)?;
	Ok(())
}

/// Uses flags when a topic is given, otherwise asks for whatever is missing.
///
/// A blank topic stops the questions right away.
fn collect_input<R: BufRead, P: Write>(
	args: &TemplatesArgs,
	prompter: &mut Prompter<R, P>,
) -> Result<RawInput, Box<dyn std::error::Error>> {
	if let Some(topic) = &args.topic {
		return Ok(RawInput {
			topic: topic.clone(),
			tone: args.tone.clone().unwrap_or_default(),
			count: args.count.clone().unwrap_or_default(),
			max_length: args.max_length.clone().unwrap_or_default(),
		});
	}

	let topic = prompter.ask(TOPIC_PROMPT)?;
	if topic.is_empty() {
		return Err(TitleError::EmptyTopic.into());
	}

	let mut answer = |flag: &Option<String>, question: &str, default: &str| match flag {
		Some(value) => Ok::<_, io::Error>(value.clone()),
		None => prompter.ask_or(question, default),
	};
	let tone = answer(&args.tone, TONE_PROMPT, "neutral")?;
	let count = answer(&args.count, COUNT_PROMPT, "20")?;
	let max_length = answer(&args.max_length, LENGTH_PROMPT, "60")?;

	Ok(RawInput { topic, tone, count, max_length })
}

fn build_request(raw: &RawInput) -> Result<GenerationRequest, TitleError> {
	let tone = if raw.tone.trim().is_empty() {
		Tone::default()
	} else {
		Tone::parse_lossy(&raw.tone)
	};
	GenerationRequest::new(
		&raw.topic,
		tone,
		parse_count_or_default(&raw.count),
		parse_length_or_default(&raw.max_length),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	fn quiet_output() -> OutputArgs {
		OutputArgs { output: PathBuf::from("unused.csv"), no_save: true, json: false }
	}

	fn titles_of(printed: &str) -> Vec<&str> {
		printed
			.lines()
			.filter_map(|line| line.split_once(". ").map(|(_, title)| title))
			.collect()
	}

	#[test]
	fn flags_skip_the_prompts() {
		let args = TemplatesArgs {
			topic: Some("  python   web scraping ".to_owned()),
			tone: Some("informative".to_owned()),
			count: Some("6".to_owned()),
			max_length: Some("50".to_owned()),
			seed: Some(1),
			output: quiet_output(),
		};
		let mut shown = Vec::new();
		let mut prompter = Prompter::new("".as_bytes(), &mut shown);
		let mut out = Vec::new();

		execute(args, &mut prompter, &mut out).unwrap();
		drop(prompter);

		assert!(shown.is_empty());
		let printed = String::from_utf8(out).unwrap();
		let titles = titles_of(&printed);
		assert!(!titles.is_empty() && titles.len() <= 6);
		assert!(titles.iter().all(|t| t.chars().count() <= 50 && !t.contains('!')));
	}

	#[test]
	fn prompts_fall_back_on_bad_numbers() {
		let raw = {
			let args = TemplatesArgs::default();
			let mut prompter = Prompter::new("baking\nclickbait\nlots\n-5\n".as_bytes(), io::sink());
			collect_input(&args, &mut prompter).unwrap()
		};
		let request = build_request(&raw).unwrap();
		assert_eq!(request.topic, "baking");
		assert_eq!(request.tone, Tone::Clickbait);
		assert_eq!(request.count, 20);
		assert_eq!(request.max_length, 60);
	}

	#[test]
	fn flags_win_over_prompts() {
		let args = TemplatesArgs { count: Some("3".to_owned()), ..Default::default() };
		let mut prompter = Prompter::new("baking\n\n\n".as_bytes(), io::sink());
		let raw = collect_input(&args, &mut prompter).unwrap();
		let request = build_request(&raw).unwrap();
		assert_eq!(request.tone, Tone::Neutral);
		assert_eq!(request.count, 3);
		assert_eq!(request.max_length, 60);
	}

	#[test]
	fn blank_topic_aborts_before_generation() {
		let mut prompter = Prompter::new("   \nclickbait\n".as_bytes(), io::sink());
		let mut out = Vec::new();
		let err = execute(TemplatesArgs::default(), &mut prompter, &mut out).unwrap_err();
		assert!(matches!(err.downcast_ref::<TitleError>(), Some(TitleError::EmptyTopic)));
		assert!(out.is_empty());
	}

	#[test]
	fn json_report_carries_the_request() {
		let args = TemplatesArgs {
			topic: Some("rust".to_owned()),
			seed: Some(4),
			output: OutputArgs { json: true, ..quiet_output() },
			..Default::default()
		};
		let mut prompter = Prompter::new("".as_bytes(), io::sink());
		let mut out = Vec::new();
		execute(args, &mut prompter, &mut out).unwrap();

		let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
		assert_eq!(report["request"]["topic"], "rust");
		assert_eq!(report["request"]["tone"], "neutral");
		assert_eq!(report["seed"], 4);
		assert!(report["titles"].as_array().unwrap().len() <= 20);
	}
}
