use log::warn;
use serde::{Deserialize, Serialize};

use super::text::normalize_topic;
use super::tone::Tone;
use crate::error::{Result, TitleError};

/// Default number of titles to generate.
pub const DEFAULT_COUNT: usize = 20;

/// Default maximum title length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 60;

/// Input parameters for one generation run.
///
/// # Invariants
/// - `topic` is normalized (single spaces, trimmed) and non-empty
/// - `count` and `max_length` are strictly positive
///
/// These hold for values built with [`GenerationRequest::new`]. A value
/// deserialized from outside should go through [`GenerationRequest::validate`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	/// Normalized topic, inserted verbatim in templates.
	pub topic: String,

	/// Tone post-processing to apply.
	#[serde(default)]
	pub tone: Tone,

	/// Number of distinct titles wanted.
	#[serde(default = "default_count")]
	pub count: usize,

	/// Hard cap on each title, in characters.
	#[serde(default = "default_max_length")]
	pub max_length: usize,
}

fn default_count() -> usize {
	DEFAULT_COUNT
}

fn default_max_length() -> usize {
	DEFAULT_MAX_LENGTH
}

impl GenerationRequest {
	/// Builds a validated request.
	///
	/// # Errors
	/// - `EmptyTopic` if the topic is blank
	/// - `InvalidCount` if `count == 0`
	/// - `InvalidMaxLength` if `max_length == 0`
	pub fn new(topic: &str, tone: Tone, count: usize, max_length: usize) -> Result<Self> {
		let request = Self {
			topic: normalize_topic(topic),
			tone,
			count,
			max_length,
		};
		request.validate()?;
		Ok(request)
	}

	/// Builds a request with the default tone, count and length.
	pub fn with_topic(topic: &str) -> Result<Self> {
		Self::new(topic, Tone::default(), DEFAULT_COUNT, DEFAULT_MAX_LENGTH)
	}

	/// Checks the invariants.
	///
	/// The topic is checked after normalization, so a deserialized request
	/// with a whitespace-only topic is rejected too.
	pub fn validate(&self) -> Result<()> {
		if normalize_topic(&self.topic).is_empty() {
			return Err(TitleError::EmptyTopic);
		}
		if self.count == 0 {
			return Err(TitleError::InvalidCount);
		}
		if self.max_length == 0 {
			return Err(TitleError::InvalidMaxLength);
		}
		Ok(())
	}
}

/// Parses a user-supplied count, falling back to [`DEFAULT_COUNT`].
///
/// Empty, non-numeric, zero and negative inputs all fall back.
pub fn parse_count_or_default(raw: &str) -> usize {
	parse_positive_or_default(raw, DEFAULT_COUNT, "count")
}

/// Parses a user-supplied max length, falling back to [`DEFAULT_MAX_LENGTH`].
pub fn parse_length_or_default(raw: &str) -> usize {
	parse_positive_or_default(raw, DEFAULT_MAX_LENGTH, "max length")
}

/// Parses a strictly positive integer, falling back to `default`.
///
/// `what` names the value in the warning logged on fallback.
pub fn parse_positive_or_default(raw: &str, default: usize, what: &str) -> usize {
	let raw = raw.trim();
	if raw.is_empty() {
		return default;
	}
	match raw.parse::<usize>() {
		Ok(value) if value > 0 => value,
		_ => {
			warn!("Invalid {} '{}', using default {}", what, raw, default);
			default
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_normalizes_the_topic() {
		let request = GenerationRequest::new("  python   web   scraping ", Tone::Neutral, 5, 60).unwrap();
		assert_eq!(request.topic, "python web scraping");
	}

	#[test]
	fn blank_topic_is_rejected() {
		assert!(matches!(
			GenerationRequest::new(" \t ", Tone::Neutral, 5, 60),
			Err(TitleError::EmptyTopic)
		));
	}

	#[test]
	fn zero_count_and_length_are_rejected() {
		assert!(matches!(GenerationRequest::new("rust", Tone::Neutral, 0, 60), Err(TitleError::InvalidCount)));
		assert!(matches!(GenerationRequest::new("rust", Tone::Neutral, 5, 0), Err(TitleError::InvalidMaxLength)));
	}

	#[test]
	fn with_topic_uses_defaults() {
		let request = GenerationRequest::with_topic("rust").unwrap();
		assert_eq!(request.tone, Tone::Neutral);
		assert_eq!(request.count, DEFAULT_COUNT);
		assert_eq!(request.max_length, DEFAULT_MAX_LENGTH);
	}

	#[test]
	fn lenient_parsing_falls_back_to_defaults() {
		assert_eq!(parse_count_or_default("12"), 12);
		assert_eq!(parse_count_or_default(" 7 "), 7);
		assert_eq!(parse_count_or_default(""), DEFAULT_COUNT);
		assert_eq!(parse_count_or_default("twelve"), DEFAULT_COUNT);
		assert_eq!(parse_count_or_default("0"), DEFAULT_COUNT);
		assert_eq!(parse_count_or_default("-3"), DEFAULT_COUNT);
		assert_eq!(parse_length_or_default("80"), 80);
		assert_eq!(parse_length_or_default("4.5"), DEFAULT_MAX_LENGTH);
		assert_eq!(parse_positive_or_default("nope", 5, "count"), 5);
		assert_eq!(parse_positive_or_default("0", 5, "count"), 5);
		assert_eq!(parse_positive_or_default("9", 5, "count"), 9);
	}

	#[test]
	fn deserialization_fills_defaults() {
		let request: GenerationRequest = serde_json::from_str(r#"{"topic":"rust"}"#).unwrap();
		assert_eq!(request, GenerationRequest::with_topic("rust").unwrap());

		let request: GenerationRequest =
			serde_json::from_str(r#"{"topic":"  ","tone":"clickbait","count":3,"max_length":40}"#).unwrap();
		assert_eq!(request.tone, Tone::Clickbait);
		assert!(matches!(request.validate(), Err(TitleError::EmptyTopic)));
	}
}
