use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability of prefixing a clickbait title with [`CLICKBAIT_PREFIX`].
pub const CLICKBAIT_PREFIX_PROBABILITY: f64 = 0.3;

/// Probability of turning an informative title into a "How ..." question.
pub const INFORMATIVE_PREFIX_PROBABILITY: f64 = 0.4;

pub const CLICKBAIT_PREFIX: &str = "You won't believe ";

/// Openers that already make a title informative (compared lower-cased).
const INFORMATIVE_OPENERS: [&str; 4] = ["how ", "learn ", "what ", "why "];

/// Writing tone applied to generated titles.
///
/// Parsing is lenient: anything that is not a known tone becomes
/// `Neutral`, which applies no post-processing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
	#[default]
	Neutral,
	Clickbait,
	Informative,
}

impl Tone {
	/// All recognized tones.
	pub const ALL: [Tone; 3] = [Tone::Neutral, Tone::Clickbait, Tone::Informative];

	/// Returns the tone named `name`, ignoring case and surrounding whitespace.
	///
	/// Returns `None` for unrecognized names.
	pub fn recognize(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL.into_iter().find(|tone| tone.as_str().eq_ignore_ascii_case(name))
	}

	/// Lenient parse: unrecognized names fall back to `Neutral`.
	pub fn parse_lossy(name: &str) -> Self {
		Self::recognize(name).unwrap_or_else(|| {
			warn!("Unknown tone '{}', falling back to neutral", name.trim());
			Tone::Neutral
		})
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Tone::Neutral => "neutral",
			Tone::Clickbait => "clickbait",
			Tone::Informative => "informative",
		}
	}

	/// Applies the tone-specific post-processing to a filled template.
	///
	/// - `Clickbait`: ensures a trailing `!`, then prepends
	///   [`CLICKBAIT_PREFIX`] with [`CLICKBAIT_PREFIX_PROBABILITY`].
	/// - `Informative`: removes every `!`; unless the title already opens
	///   with "how", "learn", "what" or "why", lower-cases its first
	///   character and prepends "How " with [`INFORMATIVE_PREFIX_PROBABILITY`].
	/// - `Neutral`: unchanged.
	pub(crate) fn apply<R: Rng + ?Sized>(self, filled: String, rng: &mut R) -> String {
		match self {
			Tone::Neutral => filled,
			Tone::Clickbait => {
				let mut title = filled;
				if !title.ends_with('!') {
					title.push('!');
				}
				if rng.random_bool(CLICKBAIT_PREFIX_PROBABILITY) {
					title.insert_str(0, CLICKBAIT_PREFIX);
				}
				title
			}
			Tone::Informative => {
				let title = filled.replace('!', "");
				let lower = title.to_lowercase();
				if INFORMATIVE_OPENERS.iter().any(|opener| lower.starts_with(opener)) {
					return title;
				}
				if rng.random_bool(INFORMATIVE_PREFIX_PROBABILITY) {
					format!("How {}", lowercase_first(&title))
				} else {
					title
				}
			}
		}
	}
}

fn lowercase_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

impl FromStr for Tone {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse_lossy(s))
	}
}

impl From<String> for Tone {
	fn from(value: String) -> Self {
		Self::parse_lossy(&value)
	}
}

impl fmt::Display for Tone {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
