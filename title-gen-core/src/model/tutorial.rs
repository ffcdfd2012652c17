use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::text::{capitalize_words, char_len, truncate_chars, ELLIPSIS, ELLIPSIS_LEN};
use crate::error::{Result, TitleError};

/// Keywords used when the caller supplies none.
pub const DEFAULT_KEYWORDS: [&str; 5] = ["python", "coding", "tutorial", "programming", "development"];

/// Default number of tutorial titles.
pub const DEFAULT_TUTORIAL_COUNT: usize = 5;

/// Style of the opening word of a tutorial title.
///
/// Unrecognized names fall back to `Professional`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TutorialStyle {
	#[default]
	Professional,
	Casual,
	Exciting,
}

impl TutorialStyle {
	pub const ALL: [TutorialStyle; 3] = [TutorialStyle::Professional, TutorialStyle::Casual, TutorialStyle::Exciting];

	/// Lenient parse, ignoring case and surrounding whitespace.
	pub fn parse_lossy(name: &str) -> Self {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|style| style.as_str().eq_ignore_ascii_case(name))
			.unwrap_or_else(|| {
				warn!("Unknown style '{}', falling back to professional", name);
				TutorialStyle::Professional
			})
	}

	pub fn as_str(self) -> &'static str {
		match self {
			TutorialStyle::Professional => "professional",
			TutorialStyle::Casual => "casual",
			TutorialStyle::Exciting => "exciting",
		}
	}

	/// Opening words cycled through by the generator.
	pub fn words(self) -> &'static [&'static str] {
		match self {
			TutorialStyle::Professional => &["Guide to", "Complete", "Ultimate", "Advanced", "Mastering"],
			TutorialStyle::Casual => &["Easy", "Simple", "Quick", "Fun", "Cool"],
			TutorialStyle::Exciting => &["Amazing", "Incredible", "Awesome", "Mind-blowing", "Revolutionary"],
		}
	}
}

impl From<String> for TutorialStyle {
	fn from(value: String) -> Self {
		Self::parse_lossy(&value)
	}
}

impl fmt::Display for TutorialStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Generates `n` tutorial titles by cycling through keywords and style words.
///
/// Title `i` is `"{word} {Keyword} Tutorial"` where `word` is
/// `style.words()[i % 5]` and `Keyword` is `keywords[i % len]`, trimmed and
/// capitalized word by word.
///
/// # Behavior
/// - Blank keywords are skipped.
/// - A title longer than `max_length` keeps its first `max_length - 3`
///   characters followed by `"..."`.
/// - No deduplication; generation order is preserved.
///
/// # Errors
/// Returns `NoKeywords` if no keyword is left after dropping blank ones.
pub fn generate_tutorial_titles<S: AsRef<str>>(
	keywords: &[S],
	style: TutorialStyle,
	n: usize,
	max_length: usize,
) -> Result<Vec<String>> {
	let keywords: Vec<&str> = keywords
		.iter()
		.map(|k| k.as_ref().trim())
		.filter(|k| !k.is_empty())
		.collect();
	if keywords.is_empty() {
		return Err(TitleError::NoKeywords);
	}

	let words = style.words();
	let titles = (0..n)
		.map(|i| {
			let keyword = capitalize_words(keywords[i % keywords.len()]);
			let title = format!("{} {} Tutorial", words[i % words.len()], keyword);
			let title = shorten(&title, max_length);
			debug!("Tutorial title {}: '{}'", i + 1, title);
			title
		})
		.collect();
	Ok(titles)
}

/// Hard cut leaving room for the ellipsis.
fn shorten(title: &str, max_length: usize) -> String {
	if char_len(title) <= max_length {
		return title.to_owned();
	}
	match max_length.checked_sub(ELLIPSIS_LEN) {
		Some(keep) => format!("{}{}", truncate_chars(title, keep), ELLIPSIS),
		None => truncate_chars(title, max_length).to_owned(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rotates_keywords_and_words() {
		let titles = generate_tutorial_titles(&DEFAULT_KEYWORDS, TutorialStyle::Professional, 5, 60).unwrap();
		assert_eq!(
			titles,
			vec![
				"Guide to Python Tutorial",
				"Complete Coding Tutorial",
				"Ultimate Tutorial Tutorial",
				"Advanced Programming Tutorial",
				"Mastering Development Tutorial",
			]
		);
	}

	#[test]
	fn cycles_when_n_exceeds_the_lists() {
		let titles = generate_tutorial_titles(&["web scraping", " rust "], TutorialStyle::Casual, 7, 60).unwrap();
		assert_eq!(titles[0], "Easy Web Scraping Tutorial");
		assert_eq!(titles[1], "Simple Rust Tutorial");
		assert_eq!(titles[5], "Easy Rust Tutorial");
		assert_eq!(titles[6], "Simple Web Scraping Tutorial");
	}

	#[test]
	fn long_titles_are_cut_with_ellipsis() {
		let titles = generate_tutorial_titles(&["machine learning"], TutorialStyle::Exciting, 1, 20).unwrap();
		assert_eq!(titles[0], "Amazing Machine L...");
		assert_eq!(titles[0].chars().count(), 20);

		let titles = generate_tutorial_titles(&["go"], TutorialStyle::Exciting, 1, 2).unwrap();
		assert_eq!(titles[0], "Am");

		// Multi-byte characters count once.
		let titles = generate_tutorial_titles(&["café crème"], TutorialStyle::Casual, 1, 16).unwrap();
		assert_eq!(titles[0], "Easy Café Crè...");
		assert_eq!(char_len(&titles[0]), 16);
	}

	#[test]
	fn blank_keywords_are_rejected() {
		assert!(matches!(
			generate_tutorial_titles(&["  ", ""], TutorialStyle::Casual, 3, 60),
			Err(TitleError::NoKeywords)
		));
		let empty: [&str; 0] = [];
		assert!(generate_tutorial_titles(&empty, TutorialStyle::Casual, 3, 60).is_err());
	}

	#[test]
	fn unknown_style_is_professional() {
		assert_eq!(TutorialStyle::parse_lossy("Exciting"), TutorialStyle::Exciting);
		assert_eq!(TutorialStyle::parse_lossy("goofy"), TutorialStyle::Professional);
	}
}
