//! Text helpers shared by the generators.
//!
//! All lengths are counted in `char`s (Unicode scalar values), never in bytes.

/// Marker appended to a title cut at a word boundary.
pub const ELLIPSIS: &str = "...";

/// Length of [`ELLIPSIS`], in characters.
pub(crate) const ELLIPSIS_LEN: usize = 3;

/// Words kept lower-case by [`title_case`] unless they open the title.
pub const MINOR_WORDS: [&str; 11] = ["and", "or", "the", "a", "an", "in", "on", "with", "to", "for", "of"];

/// Collapses whitespace runs to single spaces and trims both ends.
///
/// Example: `"  python   web   scraping "` → `"python web scraping"`
pub fn normalize_topic(topic: &str) -> String {
	topic.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the number of characters of `s`.
pub fn char_len(s: &str) -> usize {
	s.chars().count()
}

/// Returns the first `n` characters of `s` (UTF-8 safe).
pub fn truncate_chars(s: &str, n: usize) -> &str {
	match s.char_indices().nth(n) {
		Some((index, _)) => &s[..index],
		None => s,
	}
}

/// Bounds `text` to `max_length` characters, cutting at a word boundary.
///
/// # Behavior
/// - Text that already fits is returned unchanged.
/// - Otherwise the first `max_length` characters are kept, cut back to the
///   last space, and [`ELLIPSIS`] is appended.
/// - If the ellipsis would push the result past `max_length`, more words are
///   dropped; a single oversized word is hard-cut.
/// - With `max_length < 3` there is no room for the ellipsis and the text is
///   hard-cut.
///
/// The result never exceeds `max_length` characters.
pub fn truncate_to_length(text: &str, max_length: usize) -> String {
	if char_len(text) <= max_length {
		return text.to_owned();
	}
	if max_length < ELLIPSIS_LEN {
		return truncate_chars(text, max_length).to_owned();
	}

	let prefix = truncate_chars(text, max_length);
	let mut body = last_word_boundary(prefix);

	while char_len(body) + ELLIPSIS_LEN > max_length {
		match body.rsplit_once(' ') {
			Some((head, _)) => body = head,
			None => {
				body = truncate_chars(body, max_length - ELLIPSIS_LEN);
				break;
			}
		}
	}

	format!("{body}{ELLIPSIS}")
}

/// Everything before the last space, or the whole string if it has none.
fn last_word_boundary(s: &str) -> &str {
	s.rsplit_once(' ').map_or(s, |(head, _)| head)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}

/// Title-cases a sentence.
///
/// Every whitespace-separated word is capitalized, except [`MINOR_WORDS`]
/// which are lower-cased unless they are the first word. Words are joined
/// back with single spaces.
pub fn title_case(s: &str) -> String {
	s.split_whitespace()
		.enumerate()
		.map(|(i, word)| {
			let lower = word.to_lowercase();
			if i != 0 && MINOR_WORDS.contains(&lower.as_str()) {
				lower
			} else {
				capitalize(word)
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Capitalizes every run of letters.
///
/// A letter is upper-cased when the previous character is neither a letter
/// nor an apostrophe, and lower-cased otherwise:
/// `"c++ web-scraping don't"` → `"C++ Web-Scraping Don't"`.
pub fn capitalize_words(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut previous: Option<char> = None;
	for c in s.chars() {
		let starts_word = previous.is_none_or(|p| !p.is_alphabetic() && p != '\'');
		if c.is_alphabetic() && starts_word {
			out.extend(c.to_uppercase());
		} else {
			out.extend(c.to_lowercase());
		}
		previous = Some(c);
	}
	out
}
