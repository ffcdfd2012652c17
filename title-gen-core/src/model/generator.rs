use std::collections::BTreeSet;

use log::{debug, info, warn};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::request::GenerationRequest;
use super::template::Template;
use super::text::{normalize_topic, title_case, truncate_chars, truncate_to_length};
use super::tone::Tone;

/// Number of template fills allowed per requested title.
pub const ATTEMPTS_PER_TITLE: usize = 10;

/// High-level template-based title generator.
///
/// # Responsibilities
/// - Own the random source used for template, word and tone draws
/// - Run the bounded generation loop for a `GenerationRequest`
/// - Return deduplicated, length-bounded, title-cased titles in sorted order
///
/// The random source is a type parameter, so tests and callers wanting
/// reproducible output use [`Generator::from_seed`] or [`Generator::with_rng`].
#[derive(Debug)]
pub struct Generator<R: Rng = ThreadRng> {
	rng: R,
}

impl Generator<ThreadRng> {
	/// Creates a generator backed by the thread-local random source.
	pub fn new() -> Self {
		Self { rng: rand::rng() }
	}
}

impl Default for Generator<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator<StdRng> {
	/// Creates a reproducible generator: the same seed yields the same titles.
	pub fn from_seed(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator over any random source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates titles for a validated request.
	///
	/// # Returns
	/// At most `request.count` distinct titles, sorted ascending, each at
	/// most `request.max_length` characters long.
	///
	/// # Notes
	/// - Fewer titles are returned when the attempt budget
	///   (`count * 10`) runs out first; this is not an error.
	pub fn generate(&mut self, request: &GenerationRequest) -> Vec<String> {
		generate(&request.topic, request.tone, request.count, request.max_length, &mut self.rng)
	}
}

/// Generates up to `count` unique titles about `topic`.
///
/// # Parameters
/// - `topic`: free text, whitespace-normalized before use
/// - `tone`: post-processing applied to each filled template
/// - `count`: number of distinct titles wanted
/// - `max_length`: hard cap on each title, in characters
/// - `rng`: random source for every draw
///
/// # Behavior
/// For at most `count * 10` attempts, until `count` distinct titles exist:
/// pick a template, fill it, apply the tone, bound the length, title-case
/// the result and insert it into the set. Duplicates collapse silently.
///
/// # Notes
/// - No validation: an empty topic still fills templates, a zero `count`
///   returns an empty list. Callers validate through `GenerationRequest`.
pub fn generate<R: Rng + ?Sized>(
	topic: &str,
	tone: Tone,
	count: usize,
	max_length: usize,
	rng: &mut R,
) -> Vec<String> {
	let topic = normalize_topic(topic);
	let max_attempts = count.saturating_mul(ATTEMPTS_PER_TITLE);

	let mut titles = BTreeSet::new();
	let mut attempts = 0;
	while titles.len() < count && attempts < max_attempts {
		attempts += 1;
		let Some(template) = Template::choose(rng) else {
			break;
		};
		let title = build_title(template, &topic, tone, max_length, rng);
		debug!("Attempt {}: '{}' -> '{}'", attempts, template, title);
		titles.insert(title);
	}

	if titles.len() < count {
		warn!(
			"Generated {} of {} requested titles after {} attempts",
			titles.len(),
			count,
			attempts
		);
	} else {
		info!("Generated {} titles in {} attempts", titles.len(), attempts);
	}

	titles.into_iter().collect()
}

/// Runs one template through the fill, tone, length and casing steps.
fn build_title<R: Rng + ?Sized>(
	template: &Template,
	topic: &str,
	tone: Tone,
	max_length: usize,
	rng: &mut R,
) -> String {
	let filled = template.fill(topic, rng);
	let toned = tone.apply(filled, rng);
	let bounded = truncate_to_length(&toned, max_length);
	let titled = title_case(&bounded);
	// Case mapping may widen some characters (e.g. 'ß' -> "SS").
	truncate_chars(&titled, max_length).to_owned()
}
