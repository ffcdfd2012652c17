use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A named, fixed list of words used to fill one kind of placeholder.
///
/// ## Invariants
/// - `words` is never empty
/// - Banks are process-wide statics and never mutated
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordBank {
	/// Name of the bank, used for logging.
	name: &'static str,
	/// Candidate words, in declaration order.
	words: &'static [&'static str],
}

impl WordBank {
	const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
		Self { name, words }
	}

	#[cfg(test)]
	pub(crate) fn name(&self) -> &'static str {
		self.name
	}

	#[cfg(test)]
	pub(crate) fn words(&self) -> &'static [&'static str] {
		self.words
	}

	/// Picks one word uniformly at random.
	///
	/// Returns an empty string only if the bank is empty, which the
	/// constants below never are.
	pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
		let word = self.words.choose(rng).copied().unwrap_or_default();
		trace!("{} -> '{}'", self.name, word);
		word
	}
}

pub(crate) static POWER_WORDS: WordBank = WordBank::new("power", &[
	"Ultimate", "Amazing", "Secret", "Proven", "Essential", "Crazy",
	"Simple", "Fast", "Step-by-Step", "Complete", "Beginner's", "Advanced",
]);

pub(crate) static EMOTION_WORDS: WordBank = WordBank::new("emotion", &[
	"Incredible", "Unbelievable", "Heartwarming", "Shocking", "Funny",
	"Must-See", "Mind-Blowing", "Timeless",
]);

pub(crate) static ACTION_PHRASES: WordBank = WordBank::new("action", &[
	"How to", "Learn to", "Make", "Create", "Build", "Master",
	"Avoid", "Stop", "Start", "Boost", "Increase",
]);

pub(crate) static TIME_FRAMES: WordBank = WordBank::new("time_frame", &[
	"5 minutes", "10 minutes", "1 hour", "a day", "a week", "30 seconds",
]);

pub(crate) static ROLES: WordBank = WordBank::new("role", &[
	"Pro", "Expert", "Beginner", "Artist", "Hacker", "Chef", "Designer",
]);

pub(crate) static SHORT_HOOKS: WordBank = WordBank::new("short_hook", &[
	"You'll never guess", "Don't make this mistake", "Watch now",
	"Before it's too late", "What everyone misses",
]);

pub(crate) static PROMISES: WordBank = WordBank::new("promise", &[
	"Get results fast", "No experience needed", "Work every time",
	"Save time and money", "Step-by-step", "Without tools",
]);

pub(crate) static BENEFITS: WordBank = WordBank::new("benefit", &[
	"More views", "More sales", "Faster results", "Better skills",
]);

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn all() -> [WordBank; 8] {
		[
			POWER_WORDS, EMOTION_WORDS, ACTION_PHRASES, TIME_FRAMES,
			ROLES, SHORT_HOOKS, PROMISES, BENEFITS,
		]
	}

	#[test]
	fn banks_are_not_empty() {
		for bank in all() {
			assert!(!bank.words().is_empty(), "bank {} is empty", bank.name());
		}
	}

	#[test]
	fn choose_returns_a_bank_word() {
		let mut rng = StdRng::seed_from_u64(7);
		for bank in all() {
			for _ in 0..20 {
				let word = bank.choose(&mut rng);
				assert!(bank.words().contains(&word));
			}
		}
	}

	#[test]
	fn choose_eventually_covers_the_bank() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut seen = std::collections::HashSet::new();
		for _ in 0..500 {
			seen.insert(ROLES.choose(&mut rng));
		}
		assert_eq!(seen.len(), ROLES.words().len());
	}
}
