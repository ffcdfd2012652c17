use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::word_bank::{
	WordBank, ACTION_PHRASES, BENEFITS, EMOTION_WORDS, POWER_WORDS, PROMISES, ROLES, SHORT_HOOKS,
	TIME_FRAMES,
};

/// Inclusive bounds of the `{number}` placeholder.
const NUMBER_RANGE: std::ops::RangeInclusive<u32> = 3..=12;

/// Named slot inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
	Power,
	Keywords,
	Promise,
	Action,
	TimeFrame,
	Number,
	Role,
	ShortHook,
	Emotion,
	Benefit,
}

impl Placeholder {
	/// Name of the placeholder as written in a pattern (`{name}`).
	pub(crate) fn name(self) -> &'static str {
		match self {
			Placeholder::Power => "power",
			Placeholder::Keywords => "keywords",
			Placeholder::Promise => "promise",
			Placeholder::Action => "action",
			Placeholder::TimeFrame => "time_frame",
			Placeholder::Number => "number",
			Placeholder::Role => "role",
			Placeholder::ShortHook => "short_hook",
			Placeholder::Emotion => "emotion",
			Placeholder::Benefit => "benefit",
		}
	}

	/// Word bank backing this placeholder, if any.
	///
	/// `Keywords` is the topic itself and `Number` is drawn from a range.
	fn bank(self) -> Option<WordBank> {
		match self {
			Placeholder::Power => Some(POWER_WORDS),
			Placeholder::Promise => Some(PROMISES),
			Placeholder::Action => Some(ACTION_PHRASES),
			Placeholder::TimeFrame => Some(TIME_FRAMES),
			Placeholder::Role => Some(ROLES),
			Placeholder::ShortHook => Some(SHORT_HOOKS),
			Placeholder::Emotion => Some(EMOTION_WORDS),
			Placeholder::Benefit => Some(BENEFITS),
			Placeholder::Keywords | Placeholder::Number => None,
		}
	}

	/// Appends a randomly drawn value for this placeholder to `out`.
	fn fill_into<R: Rng + ?Sized>(self, out: &mut String, topic: &str, rng: &mut R) {
		match self {
			Placeholder::Keywords => out.push_str(topic),
			Placeholder::Number => out.push_str(&rng.random_range(NUMBER_RANGE).to_string()),
			other => {
				if let Some(bank) = other.bank() {
					out.push_str(bank.choose(rng));
				}
			}
		}
	}
}

/// One piece of a template: literal text or a placeholder.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment {
	Text(&'static str),
	Slot(Placeholder),
}

/// A fixed sentence pattern made of literal text and placeholders.
///
/// Templates are expressed as typed segments, so an unknown
/// placeholder name cannot exist.
#[derive(Debug)]
pub(crate) struct Template(&'static [Segment]);

impl Template {
	/// Picks a template uniformly at random from the fixed pool.
	pub(crate) fn choose<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static Template> {
		TEMPLATES.choose(rng)
	}

	/// Returns the whole template pool, in declaration order.
	#[cfg(test)]
	pub(crate) fn all() -> &'static [Template] {
		TEMPLATES
	}

	/// Returns the placeholders used by this template, in order.
	#[cfg(test)]
	pub(crate) fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
		self.0.iter().filter_map(|segment| match segment {
			Segment::Slot(p) => Some(*p),
			Segment::Text(_) => None,
		})
	}

	/// Fills every placeholder and returns the resulting string.
	///
	/// # Parameters
	/// - `topic`: normalized topic, inserted verbatim for `{keywords}`
	/// - `rng`: random source used for word and number selection
	pub(crate) fn fill<R: Rng + ?Sized>(&self, topic: &str, rng: &mut R) -> String {
		let mut filled = String::new();
		for segment in self.0 {
			match segment {
				Segment::Text(text) => filled.push_str(text),
				Segment::Slot(placeholder) => placeholder.fill_into(&mut filled, topic, rng),
			}
		}
		filled
	}
}

impl fmt::Display for Template {
	/// Renders the pattern form, e.g. `{keywords} | {power} Guide`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for segment in self.0 {
			match segment {
				Segment::Text(text) => f.write_str(text)?,
				Segment::Slot(placeholder) => write!(f, "{{{}}}", placeholder.name())?,
			}
		}
		Ok(())
	}
}

use Placeholder::*;
use Segment::{Slot, Text};

static TEMPLATES: &[Template] = &[
	Template(&[Slot(Power), Text(": "), Slot(Keywords), Text(" — "), Slot(Promise)]),
	Template(&[Slot(Action), Text(" "), Slot(Keywords), Text(" in "), Slot(TimeFrame)]),
	Template(&[Slot(Keywords), Text(": "), Slot(Power), Text(" Tips You Need")]),
	Template(&[Slot(Number), Text(" "), Slot(Power), Text(" Ways to "), Slot(Keywords)]),
	Template(&[Slot(Keywords), Text(" — "), Slot(Emotion), Text(" Story")]),
	Template(&[Slot(Keywords), Text(" | "), Slot(Power), Text(" Guide")]),
	Template(&[Slot(Action), Text(" "), Slot(Keywords), Text(" like a "), Slot(Role)]),
	Template(&[Text("The "), Slot(Power), Text(" Truth About "), Slot(Keywords)]),
	Template(&[Slot(Keywords), Text("? "), Slot(ShortHook)]),
	Template(&[Slot(Keywords), Text(": "), Slot(Benefit), Text(" in "), Slot(TimeFrame)]),
];
