use std::io::{self, BufRead, Write};

/// Line-oriented question/answer helper over any reader and writer.
///
/// Answers are trimmed. End of input reads as an empty answer, so every
/// question falls back to its default.
pub struct Prompter<R: BufRead, W: Write> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// Prints `question` without a newline and reads one answer line.
	pub fn ask(&mut self, question: &str) -> io::Result<String> {
		write!(self.output, "{question}")?;
		self.output.flush()?;

		let mut answer = String::new();
		self.input.read_line(&mut answer)?;
		Ok(answer.trim().to_owned())
	}

	/// Same as [`Prompter::ask`], but an empty answer becomes `default`.
	pub fn ask_or(&mut self, question: &str, default: &str) -> io::Result<String> {
		let answer = self.ask(question)?;
		Ok(if answer.is_empty() { default.to_owned() } else { answer })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ask_trims_and_echoes_the_question() {
		let mut shown = Vec::new();
		let mut prompter = Prompter::new("  rust  \n".as_bytes(), &mut shown);
		assert_eq!(prompter.ask("Topic: ").unwrap(), "rust");
		drop(prompter);
		assert_eq!(String::from_utf8(shown).unwrap(), "Topic: ");
	}

	#[test]
	fn empty_or_missing_answers_use_the_default() {
		let mut prompter = Prompter::new("\n".as_bytes(), io::sink());
		assert_eq!(prompter.ask_or("Tone? ", "neutral").unwrap(), "neutral");
		assert_eq!(prompter.ask_or("Count? ", "20").unwrap(), "20");
	}
}
