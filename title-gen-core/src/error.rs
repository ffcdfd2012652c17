use thiserror::Error;

/// Errors raised while validating inputs or writing titles.
///
/// Generation itself never fails: every variant here is either a
/// rejected input or an output failure.
#[derive(Error, Debug)]
pub enum TitleError {
	/// The topic is empty after whitespace normalization.
	#[error("Keywords required: topic is empty")]
	EmptyTopic,

	/// Requested title count is zero.
	#[error("Title count must be a positive integer")]
	InvalidCount,

	/// Requested maximum length is zero.
	#[error("Max title length must be a positive integer")]
	InvalidMaxLength,

	/// The tutorial generator received no usable keyword.
	#[error("At least one non-empty keyword is required")]
	NoKeywords,

	/// Writing the output file failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TitleError>;
