pub mod templates;
pub mod tutorials;

/// Result of a subcommand; errors are reported by `main`.
pub type CmdResult = Result<(), Box<dyn std::error::Error>>;
