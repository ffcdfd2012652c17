//! Template-based title generation library.
//!
//! This crate provides a small title generation system including:
//! - Fixed word banks and sentence templates
//! - Tone post-processing (neutral, clickbait, informative)
//! - Length bounding, title casing and deduplication
//! - A rotation-based tutorial title generator
//! - CSV output of generated titles
//!
//! The random source is always injected, so a seeded generator
//! produces reproducible output.

/// Title generation models and generators.
///
/// This module exposes the high-level generator interfaces while keeping
/// the word banks and templates private.
pub mod model;

/// I/O utilities (CSV output, path helpers).
pub mod io;

/// Crate error type.
pub mod error;

pub use error::{Result, TitleError};
