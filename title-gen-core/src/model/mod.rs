//! Top-level module for the title generation system.
//!
//! This module provides:
//! - Fixed word banks (`WordBank`) and templates (`Template`)
//! - Text helpers (topic normalization, truncation, title casing)
//! - Tone post-processing (`Tone`)
//! - Validated generation parameters (`GenerationRequest`)
//! - The template-based generator (`Generator`)
//! - A rotation-based tutorial title generator

/// High-level interface for generating titles from templates.
///
/// Owns the random source, runs the bounded attempt loop
/// and deduplicates the results.
pub mod generator;

/// Validated generation parameters and lenient numeric parsing.
pub mod request;

/// Tone selection and tone-specific post-processing.
pub mod tone;

/// Topic normalization, length bounding and title casing.
pub mod text;

/// Rotation-based "tutorial" title generator.
///
/// Deterministic: keywords and style words are cycled in order.
pub mod tutorial;

/// Fixed sentence templates with typed placeholders.
///
/// This module is not exposed publicly.
mod template;

/// Fixed word banks used to fill template placeholders.
///
/// This module is not exposed publicly.
mod word_bank;
