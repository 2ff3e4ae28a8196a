//! Top-level module for counting and frequency-based generation.
//!
//! This module provides:
//! - Character occurrence counting (`CharacterCount`)
//! - Frequency tables loaded from CSV (`FrequencyTable`)
//! - Inverse-CDF lookup over table weights (`CumulativeDistribution`)
//! - A streaming password generator (`PasswordGenerator`)

/// Per-character occurrence counts of a text source.
///
/// Counts code points line by line and reports them most frequent first.
pub mod character_count;

/// Ordered (character, weight) pairs read from a two-column CSV file.
pub mod frequency_table;

/// Running sums of table weights used for weighted random sampling.
pub mod distribution;

/// Password generation on top of a frequency table.
///
/// Seeds its random source once and emits strings until stopped.
pub mod generator;
