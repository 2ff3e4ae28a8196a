//! Character-frequency password generation library.
//!
//! This crate provides the two operations of `passgen`:
//! - Counting how often each character occurs in a text file
//! - Loading a character frequency table from CSV
//! - Generating random strings that follow that frequency table
//!
//! Only the high-level API is exposed publicly. Low-level file helpers
//! are kept internal.

/// Error type shared by every operation.
pub mod error;

/// Character counting, frequency tables, cumulative distributions
/// and the password generator.
pub mod model;

/// I/O utilities (file opening, line scanning).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use model::character_count::CharacterCount;
pub use model::distribution::CumulativeDistribution;
pub use model::frequency_table::{FrequencyEntry, FrequencyTable};
pub use model::generator::PasswordGenerator;
