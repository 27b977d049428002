#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Protform Library
//!
//! This library converts a protein's backbone coordinates into numeric
//! encodings for machine-learning pipelines: the ordered chain-A
//! alpha-carbon trace, pairwise distance matrices, the symbolic "protein
//! form language" in text and integer-token form (with a decoder back to
//! text), and direction-value summaries for windowed inputs.
//!
//! Everything downstream of parsing borrows the trace read-only, so
//! encodings over the same trace can run concurrently without
//! synchronization.

pub mod alphabet;
pub mod distance;
mod error;
pub mod features;
pub mod language;
pub mod trace;
mod utils;
pub mod window;

// Re-export key public types
pub use alphabet::ResidueClass;
pub use distance::{complete_matrix, contact_partners, window_matrix, DEFAULT_CUTOFF};
pub use error::ProtformError;
pub use features::{target_contacts, target_input, token_vector, windowed_input};
pub use language::{decode_tokens, encode_text, encode_tokens};
pub use trace::{ResidueRecord, ResidueTrace};
pub use utils::run_with_threads;
pub use window::direction_value;
