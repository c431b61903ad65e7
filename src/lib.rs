//! # sonority
//!
//! Syllabification by the Sonority Sequencing Principle (SSP).
//!
//! Each phoneme of a word is ranked by sonority; syllable boundaries fall at
//! sonority troughs and level stretches, and a repair pass makes sure every
//! syllable keeps a vowel nucleus.
//!
//! ## Example
//!
//! ```rust
//! use sonority::prelude::*;
//!
//! assert_eq!(syllabify("justification", Mode::Standard), ["jus", "ti", "fi", "ca", "tion"]);
//! assert_eq!(syllabify("strength", Mode::Standard), ["strength"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod error;
pub mod hierarchy;
pub mod syllabify;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::batch::{format_words, normalize, syllabify_all};
    pub use crate::error::SonorityError;
    pub use crate::hierarchy::{
        Classifier, InputFilter, Mode, PhonemeClass, Rank, SonorityTable, SonorityTier,
    };
    pub use crate::syllabify::{syllabify, Analysis, Span, Syllabifier};

    #[cfg(feature = "cli")]
    pub use crate::batch::Report;
}
