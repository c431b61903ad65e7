//! Sonority hierarchies and phoneme classification.
//!
//! A sonority hierarchy ranks phonemes by how open and resonant they are:
//! vowels above approximants, nasals, fricatives, affricates and stops.
//! Hierarchies are plain data ([`SonorityTier`] lists) validated into a
//! [`SonorityTable`], so a table can be swapped without touching the
//! syllabification code.
//!
//! # Usage
//!
//! ```rust
//! use sonority::hierarchy::{Classifier, Mode};
//!
//! let classifier = Classifier::for_mode(Mode::Standard);
//! let word = classifier.rank_word("cat");
//! assert_eq!(word.ranks().collect::<Vec<_>>(), vec![0, 5, 0]);
//! assert_eq!(word.vowel_count, 1);
//! ```
//!
//! # Tables
//!
//! - [`standard_tiers()`] - Six ranks for ordinary spelling
//! - [`ipa_tiers()`] - Twelve ranks for IPA transcriptions; used together with
//!   [`InputFilter::ipa()`], which drops secondary-articulation diacritics and
//!   edge punctuation

pub mod classifier;
pub mod tables;
pub mod types;

pub use classifier::{Classifier, InputFilter, SonorityTable};
pub use tables::{ipa_tiers, standard_tiers, EDGE_PUNCTUATION, SECONDARY_ARTICULATIONS};
pub use types::{Mode, PhonemeClass, Rank, RankedPhoneme, RankedWord, SonorityTier};
