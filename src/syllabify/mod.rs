//! Syllabification by the Sonority Sequencing Principle.
//!
//! A [`Syllabifier`] runs a linear pipeline per word:
//!
//! ```text
//! word → Classifier → RankedWord ─┬─ vowel_count == 1 → one span ─┐
//!                                 └─ otherwise → scan ─────────────┴→ repair → syllables
//! ```
//!
//! # Usage
//!
//! ```rust
//! use sonority::prelude::*;
//!
//! let syllabifier = Syllabifier::new(Mode::Standard);
//! assert_eq!(syllabifier.syllabify("justification"), ["jus", "ti", "fi", "ca", "tion"]);
//! assert_eq!(syllabifier.syllabify("cat"), ["cat"]);
//! assert!(syllabifier.syllabify("").is_empty());
//! ```

pub mod repair;
pub mod scanner;
pub mod shape;

pub use repair::repair;
pub use scanner::{scan, Span};
pub use shape::{Boundary, Shape};

use std::sync::OnceLock;

use tracing::debug;

use crate::hierarchy::{Classifier, InputFilter, Mode, RankedWord, SonorityTable};

/// Result of syllabifying one word, before rendering to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The classified word
    pub word: RankedWord,
    /// Final syllables as phoneme spans
    pub spans: Vec<Span>,
}

impl Analysis {
    /// Syllables as strings.
    pub fn syllables(&self) -> Vec<String> {
        self.spans
            .iter()
            .map(|span| span.render(&self.word.phonemes))
            .collect()
    }
}

/// Splits words into syllables using a fixed sonority table.
///
/// Immutable and `Send + Sync`; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Syllabifier {
    classifier: Classifier,
}

impl Syllabifier {
    /// Built-in table and filter for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            classifier: Classifier::for_mode(mode),
        }
    }

    /// Use a custom table with the input filter of `mode`.
    pub fn with_table(table: SonorityTable, mode: Mode) -> Self {
        Self::with_classifier(Classifier::new(table, InputFilter::for_mode(mode)))
    }

    /// Use a fully configured classifier.
    pub fn with_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify `word` and compute its syllable spans.
    pub fn analyze(&self, word: &str) -> Analysis {
        let ranked = self.classifier.rank_word(word);
        let provisional = match ranked.vowel_count {
            _ if ranked.is_empty() => Vec::new(),
            1 => vec![Span::new(0, ranked.len())],
            _ => scan(&ranked.phonemes),
        };
        let spans = repair(&ranked.phonemes, &provisional);
        debug!(
            word,
            vowels = ranked.vowel_count,
            provisional = provisional.len(),
            syllables = spans.len(),
            "syllabified"
        );
        Analysis {
            word: ranked,
            spans,
        }
    }

    /// Split `word` into syllables.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        self.analyze(word).syllables()
    }
}

/// Split `word` into syllables with the built-in table for `mode`.
pub fn syllabify(word: &str, mode: Mode) -> Vec<String> {
    static STANDARD: OnceLock<Syllabifier> = OnceLock::new();
    static IPA: OnceLock<Syllabifier> = OnceLock::new();

    let cell = match mode {
        Mode::Standard => &STANDARD,
        Mode::Ipa => &IPA,
    };
    cell.get_or_init(|| Syllabifier::new(mode)).syllabify(word)
}
