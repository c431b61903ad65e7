//! Batch syllabification of running text.
//!
//! Text is split into word tokens with [`normalize`], each token is
//! syllabified independently by [`syllabify_all`] (in parallel with the
//! `rayon` feature), and [`format_words`] renders the result as
//! hyphen-joined syllables separated by spaces.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::debug;

use crate::syllabify::Syllabifier;

/// Default separator placed between syllables of one word.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Typographic quotes trimmed from token edges alongside ASCII punctuation.
const QUOTE_MARKS: &[char] = &['\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '\u{ab}', '\u{bb}'];

#[inline]
fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || QUOTE_MARKS.contains(&c)
}

/// Split text into word tokens.
///
/// Splits on whitespace, trims punctuation and quotation marks from both ends
/// of each token and drops tokens left empty. Interior punctuation
/// (apostrophes, hyphens) is kept.
///
/// ```rust
/// use sonority::batch::normalize;
///
/// assert_eq!(normalize("\"Hello,\" she said -- twice."), ["Hello", "she", "said", "twice"]);
/// ```
pub fn normalize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(is_edge_punctuation))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Syllabify every word, preserving order.
pub fn syllabify_all<S>(syllabifier: &Syllabifier, words: &[S]) -> Vec<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    debug!(words = words.len(), "syllabifying batch");

    #[cfg(feature = "rayon")]
    let words = words.par_iter();
    #[cfg(not(feature = "rayon"))]
    let words = words.iter();

    words
        .map(|word| syllabifier.syllabify(word.as_ref()))
        .collect()
}

/// Join syllables with `separator` and words with single spaces.
pub fn format_words(words: &[Vec<String>], separator: &str) -> String {
    words
        .iter()
        .map(|syllables| syllables.join(separator))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize, syllabify and format a whole text.
pub fn syllabify_text(syllabifier: &Syllabifier, text: &str, separator: &str) -> String {
    let words = normalize(text);
    format_words(&syllabify_all(syllabifier, &words), separator)
}

/// A timestamped batch result.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// When the report was produced
    pub generated_at: chrono::DateTime<chrono::Local>,
    /// Formatted syllabified text
    pub body: String,
}

#[cfg(feature = "cli")]
impl Report {
    /// Timestamp layout used in the report header.
    pub const TIMESTAMP_FORMAT: &'static str = "%Y/%m/%d %H:%M:%S";

    /// Stamp `body` with the current local time.
    pub fn new(body: String) -> Self {
        Self::at(chrono::Local::now(), body)
    }

    /// Stamp `body` with a given time.
    pub fn at(generated_at: chrono::DateTime<chrono::Local>, body: String) -> Self {
        Self { generated_at, body }
    }

    /// Render the header line, a blank line, then the body.
    pub fn render(&self) -> String {
        format!(
            "Syllabified on {}\n\n{}",
            self.generated_at.format(Self::TIMESTAMP_FORMAT),
            self.body
        )
    }

    /// Write the rendered report to `path`.
    pub fn write_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }
}
