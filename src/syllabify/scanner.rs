//! Single-pass boundary scanner.
//!
//! Walks a ranked phoneme sequence once, left to right. The first phoneme
//! opens a syllable and the last one closes it; every interior phoneme is
//! dispatched on its [`Shape`]. Syllables come out as [`Span`]s, half-open
//! phoneme ranges that tile the word without gaps or overlap.

use tracing::trace;

use super::shape::{Boundary, Shape};
use crate::hierarchy::RankedPhoneme;

/// Half-open range `[start, end)` of phoneme indices forming one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First phoneme index
    pub start: usize,
    /// One past the last phoneme index
    pub end: usize,
}

impl Span {
    /// Create a span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Number of phonemes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span covering `self` followed directly by `next`.
    #[inline]
    pub fn join(self, next: Span) -> Span {
        debug_assert_eq!(self.end, next.start, "joined spans must be adjacent");
        Span::new(self.start, next.end)
    }

    /// The phonemes this span covers.
    #[inline]
    pub fn slice<'a>(&self, phonemes: &'a [RankedPhoneme]) -> &'a [RankedPhoneme] {
        &phonemes[self.start..self.end]
    }

    /// Returns true if any covered phoneme is a vowel.
    pub fn has_vowel(&self, phonemes: &[RankedPhoneme]) -> bool {
        self.slice(phonemes).iter().any(RankedPhoneme::is_vowel)
    }

    /// Concatenated phoneme text.
    pub fn render(&self, phonemes: &[RankedPhoneme]) -> String {
        self.slice(phonemes).iter().map(|p| p.text.as_str()).collect()
    }
}

/// Split a ranked sequence into provisional syllables.
///
/// Returns an empty list for an empty sequence and a single span for one or
/// two phonemes. The spans always tile `0..phonemes.len()`.
pub fn scan(phonemes: &[RankedPhoneme]) -> Vec<Span> {
    let n = phonemes.len();
    let mut spans = Vec::new();
    if n == 0 {
        return spans;
    }

    let mut start = 0;
    for i in 1..n.saturating_sub(1) {
        let shape = Shape::of(phonemes[i - 1].rank, phonemes[i].rank, phonemes[i + 1].rank);
        match shape.boundary() {
            Boundary::Continue => {}
            Boundary::CloseAfter => {
                trace!(index = i, ?shape, "break after");
                spans.push(Span::new(start, i + 1));
                start = i + 1;
            }
            Boundary::CloseBefore => {
                trace!(index = i, ?shape, "break before");
                debug_assert!(start < i, "trough cannot follow a break");
                spans.push(Span::new(start, i));
                start = i;
            }
        }
    }
    spans.push(Span::new(start, n));
    spans
}
