//! Vowel repair: every syllable needs a nucleus.
//!
//! Vowel-less syllables are folded into a neighbour. Leading ones wait in a
//! pending prefix until the first vowelled syllable arrives; later ones are
//! appended to the syllable emitted before them. Spans are only ever joined,
//! never split or reordered, so the word is reconstructed exactly.

use tracing::warn;

use super::scanner::Span;
use crate::hierarchy::RankedPhoneme;

/// Merge vowel-less spans into their neighbours.
///
/// If no span has a vowel at all, the whole word collapses into a single
/// span. Idempotent: repairing a repaired list returns it unchanged.
pub fn repair(phonemes: &[RankedPhoneme], spans: &[Span]) -> Vec<Span> {
    let (mut repaired, pending) = spans.iter().fold(
        (Vec::with_capacity(spans.len()), None::<Span>),
        |(mut repaired, pending), &span| {
            if span.has_vowel(phonemes) {
                repaired.push(pending.map_or(span, |prefix| prefix.join(span)));
                return (repaired, None);
            }
            match repaired.last_mut() {
                Some(last) => *last = last.join(span),
                None => {
                    let prefix = pending.map_or(span, |prefix| prefix.join(span));
                    return (repaired, Some(prefix));
                }
            }
            (repaired, pending)
        },
    );

    if let Some(prefix) = pending {
        debug_assert!(repaired.is_empty(), "prefix outlived the first vowel");
        warn!(
            phonemes = phonemes.len(),
            "word has no vowel; keeping it as one syllable"
        );
        repaired.push(prefix);
    }
    repaired
}
