//! Built-in sonority hierarchies.
//!
//! # Tables
//!
//! - [`standard_tiers()`] - Six ranks, one per phoneme class (5 = vowels .. 0 = stops)
//! - [`ipa_tiers()`] - Twelve ranks; vowels, approximants, fricatives,
//!   affricates and stops are each split into finer grades
//!
//! Glottalized entries such as `ʔu` or `ʔt͡ɬ` span several code points and are
//! matched as single phonemes.
//!
//! Tiers are listed in check order, most sonorous first. Anything not listed
//! ranks 0.

use super::types::{PhonemeClass, SonorityTier};

/// Secondary-articulation diacritics removed before IPA classification:
/// labialization, aspiration, glottalization, palatalization.
pub const SECONDARY_ARTICULATIONS: &[char] = &['\u{2b7}', '\u{2b0}', '\u{2c0}', '\u{2b2}'];

/// Characters trimmed from both ends of a word before IPA classification.
pub const EDGE_PUNCTUATION: &[char] = &['.', ';', '?', '!', ')', '(', '\'', '"'];

// ============================================================================
// Standard hierarchy
// ============================================================================

const STANDARD_VOWELS: &[&str] = &[
    "a", "æ", "aː", "æː", "ʌ", "ʌː", "ʔu", "ʔʊ", "ʔᵘ", "ʔᶷ", "ʔi", "ʔ\u{2071}", "e", "ɛ", "eː",
    "ɪ", "ɨ", "i", "iː", "ɔ", "o", "oː", "ʊ", "u", "ʊ\u{31e}", "uː",
];
const STANDARD_APPROXIMANTS: &[&str] = &["w", "j", "l", "ʔw", "ʔj"];
const STANDARD_NASALS: &[&str] = &["m", "n", "ʔm", "ʔn"];
const STANDARD_FRICATIVES: &[&str] = &["s", "h", "ʁ", "x", "χ", "ɬ"];
const STANDARD_AFFRICATES: &[&str] = &["ʣ", "ʔt\u{361}ɬ", "ʦ", "ʔʦ"];
const STANDARD_STOPS: &[&str] = &[
    "b", "d", "g", "t", "k", "p", "q", "ʔ", "ɟ", "ʔk", "ʔɢ", "ʔq", "ʔɟ", "ʔg", "ʔp", "ʔb", "ʔt",
    "ʔd",
];

/// The six-rank hierarchy used for ordinary spelling.
///
/// Example: "justification" ranks as `j=4 u=5 s=2 t=0 i=5 f=0 ...`; letters the
/// table does not list (`f`, `c`, `r`, `y`, ...) fall to rank 0.
pub fn standard_tiers() -> Vec<SonorityTier> {
    vec![
        SonorityTier::new(PhonemeClass::Vowel, 5, STANDARD_VOWELS),
        SonorityTier::new(PhonemeClass::Approximant, 4, STANDARD_APPROXIMANTS),
        SonorityTier::new(PhonemeClass::Nasal, 3, STANDARD_NASALS),
        SonorityTier::new(PhonemeClass::Fricative, 2, STANDARD_FRICATIVES),
        SonorityTier::new(PhonemeClass::Affricate, 1, STANDARD_AFFRICATES),
        SonorityTier::new(PhonemeClass::Stop, 0, STANDARD_STOPS),
    ]
}

// ============================================================================
// IPA hierarchy
// ============================================================================

const IPA_OPEN_VOWELS: &[&str] = &["a", "æ", "aː", "æː", "ʌ", "ʌː", "ɔ", "ɔː"];
const IPA_MID_VOWELS: &[&str] = &["e", "ɛ", "eː", "o", "oː"];
const IPA_CLOSE_VOWELS: &[&str] = &[
    "ʊ", "ʊ\u{31e}", "u", "uː", "ɪ", "ɨ", "i", "iː", "ʔu", "ʔʊ", "ʔᵘ", "ʔᶷ", "ʔi", "ʔ\u{2071}",
];
const IPA_GLIDES: &[&str] = &["w", "j", "ʔw", "ʔj"];
const IPA_LIQUIDS: &[&str] = &["l"];
const IPA_NASALS: &[&str] = &["m", "n", "ʔm", "ʔn"];
const IPA_UVULAR_FRICATIVES: &[&str] = &["ʁ"];
const IPA_FRICATIVES: &[&str] = &["s", "h", "x", "χ", "ɬ"];
const IPA_VOICED_AFFRICATES: &[&str] = &["ʣ"];
const IPA_VOICELESS_AFFRICATES: &[&str] = &["ʔt\u{361}ɬ", "ʦ", "ʔʦ"];
const IPA_VOICED_STOPS: &[&str] = &["b", "d", "g", "ɟ", "ʔɢ", "ʔɟ", "ʔg", "ʔb", "ʔd"];
const IPA_VOICELESS_STOPS: &[&str] = &["t", "k", "p", "q", "ʔ", "ʔk", "ʔq", "ʔp", "ʔt"];

/// The twelve-rank hierarchy for IPA transcriptions.
pub fn ipa_tiers() -> Vec<SonorityTier> {
    vec![
        SonorityTier::new(PhonemeClass::Vowel, 11, IPA_OPEN_VOWELS),
        SonorityTier::new(PhonemeClass::Vowel, 10, IPA_MID_VOWELS),
        SonorityTier::new(PhonemeClass::Vowel, 9, IPA_CLOSE_VOWELS),
        SonorityTier::new(PhonemeClass::Approximant, 8, IPA_GLIDES),
        SonorityTier::new(PhonemeClass::Approximant, 7, IPA_LIQUIDS),
        SonorityTier::new(PhonemeClass::Nasal, 6, IPA_NASALS),
        SonorityTier::new(PhonemeClass::Fricative, 5, IPA_UVULAR_FRICATIVES),
        SonorityTier::new(PhonemeClass::Fricative, 4, IPA_FRICATIVES),
        SonorityTier::new(PhonemeClass::Affricate, 3, IPA_VOICED_AFFRICATES),
        SonorityTier::new(PhonemeClass::Affricate, 2, IPA_VOICELESS_AFFRICATES),
        SonorityTier::new(PhonemeClass::Stop, 1, IPA_VOICED_STOPS),
        SonorityTier::new(PhonemeClass::Stop, 0, IPA_VOICELESS_STOPS),
    ]
}
