//! Property-based tests for syllabification invariants.
//!
//! 1. **Reconstruction**: syllables concatenate back to the (filtered) word
//! 2. **Vowel presence**: every syllable of a word with a vowel has a vowel
//! 3. **Monosyllables**: a word with exactly one vowel comes back whole
//! 4. **Repair idempotence**: repairing repaired spans changes nothing
//! 5. **Determinism**: repeated calls agree

use proptest::prelude::*;
use sonority::hierarchy::{Classifier, InputFilter};
use sonority::prelude::*;
use sonority::syllabify::{repair, scan};

// Word generators
fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,16}").unwrap()
}

fn arb_ipa_word() -> impl Strategy<Value = String> {
    let symbols = prop::sample::select(vec![
        "a", "æ", "ɔ", "e", "o", "i", "u", "ɪ", "ʊ", "ː", "w", "j", "l", "m", "n", "ʁ", "s", "h",
        "x", "χ", "ʣ", "ʦ", "b", "d", "g", "t", "k", "p", "q", "ʔ", "ʰ", "ʷ", "ʲ", "ˀ", "\u{361}",
        "ɬ", "r", "\"", ".",
    ]);
    prop::collection::vec(symbols, 0..16).prop_map(|parts| parts.concat())
}

fn arb_unicode_word() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..16).prop_map(|chars| chars.into_iter().collect())
}

fn vowel_count(classifier: &Classifier, word: &str) -> usize {
    classifier.rank_word(word).vowel_count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn syllables_reconstruct_word(word in arb_word()) {
        let syllables = syllabify(&word, Mode::Standard);
        prop_assert_eq!(syllables.concat(), word);
    }

    #[test]
    fn syllables_reconstruct_unicode_word(word in arb_unicode_word()) {
        let syllables = syllabify(&word, Mode::Standard);
        prop_assert_eq!(syllables.concat(), word);
    }

    #[test]
    fn ipa_syllables_reconstruct_filtered_word(word in arb_ipa_word()) {
        let filtered = InputFilter::ipa().apply(&word);
        let syllables = syllabify(&word, Mode::Ipa);
        prop_assert_eq!(syllables.concat(), filtered);
        for syllable in &syllables {
            for marker in sonority::hierarchy::SECONDARY_ARTICULATIONS {
                prop_assert!(!syllable.contains(*marker));
            }
        }
    }

    #[test]
    fn syllables_are_non_empty(word in arb_word()) {
        for syllable in syllabify(&word, Mode::Standard) {
            prop_assert!(!syllable.is_empty());
        }
    }

    #[test]
    fn every_syllable_has_a_vowel(word in arb_word()) {
        let classifier = Classifier::for_mode(Mode::Standard);
        prop_assume!(vowel_count(&classifier, &word) > 0);
        for syllable in syllabify(&word, Mode::Standard) {
            prop_assert!(
                vowel_count(&classifier, &syllable) > 0,
                "syllable {:?} of {:?} has no vowel", syllable, word
            );
        }
    }

    #[test]
    fn ipa_every_syllable_has_a_vowel(word in arb_ipa_word()) {
        let classifier = Classifier::for_mode(Mode::Ipa);
        prop_assume!(vowel_count(&classifier, &word) > 0);
        for syllable in syllabify(&word, Mode::Ipa) {
            // Syllables are already filtered, so rank them without filtering again
            prop_assert!(classifier.rank_filtered(&syllable).vowel_count > 0);
        }
    }

    #[test]
    fn single_vowel_word_is_one_syllable(
        onset in "[bcdfgklmnpstwz]{0,4}",
        vowel in "[aeiou]",
        coda in "[bcdfgklmnpstwz]{0,4}",
    ) {
        let word = format!("{onset}{vowel}{coda}");
        prop_assert_eq!(syllabify(&word, Mode::Standard), vec![word]);
    }

    #[test]
    fn vowelless_word_is_one_syllable(word in "[bcdfgkmnpqrstvxz]{1,12}") {
        prop_assert_eq!(syllabify(&word, Mode::Standard), vec![word]);
    }

    #[test]
    fn repair_is_idempotent(word in arb_word()) {
        let ranked = Classifier::for_mode(Mode::Standard).rank_word(&word);
        let once = repair(&ranked.phonemes, &scan(&ranked.phonemes));
        let twice = repair(&ranked.phonemes, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn scan_tiles_the_word(word in arb_unicode_word()) {
        let ranked = Classifier::for_mode(Mode::Standard).rank_word(&word);
        let spans = scan(&ranked.phonemes);
        let mut expected_start = 0;
        for span in &spans {
            prop_assert_eq!(span.start, expected_start);
            prop_assert!(!span.is_empty());
            expected_start = span.end;
        }
        prop_assert_eq!(expected_start, ranked.len());
    }

    #[test]
    fn syllabify_is_deterministic(word in arb_word()) {
        let syllabifier = Syllabifier::new(Mode::Standard);
        prop_assert_eq!(syllabifier.syllabify(&word), syllabify(&word, Mode::Standard));
        prop_assert_eq!(syllabify(&word, Mode::Ipa), syllabify(&word, Mode::Ipa));
    }
}
