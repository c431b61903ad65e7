//! Phoneme classification against a sonority hierarchy.
//!
//! [`SonorityTable`] is the validated, immutable lookup built from a list of
//! [`SonorityTier`]s. [`Classifier`] pairs a table with an [`InputFilter`] and
//! turns a word into a [`RankedWord`].
//!
//! Segmentation is greedy longest-match: at each position the longest table
//! entry (in code points) that matches the lowercased input is taken as one
//! phoneme; otherwise a single code point is. Tables without multi-code-point
//! entries therefore classify one code point at a time.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::tables::{ipa_tiers, standard_tiers, EDGE_PUNCTUATION, SECONDARY_ARTICULATIONS};
use super::types::{Mode, PhonemeClass, Rank, RankedPhoneme, RankedWord, SonorityTier};
use crate::error::{Result, SonorityError};

/// A validated sonority hierarchy.
///
/// Invariants established by [`SonorityTable::new`]:
/// - at least one tier
/// - ranks strictly decrease in tier order
/// - classes never become more sonorous in tier order
/// - every phoneme is non-empty and appears in exactly one tier
#[derive(Debug, Clone)]
pub struct SonorityTable {
    tiers: Vec<SonorityTier>,
    lookup: FxHashMap<String, (Rank, PhonemeClass)>,
    max_phoneme_len: usize,
}

impl SonorityTable {
    /// Validate `tiers` and build the lookup.
    pub fn new(tiers: Vec<SonorityTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(SonorityError::EmptyTable);
        }

        for pair in tiers.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if next.rank >= previous.rank {
                return Err(SonorityError::RankOrder {
                    previous: previous.rank,
                    next: next.rank,
                });
            }
            if next.class.precedence() > previous.class.precedence() {
                return Err(SonorityError::ClassOrder {
                    previous: previous.class,
                    next: next.class,
                });
            }
        }

        let mut lookup = FxHashMap::default();
        let mut max_phoneme_len = 1;
        for tier in &tiers {
            for phoneme in &tier.phonemes {
                if phoneme.is_empty() {
                    return Err(SonorityError::EmptyPhoneme { rank: tier.rank });
                }
                let key = phoneme.to_lowercase();
                max_phoneme_len = max_phoneme_len.max(key.chars().count());
                if let Some((first, _)) = lookup.insert(key.clone(), (tier.rank, tier.class)) {
                    return Err(SonorityError::DuplicatePhoneme {
                        phoneme: key,
                        first,
                        second: tier.rank,
                    });
                }
            }
        }

        Ok(Self {
            tiers,
            lookup,
            max_phoneme_len,
        })
    }

    /// The built-in six-rank hierarchy.
    pub fn standard() -> Self {
        Self::new(standard_tiers()).expect("built-in standard table is valid")
    }

    /// The built-in twelve-rank IPA hierarchy.
    pub fn ipa() -> Self {
        Self::new(ipa_tiers()).expect("built-in IPA table is valid")
    }

    /// Built-in table for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Standard => Self::standard(),
            Mode::Ipa => Self::ipa(),
        }
    }

    /// Parse and validate a table from a JSON array of tiers.
    #[cfg(feature = "serialization")]
    pub fn from_json(json: &str) -> Result<Self> {
        let tiers: Vec<SonorityTier> = serde_json::from_str(json)?;
        Self::new(tiers)
    }

    /// Serialize the tiers as pretty-printed JSON.
    #[cfg(feature = "serialization")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tiers)?)
    }

    /// Tiers in check order.
    pub fn tiers(&self) -> &[SonorityTier] {
        &self.tiers
    }

    /// Length in code points of the longest entry.
    pub fn max_phoneme_len(&self) -> usize {
        self.max_phoneme_len
    }

    /// Rank and class of a phoneme, compared case-insensitively.
    ///
    /// Returns `None` for phonemes the table does not list.
    #[inline]
    pub fn lookup(&self, phoneme: &str) -> Option<(Rank, PhonemeClass)> {
        match self.lookup.get(phoneme) {
            Some(found) => Some(*found),
            None => self.lookup.get(&phoneme.to_lowercase()).copied(),
        }
    }

    /// Rank of a phoneme; unlisted phonemes rank 0.
    #[inline]
    pub fn classify(&self, phoneme: &str) -> Rank {
        self.lookup(phoneme).map_or(0, |(rank, _)| rank)
    }

    /// Returns true if the phoneme belongs to a vowel tier.
    #[inline]
    pub fn is_vowel(&self, phoneme: &str) -> bool {
        self.lookup(phoneme)
            .is_some_and(|(_, class)| class.is_vowel())
    }
}

impl Default for SonorityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whole-word preprocessing applied before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFilter {
    /// Characters removed wherever they occur
    pub strip: Vec<char>,
    /// Characters trimmed from both ends
    pub trim: Vec<char>,
}

impl InputFilter {
    /// A filter that leaves words untouched.
    pub fn none() -> Self {
        Self::default()
    }

    /// Diacritic removal followed by edge punctuation trimming.
    pub fn ipa() -> Self {
        Self {
            strip: SECONDARY_ARTICULATIONS.to_vec(),
            trim: EDGE_PUNCTUATION.to_vec(),
        }
    }

    /// Filter for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Standard => Self::none(),
            Mode::Ipa => Self::ipa(),
        }
    }

    /// Returns true if the filter never changes its input.
    pub fn is_identity(&self) -> bool {
        self.strip.is_empty() && self.trim.is_empty()
    }

    /// Apply the filter to a word.
    pub fn apply(&self, word: &str) -> String {
        if self.is_identity() {
            return word.to_string();
        }
        let stripped: String = word.chars().filter(|c| !self.strip.contains(c)).collect();
        stripped.trim_matches(|c| self.trim.contains(&c)).to_string()
    }
}

/// Turns words into ranked phoneme sequences.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: SonorityTable,
    filter: InputFilter,
}

impl Classifier {
    /// Pair a table with an input filter.
    pub fn new(table: SonorityTable, filter: InputFilter) -> Self {
        Self { table, filter }
    }

    /// Built-in table and filter for `mode`.
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(SonorityTable::for_mode(mode), InputFilter::for_mode(mode))
    }

    /// The active table.
    pub fn table(&self) -> &SonorityTable {
        &self.table
    }

    /// The active input filter.
    pub fn filter(&self) -> &InputFilter {
        &self.filter
    }

    /// Rank of a single phoneme.
    #[inline]
    pub fn classify(&self, phoneme: &str) -> Rank {
        self.table.classify(phoneme)
    }

    /// Filter the word, segment it into phonemes and rank each one.
    pub fn rank_word(&self, word: &str) -> RankedWord {
        let filtered = self.filter.apply(word);
        self.rank_filtered(&filtered)
    }

    /// Segment and rank a word that has already been filtered.
    pub fn rank_filtered(&self, word: &str) -> RankedWord {
        let chars: Vec<char> = word.chars().collect();
        let lowered: Vec<String> = chars.iter().map(|c| c.to_lowercase().collect()).collect();

        let mut phonemes = Vec::with_capacity(chars.len());
        let mut vowel_count = 0;
        let mut pos = 0;

        while pos < chars.len() {
            let (len, entry) = self.longest_match(&lowered[pos..]);
            let text: String = chars[pos..pos + len].iter().collect();
            let (rank, class) = match entry {
                Some((rank, class)) => (rank, Some(class)),
                None => (0, None),
            };
            if class.is_some_and(PhonemeClass::is_vowel) {
                vowel_count += 1;
            }
            trace!(phoneme = %text, rank, "classified");
            phonemes.push(RankedPhoneme { text, rank, class });
            pos += len;
        }

        RankedWord {
            phonemes,
            vowel_count,
        }
    }

    /// Longest table entry at the head of `lowered`, in code points.
    ///
    /// Falls back to a single unlisted code point.
    fn longest_match(&self, lowered: &[String]) -> (usize, Option<(Rank, PhonemeClass)>) {
        let longest = self.table.max_phoneme_len().min(lowered.len());
        let mut key = String::new();
        let mut best = (1, None);
        for (i, piece) in lowered[..longest].iter().enumerate() {
            key.push_str(piece);
            if let Some(entry) = self.table.lookup.get(&key) {
                best = (i + 1, Some(*entry));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(word: &RankedWord) -> Vec<Rank> {
        word.ranks().collect()
    }

    #[test]
    fn test_standard_ranks() {
        let table = SonorityTable::standard();
        assert_eq!(table.classify("a"), 5);
        assert_eq!(table.classify("w"), 4);
        assert_eq!(table.classify("n"), 3);
        assert_eq!(table.classify("s"), 2);
        assert_eq!(table.classify("ʦ"), 1);
        assert_eq!(table.classify("t"), 0);
    }

    #[test]
    fn test_unknown_phoneme_ranks_zero() {
        let table = SonorityTable::standard();
        assert_eq!(table.classify("f"), 0);
        assert_eq!(table.classify("7"), 0);
        assert_eq!(table.lookup("r"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = SonorityTable::standard();
        assert_eq!(table.classify("A"), 5);
        assert_eq!(table.classify("L"), 4);
        assert!(table.is_vowel("E"));
    }

    #[test]
    fn test_ipa_ranks() {
        let table = SonorityTable::ipa();
        assert_eq!(table.classify("a"), 11);
        assert_eq!(table.classify("o"), 10);
        assert_eq!(table.classify("i"), 9);
        assert_eq!(table.classify("l"), 7);
        assert_eq!(table.classify("ʁ"), 5);
        assert_eq!(table.classify("b"), 1);
        assert_eq!(table.classify("t"), 0);
    }

    #[test]
    fn test_rank_word_counts_vowels() {
        let classifier = Classifier::for_mode(Mode::Standard);
        let word = classifier.rank_word("justification");
        assert_eq!(word.len(), 13);
        assert_eq!(word.vowel_count, 6);
        assert_eq!(
            ranks(&word),
            vec![4, 5, 2, 0, 5, 0, 5, 0, 5, 0, 5, 5, 3]
        );
    }

    #[test]
    fn test_rank_word_preserves_case() {
        let classifier = Classifier::for_mode(Mode::Standard);
        let word = classifier.rank_word("CaT");
        assert_eq!(word.text(), "CaT");
        assert_eq!(ranks(&word), vec![0, 5, 0]);
    }

    #[test]
    fn test_multi_codepoint_entries_are_atomic() {
        let classifier = Classifier::for_mode(Mode::Standard);
        let word = classifier.rank_word("taːʔun");
        let texts: Vec<&str> = word.phonemes.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["t", "aː", "ʔu", "n"]);
        assert_eq!(word.vowel_count, 2);
    }

    #[test]
    fn test_partial_cluster_falls_back_to_single_codepoint() {
        let classifier = Classifier::for_mode(Mode::Standard);
        // "ʔt" is a stop, "ʔt͡ɬ" needs the tie bar and ɬ
        let word = classifier.rank_word("ʔta");
        let texts: Vec<&str> = word.phonemes.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["ʔt", "a"]);
    }

    #[test]
    fn test_ipa_filter_strips_diacritics_and_punctuation() {
        let filter = InputFilter::ipa();
        assert_eq!(filter.apply("\"tʰaka.\""), "taka");
        assert_eq!(filter.apply("(kʷʲe)"), "ke");
        assert_eq!(InputFilter::none().apply("\"tʰa\""), "\"tʰa\"");
    }

    #[test]
    fn test_empty_word() {
        let classifier = Classifier::for_mode(Mode::Ipa);
        let word = classifier.rank_word("");
        assert!(word.is_empty());
        assert_eq!(word.vowel_count, 0);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            SonorityTable::new(vec![]),
            Err(SonorityError::EmptyTable)
        ));
    }

    #[test]
    fn test_rejects_duplicate_phoneme() {
        let tiers = vec![
            SonorityTier::new(PhonemeClass::Vowel, 2, &["a", "e"]),
            SonorityTier::new(PhonemeClass::Stop, 0, &["t", "A"]),
        ];
        match SonorityTable::new(tiers) {
            Err(SonorityError::DuplicatePhoneme {
                phoneme,
                first,
                second,
            }) => {
                assert_eq!(phoneme, "a");
                assert_eq!(first, 2);
                assert_eq!(second, 0);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_rank_order_violation() {
        let tiers = vec![
            SonorityTier::new(PhonemeClass::Vowel, 1, &["a"]),
            SonorityTier::new(PhonemeClass::Stop, 1, &["t"]),
        ];
        assert!(matches!(
            SonorityTable::new(tiers),
            Err(SonorityError::RankOrder { previous: 1, next: 1 })
        ));
    }

    #[test]
    fn test_rejects_class_order_violation() {
        let tiers = vec![
            SonorityTier::new(PhonemeClass::Nasal, 3, &["m"]),
            SonorityTier::new(PhonemeClass::Vowel, 2, &["a"]),
        ];
        assert!(matches!(
            SonorityTable::new(tiers),
            Err(SonorityError::ClassOrder { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_phoneme() {
        let tiers = vec![SonorityTier::new(PhonemeClass::Vowel, 1, &["a", ""])];
        assert!(matches!(
            SonorityTable::new(tiers),
            Err(SonorityError::EmptyPhoneme { rank: 1 })
        ));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_json_table() {
        let json = r#"[
            {"class": "vowel", "rank": 2, "phonemes": ["a", "i"]},
            {"class": "nasal", "rank": 1, "phonemes": ["n"]},
            {"class": "stop", "rank": 0, "phonemes": ["k"]}
        ]"#;
        let table = SonorityTable::from_json(json).unwrap();
        assert_eq!(table.classify("n"), 1);
        assert!(table.is_vowel("i"));

        let reparsed = SonorityTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(reparsed.tiers(), table.tiers());
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_json_table_rejects_garbage() {
        assert!(matches!(
            SonorityTable::from_json("{not json"),
            Err(SonorityError::Json(_))
        ));
    }
}
