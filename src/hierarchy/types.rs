//! Type definitions for sonority classification.
//!
//! A word is classified into a [`RankedWord`]: one [`RankedPhoneme`] per
//! phoneme, each carrying the rank and class assigned by the active
//! [`SonorityTable`](super::SonorityTable).

/// Sonority rank. Larger values are more sonorous (more vowel-like).
pub type Rank = u8;

/// Broad phoneme classes, from most to least sonorous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PhonemeClass {
    /// Syllable nuclei
    Vowel,
    /// Glides and liquids (w, j, l)
    Approximant,
    /// Nasal stops (m, n)
    Nasal,
    /// Fricatives (s, h, x)
    Fricative,
    /// Affricates (ʦ, ʣ)
    Affricate,
    /// Oral stops and other obstruents
    Stop,
}

impl PhonemeClass {
    /// All classes in descending sonority.
    pub const ALL: [PhonemeClass; 6] = [
        PhonemeClass::Vowel,
        PhonemeClass::Approximant,
        PhonemeClass::Nasal,
        PhonemeClass::Fricative,
        PhonemeClass::Affricate,
        PhonemeClass::Stop,
    ];

    /// Position in the class hierarchy; higher is more sonorous.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            PhonemeClass::Vowel => 5,
            PhonemeClass::Approximant => 4,
            PhonemeClass::Nasal => 3,
            PhonemeClass::Fricative => 2,
            PhonemeClass::Affricate => 1,
            PhonemeClass::Stop => 0,
        }
    }

    /// Returns true for the nucleus class.
    #[inline]
    pub fn is_vowel(self) -> bool {
        matches!(self, PhonemeClass::Vowel)
    }
}

impl std::fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhonemeClass::Vowel => "vowel",
            PhonemeClass::Approximant => "approximant",
            PhonemeClass::Nasal => "nasal",
            PhonemeClass::Fricative => "fricative",
            PhonemeClass::Affricate => "affricate",
            PhonemeClass::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// One row of a sonority hierarchy: every phoneme listed shares a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SonorityTier {
    /// Broad class of the tier
    pub class: PhonemeClass,
    /// Rank shared by every phoneme in the tier
    pub rank: Rank,
    /// Member phonemes, in lowercase; entries may span several code points
    pub phonemes: Vec<String>,
}

impl SonorityTier {
    /// Build a tier from string literals.
    pub fn new(class: PhonemeClass, rank: Rank, phonemes: &[&str]) -> Self {
        Self {
            class,
            rank,
            phonemes: phonemes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A phoneme together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPhoneme {
    /// The phoneme as it appeared in the input (original case)
    pub text: String,
    /// Assigned rank; 0 for phonemes the table does not list
    pub rank: Rank,
    /// Assigned class, `None` for unlisted phonemes
    pub class: Option<PhonemeClass>,
}

impl RankedPhoneme {
    /// Returns true if this phoneme can serve as a syllable nucleus.
    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.class.is_some_and(PhonemeClass::is_vowel)
    }
}

/// A classified word: the ranked phoneme sequence plus its vowel tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedWord {
    /// Phonemes in input order
    pub phonemes: Vec<RankedPhoneme>,
    /// Number of vowel phonemes
    pub vowel_count: usize,
}

impl RankedWord {
    /// Number of phonemes.
    #[inline]
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// Returns true if the word has no phonemes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Ranks in phoneme order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.phonemes.iter().map(|p| p.rank)
    }

    /// The word text reassembled from its phonemes.
    pub fn text(&self) -> String {
        self.phonemes.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Which built-in hierarchy and input filter to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Six-rank orthographic hierarchy, no input filtering
    #[default]
    Standard,
    /// Twelve-rank IPA hierarchy with diacritic and punctuation stripping
    Ipa,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Ipa => write!(f, "ipa"),
        }
    }
}
