//! Error types for sonority table construction.

use thiserror::Error;

use crate::hierarchy::{PhonemeClass, Rank};

/// Errors raised while building or loading a [`SonorityTable`](crate::hierarchy::SonorityTable).
///
/// Syllabification itself is total over its input and never fails; only
/// configuration can be rejected.
#[derive(Debug, Error)]
pub enum SonorityError {
    /// The table has no tiers at all.
    #[error("sonority table has no tiers")]
    EmptyTable,

    /// A tier lists an empty phoneme string.
    #[error("tier with rank {rank} contains an empty phoneme")]
    EmptyPhoneme {
        /// Rank of the offending tier
        rank: Rank,
    },

    /// The same phoneme (compared in lowercase) appears in two tiers.
    #[error("phoneme '{phoneme}' is listed at rank {first} and again at rank {second}")]
    DuplicatePhoneme {
        /// The lowercase phoneme
        phoneme: String,
        /// Rank of the first tier listing it
        first: Rank,
        /// Rank of the conflicting tier
        second: Rank,
    },

    /// Tiers are not in strictly decreasing rank order.
    #[error("tier rank {next} does not fall below the preceding rank {previous}")]
    RankOrder {
        /// Rank of the preceding tier
        previous: Rank,
        /// Rank of the tier that breaks the order
        next: Rank,
    },

    /// A tier's class is more sonorous than the class of an earlier tier.
    #[error("{next} tier cannot follow a {previous} tier")]
    ClassOrder {
        /// Class of the preceding tier
        previous: PhonemeClass,
        /// Class of the tier that breaks the order
        next: PhonemeClass,
    },

    /// A table file could not be parsed.
    #[cfg(feature = "serialization")]
    #[error("invalid sonority table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for sonority table operations.
pub type Result<T> = std::result::Result<T, SonorityError>;
