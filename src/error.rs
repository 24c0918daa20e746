//! Error categories for the engine (spec.md 7).
//!
//! Category 1 (unparseable input) never surfaces as an `Err`: it is
//! recovered locally into `None`/`NONE`/an empty list by every public
//! calculator. [`TagError`] exists so the lower-level parser in
//! [`crate::tag_parser`] can still explain *why*, for callers that want to.

use thiserror::Error;

/// Why a raw string could not be canonicalised into a [`crate::locale::Locale`].
///
/// Recovered silently by every calculator (spec.md 7, category 1): this type
/// is surfaced only by the low-level parser, never by `calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The input was empty or only whitespace.
    #[error("empty or blank language tag")]
    Empty,
    /// The language subtag was not 2-3 ASCII letters and not a known
    /// three-letter registered code.
    #[error("malformed language subtag in {0:?}")]
    MalformedLanguage(String),
    /// The language subtag is well-formed but absent from the CLDR
    /// available-languages set.
    #[error("unknown language subtag {0:?}")]
    UnknownLanguage(String),
    /// The rest of the tag could not be parsed as a BCP-47 structure.
    #[error("malformed language tag {0:?}")]
    Malformed(String),
}

/// Programmer-error validation failures raised eagerly by value-type and
/// calculator constructors (spec.md 7, category 2).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// `ROOT` was supplied where a non-root locale is required.
    #[error("ROOT is not a valid {0}")]
    RootNotAllowed(&'static str),
    /// A locale outside the CLDR available-locales set was supplied where a
    /// CLDR locale is required.
    #[error("{0} is not a CLDR locale")]
    NotInCldr(String),
    /// A related/fallback locale does not descend from the primary
    /// locale's highest ancestor.
    #[error("{related} does not share a highest ancestor with {primary}")]
    UnrelatedLocale {
        /// The offending related/fallback locale.
        related: String,
        /// The primary locale it was supposed to relate to.
        primary: String,
    },
    /// A reference locale was not drawn from the reference-locale set.
    #[error("{0} is not a reference locale")]
    NotAReferenceLocale(String),
    /// An internally computed affinity score fell outside `0..=100`.
    #[error("affinity score {0} out of bounds 0..=100")]
    ScoreOutOfBounds(i32),
}

/// Fatal errors raised while constructing the CLDR data tables
/// (spec.md 7, category 3). These indicate the embedded CLDR snapshot is
/// internally inconsistent and are meant to be caught by this crate's own
/// tests, not handled by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    /// A data file could not be parsed at all.
    #[error("failed to parse embedded CLDR table {table}: {reason}")]
    Malformed {
        /// Name of the offending embedded data file.
        table: &'static str,
        /// Parser error message.
        reason: String,
    },
    /// The language classifier (C5) encountered a highest-ancestor locale
    /// with a script it does not have a rule for.
    #[error("classifier has no rule for script-bearing highest ancestor {0}")]
    UnhandledHighestAncestor(String),
}
