//! A CLDR-backed engine for judging how linguistically close two BCP-47
//! locales are, and for picking the best of a set of supported locales for
//! a desired one.
//!
//! The entry point is [`Cldr`]: build it once (construction parses and
//! validates the embedded CLDR snapshot), then call the calculators on
//! [`affinity`], [`unary`], [`binary`] and [`reference`] against it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod accept_language;
pub mod affinity;
pub mod binary;
pub mod classifier;
pub mod cldr;
pub mod distance;
pub mod error;
pub mod hierarchy;
pub mod locale;
pub mod reference;
pub mod supported_locale;
pub mod tag_parser;
pub mod unary;

pub use accept_language::{parse_accept_language, LanguageRange};
pub use affinity::{affinity, LocaleAffinity};
pub use cldr::Cldr;
pub use error::{BuilderError, DataIntegrityError, TagError};
pub use locale::{Locale, Lsr};
pub use supported_locale::{ResolvedLocale, SupportedLocale};
