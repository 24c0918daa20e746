//! The unary affinity calculator (C8, spec.md 4.7): one locale against a
//! precomputed target set.

use crate::accept_language::parse_accept_language;
use crate::affinity::{affinity, LocaleAffinity};
use crate::classifier::spoken_language;
use crate::cldr::Cldr;
use crate::distance::{distance, maximise};
use crate::error::BuilderError;
use crate::locale::{Locale, Lsr};
use crate::tag_parser::parse_tag;

/// Affinity of one input tag against a fixed target set, built once and
/// reused across many `calculate` calls (spec.md 4.7).
pub struct UnaryCalculator {
    against_spoken: Vec<Locale>,
    against_lsrs: Vec<Lsr>,
}

impl UnaryCalculator {
    /// Build a calculator whose target set is `locales`.
    ///
    /// # Errors
    /// Returns [`BuilderError::RootNotAllowed`] if `locales` contains
    /// `ROOT` (spec.md 4.7: "Reject the set if it contains ROOT").
    /// Locales whose language is outside the CLDR available-languages set
    /// are silently filtered out, not rejected.
    pub fn from_locales(
        cldr: &Cldr,
        locales: impl IntoIterator<Item = Locale>,
    ) -> Result<Self, BuilderError> {
        let mut against = Vec::new();
        for locale in locales {
            if locale.is_root() {
                return Err(BuilderError::RootNotAllowed("unary calculator target"));
            }
            if cldr.is_available_language(locale.language()) {
                against.push(locale);
            }
        }
        Ok(Self::build(cldr, against))
    }

    /// Build a calculator from raw tag strings, discarding unparseable
    /// ones (spec.md 4.7).
    pub fn from_tags<'a>(cldr: &Cldr, tags: impl IntoIterator<Item = &'a str>) -> Self {
        let against = tags
            .into_iter()
            .filter_map(|tag| parse_tag(cldr, Some(tag)).ok())
            .collect();
        Self::build(cldr, against)
    }

    /// Build a calculator from an `Accept-Language` header value, reusing
    /// the wildcard-expanded range list (spec.md 4.7).
    pub fn from_accept_language(cldr: &Cldr, header: &str) -> Self {
        let ranges = parse_accept_language(cldr, header);
        let against = ranges
            .into_iter()
            .filter_map(|range| parse_tag(cldr, Some(&range.range)).ok())
            .collect();
        Self::build(cldr, against)
    }

    fn build(cldr: &Cldr, against: Vec<Locale>) -> Self {
        let against_spoken = against
            .iter()
            .filter_map(|locale| spoken_language(cldr, locale).ok())
            .collect();
        let against_lsrs = against.iter().map(|locale| maximise(cldr, locale)).collect();
        UnaryCalculator {
            against_spoken,
            against_lsrs,
        }
    }

    /// Affinity of `tag` against this calculator's target set.
    ///
    /// Returns `NONE` for an empty target set or unparseable `tag`
    /// (spec.md 4.7); never errors.
    pub fn calculate(&self, cldr: &Cldr, tag: Option<&str>) -> LocaleAffinity {
        if self.against_lsrs.is_empty() {
            return LocaleAffinity::NONE;
        }
        let Ok(locale) = parse_tag(cldr, tag) else {
            return LocaleAffinity::NONE;
        };
        if let Ok(spoken) = spoken_language(cldr, &locale) {
            if self.against_spoken.contains(&spoken) {
                return LocaleAffinity::SAME;
            }
        }
        let input_lsr = maximise(cldr, &locale);
        let min_distance = self
            .against_lsrs
            .iter()
            .map(|target| distance(cldr, &input_lsr, target))
            .min()
            .expect("non-empty target set");
        affinity(min_distance)
    }
}
