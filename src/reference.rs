//! The reference-locale calculator (C10, spec.md 4.9): a canonical hub
//! locale set used to join independently-tagged datasets.

use crate::affinity::LocaleAffinity;
use crate::cldr::Cldr;
use crate::distance::{maximise, minimise, one_way_distance};
use crate::error::BuilderError;
use crate::locale::Locale;
use crate::tag_parser::parse_tag;
use crate::unary::UnaryCalculator;

/// A reference locale together with its affinity to some input tag
/// (spec.md 3). Only ever constructed with `referenceLocale` drawn from a
/// [`ReferenceLocaleCalculator`]'s reference-locale set.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedReferenceLocale {
    reference_locale: Locale,
    affinity: LocaleAffinity,
}

impl RelatedReferenceLocale {
    /// Build a validated `RelatedReferenceLocale`.
    ///
    /// # Errors
    /// Returns [`BuilderError::NotAReferenceLocale`] if `reference_locale`
    /// is not drawn from `calculator`'s reference-locale set (spec.md 3, 7
    /// category 2).
    fn new(
        calculator: &ReferenceLocaleCalculator,
        reference_locale: Locale,
        affinity: LocaleAffinity,
    ) -> Result<Self, BuilderError> {
        if !calculator
            .reference_locales
            .iter()
            .any(|candidate| *candidate == reference_locale)
        {
            return Err(BuilderError::NotAReferenceLocale(
                reference_locale.to_string(),
            ));
        }
        Ok(RelatedReferenceLocale {
            reference_locale,
            affinity,
        })
    }

    /// The reference locale.
    pub fn reference_locale(&self) -> &Locale {
        &self.reference_locale
    }

    /// Its affinity to the tag that produced it.
    pub fn affinity(&self) -> LocaleAffinity {
        self.affinity
    }
}

/// The reference-locale set (spec.md 6): every CLDR-available locale
/// except `ROOT` and `en-US-POSIX`, minimised and deduplicated.
pub struct ReferenceLocaleCalculator {
    reference_locales: Vec<Locale>,
}

impl ReferenceLocaleCalculator {
    /// Build the reference-locale set from `cldr`.
    pub fn new(cldr: &Cldr) -> Self {
        let mut set = std::collections::BTreeSet::new();
        for locale in cldr.available_locales() {
            if locale.is_root() || is_posix(locale) {
                continue;
            }
            let minimized = minimise(cldr, &maximise(cldr, locale));
            set.insert(minimized);
        }
        ReferenceLocaleCalculator {
            reference_locales: set.into_iter().collect(),
        }
    }

    /// Every reference locale with non-`NONE` affinity to `tag`
    /// (spec.md 4.9). Unparseable `tag` yields an empty list.
    pub fn related_reference_locales(&self, cldr: &Cldr, tag: Option<&str>) -> Vec<RelatedReferenceLocale> {
        let Ok(parsed) = parse_tag(cldr, tag) else {
            return Vec::new();
        };
        let calc = UnaryCalculator::from_locales(cldr, vec![parsed])
            .expect("a parsed tag is never ROOT");
        self.reference_locales
            .iter()
            .filter_map(|reference_locale| {
                let affinity = calc.calculate(cldr, Some(&reference_locale.to_string()));
                if affinity == LocaleAffinity::NONE {
                    return None;
                }
                RelatedReferenceLocale::new(self, reference_locale.clone(), affinity).ok()
            })
            .collect()
    }

    /// The single best-matching reference locale for `tag` (spec.md 4.9),
    /// using a one-way distance rather than the bidirectional minimum.
    pub fn best_matching_reference_locale(&self, cldr: &Cldr, tag: Option<&str>) -> Option<Locale> {
        let parsed = parse_tag(cldr, tag).ok()?;
        let desired = maximise(cldr, &parsed);
        self.reference_locales
            .iter()
            .min_by_key(|candidate| one_way_distance(cldr, &desired, &maximise(cldr, candidate)))
            .cloned()
    }

    /// Join-ready bidirectional affinity (spec.md 4.9): the best-matching
    /// reference locale for `b`, looked up in `a`'s related-reference-locale
    /// list. Missing on either side yields `NONE`.
    pub fn calculate(&self, cldr: &Cldr, a: Option<&str>, b: Option<&str>) -> LocaleAffinity {
        let Some(best) = self.best_matching_reference_locale(cldr, b) else {
            return LocaleAffinity::NONE;
        };
        self.related_reference_locales(cldr, a)
            .into_iter()
            .find(|related| *related.reference_locale() == best)
            .map(|related| related.affinity())
            .unwrap_or(LocaleAffinity::NONE)
    }
}

fn is_posix(locale: &Locale) -> bool {
    locale.language() == "en"
        && locale.region() == Some("US")
        && locale.variants().len() == 1
        && locale.variants()[0] == "posix"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_excluded_from_reference_set() {
        let cldr = Cldr::default();
        let calc = ReferenceLocaleCalculator::new(&cldr);
        assert!(!calc
            .reference_locales
            .iter()
            .any(|l| l.to_string() == "en-US-posix"));
    }

    #[test]
    fn reference_round_trip() {
        let cldr = Cldr::default();
        let calc = ReferenceLocaleCalculator::new(&cldr);
        for reference_locale in &calc.reference_locales {
            let tag = reference_locale.to_string();
            let best = calc.best_matching_reference_locale(&cldr, Some(&tag));
            assert_eq!(best.as_ref(), Some(reference_locale));
            let related = calc.related_reference_locales(&cldr, Some(&tag));
            assert!(related
                .iter()
                .any(|r| r.reference_locale() == reference_locale && r.affinity() == LocaleAffinity::SAME));
        }
    }

    #[test]
    fn rejects_reference_locale_outside_the_set() {
        let cldr = Cldr::default();
        let calc = ReferenceLocaleCalculator::new(&cldr);
        let err = RelatedReferenceLocale::new(&calc, Locale::root(), LocaleAffinity::SAME)
            .unwrap_err();
        assert!(matches!(err, BuilderError::NotAReferenceLocale(_)));
    }

    #[test]
    fn zh_hk_related_and_zh_hant_best_join_as_same() {
        let cldr = Cldr::default();
        let calc = ReferenceLocaleCalculator::new(&cldr);
        assert_eq!(
            calc.calculate(&cldr, Some("zh-HK"), Some("zh-Hant")),
            LocaleAffinity::SAME
        );
    }

    #[test]
    fn fr_ch_related_and_fr_ca_best_join_as_same() {
        let cldr = Cldr::default();
        let calc = ReferenceLocaleCalculator::new(&cldr);
        assert_eq!(
            calc.calculate(&cldr, Some("fr-CH"), Some("fr-CA")),
            LocaleAffinity::SAME
        );
    }
}
