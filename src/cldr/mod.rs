//! The CLDR data tables (C1, spec.md 4.9/6): frozen maps for available
//! locales, likely-subtags, locale-distance rules and parent-locale
//! overrides, plus the available-languages set. Loaded once from the
//! embedded snapshot under `data/`; read-only thereafter (spec.md 5).

mod rules;

use std::collections::{HashMap, HashSet};

use crate::error::DataIntegrityError;
use crate::locale::{parse_trusted_lsr, parse_trusted_tag, Locale, Lsr};
use rules::{LanguageMatchRule, LanguageMatches, LevelPair};

/// CLDR version this embedded snapshot is pinned to (spec.md 6, 9: "Pin to
/// one CLDR version and snapshot test").
pub const CLDR_VERSION: &str = "45 (curated snapshot)";

const AVAILABLE_LOCALES: &str = include_str!("../../data/available_locales.txt");
const AVAILABLE_LANGUAGES: &str = include_str!("../../data/available_languages.txt");
const MULTI_SCRIPT_LANGUAGES: &str = include_str!("../../data/multi_script_languages.txt");
const PARENT_LOCALES: &str = include_str!("../../data/parent_locales.txt");
const LIKELY_SUBTAGS: &str = include_str!("../../data/likely_subtags.txt");
const LOCALE_DISTANCE: &str = include_str!("../../data/locale_distance.xml");

type LikelySubtagsKey = (String, Option<String>, Option<String>);

/// The engine's view of CLDR: available locales, available languages,
/// likely-subtags, locale-distance rules and parent-locale overrides.
///
/// Immutable and safe to share across threads once built (spec.md 5).
pub struct Cldr {
    available_locales: HashSet<Locale>,
    available_languages: HashSet<String>,
    multi_script_languages: HashSet<String>,
    parent_overrides: HashMap<Locale, Locale>,
    likely_subtags: HashMap<LikelySubtagsKey, Lsr>,
    distance_rules: Vec<LanguageMatchRule>,
}

impl Cldr {
    /// Build the table set from the embedded snapshot.
    ///
    /// # Errors
    /// Returns [`DataIntegrityError`] if the embedded data is internally
    /// inconsistent (spec.md 7, category 3) - a defect in this crate's own
    /// snapshot, not something a caller's input can trigger.
    pub fn new() -> Result<Self, DataIntegrityError> {
        let available_locales = lines(AVAILABLE_LOCALES).map(parse_trusted_tag).collect();
        let available_languages = lines(AVAILABLE_LANGUAGES).map(str::to_string).collect();
        let multi_script_languages = lines(MULTI_SCRIPT_LANGUAGES).map(str::to_string).collect();

        let mut parent_overrides = HashMap::new();
        for line in lines(PARENT_LOCALES) {
            let (child, parent) = split_pair(line, "parent_locales.txt")?;
            parent_overrides.insert(parse_trusted_tag(child), parse_trusted_tag(parent));
        }

        let mut likely_subtags = HashMap::new();
        for line in lines(LIKELY_SUBTAGS) {
            let (key, value) = split_pair(line, "likely_subtags.txt")?;
            let key_locale = parse_trusted_tag(key);
            let value_lsr = parse_trusted_lsr(value);
            let lookup_key = (
                key_locale.language().to_string(),
                key_locale.script().map(str::to_string),
                key_locale.region().map(str::to_string),
            );
            likely_subtags.insert(lookup_key, value_lsr);
        }

        let parsed: LanguageMatches =
            quick_xml::de::from_str(LOCALE_DISTANCE).map_err(|e| DataIntegrityError::Malformed {
                table: "locale_distance.xml",
                reason: e.to_string(),
            })?;

        let cldr = Cldr {
            available_locales,
            available_languages,
            multi_script_languages,
            parent_overrides,
            likely_subtags,
            distance_rules: parsed.language_match,
        };

        cldr.validate_classifier_coverage()?;
        Ok(cldr)
    }

    /// Validate that every available locale's spoken-language derivation
    /// (C5) is total over this snapshot: every script-bearing highest
    /// ancestor must be either the Chinese special case or a member of the
    /// script-differentiated-spoken set (spec.md 4.4, 7 category 3).
    fn validate_classifier_coverage(&self) -> Result<(), DataIntegrityError> {
        for locale in &self.available_locales {
            let top = crate::hierarchy::highest_ancestor(self, locale)
                .unwrap_or_else(|_| locale.clone());
            if let Some(script) = top.script() {
                if crate::classifier::classify_script_bearing_ancestor(top.language(), script)
                    == crate::classifier::ScriptBearingKind::Unknown
                {
                    return Err(DataIntegrityError::UnhandledHighestAncestor(format!(
                        "{top}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// `true` if `language` is in the CLDR available-languages set.
    pub fn is_available_language(&self, language: &str) -> bool {
        self.available_languages.contains(language)
    }

    /// `true` if `locale` is in the CLDR available-locales set.
    pub fn is_available_locale(&self, locale: &Locale) -> bool {
        self.available_locales.contains(locale)
    }

    /// Iterate every CLDR-available locale.
    pub fn available_locales(&self) -> impl Iterator<Item = &Locale> {
        self.available_locales.iter()
    }

    pub(crate) fn is_multi_script_language(&self, language: &str) -> bool {
        self.multi_script_languages.contains(language)
    }

    pub(crate) fn parent_override(&self, locale: &Locale) -> Option<&Locale> {
        self.parent_overrides.get(locale)
    }

    pub(crate) fn likely_subtag(
        &self,
        language: &str,
        script: Option<&str>,
        region: Option<&str>,
    ) -> Option<&Lsr> {
        let key = (
            language.to_string(),
            script.map(str::to_string),
            region.map(str::to_string),
        );
        self.likely_subtags.get(&key)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn distance_rule_for(
        &self,
        a_language: &str,
        a_script: Option<&str>,
        a_region: Option<&str>,
        b_language: &str,
        b_script: Option<&str>,
        b_region: Option<&str>,
    ) -> Option<u16> {
        let pair = LevelPair {
            a_language,
            a_script,
            a_region,
            b_language,
            b_script,
            b_region,
        };
        self.distance_rules
            .iter()
            .find(|rule| rule.matches(&pair))
            .map(|rule| rule.distance)
    }
}

impl Default for Cldr {
    /// Build the table set, panicking on a corrupt embedded snapshot. This
    /// mirrors the teacher's own `LanguageMatcher::new`/`Default` split:
    /// callers who want a `Result` should use [`Cldr::new`] instead.
    fn default() -> Self {
        Self::new().expect("embedded CLDR snapshot is internally consistent")
    }
}

fn lines(data: &str) -> impl Iterator<Item = &str> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn split_pair<'a>(line: &'a str, table: &'static str) -> Result<(&'a str, &'a str), DataIntegrityError> {
    line.split_once('=')
        .ok_or_else(|| DataIntegrityError::Malformed {
            table,
            reason: format!("expected `key=value`, got {line:?}"),
        })
}
