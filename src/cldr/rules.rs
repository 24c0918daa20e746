//! XML schema for the embedded locale-distance rule table (`data/locale_distance.xml`),
//! a trimmed CLDR `<languageMatching>` snapshot. Mirrors the attribute-rule
//! shape CLDR itself uses: a rule names a `desired`/`supported` subtag
//! pattern (`language[_script[_region]]`, matching the teacher's own
//! underscore-joined rule syntax) and the distance it contributes when the
//! pattern matches.

use serde::Deserialize;

/// One subtag-level matcher: a literal value or the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubtagRule {
    Literal(String),
    Any,
}

impl From<&str> for SubtagRule {
    fn from(s: &str) -> Self {
        if s == "*" {
            SubtagRule::Any
        } else {
            SubtagRule::Literal(s.to_string())
        }
    }
}

impl SubtagRule {
    fn matches(&self, value: &str) -> bool {
        match self {
            SubtagRule::Any => true,
            SubtagRule::Literal(s) => s.eq_ignore_ascii_case(value),
        }
    }
}

fn optional_matches(rule: &Option<SubtagRule>, value: Option<&str>) -> bool {
    match (rule, value) {
        (None, None) => true,
        (Some(SubtagRule::Any), _) => true,
        (Some(rule), Some(value)) => rule.matches(value),
        _ => false,
    }
}

/// A `desired`/`supported` pattern: `language[_script[_region]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub(crate) struct SubtagPattern {
    pub language: SubtagRule,
    pub script: Option<SubtagRule>,
    pub region: Option<SubtagRule>,
}

impl From<String> for SubtagPattern {
    fn from(s: String) -> Self {
        let mut parts = s.split('_');
        let language = parts.next().unwrap_or("").into();
        let script = parts.next().map(SubtagRule::from);
        let region = parts.next().map(SubtagRule::from);
        SubtagPattern {
            language,
            script,
            region,
        }
    }
}

impl SubtagPattern {
    pub(crate) fn matches(&self, language: &str, script: Option<&str>, region: Option<&str>) -> bool {
        self.language.matches(language)
            && optional_matches(&self.script, script)
            && optional_matches(&self.region, region)
    }
}

/// A single `<languageMatch>` rule.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LanguageMatchRule {
    #[serde(rename = "@desired")]
    pub desired: SubtagPattern,
    #[serde(rename = "@supported")]
    pub supported: SubtagPattern,
    #[serde(rename = "@distance")]
    pub distance: u16,
    #[serde(default, rename = "@oneway")]
    pub oneway: bool,
}

/// One comparison level's worth of subtags for both sides of a pairing.
pub(crate) struct LevelPair<'a> {
    pub a_language: &'a str,
    pub a_script: Option<&'a str>,
    pub a_region: Option<&'a str>,
    pub b_language: &'a str,
    pub b_script: Option<&'a str>,
    pub b_region: Option<&'a str>,
}

impl LanguageMatchRule {
    /// Does this rule fire for the given pairing, honoring `oneway`?
    pub(crate) fn matches(&self, pair: &LevelPair<'_>) -> bool {
        let forward = self.desired.matches(pair.a_language, pair.a_script, pair.a_region)
            && self.supported.matches(pair.b_language, pair.b_script, pair.b_region);
        if forward {
            return true;
        }
        if self.oneway {
            return false;
        }
        self.desired.matches(pair.b_language, pair.b_script, pair.b_region)
            && self.supported.matches(pair.a_language, pair.a_script, pair.a_region)
    }
}

/// Root element of `data/locale_distance.xml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LanguageMatches {
    #[serde(rename = "languageMatch", default)]
    pub language_match: Vec<LanguageMatchRule>,
}
