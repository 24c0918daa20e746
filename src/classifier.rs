//! Spoken- vs written-language derivation (C5, spec.md 4.4).

use crate::cldr::Cldr;
use crate::distance;
use crate::error::BuilderError;
use crate::hierarchy::highest_ancestor;
use crate::locale::Locale;

/// Script-differentiated-but-mutually-spoken tags (spec.md 4.4): a
/// script-bearing highest ancestor in this set collapses to its bare
/// language for spoken-language purposes.
const SCRIPT_DIFFERENTIATED_SPOKEN: &[(&str, &str)] = &[
    ("az", "Cyrl"),
    ("bs", "Cyrl"),
    ("ff", "Adlm"),
    ("kok", "Latn"),
    ("ks", "Deva"),
    ("kxv", "Deva"),
    ("kxv", "Orya"),
    ("kxv", "Telu"),
    ("pa", "Arab"),
    ("sd", "Deva"),
    ("shi", "Latn"),
    ("sr", "Latn"),
    ("uz", "Arab"),
    ("uz", "Cyrl"),
    ("vai", "Latn"),
    ("yue", "Hans"),
];

/// How a script-bearing highest-ancestor locale behaves under
/// spoken-language derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptBearingKind {
    /// `zh-Hant`: stays as-is.
    ChineseTraditional,
    /// `zh-Hans`: collapses to bare `zh`.
    ChineseSimplified,
    /// In [`SCRIPT_DIFFERENTIATED_SPOKEN`]: collapses to its bare language.
    ScriptDifferentiatedSpoken,
    /// Not recognised by any rule (spec.md 4.4: "a data-integrity error").
    Unknown,
}

pub(crate) fn classify_script_bearing_ancestor(language: &str, script: &str) -> ScriptBearingKind {
    if language == "zh" && script == "Hant" {
        return ScriptBearingKind::ChineseTraditional;
    }
    if language == "zh" && script == "Hans" {
        return ScriptBearingKind::ChineseSimplified;
    }
    if SCRIPT_DIFFERENTIATED_SPOKEN
        .iter()
        .any(|(lang, scr)| *lang == language && *scr == script)
    {
        return ScriptBearingKind::ScriptDifferentiatedSpoken;
    }
    ScriptBearingKind::Unknown
}

/// The written-language locale for `locale` (spec.md 4.4).
pub fn written_language(cldr: &Cldr, locale: &Locale) -> Result<Locale, BuilderError> {
    let top = highest_ancestor(cldr, locale)?;
    if top.script().is_some() {
        return Ok(top);
    }
    if cldr.is_multi_script_language(top.language()) {
        let lsr = distance::maximise(cldr, &top);
        return Ok(Locale::from_parts(
            top.language().to_string(),
            Some(lsr.script().to_string()),
            None,
            Vec::new(),
        ));
    }
    Ok(top)
}

/// The spoken-language locale for `locale` (spec.md 4.4). Two locales with
/// equal spoken-language locales are `SAME` (spec.md 4.4, 4.6).
///
/// Falls back to returning the highest ancestor unchanged for a
/// script-bearing ancestor this build's rule set does not recognise,
/// rather than panicking at runtime - that case is instead caught eagerly
/// by [`Cldr::new`] validating every available locale at construction
/// time (spec.md 7, category 3).
pub fn spoken_language(cldr: &Cldr, locale: &Locale) -> Result<Locale, BuilderError> {
    let top = highest_ancestor(cldr, locale)?;
    let Some(script) = top.script() else {
        return Ok(top);
    };
    match classify_script_bearing_ancestor(top.language(), script) {
        ScriptBearingKind::ChineseTraditional | ScriptBearingKind::Unknown => Ok(top),
        ScriptBearingKind::ChineseSimplified | ScriptBearingKind::ScriptDifferentiatedSpoken => {
            Ok(top.language_only())
        }
    }
}
