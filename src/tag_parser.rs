//! The language-tag parser (C2, spec.md 4.1).
//!
//! Sanitises and canonicalises an arbitrary, possibly-malformed string into
//! a [`Locale`], or reports it as unparseable. Never panics on bad input.

use language_tags::LanguageTag;

use crate::cldr::Cldr;
use crate::error::TagError;
use crate::locale::{title_case, Locale};

/// BCP-47 legacy -> modern language code remap (spec.md 4.1 step 5).
const LEGACY_REMAP: &[(&str, &str)] = &[("iw", "he"), ("in", "id"), ("ji", "yi"), ("mo", "ro")];

/// Parse and canonicalise a raw, possibly-`None`, possibly-malformed tag.
///
/// Returns `Err` describing the failure (spec.md 7 category 1); callers
/// that only need an affinity signal should treat any `Err` as `NONE`
/// (spec.md 4.1 "Failure semantics").
pub fn parse_tag(cldr: &Cldr, input: Option<&str>) -> Result<Locale, TagError> {
    let raw = input.ok_or(TagError::Empty)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TagError::Empty);
    }

    let underscored = trimmed.replace('_', "-");
    let at_expanded = expand_leading_at(&underscored);
    let sanitized = strip_unicode_extension(&at_expanded);

    let first_subtag = sanitized.split('-').next().unwrap_or("");
    if first_subtag.is_empty()
        || !(2..=3).contains(&first_subtag.len())
        || !first_subtag.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(TagError::MalformedLanguage(sanitized));
    }

    let remapped = remap_language(&sanitized, first_subtag);

    let tag = LanguageTag::parse(&remapped).map_err(|_| TagError::Malformed(remapped.clone()))?;

    let language = tag.primary_language().to_ascii_lowercase();
    if !cldr.is_available_language(&language) {
        return Err(TagError::UnknownLanguage(language));
    }

    let script = tag.script().map(|s| title_case(s));
    let region = tag.region().map(|r| r.to_ascii_uppercase());
    let variants: Vec<String> = tag
        .variant()
        .into_iter()
        .map(|v| v.to_ascii_lowercase())
        .collect();

    Ok(Locale::from_parts(language, script, region, variants))
}

pub(crate) fn expand_leading_at(s: &str) -> String {
    match s.find('@') {
        Some(idx) => {
            let (head, tail) = s.split_at(idx);
            format!("{head}-u-{}", &tail[1..])
        }
        None => s.to_string(),
    }
}

/// Strip a `-u-...` Unicode extension up to the next `,`/`;` or end of string.
pub(crate) fn strip_unicode_extension(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let Some(pos) = lower.find("-u-") else {
        return s.to_string();
    };
    let rest = &s[pos..];
    let end_rel = rest.find([',', ';']).unwrap_or(rest.len());
    let mut result = s[..pos].to_string();
    result.push_str(&rest[end_rel..]);
    result
}

fn remap_language(sanitized: &str, first_subtag: &str) -> String {
    let lower = first_subtag.to_ascii_lowercase();
    match LEGACY_REMAP.iter().find(|(legacy, _)| *legacy == lower) {
        Some((_, canonical)) => {
            let rest = &sanitized[first_subtag.len()..];
            format!("{canonical}{rest}")
        }
        None => sanitized.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cldr::Cldr;

    fn cldr() -> Cldr {
        Cldr::default()
    }

    #[test]
    fn parses_underscore_and_casing() {
        let cldr = cldr();
        let locale = parse_tag(&cldr, Some("FR_be")).unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.region(), Some("BE"));
    }

    #[test]
    fn strips_at_extension() {
        let cldr = cldr();
        let locale = parse_tag(&cldr, Some("ja-JP@calendar=buddhist")).unwrap();
        assert_eq!(locale.language(), "ja");
        assert_eq!(locale.region(), Some("JP"));
    }

    #[test]
    fn strips_u_extension() {
        let cldr = cldr();
        let locale = parse_tag(&cldr, Some("zh-u-calendar=gregorian")).unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.script(), None);
    }

    #[test]
    fn remaps_legacy_codes() {
        let cldr = cldr();
        let locale = parse_tag(&cldr, Some("iw-IL")).unwrap();
        assert_eq!(locale.language(), "he");
        assert_eq!(locale.region(), Some("IL"));

        let locale = parse_tag(&cldr, Some("in")).unwrap();
        assert_eq!(locale.language(), "id");

        let locale = parse_tag(&cldr, Some("mo")).unwrap();
        assert_eq!(locale.language(), "ro");

        let locale = parse_tag(&cldr, Some("ji")).unwrap();
        assert_eq!(locale.language(), "yi");
    }

    #[test]
    fn rejects_blank_and_whitespace() {
        let cldr = cldr();
        assert_eq!(parse_tag(&cldr, None), Err(TagError::Empty));
        assert_eq!(parse_tag(&cldr, Some("")), Err(TagError::Empty));
        assert_eq!(
            parse_tag(&cldr, Some("   ")),
            Err(TagError::Empty)
        );
    }

    #[test]
    fn rejects_unknown_language() {
        let cldr = cldr();
        assert!(parse_tag(&cldr, Some("xx-YY")).is_err());
    }
}
