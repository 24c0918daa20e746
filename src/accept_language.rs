//! The `Accept-Language` parser (C3, spec.md 4.2): header value -> ordered,
//! deduplicated, weight-sorted `LanguageRange`s.

use crate::cldr::Cldr;
use crate::distance;
use crate::locale::{title_case, Locale};
use crate::tag_parser::{expand_leading_at, parse_tag, strip_unicode_extension};

/// One `Accept-Language` range: a BCP-47-shaped tag (possibly expanded from
/// a wildcard) with its weight, clamped to `>= 0.0` (spec.md 3).
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// The canonical tag string for this range.
    pub range: String,
    /// Preference weight (`q` value), `>= 0.0`.
    pub weight: f64,
}

enum Weight {
    Default,
    Value(f64),
    Invalid,
}

/// Parse a raw `Accept-Language` header value into a weight-descending,
/// deduplicated list of [`LanguageRange`]s (spec.md 4.2), expanding
/// wildcards against the full CLDR available-locales set.
///
/// Never errors: malformed segments are dropped, not reported.
pub fn parse_accept_language(cldr: &Cldr, header: &str) -> Vec<LanguageRange> {
    let available: Vec<Locale> = cldr.available_locales().cloned().collect();
    parse_accept_language_with_available(cldr, header, &available)
}

/// As [`parse_accept_language`], but wildcards are expanded against an
/// explicit `available` set (e.g. the host application's own supported
/// locales) rather than the full CLDR universe - mirroring resolvers that
/// take their candidate set as an argument instead of reaching for global
/// state.
pub fn parse_accept_language_with_available(
    cldr: &Cldr,
    header: &str,
    available: &[Locale],
) -> Vec<LanguageRange> {
    let mut ranges = Vec::new();
    for item in header.split(',') {
        let mut parts = item.split(';');
        let raw_range = parts.next().unwrap_or("");
        let params: Vec<&str> = parts.collect();

        let weight = match parse_weight(&params) {
            Weight::Invalid => continue,
            Weight::Default => 1.0,
            Weight::Value(w) => w,
        };

        let sanitized = sanitize_range(raw_range);
        if sanitized.is_empty() {
            continue;
        }

        let subtags: Vec<&str> = sanitized.split('-').filter(|s| !s.is_empty()).collect();
        if subtags.is_empty() || subtags.iter().all(|s| *s == "*") {
            continue;
        }

        let core = strip_trailing_wildcards(&subtags);
        if core.is_empty() {
            continue;
        }

        if core.iter().any(|s| *s == "*") {
            let mut expanded = expand_wildcard(available, &core);
            if let Some(completed) = expand_wildcard_via_likely_subtags(cldr, &core) {
                if !expanded.iter().any(|r| r == &completed) {
                    expanded.push(completed);
                }
            }
            for range in expanded {
                ranges.push(LanguageRange { range, weight });
            }
        } else {
            let joined = core.join("-");
            if let Ok(locale) = parse_tag(cldr, Some(&joined)) {
                ranges.push(LanguageRange {
                    range: locale.to_string(),
                    weight,
                });
            }
        }
    }

    ranges.sort_by(|a, b| b.weight.partial_cmp(&a.weight).expect("weights are not NaN"));

    let mut seen = std::collections::HashSet::new();
    ranges.retain(|r| seen.insert(r.range.clone()));
    ranges
}

fn sanitize_range(raw: &str) -> String {
    let trimmed = raw.trim();
    let underscored = trimmed.replace('_', "-");
    let at_expanded = expand_leading_at(&underscored);
    strip_unicode_extension(&at_expanded)
}

fn parse_weight(params: &[&str]) -> Weight {
    for raw in params {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            if key.trim().eq_ignore_ascii_case("q") {
                return match value.trim().parse::<f64>() {
                    Ok(w) if w.is_finite() => Weight::Value(w.max(0.0)),
                    _ => Weight::Invalid,
                };
            }
        }
    }
    Weight::Default
}

fn strip_trailing_wildcards<'a>(subtags: &[&'a str]) -> Vec<&'a str> {
    let mut core = subtags.to_vec();
    while core.len() > 1 && core.last() == Some(&"*") {
        core.pop();
    }
    core
}

fn locale_subtags(locale: &Locale) -> Vec<String> {
    let mut v = vec![locale.language().to_string()];
    if let Some(script) = locale.script() {
        v.push(script.to_string());
    }
    if let Some(region) = locale.region() {
        v.push(region.to_string());
    }
    v
}

/// Expand a range pattern containing a non-trailing `*` against the
/// `available` locale set, keeping positional matches (spec.md 4.2).
fn expand_wildcard(available: &[Locale], pattern: &[&str]) -> Vec<String> {
    available
        .iter()
        .filter(|locale| {
            let subtags = locale_subtags(locale);
            subtags.len() == pattern.len()
                && subtags
                    .iter()
                    .zip(pattern)
                    .all(|(subtag, part)| *part == "*" || subtag.eq_ignore_ascii_case(part))
        })
        .map(|locale| locale.to_string())
        .collect()
}

/// Part (a) of spec.md 4.2's non-trailing-wildcard expansion: complete the
/// pattern itself via CLDR likely-subtags maximisation, rather than only
/// matching it against known locales (part (b), [`expand_wildcard`]).
/// `None` if the pattern's language position is itself a wildcard or not a
/// CLDR-available language, or if the maximised completion isn't an
/// available locale.
fn expand_wildcard_via_likely_subtags(cldr: &Cldr, pattern: &[&str]) -> Option<String> {
    let language = pattern.first().copied().filter(|s| *s != "*")?;
    let language = language.to_ascii_lowercase();
    if !cldr.is_available_language(&language) {
        return None;
    }

    let mut script = None;
    let mut region = None;
    for part in &pattern[1..] {
        if *part == "*" {
            continue;
        }
        if part.len() == 4 && part.bytes().all(|b| b.is_ascii_alphabetic()) {
            script = Some(title_case(part));
        } else {
            region = Some(part.to_ascii_uppercase());
        }
    }

    let partial = Locale::from_parts(language, script, region, Vec::new());
    let lsr = distance::maximise(cldr, &partial);
    let completed = Locale::from_parts(
        lsr.language().to_string(),
        Some(lsr.script().to_string()),
        Some(lsr.region().to_string()),
        Vec::new(),
    );
    cldr.is_available_locale(&completed)
        .then(|| completed.to_string())
}
