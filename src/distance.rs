//! The distance engine (C6, spec.md 4.5): likely-subtags maximisation and
//! bidirectional CLDR locale distance.

use crate::cldr::Cldr;
use crate::locale::{Locale, Lsr};

/// Upper bound of the CLDR locale-distance scale (spec.md 3, 4.6): the
/// `THRESHOLD` the affinity kernel divides by.
pub const MAX_DISTANCE: u16 = 224;

const REGION_DEFAULT: u16 = 4;
const SCRIPT_DEFAULT: u16 = MAX_DISTANCE;
const LANGUAGE_DEFAULT: u16 = MAX_DISTANCE;

/// Apply CLDR likely-subtags maximisation to `locale`, producing its LSR
/// triple. Never returns a locale that is missing a field: the parser
/// upstream only ever hands this function locales whose language is in
/// the CLDR available-languages set, so a lookup always exists.
pub fn maximise(cldr: &Cldr, locale: &Locale) -> Lsr {
    if let Some(lsr) = locale.as_lsr() {
        return lsr;
    }
    if let Some(script) = locale.script() {
        if let Some(lsr) = cldr.likely_subtag(locale.language(), Some(script), None) {
            return merge(locale, lsr);
        }
    }
    if let Some(region) = locale.region() {
        if let Some(lsr) = cldr.likely_subtag(locale.language(), None, Some(region)) {
            return merge(locale, lsr);
        }
    }
    if let Some(lsr) = cldr.likely_subtag(locale.language(), None, None) {
        return merge(locale, lsr);
    }
    // No entry at all for this language: fall back to the CLDR "unknown"
    // script/region markers rather than panicking.
    Lsr::unknown_for(locale.language())
}

fn merge(locale: &Locale, looked_up: &Lsr) -> Lsr {
    Lsr::from_parts(
        looked_up.language().to_string(),
        locale
            .script()
            .map(|s| s.to_string())
            .unwrap_or_else(|| looked_up.script().to_string()),
        locale
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| looked_up.region().to_string()),
    )
}

/// Minimise an LSR back to its canonical (shortest round-tripping) locale
/// form, following the standard CLDR algorithm: try language-only, then
/// language+script, then language+region, falling back to the full triple.
pub fn minimise(cldr: &Cldr, lsr: &Lsr) -> Locale {
    let language_only = Locale::from_parts(lsr.language().to_string(), None, None, Vec::new());
    if maximise(cldr, &language_only) == *lsr {
        return language_only;
    }
    let with_script = Locale::from_parts(
        lsr.language().to_string(),
        Some(lsr.script().to_string()),
        None,
        Vec::new(),
    );
    if maximise(cldr, &with_script) == *lsr {
        return with_script;
    }
    let with_region = Locale::from_parts(
        lsr.language().to_string(),
        None,
        Some(lsr.region().to_string()),
        Vec::new(),
    );
    if maximise(cldr, &with_region) == *lsr {
        return with_region;
    }
    Locale::from_parts(
        lsr.language().to_string(),
        Some(lsr.script().to_string()),
        Some(lsr.region().to_string()),
        Vec::new(),
    )
}

/// Bidirectional CLDR locale distance between two LSR triples, in
/// `0..=224` (spec.md 4.5).
///
/// The only hard-coded override inside the distance engine: a
/// Croatian/Bosnian pair is always distance `0`, in either direction,
/// regardless of script (spec.md 4.5).
pub fn distance(cldr: &Cldr, a: &Lsr, b: &Lsr) -> u16 {
    if is_croatian_bosnian_pair(a, b) {
        return 0;
    }
    let forward = directional_distance(cldr, a, b);
    let backward = directional_distance(cldr, b, a);
    forward.min(backward)
}

fn is_croatian_bosnian_pair(a: &Lsr, b: &Lsr) -> bool {
    matches!(
        (a.language(), b.language()),
        ("hr", "bs") | ("bs", "hr")
    )
}

/// One-way CLDR locale distance, `desired` matched against `supported`
/// without taking the reverse direction into account. Used by the
/// reference-locale best-match routine (spec.md 4.9), which mirrors ICU's
/// one-way `bestMatch` rather than the bidirectional [`distance`].
pub fn one_way_distance(cldr: &Cldr, desired: &Lsr, supported: &Lsr) -> u16 {
    directional_distance(cldr, desired, supported)
}

fn directional_distance(cldr: &Cldr, desired: &Lsr, supported: &Lsr) -> u16 {
    let mut d = desired.clone();
    let mut s = supported.clone();
    let mut total: u32 = 0;

    if d.region() != s.region() {
        total += lookup(cldr, &d, &s, REGION_DEFAULT) as u32;
    }
    d = d.with_region(None);
    s = s.with_region(None);

    if d.script() != s.script() {
        total += lookup(cldr, &d, &s, SCRIPT_DEFAULT) as u32;
    }
    d = d.with_script(None);
    s = s.with_script(None);

    if d.language() != s.language() {
        total += lookup(cldr, &d, &s, LANGUAGE_DEFAULT) as u32;
    }

    total.min(MAX_DISTANCE as u32) as u16
}

fn lookup(cldr: &Cldr, desired: &Lsr, supported: &Lsr, default: u16) -> u16 {
    cldr.distance_rule_for(
        desired.language(),
        non_empty(desired.script()),
        non_empty(desired.region()),
        supported.language(),
        non_empty(supported.script()),
        non_empty(supported.region()),
    )
    .unwrap_or(default)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cldr::Cldr;
    use crate::tag_parser::parse_tag;

    fn max(cldr: &Cldr, tag: &str) -> Lsr {
        maximise(cldr, &parse_tag(cldr, Some(tag)).unwrap())
    }

    #[test]
    fn maximise_fills_script_and_region() {
        let cldr = Cldr::default();
        let lsr = max(&cldr, "zh-HK");
        assert_eq!(lsr.language(), "zh");
        assert_eq!(lsr.script(), "Hant");
        assert_eq!(lsr.region(), "HK");
    }

    #[test]
    fn croatian_bosnian_override_ignores_script() {
        let cldr = Cldr::default();
        let hr = max(&cldr, "hr-HR");
        let bs = max(&cldr, "bs-Cyrl-BA");
        assert_eq!(distance(&cldr, &hr, &bs), 0);
    }

    #[test]
    fn catalan_spanish_closer_than_catalan_japanese() {
        let cldr = Cldr::default();
        let ca = max(&cldr, "ca");
        let es = max(&cldr, "es");
        let ja = max(&cldr, "ja");
        assert!(distance(&cldr, &ca, &es) < distance(&cldr, &ca, &ja));
    }

    #[test]
    fn minimise_round_trips() {
        let cldr = Cldr::default();
        let lsr = max(&cldr, "fr-CA");
        let minimised = minimise(&cldr, &lsr);
        assert_eq!(maximise(&cldr, &minimised), lsr);
    }
}
