//! Locale hierarchy utilities (C4, spec.md 4.3): `parent`, `ancestors`,
//! `descendants`, `highestAncestor`, `isDescendant`, `isSame`.

use crate::cldr::Cldr;
use crate::error::BuilderError;
use crate::locale::Locale;

/// The CLDR parent of `locale`, or `None` if `locale` is `ROOT` or is
/// already the root of its family (spec.md 4.3).
pub fn parent(cldr: &Cldr, locale: &Locale) -> Option<Locale> {
    if locale.is_root() {
        return None;
    }
    if let Some(overridden) = cldr.parent_override(locale) {
        return Some(overridden.clone());
    }
    if locale.region().is_some() {
        return Some(locale.without_region());
    }
    if let Some(script) = locale.script() {
        if cldr.is_multi_script_language(locale.language()) {
            // A script-bearing tag of a multi-script language is a root of
            // its own family rather than a descendant of the bare language
            // code, UNLESS its script is that language's own likely/default
            // one (e.g. `sr-Cyrl`, `az-Latn`), in which case it is just the
            // ordinary written form and truncates like any other tag.
            // `zh` is always split into root families regardless, since CLDR
            // treats `zh-Hans` and `zh-Hant` as equally-weighted top-level
            // locales rather than one being the "plain" form of the other.
            if locale.language() == "zh" || !is_default_script(cldr, locale.language(), script) {
                return None;
            }
        }
        return Some(locale.language_only());
    }
    None
}

fn is_default_script(cldr: &Cldr, language: &str, script: &str) -> bool {
    cldr.likely_subtag(language, None, None)
        .map(|lsr| lsr.script() == script)
        .unwrap_or(false)
}

/// Ancestors of `locale`, leaves-first, up to (but excluding) `ROOT`.
pub fn ancestors(cldr: &Cldr, locale: &Locale) -> Vec<Locale> {
    let mut result = Vec::new();
    let mut current = locale.clone();
    while let Some(p) = parent(cldr, &current) {
        result.push(p.clone());
        current = p;
    }
    result
}

/// The non-`ROOT` ancestor closest to `ROOT`; `locale` itself if it is
/// already at the top of its family.
///
/// # Errors
/// Returns [`BuilderError::RootNotAllowed`] if `locale` is `ROOT`
/// (spec.md 4.3: "`highestAncestor(ROOT)` is an error").
pub fn highest_ancestor(cldr: &Cldr, locale: &Locale) -> Result<Locale, BuilderError> {
    if locale.is_root() {
        return Err(BuilderError::RootNotAllowed("highestAncestor argument"));
    }
    Ok(ancestors(cldr, locale)
        .into_iter()
        .last()
        .unwrap_or_else(|| locale.clone()))
}

/// `true` if `candidate` is a (possibly indirect) descendant of `ancestor`.
pub fn is_descendant(cldr: &Cldr, candidate: &Locale, ancestor: &Locale) -> bool {
    ancestors(cldr, candidate).iter().any(|a| a == ancestor)
}

/// `true` if the two locales are canonically identical.
pub fn is_same(a: &Locale, b: &Locale) -> bool {
    a == b
}

/// Every CLDR-available locale that descends (possibly indirectly) from
/// `locale`.
pub fn descendants(cldr: &Cldr, locale: &Locale) -> Vec<Locale> {
    cldr.available_locales()
        .filter(|candidate| *candidate != locale && is_descendant(cldr, candidate, locale))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cldr::Cldr;
    use crate::locale::Locale;

    fn loc(s: &str) -> Locale {
        crate::tag_parser::parse_tag(&Cldr::default(), Some(s)).unwrap()
    }

    #[test]
    fn parent_override_wins_over_truncation() {
        let cldr = Cldr::default();
        assert_eq!(parent(&cldr, &loc("zh-MO")), Some(loc("zh-Hant-HK")));
        assert_eq!(parent(&cldr, &loc("pt-BR")), Some(loc("pt")));
    }

    #[test]
    fn multi_script_language_has_no_bare_parent() {
        let cldr = Cldr::default();
        assert_eq!(parent(&cldr, &loc("zh-Hant")), None);
        assert_eq!(parent(&cldr, &loc("sr-Latn")), None);
    }

    #[test]
    fn highest_ancestor_of_root_errors() {
        let cldr = Cldr::default();
        assert!(highest_ancestor(&cldr, &Locale::root()).is_err());
    }

    #[test]
    fn highest_ancestor_climbs_overrides_and_truncation() {
        let cldr = Cldr::default();
        assert_eq!(highest_ancestor(&cldr, &loc("zh-TW")).unwrap(), loc("zh-Hant"));
        assert_eq!(highest_ancestor(&cldr, &loc("en-GB")).unwrap(), loc("en"));
    }
}
