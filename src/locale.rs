//! The `Locale` and `Lsr` value types (spec.md 3).

use std::fmt;

/// An immutable BCP-47 locale: `(language, script, region, variants, extensions)`.
///
/// `ROOT` ([`Locale::root`]) is the empty locale. Equality, hashing and
/// ordering all operate on the canonical subtag casing (lower-case
/// language, Title-case script, upper-case region), so two `Locale`s built
/// from differently-cased input strings compare equal once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    pub(crate) language: String,
    pub(crate) script: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) variants: Vec<String>,
    pub(crate) extensions: Vec<String>,
}

impl Locale {
    /// The empty locale. Always illegal as an affinity target or a
    /// "supported" locale (spec.md 3).
    pub fn root() -> Self {
        Locale {
            language: String::new(),
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Construct a locale directly from already-canonical subtags. Intended
    /// for internal table-driven construction; prefer
    /// [`crate::tag_parser::parse_tag`] for arbitrary input.
    pub fn from_parts(
        language: impl Into<String>,
        script: Option<String>,
        region: Option<String>,
        variants: Vec<String>,
    ) -> Self {
        Locale {
            language: language.into(),
            script,
            region,
            variants,
            extensions: Vec::new(),
        }
    }

    /// `true` for the empty locale.
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// The language subtag, lower-case. Empty for `ROOT`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The Title-case script subtag, if any.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The upper-case region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Variant subtags, lower-case, in tag order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Locale with the region subtag removed.
    pub fn without_region(&self) -> Self {
        Locale {
            region: None,
            ..self.clone()
        }
    }

    /// Locale with the script subtag removed.
    pub fn without_script(&self) -> Self {
        Locale {
            script: None,
            ..self.clone()
        }
    }

    /// Locale built from just the language subtag.
    pub fn language_only(&self) -> Self {
        Locale::from_parts(self.language.clone(), None, None, Vec::new())
    }

    /// Locale built from language + script only (no region, no variants).
    pub fn language_script(&self) -> Self {
        Locale::from_parts(self.language.clone(), self.script.clone(), None, Vec::new())
    }

    /// The maximised `(language, script, region)` triple, if this locale
    /// already carries all three (no table lookup needed).
    pub fn as_lsr(&self) -> Option<Lsr> {
        match (&self.script, &self.region) {
            (Some(script), Some(region)) if !self.language.is_empty() => Some(Lsr {
                language: self.language.clone(),
                script: script.clone(),
                region: region.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "root");
        }
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        Ok(())
    }
}

/// A maximised `(language, script, region)` triple (spec.md 3): the sole
/// input to [`crate::distance::distance`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lsr {
    pub(crate) language: String,
    pub(crate) script: String,
    pub(crate) region: String,
}

impl Lsr {
    /// The language subtag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The script subtag.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The region subtag.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Construct an LSR directly from its three subtags.
    pub(crate) fn from_parts(language: String, script: String, region: String) -> Self {
        Lsr {
            language,
            script,
            region,
        }
    }

    /// The CLDR "no data" marker triple for a language with no likely-subtags
    /// entry at all. Never produced by this crate's curated snapshot, since
    /// the parser only ever accepts languages present in the
    /// available-languages set, but kept as a total fallback rather than a
    /// panic.
    pub(crate) fn unknown_for(language: &str) -> Self {
        Lsr {
            language: language.to_string(),
            script: "Zzzz".to_string(),
            region: "ZZ".to_string(),
        }
    }

    pub(crate) fn with_region(&self, region: Option<&str>) -> Self {
        Lsr {
            region: region.unwrap_or("").to_string(),
            ..self.clone()
        }
    }

    pub(crate) fn with_script(&self, script: Option<&str>) -> Self {
        Lsr {
            script: script.unwrap_or("").to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Lsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.language, self.script, self.region)
    }
}

/// Title-case a 4-letter script subtag: `"hant"` / `"HANT"` -> `"Hant"`.
pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Parse a tag that is already known to be a canonical, trusted CLDR
/// snapshot entry (table data), without validating against the
/// available-languages set. Subtag kind is inferred from shape: 4
/// alphabetic characters is a script, 2 alphabetic or 3 digits is a
/// region, anything else is a variant. Used only by [`crate::cldr`] while
/// loading the embedded tables.
pub(crate) fn parse_trusted_tag(s: &str) -> Locale {
    let mut language = String::new();
    let mut script = None;
    let mut region = None;
    let mut variants = Vec::new();
    for (i, part) in s.split('-').enumerate() {
        if i == 0 {
            language = part.to_ascii_lowercase();
            continue;
        }
        let is_script = script.is_none()
            && region.is_none()
            && part.len() == 4
            && part.bytes().all(|b| b.is_ascii_alphabetic());
        let is_region = !is_script
            && region.is_none()
            && ((part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
                || (part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit())));
        if is_script {
            script = Some(title_case(part));
        } else if is_region {
            region = Some(part.to_ascii_uppercase());
        } else {
            variants.push(part.to_ascii_lowercase());
        }
    }
    Locale::from_parts(language, script, region, variants)
}

/// Parse a trusted `language-Script-REGION` string (a likely-subtags table
/// value) into an [`Lsr`]. Panics on malformed table data - this is only
/// ever called on the embedded snapshot, never on user input.
pub(crate) fn parse_trusted_lsr(s: &str) -> Lsr {
    let mut parts = s.split('-');
    let language = parts.next().expect("lsr language").to_ascii_lowercase();
    let script = title_case(parts.next().expect("lsr script"));
    let region = parts.next().expect("lsr region").to_ascii_uppercase();
    Lsr {
        language,
        script,
        region,
    }
}
