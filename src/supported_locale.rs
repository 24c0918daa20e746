//! `SupportedLocale` and `ResolvedLocale` (spec.md 3): value types consumed
//! by locale-resolution collaborators, validated eagerly at construction
//! (spec.md 7, category 2).

use crate::cldr::Cldr;
use crate::error::BuilderError;
use crate::hierarchy::{highest_ancestor, is_descendant, is_same};
use crate::locale::Locale;
use crate::tag_parser::parse_tag;

/// `(localeForTranslations, relatedLocalesForFormatting)` (spec.md 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocale {
    locale_for_translations: Locale,
    related_locales_for_formatting: Vec<Locale>,
}

impl SupportedLocale {
    /// Build from already-parsed locales.
    ///
    /// # Errors
    /// See [`BuilderError`]: `ROOT` as `locale_for_translations`, either
    /// locale outside CLDR, `locale_for_translations` missing from
    /// `related_locales_for_formatting`, or a related locale that is not
    /// the same as, or a descendant of, `locale_for_translations`'s
    /// highest ancestor (spec.md 3).
    pub fn from_locale(
        cldr: &Cldr,
        locale_for_translations: Locale,
        related_locales_for_formatting: Vec<Locale>,
    ) -> Result<Self, BuilderError> {
        if locale_for_translations.is_root() {
            return Err(BuilderError::RootNotAllowed("localeForTranslations"));
        }
        require_in_cldr(cldr, &locale_for_translations)?;

        if !related_locales_for_formatting.contains(&locale_for_translations) {
            return Err(BuilderError::UnrelatedLocale {
                related: locale_for_translations.to_string(),
                primary: locale_for_translations.to_string(),
            });
        }

        let top = highest_ancestor(cldr, &locale_for_translations)?;
        for related in &related_locales_for_formatting {
            require_in_cldr(cldr, related)?;
            if !is_same(related, &top) && !is_descendant(cldr, related, &top) {
                return Err(BuilderError::UnrelatedLocale {
                    related: related.to_string(),
                    primary: locale_for_translations.to_string(),
                });
            }
        }

        Ok(SupportedLocale {
            locale_for_translations,
            related_locales_for_formatting,
        })
    }

    /// Build from raw tag strings.
    ///
    /// # Errors
    /// [`BuilderError::NotInCldr`] if either tag fails to parse; see
    /// [`SupportedLocale::from_locale`] for the remaining validation.
    pub fn from_tag(
        cldr: &Cldr,
        locale_for_translations: &str,
        related_locales_for_formatting: &[&str],
    ) -> Result<Self, BuilderError> {
        let primary = parse_tag(cldr, Some(locale_for_translations))
            .map_err(|_| BuilderError::NotInCldr(locale_for_translations.to_string()))?;
        let related = related_locales_for_formatting
            .iter()
            .map(|tag| parse_tag(cldr, Some(tag)).map_err(|_| BuilderError::NotInCldr(tag.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_locale(cldr, primary, related)
    }

    /// The locale to translate into.
    pub fn locale_for_translations(&self) -> &Locale {
        &self.locale_for_translations
    }

    /// Locales acceptable for number/date formatting alongside the
    /// translation locale.
    pub fn related_locales_for_formatting(&self) -> &[Locale] {
        &self.related_locales_for_formatting
    }
}

/// `(localeForTranslations, fallbacks, localeForFormatting)` (spec.md 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    locale_for_translations: Locale,
    fallbacks: Vec<Locale>,
    locale_for_formatting: Locale,
}

impl ResolvedLocale {
    /// Build from already-parsed locales.
    ///
    /// # Errors
    /// See [`BuilderError`]: `ROOT` as the primary, a fallback equal to
    /// `ROOT` or the primary, a fallback not sharing the primary's highest
    /// ancestor, or a formatting locale that is neither the primary nor a
    /// descendant of its highest ancestor (spec.md 3).
    pub fn from_locales(
        cldr: &Cldr,
        locale_for_translations: Locale,
        fallbacks: Vec<Locale>,
        locale_for_formatting: Locale,
    ) -> Result<Self, BuilderError> {
        if locale_for_translations.is_root() {
            return Err(BuilderError::RootNotAllowed("localeForTranslations"));
        }
        require_in_cldr(cldr, &locale_for_translations)?;
        let top = highest_ancestor(cldr, &locale_for_translations)?;

        for fallback in &fallbacks {
            if fallback.is_root() || *fallback == locale_for_translations {
                return Err(BuilderError::UnrelatedLocale {
                    related: fallback.to_string(),
                    primary: locale_for_translations.to_string(),
                });
            }
            require_in_cldr(cldr, fallback)?;
            let fallback_top = highest_ancestor(cldr, fallback)?;
            if fallback_top != top {
                return Err(BuilderError::UnrelatedLocale {
                    related: fallback.to_string(),
                    primary: locale_for_translations.to_string(),
                });
            }
        }

        require_in_cldr(cldr, &locale_for_formatting)?;
        let formatting_ok = is_same(&locale_for_formatting, &locale_for_translations)
            || is_same(&locale_for_formatting, &top)
            || is_descendant(cldr, &locale_for_formatting, &top);
        if !formatting_ok {
            return Err(BuilderError::UnrelatedLocale {
                related: locale_for_formatting.to_string(),
                primary: locale_for_translations.to_string(),
            });
        }

        Ok(ResolvedLocale {
            locale_for_translations,
            fallbacks,
            locale_for_formatting,
        })
    }

    /// Build from raw tag strings.
    ///
    /// # Errors
    /// [`BuilderError::NotInCldr`] if any tag fails to parse; see
    /// [`ResolvedLocale::from_locales`] for the remaining validation.
    pub fn from_tags(
        cldr: &Cldr,
        locale_for_translations: &str,
        fallbacks: &[&str],
        locale_for_formatting: &str,
    ) -> Result<Self, BuilderError> {
        let primary = parse_tag(cldr, Some(locale_for_translations))
            .map_err(|_| BuilderError::NotInCldr(locale_for_translations.to_string()))?;
        let fallbacks = fallbacks
            .iter()
            .map(|tag| parse_tag(cldr, Some(tag)).map_err(|_| BuilderError::NotInCldr(tag.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        let formatting = parse_tag(cldr, Some(locale_for_formatting))
            .map_err(|_| BuilderError::NotInCldr(locale_for_formatting.to_string()))?;
        Self::from_locales(cldr, primary, fallbacks, formatting)
    }

    /// The locale to translate into.
    pub fn locale_for_translations(&self) -> &Locale {
        &self.locale_for_translations
    }

    /// Ordered fallback locales, never containing `ROOT` or the primary.
    pub fn fallbacks(&self) -> &[Locale] {
        &self.fallbacks
    }

    /// The locale to use for number/date formatting.
    pub fn locale_for_formatting(&self) -> &Locale {
        &self.locale_for_formatting
    }
}

fn require_in_cldr(cldr: &Cldr, locale: &Locale) -> Result<(), BuilderError> {
    if cldr.is_available_locale(locale) {
        Ok(())
    } else {
        Err(BuilderError::NotInCldr(locale.to_string()))
    }
}
