//! Concrete scenario coverage (spec.md 8).

use locale_affinity::accept_language::parse_accept_language;
use locale_affinity::affinity::LocaleAffinity;
use locale_affinity::{binary, unary, Cldr};

fn against_set() -> Vec<&'static str> {
    vec!["ar", "bs", "es", "fr", "ja", "pt", "sr-Latn", "zh-Hant"]
}

#[test]
fn s1_croatian_against_set_is_mutually_intelligible() {
    let cldr = Cldr::default();
    let calc = unary::UnaryCalculator::from_tags(&cldr, against_set());
    assert_eq!(
        calc.calculate(&cldr, Some("hr-HR")),
        LocaleAffinity::MUTUALLY_INTELLIGIBLE
    );
}

#[test]
fn s2_taiwan_chinese_against_set_is_same() {
    let cldr = Cldr::default();
    let calc = unary::UnaryCalculator::from_tags(&cldr, against_set());
    assert_eq!(calc.calculate(&cldr, Some("zh-TW")), LocaleAffinity::SAME);
}

#[test]
fn s3_simplified_chinese_against_set_is_none() {
    let cldr = Cldr::default();
    let calc = unary::UnaryCalculator::from_tags(&cldr, against_set());
    assert_eq!(calc.calculate(&cldr, Some("zh-CN")), LocaleAffinity::NONE);
}

#[test]
fn s4_catalan_against_set_is_low() {
    let cldr = Cldr::default();
    let calc = unary::UnaryCalculator::from_tags(&cldr, against_set());
    assert_eq!(calc.calculate(&cldr, Some("ca")), LocaleAffinity::LOW);
}

#[test]
fn s5_german_swiss_german_binary_is_mutually_intelligible() {
    let cldr = Cldr::default();
    assert_eq!(
        binary::calculate(&cldr, Some("de-DE"), Some("gsw-AT")),
        LocaleAffinity::MUTUALLY_INTELLIGIBLE
    );
}

#[test]
fn s6_serbian_scripts_binary_is_same() {
    let cldr = Cldr::default();
    assert_eq!(
        binary::calculate(&cldr, Some("sr-Cyrl"), Some("sr-Latn")),
        LocaleAffinity::SAME
    );
}

#[test]
fn s7_bosnian_croatian_binary_is_mutually_intelligible() {
    let cldr = Cldr::default();
    assert_eq!(
        binary::calculate(&cldr, Some("bs-Cyrl-BA"), Some("hr-MK")),
        LocaleAffinity::MUTUALLY_INTELLIGIBLE
    );
}

#[test]
fn s8_zh_hk_related_and_zh_hant_best_join_as_same() {
    let cldr = Cldr::default();
    let refs = locale_affinity::reference::ReferenceLocaleCalculator::new(&cldr);
    assert_eq!(
        refs.calculate(&cldr, Some("zh-HK"), Some("zh-Hant")),
        LocaleAffinity::SAME
    );
}

#[test]
fn s9_fr_ch_related_and_fr_ca_best_join_as_same() {
    let cldr = Cldr::default();
    let refs = locale_affinity::reference::ReferenceLocaleCalculator::new(&cldr);
    assert_eq!(
        refs.calculate(&cldr, Some("fr-CH"), Some("fr-CA")),
        LocaleAffinity::SAME
    );
}

#[test]
fn s10_accept_language_is_weight_sorted_and_canonicalised() {
    let cldr = Cldr::default();
    let ranges = parse_accept_language(
        &cldr,
        "JA_jp@calendar=buddhist, FR_be;q=0.3, ZH-Hant;q=0.2, fr-CA",
    );
    let got: Vec<(String, f64)> = ranges.into_iter().map(|r| (r.range, r.weight)).collect();
    assert_eq!(
        got,
        vec![
            ("ja-JP".to_string(), 1.0),
            ("fr-CA".to_string(), 1.0),
            ("fr-BE".to_string(), 0.3),
            ("zh-Hant".to_string(), 0.2),
        ]
    );
}
