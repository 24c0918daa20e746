//! Property coverage (spec.md 8).

use locale_affinity::affinity::LocaleAffinity;
use locale_affinity::{accept_language, binary, classifier, Cldr};

fn sample_tags() -> Vec<&'static str> {
    vec![
        "en", "en-GB", "en-US", "fr", "fr-CA", "fr-CH", "de-DE", "gsw-AT", "zh-TW", "zh-CN",
        "zh-HK", "sr-Latn", "sr-Cyrl", "hr-HR", "bs-Cyrl-BA", "ca", "ja", "pt-BR",
    ]
}

#[test]
fn reflexivity_of_same() {
    let cldr = Cldr::default();
    for tag in sample_tags() {
        assert_eq!(
            binary::calculate(&cldr, Some(tag), Some(tag)),
            LocaleAffinity::SAME,
            "{tag} vs itself"
        );
    }
}

#[test]
fn symmetry() {
    let cldr = Cldr::default();
    let tags = sample_tags();
    for a in &tags {
        for b in &tags {
            assert_eq!(
                binary::calculate(&cldr, Some(a), Some(b)),
                binary::calculate(&cldr, Some(b), Some(a)),
                "{a} vs {b} not symmetric"
            );
        }
    }
}

#[test]
fn spoken_language_dominance() {
    let cldr = Cldr::default();
    assert_eq!(
        binary::calculate(&cldr, Some("zh-TW"), Some("zh-Hant-TW")),
        LocaleAffinity::SAME
    );
    assert_eq!(
        binary::calculate(&cldr, Some("sr-Latn"), Some("sr-Latn-RS")),
        LocaleAffinity::SAME
    );
}

#[test]
fn no_spurious_same() {
    let cldr = Cldr::default();
    let tags = sample_tags();
    for a in &tags {
        for b in &tags {
            if binary::calculate(&cldr, Some(a), Some(b)) == LocaleAffinity::SAME {
                let spoken_a = classifier::spoken_language(
                    &cldr,
                    &locale_affinity::tag_parser::parse_tag(&cldr, Some(a)).unwrap(),
                )
                .unwrap();
                let spoken_b = classifier::spoken_language(
                    &cldr,
                    &locale_affinity::tag_parser::parse_tag(&cldr, Some(b)).unwrap(),
                )
                .unwrap();
                let is_croatian_bosnian = {
                    let la = a.split('-').next().unwrap();
                    let lb = b.split('-').next().unwrap();
                    matches!((la, lb), ("hr", "bs") | ("bs", "hr"))
                };
                assert!(
                    spoken_a == spoken_b || is_croatian_bosnian,
                    "{a} vs {b} is SAME without matching spoken language or a hard-coded override"
                );
            }
        }
    }
}

#[test]
fn score_bounds() {
    let cldr = Cldr::default();
    let tags = sample_tags();
    for a in &tags {
        for b in &tags {
            let la = locale_affinity::tag_parser::parse_tag(&cldr, Some(a)).unwrap();
            let lb = locale_affinity::tag_parser::parse_tag(&cldr, Some(b)).unwrap();
            let lsr_a = locale_affinity::distance::maximise(&cldr, &la);
            let lsr_b = locale_affinity::distance::maximise(&cldr, &lb);
            let distance = locale_affinity::distance::distance(&cldr, &lsr_a, &lsr_b);
            let score = locale_affinity::affinity::distance_to_score(distance);
            assert!(score <= 100);
        }
    }
}

#[test]
fn affinity_ordering_preserved() {
    use locale_affinity::affinity::affinity;
    assert!(affinity(0) >= affinity(50));
    assert!(affinity(50) >= affinity(150));
    assert!(affinity(150) >= affinity(224));
}

#[test]
fn reference_round_trip() {
    let cldr = Cldr::default();
    let refs = locale_affinity::reference::ReferenceLocaleCalculator::new(&cldr);
    for tag in ["fr-CA", "en-GB", "zh-Hant", "de"] {
        let reference = refs.best_matching_reference_locale(&cldr, Some(tag));
        assert!(reference.is_some());
        let related = refs.related_reference_locales(&cldr, Some(tag));
        assert!(related
            .iter()
            .any(|r| Some(r.reference_locale()) == reference.as_ref()
                && r.affinity() == LocaleAffinity::SAME));
    }
}

#[test]
fn robustness_across_calculators() {
    let cldr = Cldr::default();
    for bad in [None, Some(""), Some("   Invalid tag   ")] {
        assert_eq!(binary::calculate(&cldr, bad, Some("en")), LocaleAffinity::NONE);
        let calc = locale_affinity::unary::UnaryCalculator::from_tags(&cldr, ["en", "fr"]);
        assert_eq!(calc.calculate(&cldr, bad), LocaleAffinity::NONE);
        let refs = locale_affinity::reference::ReferenceLocaleCalculator::new(&cldr);
        assert!(refs.related_reference_locales(&cldr, bad).is_empty());
    }
}

#[test]
fn accept_language_idempotence() {
    let cldr = Cldr::default();
    let first = accept_language::parse_accept_language(&cldr, "fr-CA,en-GB;q=0.5,ja;q=0.1");
    let normalised: Vec<String> = first
        .iter()
        .map(|r| format!("{};q={}", r.range, r.weight))
        .collect();
    let second = accept_language::parse_accept_language(&cldr, &normalised.join(","));
    assert_eq!(first, second);
}

#[test]
fn wildcard_purity() {
    let cldr = Cldr::default();
    for input in ["*", "*-*", "****-"] {
        assert!(accept_language::parse_accept_language(&cldr, input).is_empty());
    }
}
