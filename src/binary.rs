//! The binary affinity calculator (C9, spec.md 4.8): affinity between two
//! individual tags.

use crate::affinity::{affinity, LocaleAffinity};
use crate::classifier::spoken_language;
use crate::cldr::Cldr;
use crate::distance::{distance, maximise};
use crate::tag_parser::parse_tag;

/// Affinity between two raw tags (spec.md 4.8). Unparseable input on
/// either side yields `NONE`; never errors.
pub fn calculate(cldr: &Cldr, a: Option<&str>, b: Option<&str>) -> LocaleAffinity {
    let (Ok(a), Ok(b)) = (parse_tag(cldr, a), parse_tag(cldr, b)) else {
        return LocaleAffinity::NONE;
    };
    if let (Ok(spoken_a), Ok(spoken_b)) = (spoken_language(cldr, &a), spoken_language(cldr, &b)) {
        if spoken_a == spoken_b {
            return LocaleAffinity::SAME;
        }
    }
    let lsr_a = maximise(cldr, &a);
    let lsr_b = maximise(cldr, &b);
    affinity(distance(cldr, &lsr_a, &lsr_b))
}
