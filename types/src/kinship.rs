//! Six-kinship (六亲) classification.
//!
//! A line's kinship is never stored as ground truth. It is derived from the
//! pair (reference element, line element) at the point of use, because the
//! reference element differs between the original and transformed hexagram.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Element, LINE_COUNT};

/// A line's relational role to a reference (palace) element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kinship {
    /// Same element as the reference (同我者).
    Siblings,
    /// Generates the reference (生我者).
    Parents,
    /// Generated by the reference (我生者).
    Offspring,
    /// Destroys the reference (克我者).
    OfficialsGhosts,
    /// Destroyed by the reference (我克者).
    Wealth,
    /// No relation matched. Unreachable over the closed five-element domain.
    Unknown,
}

impl Kinship {
    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            Kinship::Siblings => "兄弟",
            Kinship::Parents => "父母",
            Kinship::Offspring => "子孙",
            Kinship::OfficialsGhosts => "官鬼",
            Kinship::Wealth => "妻财",
            Kinship::Unknown => "未知",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kinship::Siblings => "siblings",
            Kinship::Parents => "parents",
            Kinship::Offspring => "offspring",
            Kinship::OfficialsGhosts => "officials_ghosts",
            Kinship::Wealth => "wealth",
            Kinship::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Classify one line element against the reference element.
#[must_use]
pub fn classify(reference: Element, line: Element) -> Kinship {
    if line == reference {
        Kinship::Siblings
    } else if reference.generated_by() == line {
        Kinship::Parents
    } else if reference.generates() == line {
        Kinship::Offspring
    } else if reference.destroyed_by() == line {
        Kinship::OfficialsGhosts
    } else if reference.destroys() == line {
        Kinship::Wealth
    } else {
        Kinship::Unknown
    }
}

/// Classify all six line elements against one reference element, preserving order.
#[must_use]
pub fn classify_all(reference: Element, lines: &[Element; LINE_COUNT]) -> [Kinship; LINE_COUNT] {
    lines.map(|line| classify(reference, line))
}

#[cfg(test)]
mod tests {
    use super::{Kinship, classify, classify_all};
    use crate::Element;

    #[test]
    fn every_pair_gets_a_known_kinship() {
        for reference in Element::ALL {
            let mut labels: Vec<Kinship> = Element::ALL
                .into_iter()
                .map(|line| classify(reference, line))
                .collect();
            assert!(!labels.contains(&Kinship::Unknown));
            labels.sort_by_key(|kinship| kinship.as_str());
            labels.dedup();
            assert_eq!(labels.len(), 5, "reference {reference:?} must hit all five roles");
        }
    }

    #[test]
    fn metal_palace_relations() {
        assert_eq!(classify(Element::Metal, Element::Metal), Kinship::Siblings);
        assert_eq!(classify(Element::Metal, Element::Earth), Kinship::Parents);
        assert_eq!(classify(Element::Metal, Element::Water), Kinship::Offspring);
        assert_eq!(classify(Element::Metal, Element::Fire), Kinship::OfficialsGhosts);
        assert_eq!(classify(Element::Metal, Element::Wood), Kinship::Wealth);
    }

    #[test]
    fn classify_all_preserves_order() {
        // 乾为天: 子寅辰午申戌 → 水木土火金土
        let lines = [
            Element::Water,
            Element::Wood,
            Element::Earth,
            Element::Fire,
            Element::Metal,
            Element::Earth,
        ];
        assert_eq!(
            classify_all(Element::Metal, &lines),
            [
                Kinship::Offspring,
                Kinship::Wealth,
                Kinship::Parents,
                Kinship::OfficialsGhosts,
                Kinship::Siblings,
                Kinship::Parents,
            ]
        );
    }
}
