//! The 64-hexagram catalog.
//!
//! Records are keyed by [`HexagramCode`]. Each record carries the branch
//! sequence the table was authored with; that inline data is kept for
//! reference only; [`crate::HexagramResolver`] re-derives branches from the
//! palace table.

mod table;

use std::collections::HashMap;

use serde::Serialize;

use zengshan_types::{Branch, Element, HexagramCode, LINE_COUNT, Palace};

/// One static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramRecord {
    code: HexagramCode,
    name: &'static str,
    judgment: &'static str,
    palace: Palace,
    element: Element,
    ruling_line: u8,
    responding_line: u8,
    branches: [Branch; LINE_COUNT],
}

impl HexagramRecord {
    /// `lines` is the (ruling, responding) pair, 1-indexed.
    #[must_use]
    pub const fn new(
        code: HexagramCode,
        name: &'static str,
        judgment: &'static str,
        palace: Palace,
        element: Element,
        lines: (u8, u8),
        branches: [Branch; LINE_COUNT],
    ) -> Self {
        Self {
            code,
            name,
            judgment,
            palace,
            element,
            ruling_line: lines.0,
            responding_line: lines.1,
            branches,
        }
    }

    #[must_use]
    pub const fn code(&self) -> HexagramCode {
        self.code
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn judgment(&self) -> &'static str {
        self.judgment
    }

    #[must_use]
    pub const fn palace(&self) -> Palace {
        self.palace
    }

    /// Ruling element as authored in the table.
    #[must_use]
    pub const fn element(&self) -> Element {
        self.element
    }

    /// 世 position, 1-indexed.
    #[must_use]
    pub const fn ruling_line(&self) -> u8 {
        self.ruling_line
    }

    /// 应 position, 1-indexed.
    #[must_use]
    pub const fn responding_line(&self) -> u8 {
        self.responding_line
    }

    /// Branches as authored in the table. Not authoritative.
    #[must_use]
    pub const fn stored_branches(&self) -> &[Branch; LINE_COUNT] {
        &self.branches
    }
}

/// Read-only lookup from code to record.
#[derive(Debug, Clone)]
pub struct HexagramCatalog {
    records: HashMap<HexagramCode, HexagramRecord>,
}

impl HexagramCatalog {
    /// The full eight-palace catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_records(table::RECORDS.iter().cloned())
    }

    /// Build a catalog from explicit records. A later record with the same
    /// code replaces an earlier one.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = HexagramRecord>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            if let Some(previous) = map.insert(record.code(), record) {
                tracing::warn!(
                    code = %previous.code(),
                    replaced = previous.name(),
                    "Duplicate hexagram code in catalog"
                );
            }
        }
        Self { records: map }
    }

    #[must_use]
    pub fn get(&self, code: HexagramCode) -> Option<&HexagramRecord> {
        self.records.get(&code)
    }

    /// Find a record by its full name, e.g. `水火既济`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&HexagramRecord> {
        let name = name.trim();
        self.records.values().find(|record| record.name() == name)
    }

    /// Records in ascending code order.
    #[must_use]
    pub fn records(&self) -> Vec<&HexagramRecord> {
        let mut records: Vec<&HexagramRecord> = self.records.values().collect();
        records.sort_by_key(|record| record.code());
        records
    }

    /// Records of one palace, in code order.
    #[must_use]
    pub fn by_palace(&self, palace: Palace) -> Vec<&HexagramRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.palace() == palace)
            .collect()
    }

    /// Codes with no record.
    #[must_use]
    pub fn missing_codes(&self) -> Vec<HexagramCode> {
        HexagramCode::all()
            .filter(|code| !self.records.contains_key(code))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for HexagramCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::HexagramCatalog;
    use zengshan_types::{HexagramCode, Palace, PalaceConfigTable};

    #[test]
    fn standard_catalog_covers_all_codes() {
        let catalog = HexagramCatalog::standard();
        assert_eq!(catalog.len(), 64);
        assert!(catalog.missing_codes().is_empty());
    }

    #[test]
    fn each_palace_has_eight_hexagrams() {
        let catalog = HexagramCatalog::standard();
        for palace in Palace::ALL {
            assert_eq!(catalog.by_palace(palace).len(), 8, "{palace}");
        }
    }

    #[test]
    fn ruling_and_responding_lines_are_three_apart() {
        for record in HexagramCatalog::standard().records() {
            let shi = record.ruling_line();
            let ying = record.responding_line();
            assert!((1..=6).contains(&shi), "{}", record.name());
            assert!((1..=6).contains(&ying), "{}", record.name());
            assert_eq!(shi.abs_diff(ying), 3, "{}", record.name());
        }
    }

    #[test]
    fn declared_element_matches_palace_table() {
        let palaces = PalaceConfigTable::standard();
        for record in HexagramCatalog::standard().records() {
            let entry = palaces.get(record.palace()).unwrap();
            assert_eq!(record.element(), entry.element(), "{}", record.name());
        }
    }

    #[test]
    fn pure_hexagram_heads_its_palace() {
        let catalog = HexagramCatalog::standard();
        for (code, palace) in [
            ("111111", Palace::Qian),
            ("110110", Palace::Dui),
            ("101101", Palace::Li),
            ("100100", Palace::Zhen),
            ("011011", Palace::Xun),
            ("010010", Palace::Kan),
            ("001001", Palace::Gen),
            ("000000", Palace::Kun),
        ] {
            let record = catalog.get(code.parse().unwrap()).unwrap();
            assert_eq!(record.palace(), palace);
            assert_eq!((record.ruling_line(), record.responding_line()), (6, 3));
        }
    }

    #[test]
    fn jie_is_keyed_by_its_trigrams() {
        let catalog = HexagramCatalog::standard();
        let jie = catalog.find_by_name("水泽节").unwrap();
        assert_eq!(jie.code(), "110010".parse::<HexagramCode>().unwrap());
        assert_eq!(jie.palace(), Palace::Kan);
        let kui = catalog.get("110101".parse().unwrap()).unwrap();
        assert_eq!(kui.name(), "火泽睽");
    }

    #[test]
    fn partial_catalog_reports_missing_codes() {
        let standard = HexagramCatalog::standard();
        let partial = HexagramCatalog::from_records(
            standard
                .records()
                .into_iter()
                .filter(|record| record.name() != "坤为地")
                .cloned(),
        );
        assert_eq!(partial.len(), 63);
        assert_eq!(partial.missing_codes(), vec![HexagramCode::from_bits(0)]);
    }
}
