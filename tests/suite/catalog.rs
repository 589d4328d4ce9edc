//! Catalog completeness and palace consistency

use std::collections::HashSet;

use zengshan_core::{BranchSource, HexagramCatalog, HexagramResolver, ResolvedHexagram};
use zengshan_types::{CODE_COUNT, HexagramCode, Kinship, Palace, PalaceConfigTable};

#[test]
fn every_code_resolves_to_a_catalogued_hexagram() {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let resolver = HexagramResolver::new(&catalog, &palaces);

    let mut names = HashSet::new();
    for code in HexagramCode::all() {
        let resolved = resolver.resolve(code);
        let known = resolved
            .known()
            .unwrap_or_else(|| panic!("{code} is not catalogued"));
        assert_eq!(known.branch_source(), BranchSource::PalaceTable);
        assert!(names.insert(known.name()), "duplicate name {}", known.name());
    }
    assert_eq!(names.len(), CODE_COUNT);
    assert!(catalog.missing_codes().is_empty());
}

#[test]
fn own_palace_kinship_is_never_unknown() {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let resolver = HexagramResolver::new(&catalog, &palaces);

    for code in HexagramCode::all() {
        let resolved = resolver.resolve(code);
        let known = resolved.known().unwrap();
        let kinship = known.kinship_against(known.element());
        assert!(!kinship.contains(&Kinship::Unknown), "{code}");
    }
}

#[test]
fn ruling_and_responding_lines_are_three_apart() {
    for record in HexagramCatalog::standard().records() {
        let (shi, ying) = (record.ruling_line(), record.responding_line());
        assert!((1..=6).contains(&shi) && (1..=6).contains(&ying));
        assert_eq!(shi.abs_diff(ying), 3, "{}", record.name());
    }
}

#[test]
fn each_palace_holds_eight_hexagrams_of_its_element() {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    for palace in Palace::ALL {
        let records = catalog.by_palace(palace);
        assert_eq!(records.len(), 8, "{palace}");
        let element = palaces.get(palace).unwrap().element();
        assert!(records.iter().all(|record| record.element() == element));
    }
}

#[test]
fn jie_and_kui_have_distinct_codes() {
    let catalog = HexagramCatalog::standard();
    let jie = catalog.find_by_name("水泽节").unwrap();
    let kui = catalog.find_by_name("火泽睽").unwrap();
    assert_eq!(jie.code().to_string(), "110010");
    assert_eq!(kui.code().to_string(), "110101");
}

#[test]
fn empty_catalog_degrades_to_placeholder() {
    let catalog = HexagramCatalog::from_records([]);
    let palaces = PalaceConfigTable::standard();
    let resolver = HexagramResolver::new(&catalog, &palaces);
    let resolved = resolver.resolve("011011".parse().unwrap());
    assert!(matches!(resolved, ResolvedHexagram::Unknown { .. }));
    assert_eq!(resolved.name(), "Unknown hexagram");
    assert_eq!(resolved.judgment(), "no data for code 011011");
}
