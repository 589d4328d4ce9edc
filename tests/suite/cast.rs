//! End-to-end casting: coins to resolved hexagram pair

use zengshan_core::{
    CastSession, Diviner, DivinationError, HexagramCatalog, HexagramResolver, ScriptedCoins,
    SessionError, SessionState,
};
use zengshan_types::{Kinship, Line, LineState, PalaceConfigTable, classify_all};

use crate::common::{coins_for_backs, scripted_reading};

#[test]
fn three_backs_is_changing_yang() {
    let reading = scripted_reading(None, [3, 1, 1, 1, 1, 1]);
    let first = reading.result().lines()[0];
    assert_eq!(first.state(), LineState::ChangingYang);
    assert!(reading.result().original().is_yang(0));
    assert!(!reading.result().transformed().is_yang(0));
}

#[test]
fn alternating_stable_throws_give_jiji_in_kan_palace() {
    let reading = scripted_reading(Some("问考试"), [1, 2, 1, 2, 1, 2]);
    let result = reading.result();
    assert_eq!(result.original().to_string(), "101010");
    assert_eq!(result.transformed(), result.original());
    assert!(!result.has_changing_lines());

    let original = reading.hexagrams().original().known().unwrap();
    assert_eq!(original.name(), "水火既济");
    assert_eq!(original.palace().hanzi(), "坎宫");
}

#[test]
fn all_changing_yang_flips_qian_to_kun() {
    let reading = scripted_reading(None, [3; 6]);
    let result = reading.result();
    assert_eq!(result.original().to_string(), "111111");
    assert_eq!(result.transformed().to_string(), "000000");
    assert_eq!(result.changing_positions(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(reading.hexagrams().original().name(), "乾为天");
    assert_eq!(reading.hexagrams().transformed().name(), "坤为地");
}

#[test]
fn all_changing_yin_flips_kun_to_qian() {
    let reading = scripted_reading(None, [0; 6]);
    assert_eq!(reading.result().original().to_string(), "000000");
    assert_eq!(reading.result().transformed().to_string(), "111111");
}

#[test]
fn transformed_kinship_is_relative_to_original_palace() {
    let reading = scripted_reading(None, [3; 6]);
    let hexagrams = reading.hexagrams();
    let qian = hexagrams.original().known().unwrap();
    let kun = hexagrams.transformed().known().unwrap();
    assert_ne!(qian.element(), kun.element());

    let transformed = hexagrams.transformed_kinship().unwrap();
    assert_eq!(transformed, &classify_all(qian.element(), kun.line_elements()));
    assert_ne!(
        transformed,
        &classify_all(kun.element(), kun.line_elements())
    );
    // 坤 lines 未巳卯丑亥酉 against 乾's metal.
    assert_eq!(
        transformed,
        &[
            Kinship::Parents,
            Kinship::OfficialsGhosts,
            Kinship::Wealth,
            Kinship::Parents,
            Kinship::Offspring,
            Kinship::Siblings,
        ]
    );
}

#[test]
fn non_changing_lines_survive_transformation() {
    let reading = scripted_reading(None, [0, 1, 3, 2, 1, 0]);
    let result = reading.result();
    for (index, line) in result.lines().iter().enumerate() {
        assert_eq!(
            result.transformed().is_yang(index),
            result.original().is_yang(index) != line.is_changing()
        );
    }
    assert_eq!(result.changing_positions(), &[1, 3, 6]);
}

#[test]
fn session_rejects_seventh_throw_and_early_build() {
    let mut session = CastSession::new();
    session.start();
    for _ in 0..5 {
        session.record_throw(Line::from(LineState::StableYang)).unwrap();
    }
    assert!(matches!(
        session.build_result(),
        Err(SessionError::InvalidStateTransition { .. })
    ));
    session.record_throw(Line::from(LineState::StableYin)).unwrap();
    assert_eq!(session.state(), SessionState::Complete);
    assert!(
        session
            .record_throw(Line::from(LineState::StableYin))
            .is_err()
    );
    assert!(session.build_result().is_ok());
}

#[test]
fn new_divination_discards_previous_one() {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let mut diviner = Diviner::new(HexagramResolver::new(&catalog, &palaces));

    diviner.begin(None);
    let mut coins = ScriptedCoins::parse(&coins_for_backs([3; 6])).unwrap();
    diviner.throw_remaining(&mut coins).unwrap();
    assert!(diviner.is_complete());

    diviner.begin(None);
    assert_eq!(diviner.state(), SessionState::InProgress { step: 0 });
    assert!(matches!(diviner.finish(), Err(DivinationError::Session(_))));
}
