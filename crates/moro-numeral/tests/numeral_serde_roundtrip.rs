use moro_numeral::{decompose, BalancedNumeral, NumeralBase};

#[test]
fn numeral_round_trips_through_json() {
    let numeral = decompose(146, NumeralBase::B13, 5).expect("decompose");
    let json = serde_json::to_string(&numeral).expect("encode");
    let restored: BalancedNumeral = serde_json::from_str(&json).expect("decode");
    assert_eq!(numeral, restored);
}

#[test]
fn base_tags_survive_serialization() {
    let numeral = decompose(21, NumeralBase::Bphi, 9).expect("decompose");
    let json = serde_json::to_string(&numeral).expect("encode");
    assert!(json.contains("Bphi"));
    let restored: BalancedNumeral = serde_json::from_str(&json).expect("decode");
    assert_eq!(restored.base(), NumeralBase::Bphi);
    assert!(numeral.same_base(&restored));
}
