use moro_numeral::{add, decompose, BalancedNumeral, NumeralBase};

#[test]
fn short_window_reports_insufficient_precision() {
    // Five Bphi places hold at most ±12.
    let err = decompose(1000, NumeralBase::Bphi, 5).expect_err("must fail");
    assert_eq!(err.info().code, "insufficient-precision");
    assert_eq!(err.info().context.get("value").map(String::as_str), Some("1000"));
    assert!(err.info().hint.as_deref().unwrap_or("").contains("longer"));
}

#[test]
fn longer_window_recovers_the_value() {
    assert!(decompose(1000, NumeralBase::Bphi, 5).is_err());
    let numeral = decompose(1000, NumeralBase::Bphi, 16).expect("longer window");
    assert_eq!(moro_numeral::recompose(&numeral), 1000);
}

#[test]
fn cross_base_addition_is_rejected() {
    let a = decompose(5, NumeralBase::B13, 4).expect("decompose");
    let b = decompose(5, NumeralBase::Bphi, 4).expect("decompose");
    let err = add(&a, &b).expect_err("must fail");
    assert_eq!(err.info().code, "mismatched-base");
}

#[test]
fn cross_window_addition_is_rejected() {
    let a = decompose(5, NumeralBase::Bphi, 8).expect("decompose");
    let b = decompose(5, NumeralBase::Bphi, 9).expect("decompose");
    let err = add(&a, &b).expect_err("must fail");
    assert_eq!(err.info().code, "mismatched-base");
}

#[test]
fn addition_overflowing_the_window_is_rejected() {
    let max = decompose(185646, NumeralBase::B13, 5).expect("decompose");
    let err = add(&max, &max).expect_err("must fail");
    assert_eq!(err.info().code, "insufficient-precision");
}

#[test]
fn zero_window_length_is_rejected() {
    let err = decompose(1, NumeralBase::Bphi, 0).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-length");
    let err = decompose(1, NumeralBase::B13, 0).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-length");
}

#[test]
fn oversized_b13_window_is_rejected() {
    let err = decompose(1, NumeralBase::B13, 40).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-length");
}

#[test]
fn out_of_bound_digits_are_rejected() {
    let err = BalancedNumeral::from_digits(NumeralBase::B13, vec![7], 3).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-digit");

    let err = BalancedNumeral::from_digits(NumeralBase::Bphi, vec![2], 3).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-digit");
}

#[test]
fn overlong_digit_sequences_are_rejected() {
    let err = BalancedNumeral::from_digits(NumeralBase::Bphi, vec![1, 0, 1, 0], 3)
        .expect_err("must fail");
    assert_eq!(err.info().code, "invalid-digit");
}
