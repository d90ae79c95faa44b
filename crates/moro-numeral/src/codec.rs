use moro_core::errors::{ErrorInfo, MoroError};

use crate::base::NumeralBase;
use crate::numeral::BalancedNumeral;

/// Decomposes an integer into a balanced numeral over the base's window of
/// the given length.
///
/// Digit selection walks the window most significant first and never
/// backtracks: each place value dominates the capacity of the places below
/// it, so the greedy remainder is always representable by the rest of the
/// window. A nonzero remainder after the smallest place means the window is
/// too short for `value`.
pub fn decompose(
    value: i64,
    base: NumeralBase,
    length: usize,
) -> Result<BalancedNumeral, MoroError> {
    let window = base.place_values(length)?;
    let mut digits = Vec::with_capacity(window.len());
    let mut remaining = value;
    for &place in &window {
        let digit = match base {
            NumeralBase::Bphi => {
                if remaining >= place {
                    1i8
                } else if remaining <= -place {
                    -1i8
                } else {
                    0i8
                }
            }
            NumeralBase::B13 => balanced_digit(remaining, place, base.digit_bound()),
        };
        remaining -= i64::from(digit) * place;
        digits.push(digit);
    }
    if remaining != 0 {
        return Err(insufficient_precision(value, base, length, remaining));
    }
    Ok(BalancedNumeral::from_parts(base, digits, window))
}

/// Recomposes a balanced numeral back into the integer it encodes.
///
/// Exact inverse of [`decompose`] whenever decomposition succeeded; window
/// construction guarantees the sum fits an `i64`.
pub fn recompose(numeral: &BalancedNumeral) -> i64 {
    let window = numeral.place_values();
    let offset = window.len() - numeral.digits().len();
    numeral
        .digits()
        .iter()
        .zip(&window[offset..])
        .map(|(&digit, &place)| i64::from(digit) * place)
        .sum()
}

/// Adds two balanced numerals expressed over the same place-value window.
///
/// Reference semantics: recompose both, add, decompose over the shared
/// window. Numerals over different bases or windows are rejected, and a sum
/// beyond the window's capacity surfaces as insufficient precision.
pub fn add(a: &BalancedNumeral, b: &BalancedNumeral) -> Result<BalancedNumeral, MoroError> {
    if !a.same_base(b) {
        return Err(MoroError::Numeral(
            ErrorInfo::new("mismatched-base", "numerals use different place-value sequences")
                .with_context("left", describe(a))
                .with_context("right", describe(b)),
        ));
    }
    let base = a.base();
    let length = a.place_values().len();
    let sum = i128::from(recompose(a)) + i128::from(recompose(b));
    let bound = i128::from(base.digit_bound());
    let capacity: i128 = a
        .place_values()
        .iter()
        .map(|&place| i128::from(place) * bound)
        .sum();
    if sum.abs() > capacity {
        return Err(insufficient_precision_wide(sum, base, length));
    }
    decompose(sum as i64, base, length)
}

fn balanced_digit(remaining: i64, place: i64, bound: i8) -> i8 {
    // Nearest digit, computed in i128 so the doubled operands cannot wrap.
    let digit = (2 * i128::from(remaining) + i128::from(place)).div_euclid(2 * i128::from(place));
    digit.clamp(i128::from(-bound), i128::from(bound)) as i8
}

fn insufficient_precision(value: i64, base: NumeralBase, length: usize, remainder: i64) -> MoroError {
    MoroError::Numeral(
        ErrorInfo::new(
            "insufficient-precision",
            format!("place-value window cannot represent {value} exactly"),
        )
        .with_context("value", value.to_string())
        .with_context("base", base.label())
        .with_context("window", length.to_string())
        .with_context("remainder", remainder.to_string())
        .with_hint("retry with a longer place-value sequence"),
    )
}

fn insufficient_precision_wide(sum: i128, base: NumeralBase, length: usize) -> MoroError {
    MoroError::Numeral(
        ErrorInfo::new(
            "insufficient-precision",
            format!("sum {sum} overflows the shared place-value window"),
        )
        .with_context("value", sum.to_string())
        .with_context("base", base.label())
        .with_context("window", length.to_string())
        .with_hint("retry with a longer place-value sequence"),
    )
}

fn describe(numeral: &BalancedNumeral) -> String {
    format!(
        "{}/{}",
        numeral.base().label(),
        numeral.place_values().len()
    )
}
