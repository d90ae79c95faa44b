use moro_core::errors::{ErrorInfo, MoroError};
use serde::{Deserialize, Serialize};

use crate::base::NumeralBase;

/// Immutable balanced positional numeral.
///
/// Digits are stored most significant first and align with the least
/// significant end of the place-value window, so the digit count never
/// exceeds the window length. Leading zero digits are trimmed at
/// construction; a zero at the most significant position therefore only
/// occurs for the zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedNumeral {
    base: NumeralBase,
    digits: Vec<i8>,
    place_values: Vec<i64>,
}

impl BalancedNumeral {
    /// Constructs a numeral from an explicit digit sequence over the base's
    /// window of the given length.
    ///
    /// Digits are most significant first. Magnitudes above the base's digit
    /// bound and digit sequences longer than the window are rejected.
    pub fn from_digits(
        base: NumeralBase,
        digits: Vec<i8>,
        window_length: usize,
    ) -> Result<Self, MoroError> {
        let place_values = base.place_values(window_length)?;
        if digits.len() > place_values.len() {
            return Err(MoroError::Numeral(
                ErrorInfo::new("invalid-digit", "digit sequence exceeds the place-value window")
                    .with_context("digits", digits.len().to_string())
                    .with_context("window", place_values.len().to_string()),
            ));
        }
        let bound = base.digit_bound();
        if let Some(&bad) = digits.iter().find(|digit| digit.unsigned_abs() > bound as u8) {
            return Err(MoroError::Numeral(
                ErrorInfo::new("invalid-digit", "digit magnitude exceeds the base bound")
                    .with_context("digit", bad.to_string())
                    .with_context("bound", bound.to_string()),
            ));
        }
        Ok(Self::from_parts(base, digits, place_values))
    }

    /// The zero numeral over the base's window of the given length.
    pub fn zero(base: NumeralBase, window_length: usize) -> Result<Self, MoroError> {
        let place_values = base.place_values(window_length)?;
        Ok(Self::from_parts(base, vec![0], place_values))
    }

    /// Crate-internal constructor for digits already known to respect the
    /// base bound. Trims leading zeros, keeping a single digit for zero.
    pub(crate) fn from_parts(base: NumeralBase, mut digits: Vec<i8>, place_values: Vec<i64>) -> Self {
        let leading = digits.iter().take_while(|&&digit| digit == 0).count();
        if leading == digits.len() {
            digits = vec![0];
        } else {
            digits.drain(..leading);
        }
        Self {
            base,
            digits,
            place_values,
        }
    }

    /// The numeral system this value is expressed in.
    pub fn base(&self) -> NumeralBase {
        self.base
    }

    /// Digit sequence, most significant first.
    pub fn digits(&self) -> &[i8] {
        &self.digits
    }

    /// Place-value window the numeral was built against, most significant
    /// first.
    pub fn place_values(&self) -> &[i64] {
        &self.place_values
    }

    /// True when both numerals share the base and the place-value window.
    pub fn same_base(&self, other: &Self) -> bool {
        self.base == other.base && self.place_values == other.place_values
    }

    /// True for the zero value.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&digit| digit == 0)
    }
}
