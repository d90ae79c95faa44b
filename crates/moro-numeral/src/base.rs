use moro_core::errors::{ErrorInfo, MoroError};
use moro_core::sequence::fibonacci;
use serde::{Deserialize, Serialize};

/// Balanced numeral system selector.
///
/// `B13` uses descending powers of thirteen with digits in −6..=6; `Bphi`
/// uses the Fibonacci window with digits in −1..=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumeralBase {
    /// Balanced radix 13.
    B13,
    /// Balanced φ-ary over Fibonacci place values.
    Bphi,
}

const BALANCED_RADIX: i64 = 13;

/// Largest magnitude representable over `window` with digits at `bound`.
fn window_capacity(bound: i64, window: &[i64]) -> Option<i64> {
    let mut capacity = 0i64;
    for &place in window {
        capacity = capacity.checked_add(place.checked_mul(bound)?)?;
    }
    Some(capacity)
}

impl NumeralBase {
    /// Largest digit magnitude permitted by the base.
    pub fn digit_bound(&self) -> i8 {
        match self {
            NumeralBase::B13 => 6,
            NumeralBase::Bphi => 1,
        }
    }

    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            NumeralBase::B13 => "B13",
            NumeralBase::Bphi => "Bphi",
        }
    }

    /// Builds the place-value window of the requested length, most
    /// significant first.
    ///
    /// The window is rejected when its full-magnitude capacity (every digit
    /// at the bound) would not fit an `i64`, so recomposition over a valid
    /// window can never overflow.
    pub fn place_values(&self, length: usize) -> Result<Vec<i64>, MoroError> {
        let values = match self {
            NumeralBase::B13 => {
                if length == 0 {
                    return Err(invalid_length(self, length, "window length must be at least one"));
                }
                let mut powers = Vec::with_capacity(length);
                let mut value = 1i64;
                powers.push(value);
                for _ in 1..length {
                    value = value.checked_mul(BALANCED_RADIX).ok_or_else(|| {
                        invalid_length(self, length, "place value overflows i64")
                    })?;
                    powers.push(value);
                }
                powers.reverse();
                powers
            }
            NumeralBase::Bphi => {
                let mut window = fibonacci(length)?;
                window.reverse();
                window
            }
        };

        if window_capacity(i64::from(self.digit_bound()), &values).is_none() {
            return Err(invalid_length(self, length, "window capacity overflows i64"));
        }

        Ok(values)
    }
}

fn invalid_length(base: &NumeralBase, length: usize, message: &str) -> MoroError {
    MoroError::Sequence(
        ErrorInfo::new("invalid-length", message)
            .with_context("base", base.label())
            .with_context("requested", length.to_string()),
    )
}
