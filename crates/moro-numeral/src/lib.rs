#![deny(missing_docs)]
#![doc = "Balanced numeral arithmetic over radix-13 and Fibonacci place values."]

mod base;
mod codec;
mod numeral;

pub use base::NumeralBase;
pub use codec::{add, decompose, recompose};
pub use numeral::BalancedNumeral;
