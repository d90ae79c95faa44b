#![deny(missing_docs)]
#![doc = "Shared error surface, Fibonacci/Lucas sequence utilities, and canonical hashing for the MORO toolkit."]

pub mod errors;
pub mod hash;
pub mod sequence;
pub mod serde;

pub use errors::{ErrorInfo, MoroError};
pub use hash::stable_hash_string;
pub use sequence::{fibonacci, lucas, SequenceCache};
pub use serde::{from_json_slice, to_canonical_json_bytes};
