//! Fibonacci and Lucas window generation plus the shared read-only cache.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::errors::{ErrorInfo, MoroError};

fn sequence_error(code: &str, message: impl Into<String>) -> MoroError {
    MoroError::Sequence(ErrorInfo::new(code, message))
}

fn recurrence_window(seed_a: i64, seed_b: i64, length: usize) -> Result<Vec<i64>, MoroError> {
    if length == 0 {
        return Err(MoroError::Sequence(
            ErrorInfo::new("invalid-length", "sequence length must be at least one")
                .with_context("requested", "0"),
        ));
    }
    let mut terms = Vec::with_capacity(length);
    terms.push(seed_a);
    if length > 1 {
        terms.push(seed_b);
    }
    while terms.len() < length {
        let next = terms[terms.len() - 1]
            .checked_add(terms[terms.len() - 2])
            .ok_or_else(|| {
                MoroError::Sequence(
                    ErrorInfo::new("invalid-length", "sequence term overflows i64")
                        .with_context("requested", length.to_string())
                        .with_context("largest-exact", terms.len().to_string()),
                )
            })?;
        terms.push(next);
    }
    Ok(terms)
}

/// Generates the first `length` Fibonacci terms with seeds 1, 1.
///
/// The window doubles as numeral place values and as error-distribution
/// weights, so terms are returned in increasing order.
pub fn fibonacci(length: usize) -> Result<Vec<i64>, MoroError> {
    recurrence_window(1, 1, length)
}

/// Generates the first `length` Lucas terms with seeds 2, 1.
pub fn lucas(length: usize) -> Result<Vec<i64>, MoroError> {
    recurrence_window(2, 1, length)
}

/// Process-scoped, lazily populated cache of Fibonacci windows.
///
/// Entries are computed once per requested length and handed out as shared
/// slices; nothing is ever mutated after insertion. Callers hold the cache
/// by reference so independent instances (one per test, one per service)
/// never interfere.
#[derive(Debug, Default)]
pub struct SequenceCache {
    windows: Mutex<BTreeMap<usize, Arc<[i64]>>>,
}

impl SequenceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the Fibonacci window of the requested length, computing and
    /// storing it on first use.
    pub fn fibonacci(&self, length: usize) -> Result<Arc<[i64]>, MoroError> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| sequence_error("cache-poisoned", "sequence cache mutex poisoned"))?;
        if let Some(window) = windows.get(&length) {
            return Ok(Arc::clone(window));
        }
        let window: Arc<[i64]> = fibonacci(length)?.into();
        windows.insert(length, Arc::clone(&window));
        Ok(window)
    }

    /// Number of distinct window lengths currently held.
    pub fn len(&self) -> usize {
        self.windows.lock().map(|windows| windows.len()).unwrap_or(0)
    }

    /// True when no window has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
