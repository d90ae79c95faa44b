use moro_core::errors::{ErrorInfo, MoroError};
use serde::{Deserialize, Serialize};

use crate::spec::{RingNode, FULL_TURN_DEG};

/// Outcome of the closure check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureReport {
    /// Whether the residual stayed within the provided tolerance.
    pub closed: bool,
    /// Absolute gap between 360° and the final cumulative position.
    pub residual_deg: f64,
}

/// Verifies that a node sequence closes the full revolution.
///
/// The residual is |360° − cumulative position of the last node|; the check
/// is a pure comparison, so identical nodes yield an identical residual on
/// every call.
pub fn verify_closure(nodes: &[RingNode], tolerance_deg: f64) -> Result<ClosureReport, MoroError> {
    let last = nodes.last().ok_or_else(|| {
        MoroError::Ring(
            ErrorInfo::new("invalid-ring-size", "closure verification requires at least one node")
                .with_context("node_count", "0"),
        )
    })?;
    let residual = (FULL_TURN_DEG - last.cumulative_deg).abs();
    Ok(ClosureReport {
        closed: residual <= tolerance_deg,
        residual_deg: residual,
    })
}
