use moro_core::errors::{ErrorInfo, MoroError};
use serde::{Deserialize, Serialize};

/// One full revolution in degrees, the target cumulative turn of every ring.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Describes a closure problem: how many polygon instances to place, the
/// canonical per-instance turn angle, and the tolerance the closure check
/// compares the residual against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// Number of polygon instances placed around the ring.
    pub node_count: usize,
    /// Canonical per-instance turn angle in degrees (72 for a regular pentagon).
    pub unit_angle_deg: f64,
    /// Closure tolerance in degrees.
    pub tolerance_deg: f64,
}

impl RingSpec {
    /// Convenience constructor.
    pub fn new(node_count: usize, unit_angle_deg: f64, tolerance_deg: f64) -> Self {
        Self {
            node_count,
            unit_angle_deg,
            tolerance_deg,
        }
    }

    /// Signed raw angular deficit: 360° minus the uncorrected total turn.
    pub fn raw_deficit_deg(&self) -> f64 {
        FULL_TURN_DEG - self.node_count as f64 * self.unit_angle_deg
    }

    /// Validates the parameters, surfacing the first violation.
    pub fn validate(&self) -> Result<(), MoroError> {
        if self.node_count == 0 {
            return Err(MoroError::Ring(
                ErrorInfo::new("invalid-ring-size", "ring requires at least one node")
                    .with_context("node_count", "0"),
            ));
        }
        if !self.unit_angle_deg.is_finite()
            || self.unit_angle_deg <= 0.0
            || self.unit_angle_deg >= FULL_TURN_DEG
        {
            return Err(MoroError::Ring(
                ErrorInfo::new(
                    "invalid-angle",
                    "unit angle must lie strictly between 0 and 360 degrees",
                )
                .with_context("unit_angle_deg", self.unit_angle_deg.to_string()),
            ));
        }
        Ok(())
    }
}

/// A single placement produced by the generator: the corrected turn applied
/// at this node and the cumulative angular position after applying it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingNode {
    /// Zero-based placement index.
    pub index: usize,
    /// Turn angle applied at this node, in degrees.
    pub applied_angle_deg: f64,
    /// Cumulative angular position after this node, in degrees.
    pub cumulative_deg: f64,
}
