use moro_core::sequence::SequenceCache;
use moro_core::MoroError;

use crate::spec::{RingNode, RingSpec};

/// Generates the corrected turn angles for a ring.
///
/// The raw deficit Δ = 360° − N·θ is distributed over the nodes with
/// inverse-Fibonacci weights wᵢ = 1/fᵢ, normalized so the corrections sum to
/// Δ exactly (up to accumulated f64 rounding). The weights are monotonically
/// non-increasing, so the earliest nodes absorb the largest share and later
/// nodes approach the canonical angle.
pub fn generate_ring(
    spec: &RingSpec,
    cache: &SequenceCache,
) -> Result<Vec<RingNode>, MoroError> {
    spec.validate()?;
    let window = cache.fibonacci(spec.node_count)?;
    let deficit = spec.raw_deficit_deg();

    let weights: Vec<f64> = window.iter().map(|&term| 1.0 / term as f64).collect();
    let total_weight: f64 = weights.iter().sum();

    let mut nodes = Vec::with_capacity(spec.node_count);
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        let correction = deficit * weight / total_weight;
        let applied = spec.unit_angle_deg + correction;
        cumulative += applied;
        nodes.push(RingNode {
            index,
            applied_angle_deg: applied,
            cumulative_deg: cumulative,
        });
    }
    Ok(nodes)
}
