#![deny(missing_docs)]
#![doc = "Inverse-Fibonacci ring closure: angular deficit distribution, closure verification, and planar pentagon-chain diagnostics."]

mod closer;
mod closure;
mod geometry;
mod phi;
mod report;
mod spec;

pub use closer::generate_ring;
pub use closure::{verify_closure, ClosureReport};
pub use geometry::{trace_chain, trace_ring_nodes, ChainOpts, ChainStats, Pentagon, PentagonChain, Point};
pub use phi::{
    divergence_energy, golden_angle_deg, golden_ratio, is_stable, phi_divergence, PhiDiagnostics,
};
pub use report::{analyze_ring, RingOpts, RingProvenance, RingReport};
pub use spec::{RingNode, RingSpec, FULL_TURN_DEG};
