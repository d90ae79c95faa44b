use moro_core::hash::stable_hash_string;
use moro_core::sequence::SequenceCache;
use moro_core::MoroError;
use serde::{Deserialize, Serialize};

use crate::closer::generate_ring;
use crate::closure::{verify_closure, ClosureReport};
use crate::geometry::{trace_ring_nodes, ChainOpts, ChainStats};
use crate::phi::PhiDiagnostics;
use crate::spec::{RingNode, RingSpec};

fn commit_string() -> String {
    option_env!("GIT_COMMIT_HASH")
        .or_else(|| option_env!("VERGEN_GIT_SHA"))
        .map(|value| value.to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}

fn default_scale() -> f64 {
    1.0
}

/// Options controlling ring analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RingOpts {
    /// Pentagon edge length used when tracing the planar chain.
    #[serde(default = "default_scale")]
    pub edge_length: f64,
    /// Proportionality constant for the φ-divergence energy.
    #[serde(default = "default_scale")]
    pub energy_scale: f64,
}

impl Default for RingOpts {
    fn default() -> Self {
        Self {
            edge_length: default_scale(),
            energy_scale: default_scale(),
        }
    }
}

/// Provenance metadata recorded in [`RingReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingProvenance {
    /// Source commit or crate version used to produce the report.
    pub commit: String,
    /// Number of nodes the ring was generated with.
    pub node_count: usize,
    /// Canonical unit angle in degrees.
    pub unit_angle_deg: f64,
    /// Closure tolerance applied during verification.
    pub tolerance_deg: f64,
    /// Energy scale applied to the φ diagnostics.
    pub energy_scale: f64,
}

/// Aggregate ring analysis output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RingReport {
    /// Content addressed hash of the analysis body.
    pub report_hash: String,
    /// Generated node sequence.
    pub nodes: Vec<RingNode>,
    /// Angular closure diagnostics.
    pub closure: ClosureReport,
    /// Edge statistics of the traced planar chain.
    pub chain: ChainStats,
    /// Euclidean distance between the chain's final position and its origin.
    pub planar_error: f64,
    /// φ-convergence diagnostics for the weight window; absent for a single
    /// node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phi: Option<PhiDiagnostics>,
    /// Provenance metadata describing the deterministic knobs.
    pub provenance: RingProvenance,
}

fn make_provenance(spec: &RingSpec, opts: &RingOpts) -> RingProvenance {
    RingProvenance {
        commit: commit_string(),
        node_count: spec.node_count,
        unit_angle_deg: spec.unit_angle_deg,
        tolerance_deg: spec.tolerance_deg,
        energy_scale: opts.energy_scale,
    }
}

/// Runs the full ring analysis: generation, closure verification, planar
/// chain tracing, and φ diagnostics, assembled into a content addressed
/// report.
pub fn analyze_ring(
    spec: &RingSpec,
    opts: &RingOpts,
    cache: &SequenceCache,
) -> Result<RingReport, MoroError> {
    let nodes = generate_ring(spec, cache)?;
    let closure = verify_closure(&nodes, spec.tolerance_deg)?;
    let chain = trace_ring_nodes(
        &nodes,
        &ChainOpts {
            edge_length: opts.edge_length,
        },
    )?;
    let window = cache.fibonacci(spec.node_count)?;
    let phi = PhiDiagnostics::for_window(&window, opts.energy_scale);
    let provenance = make_provenance(spec, opts);

    let report_hash = stable_hash_string(&(
        &nodes,
        &closure,
        &chain.stats,
        &chain.planar_error,
        &phi,
        &provenance,
    ))?;

    Ok(RingReport {
        report_hash,
        nodes,
        closure,
        chain: chain.stats,
        planar_error: chain.planar_error,
        phi,
        provenance,
    })
}
