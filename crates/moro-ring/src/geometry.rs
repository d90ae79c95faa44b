use moro_core::errors::{ErrorInfo, MoroError};
use serde::{Deserialize, Serialize};

use crate::spec::RingNode;

/// Exterior turn of a regular pentagon edge walk.
const PENTAGON_EXTERIOR_DEG: f64 = 72.0;

fn default_edge_length() -> f64 {
    1.0
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

fn heading_vector(heading_deg: f64, length: f64) -> Point {
    let radians = heading_deg.to_radians();
    Point {
        x: radians.cos() * length,
        y: radians.sin() * length,
    }
}

fn translate(position: Point, step: Point) -> Point {
    Point {
        x: position.x + step.x,
        y: position.y + step.y,
    }
}

/// Options for the planar chain tracer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChainOpts {
    /// Length of every pentagon edge.
    #[serde(default = "default_edge_length")]
    pub edge_length: f64,
}

impl Default for ChainOpts {
    fn default() -> Self {
        Self {
            edge_length: default_edge_length(),
        }
    }
}

/// One traced pentagon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pentagon {
    /// The five vertices, walk order.
    pub vertices: [Point; 5],
}

/// Edge statistics over a traced chain, including each pentagon's implied
/// closing edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Total vertex count across all pentagons.
    pub vertex_count: usize,
    /// Mean edge length.
    pub edge_mean: f64,
    /// Edge length standard deviation.
    pub edge_std: f64,
    /// Shortest edge.
    pub edge_min: f64,
    /// Longest edge.
    pub edge_max: f64,
}

/// A traced chain of pentagons with its planar closure diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PentagonChain {
    /// The traced pentagons in placement order.
    pub pentagons: Vec<Pentagon>,
    /// Position reached after the final jump.
    pub final_position: Point,
    /// Euclidean distance between the final position and the origin.
    pub planar_error: f64,
    /// Edge statistics for the whole chain.
    pub stats: ChainStats,
}

fn build_pentagon(start: Point, start_heading_deg: f64, edge_length: f64) -> Pentagon {
    let mut vertices = [Point::origin(); 5];
    let mut position = start;
    let mut heading = start_heading_deg;
    for vertex in vertices.iter_mut() {
        *vertex = position;
        position = translate(position, heading_vector(heading, edge_length));
        heading += PENTAGON_EXTERIOR_DEG;
    }
    Pentagon { vertices }
}

fn chain_stats(pentagons: &[Pentagon]) -> ChainStats {
    let mut lengths = Vec::with_capacity(pentagons.len() * 5);
    for pentagon in pentagons {
        for i in 0..5 {
            let a = pentagon.vertices[i];
            let b = pentagon.vertices[(i + 1) % 5];
            lengths.push(a.distance(&b));
        }
    }
    let count = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / count;
    let variance = lengths
        .iter()
        .map(|length| (length - mean) * (length - mean))
        .sum::<f64>()
        / count;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &length in &lengths {
        min = min.min(length);
        max = max.max(length);
    }
    ChainStats {
        vertex_count: pentagons.len() * 5,
        edge_mean: mean,
        edge_std: variance.sqrt(),
        edge_min: min,
        edge_max: max,
    }
}

/// Traces one pentagon per turn entry and reports how far the chain lands
/// from its origin.
///
/// Each step builds a regular pentagon edge walk at the current position and
/// heading, then jumps to the next start along the sum of the current
/// heading vector and the same vector turned one pentagon exterior angle.
/// The heading then advances by the entry's turn angle. With ten pentagons
/// and uniform 36° turns the jumps cancel exactly and the chain returns to
/// the origin within machine rounding.
pub fn trace_chain(turns_deg: &[f64], opts: &ChainOpts) -> Result<PentagonChain, MoroError> {
    if turns_deg.is_empty() {
        return Err(MoroError::Ring(
            ErrorInfo::new("invalid-ring-size", "chain tracing requires at least one turn")
                .with_context("node_count", "0"),
        ));
    }

    let mut pentagons = Vec::with_capacity(turns_deg.len());
    let mut position = Point::origin();
    let mut heading = 0.0f64;
    for &turn in turns_deg {
        pentagons.push(build_pentagon(position, heading, opts.edge_length));
        let jump = translate(
            heading_vector(heading, opts.edge_length),
            heading_vector(heading + PENTAGON_EXTERIOR_DEG, opts.edge_length),
        );
        position = translate(position, jump);
        heading += turn;
    }

    let planar_error = position.distance(&Point::origin());
    let stats = chain_stats(&pentagons);
    Ok(PentagonChain {
        pentagons,
        final_position: position,
        planar_error,
        stats,
    })
}

/// Traces the chain induced by a generated node sequence.
pub fn trace_ring_nodes(nodes: &[RingNode], opts: &ChainOpts) -> Result<PentagonChain, MoroError> {
    let turns: Vec<f64> = nodes.iter().map(|node| node.applied_angle_deg).collect();
    trace_chain(&turns, opts)
}
