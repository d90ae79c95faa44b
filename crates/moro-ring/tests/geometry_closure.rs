use moro_core::sequence::SequenceCache;
use moro_ring::{generate_ring, trace_chain, trace_ring_nodes, ChainOpts, RingSpec};

#[test]
fn ten_uniform_turns_close_at_machine_precision() {
    // The original ten-pentagon rosette: uniform 36° heading shifts.
    let turns = [36.0f64; 10];
    let chain = trace_chain(&turns, &ChainOpts::default()).expect("trace");

    assert_eq!(chain.pentagons.len(), 10);
    assert!(chain.planar_error < 1e-9, "planar error {}", chain.planar_error);
}

#[test]
fn edge_lengths_are_uniform() {
    let turns = [36.0f64; 10];
    let opts = ChainOpts { edge_length: 3.0 };
    let chain = trace_chain(&turns, &opts).expect("trace");

    assert_eq!(chain.stats.vertex_count, 50);
    assert!((chain.stats.edge_mean - 3.0).abs() < 1e-12);
    assert!(chain.stats.edge_std < 1e-12);
    assert!((chain.stats.edge_min - 3.0).abs() < 1e-12);
    assert!((chain.stats.edge_max - 3.0).abs() < 1e-12);
}

#[test]
fn pentagon_walks_close_on_themselves() {
    let turns = [36.0f64];
    let chain = trace_chain(&turns, &ChainOpts::default()).expect("trace");

    // Five unit edges with 72° exterior turns return to the first vertex,
    // so the implied closing edge has unit length too.
    let pentagon = &chain.pentagons[0];
    let closing = {
        let a = pentagon.vertices[4];
        let b = pentagon.vertices[0];
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    };
    assert!((closing - 1.0).abs() < 1e-12);
}

#[test]
fn generated_nodes_drive_the_tracer() {
    let cache = SequenceCache::new();
    let nodes = generate_ring(&RingSpec::new(10, 72.0, 1e-9), &cache).expect("generate");
    let chain = trace_ring_nodes(&nodes, &ChainOpts::default()).expect("trace");

    assert_eq!(chain.pentagons.len(), 10);
    assert!(chain.planar_error.is_finite());
    assert!(chain.final_position.x.is_finite() && chain.final_position.y.is_finite());
}

#[test]
fn empty_turn_sequences_are_rejected() {
    let err = trace_chain(&[], &ChainOpts::default()).expect_err("must fail");
    assert_eq!(err.info().code, "invalid-ring-size");
}

#[test]
fn tracing_is_reproducible() {
    let turns = [36.0f64; 10];
    let first = trace_chain(&turns, &ChainOpts::default()).expect("trace");
    let second = trace_chain(&turns, &ChainOpts::default()).expect("trace");
    assert_eq!(first, second);
}
