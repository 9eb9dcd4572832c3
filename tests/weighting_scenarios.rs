//! Cost-model scenarios over a small junction network, driving the
//! weighting objects the way a search loop does: per-edge weight plus
//! per-turn weight along a candidate path.

use std::sync::Arc;

use waycost::{
    build_weighting, DecimalProperty, DecimalTable, EdgeTraversal, Millis, TurnCostTable, Weight,
    Weighting, WeightingConfig,
};

/// Y-junction at node 10: edge 0 comes in, edges 1 and 2 leave.
///
///   edge 0: 1000m, 50 units both ways
///   edge 1: 500m, 25 units both ways   (left arm, turn 0->1 penalized 4s)
///   edge 2: 200m, closed in reverse    (right arm, turn 2->0 banned)
fn junction() -> (Arc<DecimalTable>, Arc<TurnCostTable>, Vec<EdgeTraversal>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut speeds = DecimalTable::new(120.0);
    let e0 = speeds.push(50.0, 50.0);
    let e1 = speeds.push(25.0, 25.0);
    let e2 = speeds.push(40.0, 0.0);

    let mut turns = TurnCostTable::new(60.0);
    turns.set_cost(e0, 10, e1, 4.0);
    turns.ban(e2, 10, e0);

    let edges = vec![
        EdgeTraversal::new(e0, 1000.0),
        EdgeTraversal::new(e1, 500.0),
        EdgeTraversal::new(e2, 200.0),
    ];
    (Arc::new(speeds), Arc::new(turns), edges)
}

fn speed_weighting(turn_scale: Option<f64>) -> (Box<dyn Weighting>, Vec<EdgeTraversal>) {
    let (speeds, turns, edges) = junction();
    let json = match turn_scale {
        Some(scale) => format!(r#"{{"strategy": "speed", "turn_costs": {{"scale": {scale}}}}}"#),
        None => r#"{"strategy": "speed"}"#.to_string(),
    };
    let config: WeightingConfig = serde_json::from_str(&json).expect("valid profile section");
    let weighting =
        build_weighting(&config, speeds, Some(turns)).expect("buildable weighting");
    (weighting, edges)
}

/// Path cost the way a turn-aware search accumulates it.
fn path_weight(w: &dyn Weighting, edges: &[EdgeTraversal], via_nodes: &[u32]) -> Weight {
    let mut total = 0.0;
    for (i, edge) in edges.iter().enumerate() {
        total += w.calc_edge_weight(*edge, false);
        if i > 0 {
            total += w.calc_turn_weight(edges[i - 1].edge(), via_nodes[i - 1], edge.edge());
        }
    }
    total
}

#[test]
fn test_speed_weighting_reference_values() {
    let (w, edges) = speed_weighting(None);

    let cases = vec![
        // (edge index, reverse, expected weight, expected millis)
        (0, false, 20.0, 20_000),
        (0, true, 20.0, 20_000),
        (1, false, 20.0, 20_000),
        (2, false, 5.0, 5_000),
    ];
    for (idx, reverse, weight, millis) in cases {
        assert_eq!(
            w.calc_edge_weight(edges[idx], reverse),
            weight,
            "edge {idx} reverse={reverse}"
        );
        assert_eq!(w.calc_edge_millis(edges[idx], reverse), millis);
    }

    // Closed direction is infinite weight, saturated time.
    assert!(w.calc_edge_weight(edges[2], true).is_infinite());
    assert_eq!(w.calc_edge_millis(edges[2], true), Millis::MAX);
}

#[test]
fn test_turn_penalty_shapes_path_choice() {
    let (w, edges) = speed_weighting(Some(5.0));
    assert!(w.has_turn_costs());

    // Into the left arm: 20s + 5*4s + 20s.
    let left = path_weight(w.as_ref(), &[edges[0], edges[1]], &[10]);
    assert_eq!(left, 60.0);

    // Into the right arm: no turn record, edges only.
    let right = path_weight(w.as_ref(), &[edges[0], edges[2]], &[10]);
    assert_eq!(right, 25.0);

    // Banned turn makes the whole path unexplorable.
    let banned = path_weight(w.as_ref(), &[edges[2], edges[0]], &[10]);
    assert!(banned.is_infinite(), "ban must survive into the path sum");
}

#[test]
fn test_turn_methods_noop_when_capability_off() {
    let (w, edges) = speed_weighting(None);
    assert!(!w.has_turn_costs());

    // Same triples that carry records in the turn-aware build.
    assert_eq!(w.calc_turn_weight(edges[0].edge(), 10, edges[1].edge()), 0.0);
    assert_eq!(w.calc_turn_millis(edges[2].edge(), 10, edges[0].edge()), 0);
}

#[test]
fn test_admissibility_bound_holds_per_edge() {
    for turn_scale in [None, Some(5.0)] {
        let (w, edges) = speed_weighting(turn_scale);
        let bound = w.min_weight_per_distance();
        assert_eq!(bound, 1.0 / 120.0, "bound comes from the schema maximum");

        for edge in &edges {
            for reverse in [false, true] {
                let weight = w.calc_edge_weight(*edge, reverse);
                assert!(
                    weight >= bound * edge.distance(),
                    "edge {} reverse={reverse}: weight {weight} undercuts the bound",
                    edge.edge()
                );
            }
        }
    }
}

#[test]
fn test_distance_weighting_keeps_wall_clock_time() {
    let (speeds, turns, edges) = junction();
    let config: WeightingConfig =
        serde_json::from_str(r#"{"strategy": "distance", "turn_costs": {}}"#).unwrap();
    let w = build_weighting(&config, speeds, Some(turns)).unwrap();

    assert_eq!(w.name(), "distance");
    assert_eq!(w.min_weight_per_distance(), 1.0);
    assert_eq!(w.calc_edge_weight(edges[0], false), 1000.0);
    // Time still comes from the speed property, not from the weight.
    assert_eq!(w.calc_edge_millis(edges[0], false), 20_000);
    assert!(w.calc_edge_weight(edges[2], true).is_infinite());
}

#[test]
fn test_weighting_is_shareable_across_query_threads() {
    let (w, edges) = speed_weighting(Some(2.0));
    let w: Arc<dyn Weighting> = Arc::from(w);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let w = Arc::clone(&w);
            let edges = edges.clone();
            std::thread::spawn(move || {
                let mut total = 0.0;
                for _ in 0..1000 {
                    total += w.calc_edge_weight(edges[0], false);
                    total += w.calc_turn_weight(edges[0].edge(), 10, edges[1].edge());
                }
                total
            })
        })
        .collect();

    for handle in handles {
        let total = handle.join().expect("query thread must not panic");
        assert_eq!(total, 1000.0 * (20.0 + 8.0));
    }
}

#[test]
fn test_accessor_stays_borrowed_not_owned() {
    // The weighting reads through the accessor handle; rewriting storage
    // behind a fresh handle does not disturb an existing weighting.
    let (speeds, _, edges) = junction();
    let config: WeightingConfig = serde_json::from_str(r#"{"strategy": "speed"}"#).unwrap();

    let shared: Arc<dyn DecimalProperty> = speeds;
    let w1 = build_weighting(&config, Arc::clone(&shared), None).unwrap();
    let w2 = build_weighting(&config, shared, None).unwrap();

    assert_eq!(
        w1.calc_edge_weight(edges[0], false),
        w2.calc_edge_weight(edges[0], false),
        "both weightings read the same storage"
    );
}
