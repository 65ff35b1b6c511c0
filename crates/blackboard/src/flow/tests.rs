use proptest::prelude::*;

use super::*;
use crate::fixtures;
use crate::graph::NodeId;

/// 0 <= flow <= cap on every forward edge.
fn capacity_respected(net: &FlowNet) -> bool {
    net.forward_edges().all(|e| 0 <= e.flow && e.flow <= e.cap)
}

/// Inflow equals outflow everywhere except source and sink.
fn conservation_holds(net: &FlowNet, source: NodeId, sink: NodeId) -> bool {
    (0..net.len())
        .map(NodeId)
        .filter(|&u| u != source && u != sink)
        .all(|u| net.excess(u) == 0)
}

#[test]
fn lesson_network_bfs_value() {
    let lesson = fixtures::lesson_network_bfs();
    let mut net = lesson.net.clone();
    let trace = edmonds_karp(&mut net, lesson.source, lesson.sink);
    // Min cut {s,1,2,3}|{4,t}: 1->4 (10) + 3->t (8).
    assert_eq!(trace.max_flow, 18);
    assert!(capacity_respected(&net));
    assert!(conservation_holds(&net, lesson.source, lesson.sink));
    assert_eq!(net.excess(lesson.source), 18);
    assert_eq!(net.excess(lesson.sink), -18);
}

#[test]
fn lesson_network_layered_value() {
    let lesson = fixtures::lesson_network_layered();
    let mut net = lesson.net.clone();
    let trace = dinic(&mut net, lesson.source, lesson.sink);
    // Source edges saturate: 5 + 9.
    assert_eq!(trace.max_flow, 14);
    assert!(capacity_respected(&net));
    assert!(conservation_holds(&net, lesson.source, lesson.sink));
}

#[test]
fn algorithms_agree_on_both_lessons() {
    for lesson in [
        fixtures::lesson_network_bfs(),
        fixtures::lesson_network_layered(),
    ] {
        let mut net = lesson.net.clone();
        let ek = edmonds_karp(&mut net, lesson.source, lesson.sink);
        net.reset();
        assert!(net.forward_flows().iter().all(|&f| f == 0));
        let di = dinic(&mut net, lesson.source, lesson.sink);
        assert_eq!(ek.max_flow, di.max_flow);
    }
}

#[test]
fn edmonds_karp_events_alternate_and_accumulate() {
    let lesson = fixtures::lesson_network_bfs();
    let mut net = lesson.net.clone();
    let trace = edmonds_karp(&mut net, lesson.source, lesson.sink);
    let mut running = 0;
    let mut expect_augment = true;
    for event in &trace.events {
        match event {
            FlowEvent::Augment { bottleneck, path } => {
                assert!(expect_augment);
                assert!(*bottleneck > 0);
                assert!(!path.is_empty());
                running += bottleneck;
                expect_augment = false;
            }
            FlowEvent::FlowUpdate { total, .. } => {
                assert!(!expect_augment);
                assert_eq!(*total, running);
                expect_augment = true;
            }
            FlowEvent::Done { max_flow } => assert_eq!(*max_flow, running),
            FlowEvent::BfsLayer { .. } => panic!("EK emits no layer events"),
        }
    }
    assert_eq!(running, trace.max_flow);
}

#[test]
fn dinic_paths_climb_levels_within_phase() {
    let lesson = fixtures::lesson_network_layered();
    let mut net = lesson.net.clone();
    let trace = dinic(&mut net, lesson.source, lesson.sink);
    let mut current_level: Option<Vec<Option<usize>>> = None;
    let mut probe = lesson.net.clone();
    for event in &trace.events {
        match event {
            FlowEvent::BfsLayer { level } => current_level = Some(level.clone()),
            FlowEvent::Augment { path, bottleneck } => {
                let level = current_level.as_ref().expect("layer precedes augment");
                for &e in path {
                    let edge = probe.edge(e);
                    let lu = level[edge.from.0].expect("path stays in layered graph");
                    let lv = level[edge.to.0].expect("path stays in layered graph");
                    assert_eq!(lv, lu + 1, "edge must climb exactly one level");
                }
                for &e in path {
                    probe.push(e, *bottleneck);
                }
            }
            _ => {}
        }
    }
}

#[test]
fn dinic_terminates_with_unreachable_sink_layer() {
    let lesson = fixtures::lesson_network_bfs();
    let mut net = lesson.net.clone();
    let trace = dinic(&mut net, lesson.source, lesson.sink);
    let last_layer = trace
        .events
        .iter()
        .rev()
        .find_map(|e| match e {
            FlowEvent::BfsLayer { level } => Some(level.clone()),
            _ => None,
        })
        .expect("at least one layering");
    assert!(last_layer[lesson.sink.0].is_none());
}

/// Small random networks: node 0 is the source, node n-1 the sink.
fn arb_network() -> impl Strategy<Value = FlowNet> {
    (3usize..8, proptest::collection::vec((0usize..8, 0usize..8, 1i64..20), 1..24)).prop_map(
        |(n, list)| {
            let mut net = FlowNet::new(n);
            for (u, v, c) in list {
                let (u, v) = (u % n, v % n);
                if u != v {
                    net.add_edge(NodeId(u), NodeId(v), c);
                }
            }
            net
        },
    )
}

proptest! {
    #[test]
    fn random_networks_agree_and_stay_feasible(base in arb_network()) {
        let source = NodeId(0);
        let sink = NodeId(base.len() - 1);
        let mut a = base.clone();
        let mut b = base.clone();
        let ek = edmonds_karp(&mut a, source, sink);
        let di = dinic(&mut b, source, sink);
        prop_assert_eq!(ek.max_flow, di.max_flow);
        prop_assert!(capacity_respected(&a));
        prop_assert!(capacity_respected(&b));
        prop_assert!(conservation_holds(&a, source, sink));
        prop_assert!(conservation_holds(&b, source, sink));
    }
}
