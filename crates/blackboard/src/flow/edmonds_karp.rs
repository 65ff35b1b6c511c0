//! Edmonds–Karp: shortest augmenting paths via BFS over the residual net.

use std::collections::VecDeque;

use crate::graph::NodeId;

use super::net::FlowNet;
use super::{FlowEvent, FlowTrace};

/// Run Edmonds–Karp from `source` to `sink`, recording one
/// `Augment`/`FlowUpdate` pair per augmenting path.
pub fn edmonds_karp(net: &mut FlowNet, source: NodeId, sink: NodeId) -> FlowTrace {
    let n = net.len();
    assert!(source.0 < n && sink.0 < n, "node out of range");
    assert!(source != sink, "source and sink must differ");
    let mut events = Vec::new();
    let mut max_flow = 0i64;

    loop {
        // BFS with parent edge pointers; reverse companions participate
        // whenever they hold residual capacity.
        let mut parent_edge: Vec<Option<usize>> = vec![None; n];
        let mut seen = vec![false; n];
        seen[source.0] = true;
        let mut queue = VecDeque::from([source]);
        'bfs: while let Some(u) = queue.pop_front() {
            for &e in net.out_edges(u) {
                let v = net.edge(e).to;
                if !seen[v.0] && net.residual(e) > 0 {
                    seen[v.0] = true;
                    parent_edge[v.0] = Some(e);
                    if v == sink {
                        break 'bfs;
                    }
                    queue.push_back(v);
                }
            }
        }
        if !seen[sink.0] {
            break;
        }

        // Walk parents back from the sink, then flip into path order.
        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            let e = parent_edge[v.0].expect("reached node has a parent");
            path.push(e);
            v = net.edge(e).from;
        }
        path.reverse();
        let bottleneck = path
            .iter()
            .map(|&e| net.residual(e))
            .min()
            .expect("path is nonempty");
        events.push(FlowEvent::Augment {
            path: path.clone(),
            bottleneck,
        });
        for &e in &path {
            net.push(e, bottleneck);
        }
        max_flow += bottleneck;
        events.push(FlowEvent::FlowUpdate {
            flows: net.forward_flows(),
            total: max_flow,
        });
    }

    events.push(FlowEvent::Done { max_flow });
    FlowTrace {
        source,
        sink,
        events,
        max_flow,
    }
}
