//! Dinic: BFS layering phases, blocking-flow DFS inside each layer graph.

use std::collections::VecDeque;

use crate::graph::NodeId;

use super::net::FlowNet;
use super::{FlowEvent, FlowTrace};

/// Run Dinic from `source` to `sink`.
///
/// Each phase emits a `BfsLayer` event with the fresh levels, then one
/// `Augment`/`FlowUpdate` pair per path of the blocking flow. A phase only
/// ever traverses edges into the next level; saturated or dead branches are
/// skipped for the rest of the phase via per-node iterator cursors.
pub fn dinic(net: &mut FlowNet, source: NodeId, sink: NodeId) -> FlowTrace {
    let n = net.len();
    assert!(source.0 < n && sink.0 < n, "node out of range");
    assert!(source != sink, "source and sink must differ");
    let mut events = Vec::new();
    let mut max_flow = 0i64;

    loop {
        let level = bfs_levels(net, source);
        events.push(FlowEvent::BfsLayer {
            level: level.clone(),
        });
        if level[sink.0].is_none() {
            break;
        }
        // Blocking flow: repeated single-path DFS with edge cursors.
        let mut cursor = vec![0usize; n];
        loop {
            let mut path = Vec::new();
            let bottleneck =
                find_path(net, &level, &mut cursor, source, sink, i64::MAX, &mut path);
            if bottleneck == 0 {
                break;
            }
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
    }

    events.push(FlowEvent::Done { max_flow });
    FlowTrace {
        source,
        sink,
        events,
        max_flow,
    }
}

/// BFS distance from `source` over positive-residual edges.
fn bfs_levels(net: &FlowNet, source: NodeId) -> Vec<Option<usize>> {
    let mut level = vec![None; net.len()];
    level[source.0] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        let lu = level[u.0].expect("queued nodes are leveled");
        for &e in net.out_edges(u) {
            let v = net.edge(e).to;
            if level[v.0].is_none() && net.residual(e) > 0 {
                level[v.0] = Some(lu + 1);
                queue.push_back(v);
            }
        }
    }
    level
}

/// One source-to-sink path in the layer graph; returns its bottleneck and
/// fills `path` with the edge indices taken. A failed branch permanently
/// advances the node's cursor for this phase.
fn find_path(
    net: &FlowNet,
    level: &[Option<usize>],
    cursor: &mut [usize],
    u: NodeId,
    sink: NodeId,
    limit: i64,
    path: &mut Vec<usize>,
) -> i64 {
    if u == sink {
        return limit;
    }
    while cursor[u.0] < net.out_edges(u).len() {
        let e = net.out_edges(u)[cursor[u.0]];
        let v = net.edge(e).to;
        let admissible = match (level[u.0], level[v.0]) {
            (Some(lu), Some(lv)) => lv == lu + 1,
            _ => false,
        };
        if admissible && net.residual(e) > 0 {
            path.push(e);
            let pushed = find_path(
                net,
                level,
                cursor,
                v,
                sink,
                limit.min(net.residual(e)),
                path,
            );
            if pushed > 0 {
                return pushed;
            }
            path.pop();
        }
        cursor[u.0] += 1;
    }
    0
}
