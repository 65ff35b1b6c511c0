//! Kahn's topological sort with a per-dequeue frame trace.
//!
//! The queue-drain loop records one frame per emitted node (order so far,
//! in-degrees, arcs removed, queue contents). If the queue runs dry before
//! every node is emitted the remaining nodes form at least one cycle; that
//! case is reported explicitly instead of returning the partial order
//! silently.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::graph::{Digraph, NodeId};

/// Drain state after one node is emitted.
#[derive(Clone, Debug, Serialize)]
pub struct TopoFrame {
    pub emitted: NodeId,
    pub order: Vec<NodeId>,
    pub in_degree: Vec<usize>,
    /// Arcs retired so far, in removal order.
    pub removed_arcs: Vec<(NodeId, NodeId)>,
    pub queue: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleError {
    /// Nodes emitted before the queue ran dry.
    pub ordered: Vec<NodeId>,
    /// Nodes still holding positive in-degree (members of some cycle or
    /// downstream of one).
    pub remaining: Vec<NodeId>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle detected: {} of {} nodes ordered",
            self.ordered.len(),
            self.ordered.len() + self.remaining.len()
        )
    }
}

impl std::error::Error for CycleError {}

/// Full trace of one Kahn run.
#[derive(Clone, Debug, Serialize)]
pub struct TopoTrace {
    pub frames: Vec<TopoFrame>,
    pub order: Result<Vec<NodeId>, CycleError>,
}

/// Kahn's algorithm; seeds the queue with zero in-degree nodes in index order.
pub fn topo_sort(g: &Digraph) -> TopoTrace {
    let n = g.len();
    let mut in_degree = vec![0usize; n];
    for (_, v) in g.arcs() {
        in_degree[v.0] += 1;
    }
    let mut queue: VecDeque<NodeId> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(NodeId)
        .collect();
    let mut order = Vec::with_capacity(n);
    let mut removed_arcs = Vec::new();
    let mut frames = Vec::new();

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in g.successors(u) {
            removed_arcs.push((u, v));
            in_degree[v.0] -= 1;
            if in_degree[v.0] == 0 {
                queue.push_back(v);
            }
        }
        frames.push(TopoFrame {
            emitted: u,
            order: order.clone(),
            in_degree: in_degree.clone(),
            removed_arcs: removed_arcs.clone(),
            queue: queue.iter().copied().collect(),
        });
    }

    let result = if order.len() == n {
        Ok(order)
    } else {
        let remaining = (0..n)
            .map(NodeId)
            .filter(|u| !order.contains(u))
            .collect();
        Err(CycleError {
            ordered: order,
            remaining,
        })
    };
    TopoTrace {
        frames,
        order: result,
    }
}
