//! Max-flow lessons: Edmonds–Karp and Dinic over a shared residual network.
//!
//! Both algorithms mutate a `FlowNet` in place and return a `FlowTrace`
//! whose tagged events (`BfsLayer`, `Augment`, `FlowUpdate`, `Done`) are the
//! animation frames. On the same network the two must report the same
//! maximum flow value.

mod dinic;
mod edmonds_karp;
mod net;

pub use dinic::dinic;
pub use edmonds_karp::edmonds_karp;
pub use net::{FlowEdge, FlowNet};

use serde::Serialize;

use crate::graph::NodeId;

/// Animation event emitted while a max-flow run progresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FlowEvent {
    /// Dinic phase boundary: fresh BFS levels over the residual graph.
    BfsLayer { level: Vec<Option<usize>> },
    /// An augmenting path was found; `path` holds edge indices into the net.
    Augment { path: Vec<usize>, bottleneck: i64 },
    /// Bottleneck pushed; snapshot of all forward-edge flows.
    FlowUpdate { flows: Vec<i64>, total: i64 },
    /// No augmenting path remains.
    Done { max_flow: i64 },
}

/// Full trace of one max-flow run.
#[derive(Clone, Debug, Serialize)]
pub struct FlowTrace {
    pub source: NodeId,
    pub sink: NodeId,
    pub events: Vec<FlowEvent>,
    pub max_flow: i64,
}

#[cfg(test)]
mod tests;
