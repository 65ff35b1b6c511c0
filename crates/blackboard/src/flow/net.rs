//! Residual flow network: directed edges stored as forward/reverse pairs.
//!
//! Edge `e` and its companion `e ^ 1` are inserted together; pushing flow on
//! one subtracts it from the other, so residual capacity on reverse edges
//! falls out of the pairing with no special cases in the search loops.

use serde::Serialize;

use crate::graph::NodeId;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FlowEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub cap: i64,
    pub flow: i64,
}

/// Capacitated directed network over `n` nodes.
///
/// Invariants:
/// - `edges.len()` is even; edge `e ^ 1` is the reverse companion of `e`.
/// - Forward edges sit at even indices with the caller's capacity; reverse
///   companions carry capacity 0.
/// - `flow[e] == -flow[e ^ 1]` at all times.
#[derive(Clone, Debug)]
pub struct FlowNet {
    n: usize,
    edges: Vec<FlowEdge>,
    adj: Vec<Vec<usize>>,
}

impl FlowNet {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
        }
    }

    /// Build from `(from, to, capacity)` triples.
    pub fn from_edges(n: usize, list: &[(usize, usize, i64)]) -> Self {
        let mut net = Self::new(n);
        for &(u, v, c) in list {
            net.add_edge(NodeId(u), NodeId(v), c);
        }
        net
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cap: i64) {
        assert!(from.0 < self.n && to.0 < self.n, "endpoint out of range");
        assert!(cap >= 0, "negative capacity");
        let e = self.edges.len();
        self.edges.push(FlowEdge {
            from,
            to,
            cap,
            flow: 0,
        });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            cap: 0,
            flow: 0,
        });
        self.adj[from.0].push(e);
        self.adj[to.0].push(e + 1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn edge(&self, e: usize) -> FlowEdge {
        self.edges[e]
    }

    #[inline]
    pub fn out_edges(&self, u: NodeId) -> &[usize] {
        &self.adj[u.0]
    }

    /// Remaining capacity of edge `e`.
    #[inline]
    pub fn residual(&self, e: usize) -> i64 {
        self.edges[e].cap - self.edges[e].flow
    }

    /// Push `amount` along `e`, pulling it back from the companion edge.
    pub fn push(&mut self, e: usize, amount: i64) {
        debug_assert!(amount > 0 && amount <= self.residual(e));
        self.edges[e].flow += amount;
        self.edges[e ^ 1].flow -= amount;
    }

    /// Drop all flow, keeping the structure (used to re-run on one net).
    pub fn reset(&mut self) {
        for e in &mut self.edges {
            e.flow = 0;
        }
    }

    /// Flows on forward edges, in insertion order.
    pub fn forward_flows(&self) -> Vec<i64> {
        self.edges.iter().step_by(2).map(|e| e.flow).collect()
    }

    /// Forward edges in insertion order.
    pub fn forward_edges(&self) -> impl Iterator<Item = FlowEdge> + '_ {
        self.edges.iter().step_by(2).copied()
    }

    /// Net outflow of `u` (positive at the source, negative at the sink,
    /// zero elsewhere once a flow is feasible).
    pub fn excess(&self, u: NodeId) -> i64 {
        let mut out = 0;
        for e in self.forward_edges() {
            if e.from == u {
                out += e.flow;
            }
            if e.to == u {
                out -= e.flow;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_companion_antisymmetric() {
        let mut net = FlowNet::from_edges(2, &[(0, 1, 5)]);
        net.push(0, 3);
        assert_eq!(net.edge(0).flow, 3);
        assert_eq!(net.edge(1).flow, -3);
        assert_eq!(net.residual(0), 2);
        // Reverse edge gained residual: cap 0 - flow (-3) = 3.
        assert_eq!(net.residual(1), 3);
    }
}
