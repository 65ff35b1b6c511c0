//! Node-indexed graph arenas shared by the lesson algorithms.
//!
//! Purpose
//! - Replace loosely-keyed node names with explicit integer handles
//!   (`NodeId`), so every algorithm works over dense index arenas.
//! - Keep two minimal shapes: an undirected weighted graph for shortest
//!   path / MST lessons and a plain digraph for ordering lessons.
//!
//! Display labels and node positions are presentation data and live in
//! `fixtures`, not here.

use serde::Serialize;

/// Index handle into a graph's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// Undirected weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub w: u64,
}

/// Undirected weighted graph over `n` nodes.
///
/// Invariants:
/// - Edge endpoints are in range.
/// - `adj[k]` holds indices into `edges` for every edge incident to node k.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    edges: Vec<WEdge>,
    adj: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
        }
    }

    /// Build from an edge list; panics on out-of-range endpoints.
    pub fn from_edges(n: usize, list: &[(usize, usize, u64)]) -> Self {
        let mut g = Self::new(n);
        for &(u, v, w) in list {
            g.add_edge(NodeId(u), NodeId(v), w);
        }
        g
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: u64) {
        assert!(u.0 < self.n && v.0 < self.n, "edge endpoint out of range");
        let idx = self.edges.len();
        self.edges.push(WEdge { u, v, w });
        self.adj[u.0].push(idx);
        self.adj[v.0].push(idx);
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
    pub fn edges(&self) -> &[WEdge] {
        &self.edges
    }

    /// Neighbors of `u` with edge weights.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.adj[u.0].iter().map(move |&ei| {
            let e = self.edges[ei];
            let other = if e.u == u { e.v } else { e.u };
            (other, e.w)
        })
    }
}

/// Directed unweighted graph (adjacency lists), used by topological sort.
#[derive(Clone, Debug)]
pub struct Digraph {
    adj: Vec<Vec<NodeId>>,
}

impl Digraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Build from an arc list; panics on out-of-range endpoints.
    pub fn from_arcs(n: usize, list: &[(usize, usize)]) -> Self {
        let mut g = Self::new(n);
        for &(u, v) in list {
            g.add_arc(NodeId(u), NodeId(v));
        }
        g
    }

    pub fn add_arc(&mut self, u: NodeId, v: NodeId) {
        assert!(u.0 < self.adj.len() && v.0 < self.adj.len());
        self.adj[u.0].push(v);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn successors(&self, u: NodeId) -> &[NodeId] {
        &self.adj[u.0]
    }

    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, vs)| vs.iter().map(move |&v| (NodeId(u), v)))
    }
}
