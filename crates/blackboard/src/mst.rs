//! Minimum spanning tree lessons: Kruskal (union-find) and Prim.
//!
//! Both return the accepted edges in acceptance order; the animation for
//! either algorithm is just a growing prefix of that list.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, NodeId, WEdge};

/// Disjoint-set forest with path compression.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merge the sets of `x` and `y`; false if already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let fx = self.find(x);
        let fy = self.find(y);
        if fx == fy {
            return false;
        }
        self.parent[fx] = fy;
        true
    }
}

/// Spanning tree result: edges in acceptance order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MstTrace {
    pub edges: Vec<WEdge>,
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MstError {
    /// Input graph has more than one component; `reached` edges were accepted.
    Disconnected { reached: usize },
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MstError::Disconnected { reached } => {
                write!(f, "graph is disconnected ({reached} tree edges found)")
            }
        }
    }
}

impl std::error::Error for MstError {}

/// Kruskal: sort edges ascending, accept those joining two components.
pub fn kruskal(g: &Graph) -> Result<MstTrace, MstError> {
    let n = g.len();
    let mut order: Vec<WEdge> = g.edges().to_vec();
    order.sort_by_key(|e| e.w);
    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for e in order {
        if uf.union(e.u.0, e.v.0) {
            edges.push(e);
            if edges.len() == n - 1 {
                break;
            }
        }
    }
    if n > 0 && edges.len() != n - 1 {
        return Err(MstError::Disconnected {
            reached: edges.len(),
        });
    }
    let total = edges.iter().map(|e| e.w).sum();
    Ok(MstTrace { edges, total })
}

/// Prim from `root`: linear-scan key selection, neighbor key relaxation.
pub fn prim(g: &Graph, root: NodeId) -> Result<MstTrace, MstError> {
    let n = g.len();
    assert!(root.0 < n, "root out of range");
    let mut in_tree = vec![false; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut key: Vec<Option<u64>> = vec![None; n];
    key[root.0] = Some(0);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    for _ in 0..n {
        let mut u: Option<usize> = None;
        let mut best = u64::MAX;
        for v in 0..n {
            if let Some(k) = key[v] {
                if !in_tree[v] && k < best {
                    best = k;
                    u = Some(v);
                }
            }
        }
        let u = match u {
            Some(u) => u,
            None => {
                return Err(MstError::Disconnected {
                    reached: edges.len(),
                })
            }
        };
        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push(WEdge {
                u: p,
                v: NodeId(u),
                w: best,
            });
        }
        for (v, w) in g.neighbors(NodeId(u)) {
            if !in_tree[v.0] && key[v.0].map_or(true, |k| w < k) {
                parent[v.0] = Some(NodeId(u));
                key[v.0] = Some(w);
            }
        }
    }
    let total = edges.iter().map(|e| e.w).sum();
    Ok(MstTrace { edges, total })
}
