//! Dijkstra shortest path with a per-settle frame trace.
//!
//! The selection step is a linear scan over unsettled nodes, matching the
//! blackboard presentation (no heap); each settled node produces one frame
//! with full `dist`/`prev`/`settled` snapshots so an animation can replay
//! the search state by state.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, NodeId};

/// Search state after settling one node.
#[derive(Clone, Debug, Serialize)]
pub struct SearchFrame {
    /// Node settled in this step.
    pub settled_node: NodeId,
    /// Tentative distance per node; `None` = not yet reached.
    pub dist: Vec<Option<u64>>,
    /// Predecessor on the best known path.
    pub prev: Vec<Option<NodeId>>,
    pub settled: Vec<bool>,
}

/// Full trace of one shortest-path run.
#[derive(Clone, Debug, Serialize)]
pub struct SearchTrace {
    pub frames: Vec<SearchFrame>,
    /// Source-to-target walk reconstructed from predecessors.
    pub path: Vec<NodeId>,
    pub distance: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    /// Target cannot be reached from the source.
    Unreachable { source: NodeId, target: NodeId },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathError::Unreachable { source, target } => {
                write!(f, "node {} is unreachable from {}", target.0, source.0)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Dijkstra from `source` until `target` is settled.
///
/// Returns one frame per settled node (the target's settle frame included).
pub fn shortest_path(g: &Graph, source: NodeId, target: NodeId) -> Result<SearchTrace, PathError> {
    let n = g.len();
    assert!(source.0 < n && target.0 < n, "node out of range");
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[source.0] = Some(0);
    let mut frames = Vec::new();

    loop {
        // Linear scan for the unsettled node with minimum tentative distance.
        let mut u: Option<NodeId> = None;
        let mut best = u64::MAX;
        for i in 0..n {
            if let Some(d) = dist[i] {
                if !settled[i] && d < best {
                    best = d;
                    u = Some(NodeId(i));
                }
            }
        }
        let u = match u {
            Some(u) => u,
            None => return Err(PathError::Unreachable { source, target }),
        };
        settled[u.0] = true;
        for (v, w) in g.neighbors(u) {
            if settled[v.0] {
                continue;
            }
            let cand = best + w;
            if dist[v.0].map_or(true, |d| cand < d) {
                dist[v.0] = Some(cand);
                prev[v.0] = Some(u);
            }
        }
        frames.push(SearchFrame {
            settled_node: u,
            dist: dist.clone(),
            prev: prev.clone(),
            settled: settled.clone(),
        });
        if u == target {
            break;
        }
    }

    let mut path = vec![target];
    let mut cur = target;
    while let Some(p) = prev[cur.0] {
        path.push(p);
        cur = p;
    }
    path.reverse();
    debug_assert_eq!(path[0], source);
    Ok(SearchTrace {
        frames,
        path,
        distance: dist[target.0].expect("target settled"),
    })
}
