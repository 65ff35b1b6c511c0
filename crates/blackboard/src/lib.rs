//! Algorithm state traces for teaching diagrams.
//!
//! Each lesson module re-runs a classic algorithm over a small fixed input
//! and returns an owned trace of its intermediate states (distances, MST
//! edge order, flow events, hull stack frames). A rendering layer — not part
//! of this crate — turns those traces into figures or animations; every
//! trace type serializes so the boundary can also be a JSON file.
//!
//! Lessons and their cores:
//! - `path`: Dijkstra (linear-scan selection)
//! - `mst`: Kruskal with union-find, Prim
//! - `order`: Kahn's topological sort with explicit cycle detection
//! - `flow`: Edmonds–Karp and Dinic over one residual network type
//! - `geom2`: hull, polygon, segment and half-plane lessons
//! - `stack`: largest rectangle in a histogram
//! - `lifting`: binary lifting and a sparse table
//! - `automaton`: Aho–Corasick construction
//!
//! The fixed figure inputs live in `fixtures`.

pub mod api;
pub mod automaton;
pub mod fixtures;
pub mod flow;
pub mod geom2;
pub mod graph;
pub mod lifting;
pub mod mst;
pub mod order;
pub mod path;
pub mod stack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers and figures share one vector type.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::flow::{dinic, edmonds_karp, FlowEvent, FlowNet, FlowTrace};
    pub use crate::geom2::{
        area, graham_scan, point_in_polygon, GeomCfg, GeomError, HalfPlane, Region, RegionShape,
    };
    pub use crate::graph::{Digraph, Graph, NodeId};
    pub use crate::mst::{kruskal, prim, MstTrace};
    pub use crate::order::topo_sort;
    pub use crate::path::shortest_path;
    pub use nalgebra::Vector2 as Vec2;
}
