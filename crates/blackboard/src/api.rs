//! Curated re-export surface for lesson scripts.
//!
//! One import line per figure: the algorithm entry point, its trace types,
//! and the fixture that feeds it.

// Graph lessons
pub use crate::graph::{Digraph, Graph, NodeId, WEdge};
pub use crate::mst::{kruskal, prim, MstError, MstTrace, UnionFind};
pub use crate::order::{topo_sort, CycleError, TopoFrame, TopoTrace};
pub use crate::path::{shortest_path, PathError, SearchFrame, SearchTrace};

// Flow lessons
pub use crate::flow::{dinic, edmonds_karp, FlowEdge, FlowEvent, FlowNet, FlowTrace};

// Geometry lessons
pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, ReplayToken};
pub use crate::geom2::{
    angle_between, area, area_trace, centroid, collinear, cross, dot, graham_scan,
    line_intersection, orient, point_in_polygon, point_line_distance, point_segment_distance,
    project_onto_segment, rotate_about, segment_circle_intersects, segments_intersect, signed_area,
    GeomCfg, GeomError, HalfPlane, HullAction, HullFrame, HullTrace, Region, RegionShape,
};

// Array and string lessons
pub use crate::automaton::{Automaton, Hit};
pub use crate::lifting::{JumpTable, SparseTable};
pub use crate::stack::{largest_rectangle, Rect, RectAction, RectFrame, RectTrace};

// Figure inputs
pub use crate::fixtures;
