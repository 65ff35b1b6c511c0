//! Hard-coded lesson inputs.
//!
//! Each lesson script owns one small fixed input; this module is their
//! single home. Alongside the algorithmic input, a lesson carries the
//! display metadata the figures hard-code (node labels, 2D positions) so a
//! rendering layer needs nothing else.

use nalgebra::{vector, Vector2};

use crate::flow::FlowNet;
use crate::graph::{Digraph, Graph, NodeId};

/// Weighted-graph lesson shared by the shortest-path and MST figures.
pub struct GraphLesson {
    pub graph: Graph,
    pub positions: Vec<Vector2<f64>>,
    pub source: NodeId,
    pub target: NodeId,
}

/// The 7-node, 9-edge graph drawn in the Dijkstra/Kruskal/Prim figures.
pub fn lesson_graph() -> GraphLesson {
    let graph = Graph::from_edges(
        7,
        &[
            (0, 1, 28),
            (0, 5, 10),
            (1, 2, 16),
            (1, 6, 14),
            (2, 3, 12),
            (3, 4, 22),
            (3, 6, 11),
            (4, 5, 25),
            (4, 6, 12),
        ],
    );
    let positions = vec![
        vector![0.1, 1.0],
        vector![1.0, 1.0],
        vector![1.3, 0.5],
        vector![1.0, 0.0],
        vector![0.1, 0.0],
        vector![-0.2, 0.5],
        vector![0.6, 0.6],
    ];
    GraphLesson {
        graph,
        positions,
        source: NodeId(0),
        target: NodeId(3),
    }
}

/// Ordering lesson input.
pub struct DagLesson {
    pub digraph: Digraph,
    pub positions: Vec<Vector2<f64>>,
}

/// The 6-node DAG of the topological-sort figure.
pub fn lesson_dag() -> DagLesson {
    let digraph = Digraph::from_arcs(
        6,
        &[(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (3, 5), (4, 5)],
    );
    let positions = vec![
        vector![0.0, 0.5],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![2.0, 1.0],
        vector![2.0, 0.0],
        vector![3.0, 0.5],
    ];
    DagLesson { digraph, positions }
}

/// Max-flow lesson input.
pub struct NetworkLesson {
    pub net: FlowNet,
    pub source: NodeId,
    pub sink: NodeId,
    pub labels: Vec<&'static str>,
    pub positions: Vec<Vector2<f64>>,
}

/// The network of the BFS-augmenting (Edmonds–Karp) figure. Max flow 18.
pub fn lesson_network_bfs() -> NetworkLesson {
    // s=0, 1..4 keep their figure names, t=5.
    let net = FlowNet::from_edges(
        6,
        &[
            (0, 1, 8),
            (0, 2, 12),
            (1, 3, 6),
            (1, 4, 10),
            (2, 1, 2),
            (2, 3, 10),
            (4, 3, 2),
            (3, 5, 8),
            (4, 5, 10),
        ],
    );
    NetworkLesson {
        net,
        source: NodeId(0),
        sink: NodeId(5),
        labels: vec!["s", "1", "2", "3", "4", "t"],
        positions: vec![
            vector![0.0, 1.0],
            vector![1.0, 1.7],
            vector![1.0, 0.3],
            vector![2.0, 1.7],
            vector![2.0, 0.3],
            vector![3.0, 1.0],
        ],
    }
}

/// The deeper network of the Dinic figure, shaped so the run needs more
/// than one layering phase. Max flow 14.
pub fn lesson_network_layered() -> NetworkLesson {
    // s=0, a=1, b=2, d=3, e=4, g=5, h=6, t=7.
    let net = FlowNet::from_edges(
        8,
        &[
            (0, 1, 5),
            (0, 2, 9),
            (1, 3, 3),
            (1, 4, 8),
            (2, 3, 6),
            (2, 4, 7),
            (3, 5, 1),
            (3, 6, 3),
            (4, 5, 14),
            (4, 6, 3),
            (2, 5, 4),
            (6, 1, 5),
            (5, 7, 15),
            (6, 7, 10),
        ],
    );
    NetworkLesson {
        net,
        source: NodeId(0),
        sink: NodeId(7),
        labels: vec!["s", "a", "b", "d", "e", "g", "h", "t"],
        positions: vec![
            vector![0.0, 1.5],
            vector![1.0, 2.5],
            vector![1.0, 1.5],
            vector![2.0, 2.5],
            vector![2.0, 1.5],
            vector![3.0, 2.5],
            vector![3.0, 1.5],
            vector![4.0, 1.5],
        ],
    }
}

/// Point-cloud lesson input.
pub struct PointsLesson {
    pub points: Vec<Vector2<f64>>,
}

/// The 12 points scanned in the convex-hull figures.
pub fn lesson_points() -> PointsLesson {
    PointsLesson {
        points: vec![
            vector![1.0, 1.0],
            vector![2.0, 3.0],
            vector![3.0, 2.0],
            vector![4.0, 4.0],
            vector![5.0, 1.0],
            vector![6.0, 3.0],
            vector![7.0, 2.0],
            vector![4.0, 5.0],
            vector![2.0, 5.0],
            vector![1.0, 4.0],
            vector![3.0, 6.0],
            vector![6.0, 5.0],
        ],
    }
}

/// Polygon lesson input: vertices plus the figure's probe point.
pub struct PolygonLesson {
    pub verts: Vec<Vector2<f64>>,
    pub probe: Vector2<f64>,
}

/// The deep-V concave octagon of the ray-casting figure; the probe sits
/// left of the notch, inside.
pub fn lesson_polygon_concave() -> PolygonLesson {
    PolygonLesson {
        verts: vec![
            vector![1.0, 1.0],
            vector![6.0, 1.0],
            vector![6.0, 5.0],
            vector![5.0, 5.0],
            vector![4.0, 2.0],
            vector![3.0, 5.0],
            vector![2.0, 5.0],
            vector![1.0, 3.0],
        ],
        probe: vector![2.5, 3.5],
    }
}

/// The convex hexagon of the half-plane-intersection figure.
pub fn lesson_polygon_convex() -> PolygonLesson {
    PolygonLesson {
        verts: vec![
            vector![1.0, 1.0],
            vector![3.0, 0.5],
            vector![5.0, 2.0],
            vector![4.5, 4.0],
            vector![2.5, 5.0],
            vector![0.5, 3.0],
        ],
        probe: vector![2.0, 2.0],
    }
}

/// Column heights of the histogram-rectangle figure.
pub fn lesson_heights() -> Vec<u64> {
    vec![3, 2, 1, 4, 5, 2]
}

/// The 20-node successor line of the binary-lifting figure.
pub fn lesson_number_line() -> Vec<Option<usize>> {
    (0..20).map(|i| (i + 1 < 20).then_some(i + 1)).collect()
}

/// Patterns of the Aho–Corasick automaton figure.
pub fn lesson_patterns() -> Vec<&'static str> {
    vec!["asp", "spa", "bcd", "spex"]
}
