//! Print the graph-lesson traces frame by frame.
//!
//! Purpose
//! - Quick visual sanity on the shortest-path, MST and ordering traces
//!   without a rendering layer: one line per frame, grep-friendly.
//! - The inputs are the fixed figure graphs from `fixtures`.

use blackboard::api::{kruskal, prim, shortest_path, topo_sort, NodeId};
use blackboard::fixtures;

fn main() {
    let lesson = fixtures::lesson_graph();

    let trace = shortest_path(&lesson.graph, lesson.source, lesson.target)
        .expect("lesson target is reachable");
    println!("dijkstra frames={}", trace.frames.len());
    for (i, frame) in trace.frames.iter().enumerate() {
        let dist: Vec<String> = frame
            .dist
            .iter()
            .map(|d| d.map_or("inf".to_string(), |d| d.to_string()))
            .collect();
        println!("  step {i}: settle {} dist=[{}]", frame.settled_node.0, dist.join(","));
    }
    let path: Vec<String> = trace.path.iter().map(|u| u.0.to_string()).collect();
    println!("  path {} length={}", path.join("->"), trace.distance);

    let k = kruskal(&lesson.graph).expect("lesson graph is connected");
    let p = prim(&lesson.graph, NodeId(0)).expect("lesson graph is connected");
    println!("kruskal total={}", k.total);
    for (i, e) in k.edges.iter().enumerate() {
        println!("  accept {i}: {}-{} w={}", e.u.0, e.v.0, e.w);
    }
    println!("prim total={}", p.total);
    for (i, e) in p.edges.iter().enumerate() {
        println!("  attach {i}: {}-{} w={}", e.u.0, e.v.0, e.w);
    }

    let dag = fixtures::lesson_dag();
    let topo = topo_sort(&dag.digraph);
    for frame in &topo.frames {
        let queue: Vec<String> = frame.queue.iter().map(|u| u.0.to_string()).collect();
        println!(
            "topo emit {} queue=[{}] removed={}",
            frame.emitted.0,
            queue.join(","),
            frame.removed_arcs.len()
        );
    }
    match topo.order {
        Ok(order) => {
            let order: Vec<String> = order.iter().map(|u| u.0.to_string()).collect();
            println!("topo order {}", order.join(" "));
        }
        Err(err) => println!("topo failed: {err}"),
    }
}
