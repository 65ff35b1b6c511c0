//! Serialize every lesson trace to JSON under `data/traces/`.
//!
//! Purpose
//! - Exercise the rendering boundary end to end: the files this writes are
//!   exactly what an external figure/animation layer consumes.
//! - No arguments; inputs are the fixed lesson fixtures.

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use blackboard::api::{
    area_trace, dinic, edmonds_karp, graham_scan, kruskal, largest_rectangle, prim,
    shortest_path, topo_sort, Automaton, JumpTable, NodeId,
};
use blackboard::fixtures;

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)?;
    tracing::info!(path = %path.display(), "trace written");
    Ok(())
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let dir = Path::new("data/traces");
    fs::create_dir_all(dir)?;

    let graph = fixtures::lesson_graph();
    write_json(
        dir,
        "dijkstra.json",
        &shortest_path(&graph.graph, graph.source, graph.target)?,
    )?;
    write_json(dir, "kruskal.json", &kruskal(&graph.graph)?)?;
    write_json(dir, "prim.json", &prim(&graph.graph, NodeId(0))?)?;

    let dag = fixtures::lesson_dag();
    write_json(dir, "topo.json", &topo_sort(&dag.digraph))?;

    let bfs = fixtures::lesson_network_bfs();
    let mut net = bfs.net.clone();
    write_json(
        dir,
        "edmonds_karp.json",
        &edmonds_karp(&mut net, bfs.source, bfs.sink),
    )?;
    let layered = fixtures::lesson_network_layered();
    let mut net = layered.net.clone();
    write_json(dir, "dinic.json", &dinic(&mut net, layered.source, layered.sink))?;

    let cloud = fixtures::lesson_points();
    write_json(dir, "hull.json", &graham_scan(&cloud.points)?)?;
    let concave = fixtures::lesson_polygon_concave();
    write_json(dir, "polygon_area.json", &area_trace(&concave.verts)?)?;

    write_json(
        dir,
        "histogram_rect.json",
        &largest_rectangle(&fixtures::lesson_heights()).expect("nonempty histogram"),
    )?;
    write_json(
        dir,
        "jump_table.json",
        &JumpTable::new(&fixtures::lesson_number_line(), 4),
    )?;
    write_json(
        dir,
        "automaton.json",
        &Automaton::build(&fixtures::lesson_patterns()),
    )?;

    tracing::info!("all traces exported");
    Ok(())
}
