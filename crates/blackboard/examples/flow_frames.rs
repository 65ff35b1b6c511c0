//! Print both max-flow lesson traces and check they agree.
//!
//! Runs Edmonds–Karp on the BFS-augmenting figure network and Dinic on the
//! layered one, then cross-runs both algorithms on both networks.

use blackboard::api::{dinic, edmonds_karp, FlowEvent};
use blackboard::fixtures;

fn main() {
    for (name, lesson) in [
        ("bfs", fixtures::lesson_network_bfs()),
        ("layered", fixtures::lesson_network_layered()),
    ] {
        let mut ek_net = lesson.net.clone();
        let mut di_net = lesson.net.clone();
        let ek = edmonds_karp(&mut ek_net, lesson.source, lesson.sink);
        let di = dinic(&mut di_net, lesson.source, lesson.sink);
        assert_eq!(ek.max_flow, di.max_flow, "algorithms disagree on {name}");
        println!("network {name}: max_flow={}", ek.max_flow);

        for event in &di.events {
            match event {
                FlowEvent::BfsLayer { level } => {
                    let levels: Vec<String> = level
                        .iter()
                        .zip(&lesson.labels)
                        .map(|(l, name)| {
                            l.map_or(format!("{name}:-"), |l| format!("{name}:{l}"))
                        })
                        .collect();
                    println!("  layer [{}]", levels.join(" "));
                }
                FlowEvent::Augment { path, bottleneck } => {
                    let hops: Vec<&str> = path
                        .iter()
                        .map(|&e| lesson.labels[di_net.edge(e).to.0])
                        .collect();
                    println!(
                        "  augment {}->{} bottleneck={bottleneck}",
                        lesson.labels[lesson.source.0],
                        hops.join("->")
                    );
                }
                FlowEvent::FlowUpdate { total, .. } => println!("  total={total}"),
                FlowEvent::Done { max_flow } => println!("  done max_flow={max_flow}"),
            }
        }
    }
}
