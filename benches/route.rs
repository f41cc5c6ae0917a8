// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use orthoroute::{
    Connection, ConnectionId, ConnectionRouter, Endpoint, Node, NodeId, RouterConfig, Scene,
};

mod profiler;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn node(id: &str, x: i32, y: i32, w: i32, h: i32) -> Node {
    Node::new(nid(id), x, y, w, h)
}

/// `cols * rows` nodes on a regular lattice, each wired to its right and lower neighbour.
fn lattice(cols: i32, rows: i32, pitch: i32) -> (Vec<Node>, Vec<(String, String)>) {
    let mut nodes = Vec::new();
    let mut wires = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let id = format!("n{row}x{col}");
            nodes.push(node(&id, col * pitch, row * pitch, 16, 12));
            if col + 1 < cols {
                wires.push((id.clone(), format!("n{row}x{}", col + 1)));
            }
            if row + 1 < rows {
                wires.push((id, format!("n{}x{col}", row + 1)));
            }
        }
    }
    (nodes, wires)
}

fn scene_of(nodes: &[Node], wires: &[(String, String)]) -> Scene {
    let mut scene = Scene::new(RouterConfig::default());
    for n in nodes {
        scene.insert_node(n.clone()).expect("insert");
    }
    for (from, to) in wires {
        let id = ConnectionId::new(format!("{from}->{to}")).expect("connection id");
        let connection = Connection::new(Endpoint::new(nid(from)), Endpoint::new(nid(to)));
        scene.connect(id, connection).expect("connect");
    }
    scene
}

// Benchmark identity (keep stable):
// - Group names in this file: `route.single`, `route.scene`
// - Case IDs must remain stable across refactors so results stay comparable.
fn benches_route(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("route.single");
        let router = ConnectionRouter::default();

        for (case_id, nodes) in [
            ("direct", vec![node("a", 0, 0, 16, 16), node("b", 40, 0, 16, 16)]),
            (
                "detour",
                vec![node("a", 0, 0, 16, 16), node("b", 40, 0, 16, 16), node("w", 24, -8, 8, 32)],
            ),
            ("far_diagonal", vec![node("a", 0, 0, 20, 20), node("b", 140, 110, 20, 20)]),
        ] {
            let from = Endpoint::new(nid("a"));
            let to = Endpoint::new(nid("b"));
            group.throughput(Throughput::Elements(1));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let routed = router
                        .route(black_box(&from), black_box(&to), black_box(&nodes))
                        .expect("route");
                    black_box(routed.waypoints.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("route.scene");

        for (case_id, cols, rows) in [("lattice_3x3", 3, 3), ("lattice_6x4", 6, 4)] {
            let (nodes, wires) = lattice(cols, rows, 48);
            group.throughput(Throughput::Elements(wires.len() as u64));
            group.bench_function(case_id, |b| {
                b.iter_batched(
                    || scene_of(&nodes, &wires),
                    |mut scene| black_box(scene.refresh().expect("refresh")),
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_route
}
criterion_main!(benches);
