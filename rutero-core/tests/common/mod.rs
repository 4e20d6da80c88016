//! Synthetic fixtures shared by the integration tests.
#![allow(dead_code)]

use rutero_core::prelude::*;

/// Line graph A-B-C-D (source ids 1..=4), 100 m / 10 s per segment in both
/// directions, plus a detached dead-end node (source id 99). The geographic
/// spacing (~50 m) stays below the declared edge length so the straight-line
/// heuristic never overestimates.
pub fn line_graph() -> RoadGraph {
    let mut builder = RoadGraphBuilder::new();
    builder.add_node(1, 25.6500, -100.2900);
    builder.add_node(2, 25.6500, -100.2895);
    builder.add_node(3, 25.6500, -100.2890);
    builder.add_node(4, 25.6500, -100.2885);
    builder.add_node(99, 25.7000, -100.2900);
    for (a, b) in [(1, 2), (2, 3), (3, 4)] {
        builder.add_edge(a, b, 100.0, Some(10.0));
        builder.add_edge(b, a, 100.0, Some(10.0));
    }
    builder.build().unwrap()
}

pub fn line_model() -> RoadModel {
    RoadModel::new(line_graph(), Vec::new()).unwrap()
}

/// The line graph with a gas station at node A and a workshop at node D.
pub fn line_model_with_sites() -> RoadModel {
    let mut builder = RoadGraphBuilder::new();
    builder.add_node(1, 25.6500, -100.2900);
    builder.add_node(2, 25.6500, -100.2895);
    builder.add_node(3, 25.6500, -100.2890);
    builder.add_node(4, 25.6500, -100.2885);
    for (a, b) in [(1, 2), (2, 3), (3, 4)] {
        builder.add_edge(a, b, 100.0, Some(10.0));
        builder.add_edge(b, a, 100.0, Some(10.0));
    }
    let sites = vec![
        ServiceSite::new("s-west", ServiceKind::GasStation, "Pemex Oeste", 25.6500, -100.2900),
        ServiceSite::new("s-east", ServiceKind::Workshop, "Taller Este", 25.6500, -100.2885),
    ];
    RoadModel::new(builder.build().unwrap(), sites).unwrap()
}

/// `size` x `size` four-connected grid; ~111 m geographic spacing, declared
/// edge length 120 m, no travel times (the ~50 km/h estimate applies).
/// Source id of the node at (row, col) is `grid_id(row, col)`.
pub fn grid_graph(size: i64) -> RoadGraph {
    let mut builder = RoadGraphBuilder::new();
    for row in 0..size {
        for col in 0..size {
            builder.add_node(
                grid_id(row, col),
                25.6500 + 0.001 * row as f64,
                -100.2900 + 0.001 * col as f64,
            );
        }
    }
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                builder.add_edge(grid_id(row, col), grid_id(row, col + 1), 120.0, None);
                builder.add_edge(grid_id(row, col + 1), grid_id(row, col), 120.0, None);
            }
            if row + 1 < size {
                builder.add_edge(grid_id(row, col), grid_id(row + 1, col), 120.0, None);
                builder.add_edge(grid_id(row + 1, col), grid_id(row, col), 120.0, None);
            }
        }
    }
    builder.build().unwrap()
}

pub fn grid_id(row: i64, col: i64) -> SourceId {
    row * 100 + col
}

pub fn grid_model(size: i64) -> RoadModel {
    RoadModel::new(grid_graph(size), Vec::new()).unwrap()
}

pub fn node(graph: &RoadGraph, source: SourceId) -> NodeId {
    graph.resolve(source).unwrap()
}
