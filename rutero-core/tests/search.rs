mod common;

use common::{grid_graph, grid_id, line_graph, node};
use rutero_core::prelude::*;

const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::UniformCost,
    Strategy::IterativeDeepening,
    Strategy::AStar,
];

fn request(graph: &RoadGraph, from: SourceId, to: SourceId, strategy: Strategy, metric: CostMetric) -> SearchRequest {
    SearchRequest {
        origin: node(graph, from),
        goal: node(graph, to),
        strategy,
        metric,
    }
}

#[test]
fn line_route_end_to_end() {
    let graph = line_graph();
    let expected: Vec<NodeId> = [1, 2, 3, 4].iter().map(|&id| node(&graph, id)).collect();

    // Only one simple path exists, so every strategy must return it
    for strategy in ALL_STRATEGIES {
        let report = run_search(&graph, &request(&graph, 1, 4, strategy, CostMetric::Distance)).unwrap();
        let path = report
            .outcome
            .path()
            .unwrap_or_else(|| panic!("{} found no path", strategy.as_str()));
        assert_eq!(path, expected.as_slice(), "{}", strategy.as_str());
    }

    let report = run_search(
        &graph,
        &request(&graph, 1, 4, Strategy::UniformCost, CostMetric::Distance),
    )
    .unwrap();
    let metrics = path_metrics(&graph, report.outcome.path().unwrap()).unwrap();
    assert!((metrics.distance_m - 300.0).abs() < 1e-9);
    assert!((metrics.travel_time_s - 30.0).abs() < 1e-9);
}

#[test]
fn origin_equals_goal_is_trivial_for_every_strategy() {
    let graph = line_graph();

    for strategy in ALL_STRATEGIES {
        for metric in [CostMetric::Distance, CostMetric::Time] {
            let report = run_search(&graph, &request(&graph, 2, 2, strategy, metric)).unwrap();
            let path = report.outcome.path().unwrap();
            assert_eq!(path, &[node(&graph, 2)]);
            assert_eq!(report.expanded, 0);
            let metrics = path_metrics(&graph, path).unwrap();
            assert_eq!(metrics.distance_m, 0.0);
            assert_eq!(metrics.travel_time_s, 0.0);
        }
    }
}

#[test]
fn dead_end_node_is_a_valid_state() {
    let graph = line_graph();

    for strategy in ALL_STRATEGIES {
        let to_other = run_search(&graph, &request(&graph, 99, 1, strategy, CostMetric::Distance)).unwrap();
        assert_eq!(to_other.outcome, SearchOutcome::NotFound, "{}", strategy.as_str());

        let to_itself = run_search(&graph, &request(&graph, 99, 99, strategy, CostMetric::Distance)).unwrap();
        assert!(to_itself.outcome.is_found());
    }
}

#[test]
fn unreachable_goal_reports_not_found_not_error() {
    let graph = line_graph();
    // Node 99 has no incoming edges either
    let report = run_search(
        &graph,
        &request(&graph, 1, 99, Strategy::AStar, CostMetric::Time),
    )
    .unwrap();
    assert_eq!(report.outcome, SearchOutcome::NotFound);
    assert!(report.expanded > 0);
}

#[test]
fn uniform_cost_and_a_star_agree_on_optimal_cost() {
    let graph = grid_graph(5);

    for metric in [CostMetric::Distance, CostMetric::Time] {
        let ucs = run_search(
            &graph,
            &request(&graph, grid_id(0, 0), grid_id(4, 4), Strategy::UniformCost, metric),
        )
        .unwrap();
        let astar = run_search(
            &graph,
            &request(&graph, grid_id(0, 0), grid_id(4, 4), Strategy::AStar, metric),
        )
        .unwrap();

        let ucs_metrics = path_metrics(&graph, ucs.outcome.path().unwrap()).unwrap();
        let astar_metrics = path_metrics(&graph, astar.outcome.path().unwrap()).unwrap();

        assert!(
            (ucs_metrics.distance_m - astar_metrics.distance_m).abs() < 1e-6,
            "optimal distance must match: {} vs {}",
            ucs_metrics.distance_m,
            astar_metrics.distance_m
        );
        assert!((ucs_metrics.travel_time_s - astar_metrics.travel_time_s).abs() < 1e-6);

        // The admissible heuristic must not cost extra expansions
        assert!(
            astar.expanded <= ucs.expanded,
            "A* expanded {} > uniform-cost {}",
            astar.expanded,
            ucs.expanded
        );
    }
}

#[test]
fn every_strategy_returns_a_connected_path() {
    let graph = grid_graph(4);

    for strategy in ALL_STRATEGIES {
        let report = run_search(
            &graph,
            &request(&graph, grid_id(0, 0), grid_id(3, 2), strategy, CostMetric::Distance),
        )
        .unwrap();
        let path = report.outcome.path().unwrap();

        assert_eq!(path.first(), Some(&node(&graph, grid_id(0, 0))));
        assert_eq!(path.last(), Some(&node(&graph, grid_id(3, 2))));
        // path_metrics fails loudly on any gap between consecutive nodes
        path_metrics(&graph, path).unwrap();
    }
}

#[test]
fn parallel_edges_resolve_to_the_shortest() {
    let mut builder = RoadGraphBuilder::new();
    builder.add_node(1, 25.65, -100.29);
    builder.add_node(2, 25.65, -100.2895);
    // Divided roadway: a long signed route and a short service road
    builder.add_edge(1, 2, 250.0, Some(50.0));
    builder.add_edge(1, 2, 100.0, None);
    let graph = builder.build().unwrap();

    let edge = graph
        .canonical_edge(node(&graph, 1), node(&graph, 2))
        .unwrap();
    assert_eq!(edge.length, 100.0);

    // Both metrics must read the canonical edge, never the longer twin
    let report = run_search(
        &graph,
        &request(&graph, 1, 2, Strategy::UniformCost, CostMetric::Time),
    )
    .unwrap();
    let metrics = path_metrics(&graph, report.outcome.path().unwrap()).unwrap();
    assert!((metrics.distance_m - 100.0).abs() < 1e-9);
    assert!((metrics.travel_time_s - 100.0 / FALLBACK_SPEED_MPS).abs() < 1e-9);
}

#[test]
fn pre_cancelled_searches_abort() {
    let graph = line_graph();
    let cancel = CancelFlag::new();
    cancel.cancel();

    for strategy in ALL_STRATEGIES {
        let report = run_search_cancellable(
            &graph,
            &request(&graph, 1, 4, strategy, CostMetric::Distance),
            &cancel,
        )
        .unwrap();
        assert_eq!(report.outcome, SearchOutcome::Cancelled, "{}", strategy.as_str());
    }
}

#[test]
fn invalid_nodes_are_rejected_up_front() {
    let graph = line_graph();
    let bogus = NodeId::new(4096);

    let result = run_search(
        &graph,
        &SearchRequest {
            origin: bogus,
            goal: node(&graph, 1),
            strategy: Strategy::AStar,
            metric: CostMetric::Distance,
        },
    );
    assert!(matches!(result, Err(Error::InvalidNodeIndex)));

    let result = run_search(
        &graph,
        &SearchRequest {
            origin: node(&graph, 1),
            goal: bogus,
            strategy: Strategy::AStar,
            metric: CostMetric::Distance,
        },
    );
    assert!(matches!(result, Err(Error::InvalidNodeIndex)));
}

#[test]
fn configuration_names_parse_at_the_boundary() {
    assert_eq!("a_star".parse::<Strategy>().unwrap(), Strategy::AStar);
    assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
    assert_eq!("iddfs".parse::<Strategy>().unwrap(), Strategy::IterativeDeepening);
    assert!(matches!(
        "dijkstra".parse::<Strategy>(),
        Err(Error::UnknownStrategy(name)) if name == "dijkstra"
    ));

    assert_eq!("time".parse::<CostMetric>().unwrap(), CostMetric::Time);
    assert!(matches!(
        "fuel".parse::<CostMetric>(),
        Err(Error::UnknownCostMetric(name)) if name == "fuel"
    ));
}

#[test]
fn batch_evaluation_summarizes_found_pairs_only() {
    let graph = line_graph();
    let requests = vec![
        request(&graph, 1, 4, Strategy::AStar, CostMetric::Time),
        request(&graph, 4, 1, Strategy::AStar, CostMetric::Time),
        request(&graph, 1, 99, Strategy::AStar, CostMetric::Time),
    ];

    let (evaluations, summary) = evaluate_batch(&graph, &requests).unwrap();

    assert_eq!(evaluations.len(), 3);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.found, 2);
    assert!((summary.mean_distance_m.unwrap() - 300.0).abs() < 1e-9);
    assert!((summary.mean_travel_time_s.unwrap() - 30.0).abs() < 1e-9);
    assert!(summary.mean_elapsed.is_some());
    assert!(evaluations[2].metrics.is_none());
}
