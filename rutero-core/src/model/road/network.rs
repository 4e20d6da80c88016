//! Directed multigraph over road nodes.

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::DiGraph;

use super::components::{RoadEdge, RoadNode};
use crate::model::Projection;
use crate::{NodeId, SourceId};

/// The road network: a directed weighted multigraph, read-only once built.
///
/// Divided roadways and service roads can produce several parallel edges
/// between the same ordered node pair; [`RoadGraph::canonical_edge`] resolves
/// them to the single edge every cost and metric lookup uses.
pub struct RoadGraph {
    pub(crate) graph: DiGraph<RoadNode, RoadEdge>,
    node_map: HashMap<SourceId, NodeId>,
    projection: Projection,
}

impl RoadGraph {
    pub(crate) fn new(
        graph: DiGraph<RoadNode, RoadEdge>,
        node_map: HashMap<SourceId, NodeId>,
        projection: Projection,
    ) -> Self {
        Self {
            graph,
            node_map,
            projection,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.graph.node_weight(node).is_some()
    }

    pub fn node(&self, node: NodeId) -> Option<&RoadNode> {
        self.graph.node_weight(node)
    }

    /// Node handle for an id assigned by the map data source.
    pub fn resolve(&self, source: SourceId) -> Option<NodeId> {
        self.node_map.get(&source).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &RoadNode)> {
        self.graph
            .node_indices()
            .map(move |index| (index, &self.graph[index]))
    }

    /// Directly reachable neighbors, each reported once regardless of how
    /// many parallel edges lead to it.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors(node).unique()
    }

    /// The edge used for every cost and metric lookup between an ordered
    /// node pair: strict minimum length, first encountered wins exact ties.
    pub fn canonical_edge(&self, from: NodeId, to: NodeId) -> Option<&RoadEdge> {
        let mut best: Option<&RoadEdge> = None;
        for edge in self.graph.edges_connecting(from, to) {
            match best {
                Some(current) if edge.weight().length >= current.length => {}
                _ => best = Some(edge.weight()),
            }
        }
        best
    }

    /// The planar reference frame shared by every projected coordinate.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}
