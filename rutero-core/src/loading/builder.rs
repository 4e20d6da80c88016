//! Assembles a road graph from data handed over by the map-loading
//! collaborator.

use geo::Point;
use hashbrown::HashMap;
use log::info;
use petgraph::graph::DiGraph;

use crate::model::{Projection, RoadEdge, RoadGraph, RoadNode};
use crate::{Error, SourceId};

/// Builder for the road multigraph. Push nodes and edges in any order;
/// `build` validates the batch, fits the planar frame to the node cloud and
/// projects every node into it.
#[derive(Default)]
pub struct RoadGraphBuilder {
    nodes: Vec<(SourceId, Point<f64>)>,
    edges: Vec<(SourceId, SourceId, f64, Option<f64>)>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: SourceId, lat: f64, lon: f64) -> &mut Self {
        self.nodes.push((id, Point::new(lon, lat)));
        self
    }

    /// Adds a directed edge. Parallel edges between the same ordered pair
    /// are kept; the canonical-edge rule resolves them at lookup time.
    pub fn add_edge(
        &mut self,
        from: SourceId,
        to: SourceId,
        length: f64,
        travel_time: Option<f64>,
    ) -> &mut Self {
        self.edges.push((from, to, length, travel_time));
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for duplicate node ids, edges
    /// referencing unknown nodes, or non-finite/negative attributes.
    pub fn build(self) -> Result<RoadGraph, Error> {
        let points: Vec<Point<f64>> = self.nodes.iter().map(|(_, point)| *point).collect();
        let projection = Projection::fit(&points);

        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut node_map = HashMap::with_capacity(self.nodes.len());

        for (id, geometry) in self.nodes {
            let index = graph.add_node(RoadNode {
                id,
                geometry,
                projected: projection.project(geometry),
            });
            if node_map.insert(id, index).is_some() {
                return Err(Error::InvalidData(format!("duplicate node id {id}")));
            }
        }

        for (from, to, length, travel_time) in self.edges {
            if !length.is_finite() || length < 0.0 {
                return Err(Error::InvalidData(format!(
                    "edge {from} -> {to} has invalid length {length}"
                )));
            }
            if let Some(seconds) = travel_time {
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(Error::InvalidData(format!(
                        "edge {from} -> {to} has invalid travel time {seconds}"
                    )));
                }
            }
            let source = node_map
                .get(&from)
                .copied()
                .ok_or_else(|| Error::InvalidData(format!("edge references unknown node {from}")))?;
            let target = node_map
                .get(&to)
                .copied()
                .ok_or_else(|| Error::InvalidData(format!("edge references unknown node {to}")))?;
            graph.add_edge(source, target, RoadEdge { length, travel_time });
        }

        info!(
            "Road graph assembled: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(RoadGraph::new(graph, node_map, projection))
    }
}
