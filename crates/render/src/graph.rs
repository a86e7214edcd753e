use std::collections::HashSet;

use tracing::warn;

use model::Portrait;

use crate::chart::{
    ChartOption, ForceLayout, GraphSeries, GraphSeriesLink, GraphSeriesNode, Legend, Series,
    Tooltip,
};

const NODE_SYMBOL_SIZE: u32 = 40;
const FORCE_REPULSION: u32 = 260;
const FORCE_EDGE_LENGTH: u32 = 160;

/// Force-layout graph option for a portrait. Node ids arrive already
/// stringified from the model; an edge referencing an id with no node is a
/// data contract violation and is dropped rather than handed to the chart
/// layer, where it would fail the whole render.
pub fn portrait_graph(portrait: &Portrait) -> ChartOption {
    let mut seen = HashSet::new();
    let mut data = Vec::with_capacity(portrait.nodes.len());
    for node in &portrait.nodes {
        if !seen.insert(node.id.clone()) {
            warn!(id = %node.id, "duplicate node id, keeping first");
            continue;
        }
        data.push(GraphSeriesNode {
            id: node.id.clone(),
            name: node.name.clone(),
            category: node.kind.clone(),
            value: node.field.clone(),
            symbol_size: NODE_SYMBOL_SIZE,
        });
    }

    let mut links = Vec::with_capacity(portrait.links.len());
    for edge in &portrait.links {
        if !seen.contains(&edge.source) || !seen.contains(&edge.target) {
            warn!(
                source_id = %edge.source,
                target_id = %edge.target,
                "edge references unknown node, dropping"
            );
            continue;
        }
        links.push(GraphSeriesLink {
            source: edge.source.clone(),
            target: edge.target.clone(),
            value: edge.relation.clone(),
        });
    }

    ChartOption {
        tooltip: Some(Tooltip::default()),
        legend: Some(Legend::default()),
        series: vec![Series::Graph(GraphSeries {
            layout: "force".to_string(),
            roam: true,
            data,
            links,
            force: ForceLayout {
                repulsion: FORCE_REPULSION,
                edge_length: FORCE_EDGE_LENGTH,
            },
        })],
        ..ChartOption::default()
    }
}
