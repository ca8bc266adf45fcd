//! Translation between domain graphs and the layout engine.
//!
//! This module owns the two boundary crossings: domain graph in (adjacency
//! maps or workflow jobs) → layout input shape, and layout output → render
//! structures. Edge direction is inverted where needed so the rendered flow
//! runs from causes to effects: base images down to the derived image, and
//! first jobs rightward to the jobs that need them.

use std::collections::HashSet;

use crate::model::{GraphNode, ImageGraph, WorkflowRun};

use super::layout::{layout, Direction, LayoutEdge, LayoutNode};
use super::{
    edge_curve, FormattedGraph, PlacedEdge, PlacedNode, DEPENDENCY_NODE_WIDTH, JOB_NODE_WIDTH,
    NODE_HEIGHT,
};

/// Format a dependency graph into positioned nodes and curved edges.
///
/// Absent input yields an empty node/edge set and zero bounds.
#[must_use]
pub fn format_dependency_graph(graph: Option<&ImageGraph>) -> FormattedGraph {
    let Some(graph) = graph else {
        return FormattedGraph::empty();
    };
    if graph.is_empty() {
        return FormattedGraph::empty();
    }

    let layout_nodes: Vec<LayoutNode> = graph
        .nodes
        .keys()
        .map(|id| LayoutNode {
            id: id.clone(),
            width: DEPENDENCY_NODE_WIDTH,
            height: NODE_HEIGHT,
        })
        .collect();

    // The adjacency map may encode each edge from either or both endpoints;
    // normalize to parent → child and dedupe.
    let mut seen = HashSet::new();
    let mut layout_edges = Vec::new();
    for (id, adjacent) in &graph.edges {
        for (other, other_is_parent) in adjacent {
            let (from, to) = if *other_is_parent {
                (other.clone(), id.clone())
            } else {
                (id.clone(), other.clone())
            };
            if seen.insert((from.clone(), to.clone())) {
                layout_edges.push(LayoutEdge { from, to });
            }
        }
    }

    let computed = layout(&layout_nodes, &layout_edges, Direction::Down);
    assemble(
        computed,
        layout_edges,
        Direction::Down,
        |id| graph.nodes.get(id).cloned(),
        DEPENDENCY_NODE_WIDTH,
    )
}

/// Format a workflow run's job graph into positioned nodes and curved edges.
///
/// Edges run from each needed job to the job depending on it, so the layout
/// flows rightward from the first jobs. Absent input yields an empty result.
#[must_use]
pub fn format_workflow_graph(run: Option<&WorkflowRun>) -> FormattedGraph {
    let Some(run) = run else {
        return FormattedGraph::empty();
    };
    if run.jobs.is_empty() {
        return FormattedGraph::empty();
    }

    let layout_nodes: Vec<LayoutNode> = run
        .jobs
        .keys()
        .map(|id| LayoutNode {
            id: id.clone(),
            width: JOB_NODE_WIDTH,
            height: NODE_HEIGHT,
        })
        .collect();

    let mut layout_edges = Vec::new();
    for (id, job) in &run.jobs {
        for need in &job.needs {
            layout_edges.push(LayoutEdge {
                from: need.clone(),
                to: id.clone(),
            });
        }
    }

    let jobs = &run.jobs;
    let computed = layout(&layout_nodes, &layout_edges, Direction::Right);
    assemble(
        computed,
        layout_edges,
        Direction::Right,
        |id| {
            jobs.get(id).map(|job| GraphNode {
                domain: String::new(),
                kind: "job".to_string(),
                name: job.name.clone(),
                labels: None,
            })
        },
        JOB_NODE_WIDTH,
    )
}

/// Translate layout output into the render-ready structure.
fn assemble(
    computed: super::layout::Layout,
    edges: Vec<LayoutEdge>,
    direction: Direction,
    node_data: impl Fn(&str) -> Option<GraphNode>,
    node_width: f64,
) -> FormattedGraph {
    let nodes: Vec<PlacedNode> = computed
        .positions
        .iter()
        .filter_map(|(id, point)| {
            let data = node_data(id)?;
            Some(PlacedNode {
                id: id.clone(),
                x: point.x,
                y: point.y,
                width: node_width,
                height: NODE_HEIGHT,
                data,
            })
        })
        .collect();

    let placed_edges = edges
        .into_iter()
        .filter_map(|edge| {
            let from_node = nodes.iter().find(|n| n.id == edge.from)?;
            let to_node = nodes.iter().find(|n| n.id == edge.to)?;
            Some(PlacedEdge {
                id: format!("{}->{}", edge.from, edge.to),
                from: edge.from,
                to: edge.to,
                curve: edge_curve(from_node, to_node, direction),
            })
        })
        .collect();

    FormattedGraph {
        nodes,
        edges: placed_edges,
        bounds: computed.bounds,
    }
}
