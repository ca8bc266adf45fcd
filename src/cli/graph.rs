//! `graph` command handler: print positioned graph layouts.

use crate::client::ApiClient;
use crate::error::Result;
use crate::graph::{
    format_ancestry_graph, format_dependency_graph, format_workflow_graph, FormattedGraph,
};

/// Which graph to fetch and lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Dependency graph through the hierarchical layout
    Dependencies,
    /// Ancestor chains on the branch grid, rooted at the reference
    Ancestry,
    /// Latest workflow run's job graph
    Workflow,
}

/// Fetch the requested graph for `reference` and print its layout.
pub fn run_graph(client: &dyn ApiClient, reference: &str, kind: GraphKind) -> Result<()> {
    let formatted = match kind {
        GraphKind::Dependencies => {
            let graph = client.get_image_graph(reference)?;
            format_dependency_graph(graph.as_ref())
        }
        GraphKind::Ancestry => match client.get_image_graph(reference)? {
            Some(graph) => format_ancestry_graph(&graph, reference),
            None => FormattedGraph::empty(),
        },
        GraphKind::Workflow => {
            let run = client.get_latest_image_workflow(reference)?;
            format_workflow_graph(run.as_ref())
        }
    };

    if formatted.nodes.is_empty() {
        println!("No graph recorded for {reference}.");
        return Ok(());
    }

    println!(
        "{} nodes, {} edges, {:.0}x{:.0}",
        formatted.nodes.len(),
        formatted.edges.len(),
        formatted.bounds.width,
        formatted.bounds.height
    );
    for node in &formatted.nodes {
        println!(
            "  node {:<30} at ({:>6.0}, {:>6.0})  {}",
            node.id, node.x, node.y, node.data.name
        );
    }
    for edge in &formatted.edges {
        println!("  edge {} -> {}", edge.from, edge.to);
    }

    Ok(())
}
