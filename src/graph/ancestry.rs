//! Grid layout for root-rooted ancestor graphs.
//!
//! Every node except the root is assumed to have at most one parent reachable
//! via its "first parent" pointer, so each direct parent of the root heads an
//! independent linear branch. Branches occupy fixed horizontal slots centered
//! around the root; within a branch, nodes stack upward at a fixed vertical
//! step. Deterministic and non-optimizing: the domain data is small, shallow
//! chains.
//!
//! Cyclic first-parent chains are NOT defended against and will loop forever;
//! callers must guarantee the input is acyclic along those chains.

use crate::model::ImageGraph;

use super::{
    edge_curve, Direction, EdgeCurve, FormattedGraph, PlacedEdge, PlacedNode, BRANCH_GAP,
    BRANCH_STEP, DEPENDENCY_NODE_WIDTH, NODE_HEIGHT,
};

/// Format an ancestor graph rooted at `root` into positioned nodes, curved
/// edges, and content bounds.
///
/// An absent root or an empty graph yields an empty result, never an error.
#[must_use]
pub fn format_ancestry_graph(graph: &ImageGraph, root: &str) -> FormattedGraph {
    let Some(root_data) = graph.nodes.get(root) else {
        return FormattedGraph::empty();
    };

    // Each direct parent of the root heads one branch.
    let heads: Vec<&str> = graph.parents_of(root).collect();
    let branch_count = heads.len();
    let slot = DEPENDENCY_NODE_WIDTH + BRANCH_GAP;

    let mut nodes = Vec::new();
    let mut edges: Vec<(String, String)> = Vec::new();

    // Root sits at the origin; everything is shifted afterwards.
    nodes.push(place(root, root_data, 0.0, 0.0));

    for (branch, head) in heads.into_iter().enumerate() {
        let x = (branch as f64 - (branch_count as f64 - 1.0) / 2.0) * slot;

        let mut below = root.to_string();
        let mut current = Some(head);
        let mut depth = 1;
        while let Some(id) = current {
            let Some(data) = graph.nodes.get(id) else {
                break;
            };
            nodes.push(place(id, data, x, -(depth as f64) * BRANCH_STEP));
            // Layout flows from the branch end toward the root, so the edge
            // direction is the reverse of the semantic parent pointer.
            edges.push((id.to_string(), below));

            below = id.to_string();
            current = graph.first_parent(id);
            depth += 1;
        }
    }

    finish(nodes, edges)
}

fn place(id: &str, data: &crate::model::GraphNode, x: f64, y: f64) -> PlacedNode {
    PlacedNode {
        id: id.to_string(),
        x,
        y,
        width: DEPENDENCY_NODE_WIDTH,
        height: NODE_HEIGHT,
        data: data.clone(),
    }
}

/// Shift nodes so content starts at the origin, then attach edge curves.
fn finish(mut nodes: Vec<PlacedNode>, edges: Vec<(String, String)>) -> FormattedGraph {
    let min_x = nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
    let min_y = nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
    for node in &mut nodes {
        node.x -= min_x;
        node.y -= min_y;
    }

    let bounds = super::Bounds {
        width: nodes
            .iter()
            .map(|n| n.x + n.width)
            .fold(0.0, f64::max),
        height: nodes
            .iter()
            .map(|n| n.y + n.height)
            .fold(0.0, f64::max),
    };

    let placed_edges = edges
        .into_iter()
        .filter_map(|(from, to)| {
            let curve = curve_between(&nodes, &from, &to)?;
            Some(PlacedEdge {
                id: format!("{from}->{to}"),
                from,
                to,
                curve,
            })
        })
        .collect();

    FormattedGraph {
        nodes,
        edges: placed_edges,
        bounds,
    }
}

fn curve_between(nodes: &[PlacedNode], from: &str, to: &str) -> Option<EdgeCurve> {
    let from_node = nodes.iter().find(|n| n.id == from)?;
    let to_node = nodes.iter().find(|n| n.id == to)?;
    Some(edge_curve(from_node, to_node, Direction::Down))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphNode;
    use indexmap::IndexMap;

    fn graph_node(name: &str) -> GraphNode {
        GraphNode {
            domain: "docker.io".to_string(),
            kind: "image".to_string(),
            name: name.to_string(),
            labels: None,
        }
    }

    /// root with two branches: one of length 1 and one of length 3.
    fn two_branch_graph() -> ImageGraph {
        let mut nodes = IndexMap::new();
        for id in ["root", "a1", "b1", "b2", "b3"] {
            nodes.insert(id.to_string(), graph_node(id));
        }

        let mut edges: IndexMap<String, IndexMap<String, bool>> = IndexMap::new();
        let mut root_adj = IndexMap::new();
        root_adj.insert("a1".to_string(), true);
        root_adj.insert("b1".to_string(), true);
        edges.insert("root".to_string(), root_adj);
        edges.insert("b1".to_string(), IndexMap::from([("b2".to_string(), true)]));
        edges.insert("b2".to_string(), IndexMap::from([("b3".to_string(), true)]));

        ImageGraph { nodes, edges }
    }

    #[test]
    fn test_two_branches_node_and_edge_counts() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "root");
        assert_eq!(formatted.nodes.len(), 5, "root + 1 + 3");
        assert_eq!(formatted.edges.len(), 4);
    }

    #[test]
    fn test_branch_offsets_symmetric_around_root() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "root");
        let x_of = |id: &str| {
            formatted
                .nodes
                .iter()
                .find(|n| n.id == id)
                .expect("node")
                .x
        };

        let root_x = x_of("root");
        let left = x_of("a1") - root_x;
        let right = x_of("b1") - root_x;
        assert_eq!(left, -right, "branches mirror around the root");
        // The whole branch shares its slot.
        assert_eq!(x_of("b1"), x_of("b2"));
        assert_eq!(x_of("b2"), x_of("b3"));
    }

    #[test]
    fn test_branch_nodes_stack_upward_from_root() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "root");
        let y_of = |id: &str| {
            formatted
                .nodes
                .iter()
                .find(|n| n.id == id)
                .expect("node")
                .y
        };

        assert!(y_of("b1") < y_of("root"));
        assert!(y_of("b2") < y_of("b1"));
        assert!(y_of("b3") < y_of("b2"));
        assert_eq!(y_of("root") - y_of("b1"), BRANCH_STEP);
    }

    #[test]
    fn test_edges_point_toward_root() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "root");
        let edge = formatted
            .edges
            .iter()
            .find(|e| e.from == "b1")
            .expect("edge from b1");
        assert_eq!(edge.to, "root");

        let deep = formatted
            .edges
            .iter()
            .find(|e| e.from == "b3")
            .expect("edge from b3");
        assert_eq!(deep.to, "b2");
    }

    #[test]
    fn test_positions_normalized_to_origin() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "root");
        let min_x = formatted.nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
        let min_y = formatted.nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
        assert_eq!(min_x, 0.0);
        assert_eq!(min_y, 0.0);
        assert!(formatted.bounds.width > 0.0);
        assert!(formatted.bounds.height > 0.0);
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let formatted = format_ancestry_graph(&two_branch_graph(), "nope");
        assert!(formatted.nodes.is_empty());
        assert!(formatted.edges.is_empty());
        assert_eq!(formatted.bounds.width, 0.0);

        let empty = ImageGraph::default();
        let formatted = format_ancestry_graph(&empty, "root");
        assert!(formatted.nodes.is_empty());
    }

    #[test]
    fn test_multi_parent_node_follows_first_parent_only() {
        let mut graph = two_branch_graph();
        // b1 gains a second parent; only b2 (the first) must be followed.
        graph
            .edges
            .get_mut("b1")
            .expect("b1 adjacency")
            .insert("a1".to_string(), true);

        let formatted = format_ancestry_graph(&graph, "root");
        assert_eq!(formatted.nodes.len(), 5);
    }

    #[test]
    fn test_rootless_single_node() {
        let mut nodes = IndexMap::new();
        nodes.insert("root".to_string(), graph_node("root"));
        let graph = ImageGraph {
            nodes,
            edges: IndexMap::new(),
        };
        let formatted = format_ancestry_graph(&graph, "root");
        assert_eq!(formatted.nodes.len(), 1);
        assert!(formatted.edges.is_empty());
        assert_eq!(formatted.bounds.width, DEPENDENCY_NODE_WIDTH);
        assert_eq!(formatted.bounds.height, NODE_HEIGHT);
    }
}
