//! Wire model for backend-supplied graphs.
//!
//! A graph arrives as a node map plus an adjacency map whose boolean flag
//! marks whether the adjacent node is a parent of the entry's node. The raw
//! structure may encode a tree or a general DAG; nodes and edges are
//! immutable once received and any positioned view is derived from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single graph node as supplied by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Origin domain of the node (registry host, CI system, ...)
    #[serde(default)]
    pub domain: String,
    /// Node kind, e.g. `image`, `package`, `job`
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    /// Optional display labels keyed by label name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<IndexMap<String, String>>,
}

/// Node and adjacency maps for one image's dependency or ancestry graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageGraph {
    /// Node id → node data
    #[serde(default)]
    pub nodes: IndexMap<String, GraphNode>,
    /// Node id → (adjacent node id → adjacent-is-parent flag)
    #[serde(default)]
    pub edges: IndexMap<String, IndexMap<String, bool>>,
}

impl ImageGraph {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of the parents of `id`, in adjacency insertion order.
    pub fn parents_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> {
        self.edges
            .get(id)
            .into_iter()
            .flatten()
            .filter(|(_, is_parent)| **is_parent)
            .map(|(parent, _)| parent.as_str())
    }

    /// The designated "first parent" of `id`: the first adjacent node
    /// flagged as a parent, if any.
    #[must_use]
    pub fn first_parent(&self, id: &str) -> Option<&str> {
        self.parents_of(id).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_parent_follows_insertion_order() {
        let json = r#"{
            "nodes": {
                "a": {"domain": "docker.io", "type": "image", "name": "a"},
                "b": {"domain": "docker.io", "type": "image", "name": "b"},
                "c": {"domain": "docker.io", "type": "image", "name": "c"}
            },
            "edges": {
                "a": {"b": true, "c": true},
                "b": {"a": false}
            }
        }"#;
        let graph: ImageGraph = serde_json::from_str(json).expect("parse");
        assert_eq!(graph.first_parent("a"), Some("b"));
        assert_eq!(graph.parents_of("a").count(), 2);
        assert_eq!(graph.first_parent("b"), None);
        assert_eq!(graph.first_parent("missing"), None);
    }

    #[test]
    fn test_empty_graph_deserializes() {
        let graph: ImageGraph = serde_json::from_str("{}").expect("parse");
        assert!(graph.is_empty());
    }
}
