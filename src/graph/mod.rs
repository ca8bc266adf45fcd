//! Graph formatting: turning backend node/edge maps into positioned,
//! render-ready geometry.
//!
//! Two variants are provided. [`ancestry::format_ancestry_graph`] lays out a
//! root plus linear ancestor branches on a fixed grid.
//! [`formatter::format_dependency_graph`] and
//! [`formatter::format_workflow_graph`] translate general DAGs through the
//! hierarchical [`layout`] engine. All formatting is pure and recomputed from
//! scratch per input graph, so callers can simply re-run it when the source
//! graph changes.

pub mod ancestry;
pub mod formatter;
pub mod layout;

pub use ancestry::format_ancestry_graph;
pub use formatter::{format_dependency_graph, format_workflow_graph};
pub use layout::{Direction, LayoutEdge, LayoutNode};

use crate::model::GraphNode;
use serde::Serialize;

/// Fixed width of a dependency-graph node.
pub const DEPENDENCY_NODE_WIDTH: f64 = 250.0;
/// Fixed width of a workflow-job node.
pub const JOB_NODE_WIDTH: f64 = 350.0;
/// Fixed height of every node kind.
pub const NODE_HEIGHT: f64 = 75.0;
/// Horizontal gap between ancestry branches.
pub const BRANCH_GAP: f64 = 40.0;
/// Vertical step between consecutive nodes within an ancestry branch.
pub const BRANCH_STEP: f64 = 100.0;
/// Gap between layout ranks.
pub const RANK_GAP: f64 = 60.0;
/// Gap between siblings within a rank.
pub const SIBLING_GAP: f64 = 40.0;
/// Magnitude of the cubic control-point offset on edge curves.
pub const CURVE_OFFSET: f64 = 40.0;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Overall content extent of a formatted graph, origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// A node with its final position and fixed dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data: GraphNode,
}

/// Smooth cubic curve for one edge.
///
/// Control points sit at a fixed offset from each endpoint along the layout
/// axis, giving a consistent rounded look regardless of node distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeCurve {
    pub start: Point,
    pub control_start: Point,
    pub control_end: Point,
    pub end: Point,
}

impl EdgeCurve {
    /// SVG path data for this curve.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control_start.x,
            self.control_start.y,
            self.control_end.x,
            self.control_end.y,
            self.end.x,
            self.end.y
        )
    }
}

/// An edge in the layout consumer's direction, which may be the reverse of
/// the semantic parent/child direction in the source graph.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub curve: EdgeCurve,
}

/// A fully formatted graph ready for rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormattedGraph {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
    pub bounds: Bounds,
}

impl FormattedGraph {
    /// Empty graph with zero bounds, used for absent input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Build the cubic curve for an edge between two placed nodes.
#[must_use]
pub fn edge_curve(from: &PlacedNode, to: &PlacedNode, direction: Direction) -> EdgeCurve {
    match direction {
        Direction::Down => {
            let start = Point {
                x: from.x + from.width / 2.0,
                y: from.y + from.height,
            };
            let end = Point {
                x: to.x + to.width / 2.0,
                y: to.y,
            };
            EdgeCurve {
                start,
                control_start: Point {
                    x: start.x,
                    y: start.y + CURVE_OFFSET,
                },
                control_end: Point {
                    x: end.x,
                    y: end.y - CURVE_OFFSET,
                },
                end,
            }
        }
        Direction::Right => {
            let start = Point {
                x: from.x + from.width,
                y: from.y + from.height / 2.0,
            };
            let end = Point {
                x: to.x,
                y: to.y + to.height / 2.0,
            };
            EdgeCurve {
                start,
                control_start: Point {
                    x: start.x + CURVE_OFFSET,
                    y: start.y,
                },
                control_end: Point {
                    x: end.x - CURVE_OFFSET,
                    y: end.y,
                },
                end,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> PlacedNode {
        PlacedNode {
            id: id.to_string(),
            x,
            y,
            width: DEPENDENCY_NODE_WIDTH,
            height: NODE_HEIGHT,
            data: GraphNode {
                domain: String::new(),
                kind: "image".to_string(),
                name: id.to_string(),
                labels: None,
            },
        }
    }

    #[test]
    fn test_downward_curve_offsets_vertically() {
        let from = node("a", 0.0, 0.0);
        let to = node("b", 0.0, 200.0);
        let curve = edge_curve(&from, &to, Direction::Down);

        assert_eq!(curve.start.y, NODE_HEIGHT);
        assert_eq!(curve.end.y, 200.0);
        assert_eq!(curve.control_start.y, curve.start.y + CURVE_OFFSET);
        assert_eq!(curve.control_end.y, curve.end.y - CURVE_OFFSET);
        // Control points stay on the endpoint verticals.
        assert_eq!(curve.control_start.x, curve.start.x);
        assert_eq!(curve.control_end.x, curve.end.x);
    }

    #[test]
    fn test_rightward_curve_offsets_horizontally() {
        let from = node("a", 0.0, 0.0);
        let to = node("b", 400.0, 0.0);
        let curve = edge_curve(&from, &to, Direction::Right);

        assert_eq!(curve.start.x, DEPENDENCY_NODE_WIDTH);
        assert_eq!(curve.end.x, 400.0);
        assert_eq!(curve.control_start.x, curve.start.x + CURVE_OFFSET);
        assert_eq!(curve.control_end.x, curve.end.x - CURVE_OFFSET);
    }

    #[test]
    fn test_svg_path_shape() {
        let from = node("a", 0.0, 0.0);
        let to = node("b", 0.0, 200.0);
        let path = edge_curve(&from, &to, Direction::Down).to_svg_path();
        assert!(path.starts_with("M 125 75 C "), "got: {path}");
    }
}
