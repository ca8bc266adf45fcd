//! Hierarchical layout engine.
//!
//! A deliberately small layered layout: nodes are ranked by longest path from
//! the roots (nodes with no incoming edges), placed rank by rank along the
//! main axis and centered on the cross axis in input order. There is no
//! crossing minimization or collision resolution beyond the fixed grid; the
//! domain data is expected to be small, shallow graphs.

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{Bounds, Point};

/// Main-axis direction of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ranks grow downward (dependency graphs)
    Down,
    /// Ranks grow rightward (workflow job graphs)
    Right,
}

/// Layout input: a node with fixed dimensions.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

/// Layout input: a directed edge between node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
}

/// Layout output: top-left positions per node id, plus content bounds.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub positions: IndexMap<String, Point>,
    pub bounds: Bounds,
}

/// Compute a layered layout for the given nodes and edges.
///
/// Edges referencing unknown node ids are ignored. Nodes unreachable from any
/// root (pure cycles) fall back to rank 0 so they still receive a position.
#[must_use]
pub fn layout(nodes: &[LayoutNode], edges: &[LayoutEdge], direction: Direction) -> Layout {
    if nodes.is_empty() {
        return Layout::default();
    }

    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges: Vec<&LayoutEdge> = edges
        .iter()
        .filter(|e| known.contains(e.from.as_str()) && known.contains(e.to.as_str()))
        .collect();

    let ranks = rank_nodes(nodes, &edges);
    let rank_count = ranks.values().copied().max().unwrap_or(0) + 1;

    // Group nodes per rank, preserving input order within each rank.
    let mut by_rank: Vec<Vec<&LayoutNode>> = vec![Vec::new(); rank_count];
    for node in nodes {
        by_rank[ranks[node.id.as_str()]].push(node);
    }

    // Per-rank main-axis extent and cross-axis slot width.
    let slot = nodes
        .iter()
        .map(|n| match direction {
            Direction::Down => n.width,
            Direction::Right => n.height,
        })
        .fold(0.0, f64::max)
        + super::SIBLING_GAP;

    let mut positions: IndexMap<String, Point> = IndexMap::new();
    let mut main_offset = 0.0;
    for row in &by_rank {
        let rank_extent = row
            .iter()
            .map(|n| match direction {
                Direction::Down => n.height,
                Direction::Right => n.width,
            })
            .fold(0.0, f64::max);

        for (i, node) in row.iter().enumerate() {
            let cross = (i as f64 - (row.len() as f64 - 1.0) / 2.0) * slot;
            let point = match direction {
                Direction::Down => Point {
                    x: cross,
                    y: main_offset,
                },
                Direction::Right => Point {
                    x: main_offset,
                    y: cross,
                },
            };
            positions.insert(node.id.clone(), point);
        }

        main_offset += rank_extent + super::RANK_GAP;
    }

    normalize(nodes, positions)
}

/// Longest-path rank from the root set, so every edge advances at least one
/// rank and never points sideways within a layer.
fn rank_nodes(nodes: &[LayoutNode], edges: &[&LayoutEdge]) -> HashMap<String, usize> {
    let mut indegree: HashMap<&str, usize> = nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        *indegree.entry(edge.to.as_str()).or_insert(0) += 1;
        outgoing
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
    }

    let mut ranks: HashMap<String, usize> =
        nodes.iter().map(|n| (n.id.clone(), 0)).collect();
    let mut queue: VecDeque<&str> = nodes
        .iter()
        .filter(|n| indegree[n.id.as_str()] == 0)
        .map(|n| n.id.as_str())
        .collect();

    while let Some(id) = queue.pop_front() {
        let rank = ranks[id];
        if let Some(children) = outgoing.get(id) {
            for child in children {
                let entry = ranks.get_mut(*child).expect("edges filtered to known ids");
                *entry = (*entry).max(rank + 1);

                let remaining = indegree.get_mut(*child).expect("known id");
                *remaining -= 1;
                if *remaining == 0 {
                    queue.push_back(*child);
                }
            }
        }
    }

    // Nodes on cycles never drain their in-degree; they keep rank 0 rather
    // than being dropped.
    ranks
}

/// Shift positions so the content's top-left corner sits at the origin and
/// compute the resulting bounds.
fn normalize(nodes: &[LayoutNode], mut positions: IndexMap<String, Point>) -> Layout {
    let dims: HashMap<&str, (f64, f64)> = nodes
        .iter()
        .map(|n| (n.id.as_str(), (n.width, n.height)))
        .collect();

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (id, point) in &positions {
        let (width, height) = dims[id.as_str()];
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x + width);
        max_y = max_y.max(point.y + height);
    }

    for point in positions.values_mut() {
        point.x -= min_x;
        point.y -= min_y;
    }

    Layout {
        positions,
        bounds: Bounds {
            width: max_x - min_x,
            height: max_y - min_y,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> LayoutNode {
        LayoutNode {
            id: id.to_string(),
            width: 250.0,
            height: 75.0,
        }
    }

    fn edge(from: &str, to: &str) -> LayoutEdge {
        LayoutEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_linear_chain_ranks_downward() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![edge("a", "b"), edge("b", "c")];
        let layout = layout(&nodes, &edges, Direction::Down);

        let a = layout.positions["a"];
        let b = layout.positions["b"];
        let c = layout.positions["c"];
        assert_eq!(a.y, 0.0);
        assert!(b.y > a.y);
        assert!(c.y > b.y);
        // Single node per rank: all centered on the same vertical.
        assert_eq!(a.x, b.x);
        assert_eq!(b.x, c.x);
    }

    #[test]
    fn test_diamond_shares_middle_rank() {
        // a -> b, a -> c, b -> d, c -> d
        let nodes = vec![node("a"), node("b"), node("c"), node("d")];
        let edges = vec![edge("a", "b"), edge("a", "c"), edge("b", "d"), edge("c", "d")];
        let layout = layout(&nodes, &edges, Direction::Down);

        let b = layout.positions["b"];
        let c = layout.positions["c"];
        assert_eq!(b.y, c.y, "siblings share a rank");
        assert!(b.x < c.x, "siblings keep input order");
        assert!(layout.positions["d"].y > b.y);
    }

    #[test]
    fn test_rightward_direction_swaps_axes() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![edge("a", "b")];
        let layout = layout(&nodes, &edges, Direction::Right);

        let a = layout.positions["a"];
        let b = layout.positions["b"];
        assert_eq!(a.x, 0.0);
        assert!(b.x > a.x);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_bounds_cover_all_nodes() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![edge("a", "b"), edge("a", "c")];
        let layout = layout(&nodes, &edges, Direction::Down);

        for (id, point) in &layout.positions {
            assert!(point.x >= 0.0, "{id} x normalized");
            assert!(point.y >= 0.0, "{id} y normalized");
            assert!(point.x + 250.0 <= layout.bounds.width + 1e-9);
            assert!(point.y + 75.0 <= layout.bounds.height + 1e-9);
        }
    }

    #[test]
    fn test_empty_input_yields_zero_bounds() {
        let layout = layout(&[], &[], Direction::Down);
        assert!(layout.positions.is_empty());
        assert_eq!(layout.bounds, Bounds::default());
    }

    #[test]
    fn test_unknown_edge_endpoints_are_ignored() {
        let nodes = vec![node("a")];
        let edges = vec![edge("a", "ghost")];
        let layout = layout(&nodes, &edges, Direction::Down);
        assert_eq!(layout.positions.len(), 1);
    }

    #[test]
    fn test_cycle_falls_back_to_first_rank() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![edge("a", "b"), edge("b", "a")];
        let layout = layout(&nodes, &edges, Direction::Down);
        // No roots exist; both nodes land on rank 0 rather than being dropped.
        assert_eq!(layout.positions.len(), 2);
        assert_eq!(layout.positions["a"].y, layout.positions["b"].y);
    }
}
