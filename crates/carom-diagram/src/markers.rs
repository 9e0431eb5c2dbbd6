//! Diamond-marker layout along the four cushion edges.
//!
//! Markers sit centered in the band: 9 evenly spaced along each long edge
//! (bottom, top), 5 along each short edge (left, right). Positions are
//! pure geometry; the label text comes from the active `LabelSystem` and
//! is not required to equal the marker index.

use glam::Vec2;

use crate::labels::{LabelSystem, LONG_EDGE_MARKERS, SHORT_EDGE_MARKERS};
use crate::table::TableSpec;

/// One of the four cushion edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

impl Edge {
    /// Layout order. All four edges, always — a source variant that
    /// skipped the top edge in one pass was a defect, not a behavior.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Top, Edge::Left, Edge::Right];

    /// How this edge's labels align relative to the marker dot, pointing
    /// away from the playing surface.
    pub fn label_anchor(self) -> LabelAnchor {
        match self {
            Edge::Bottom => LabelAnchor::Below,
            Edge::Top => LabelAnchor::Above,
            Edge::Left => LabelAnchor::LeftOf,
            Edge::Right => LabelAnchor::RightOf,
        }
    }
}

/// Outward label alignment for an edge (legibility only, not a data
/// contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Centered horizontally, text below the anchor point.
    Below,
    /// Centered horizontally, text above the anchor point.
    Above,
    /// Right-aligned, text to the left of the anchor point.
    LeftOf,
    /// Left-aligned, text to the right of the anchor point.
    RightOf,
}

/// A laid-out diamond marker with its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub edge: Edge,
    pub index: usize,
    /// Dot center, in table space.
    pub pos: Vec2,
    pub label: String,
}

/// Compute all 28 markers for a table under the given label system.
///
/// Long edges: `x = i * height / 8` for i in 0..=8, dot centered in the
/// band at `y = -band/2` (bottom) or `y = width + band/2` (top).
/// Short edges: `y = j * width / 4` for j in 0..=4 at `x = -band/2` or
/// `x = height + band/2`.
pub fn layout_markers(table: &TableSpec, system: LabelSystem) -> Vec<Marker> {
    let mut markers =
        Vec::with_capacity(2 * LONG_EDGE_MARKERS + 2 * SHORT_EDGE_MARKERS);
    let half_band = table.band / 2.0;

    for edge in Edge::ALL {
        match edge {
            Edge::Bottom | Edge::Top => {
                let y = if edge == Edge::Bottom {
                    -half_band
                } else {
                    table.width + half_band
                };
                for i in 0..LONG_EDGE_MARKERS {
                    let x = i as f32 * table.height / (LONG_EDGE_MARKERS - 1) as f32;
                    markers.push(Marker {
                        edge,
                        index: i,
                        pos: Vec2::new(x, y),
                        label: system.long_edge_label(i),
                    });
                }
            }
            Edge::Left | Edge::Right => {
                let x = if edge == Edge::Left {
                    -half_band
                } else {
                    table.height + half_band
                };
                for j in 0..SHORT_EDGE_MARKERS {
                    let y = j as f32 * table.width / (SHORT_EDGE_MARKERS - 1) as f32;
                    markers.push(Marker {
                        edge,
                        index: j,
                        pos: Vec2::new(x, y),
                        label: system.short_edge_label(j),
                    });
                }
            }
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers_on(edge: Edge) -> Vec<Marker> {
        layout_markers(&TableSpec::default(), LabelSystem::Standard)
            .into_iter()
            .filter(|m| m.edge == edge)
            .collect()
    }

    #[test]
    fn twenty_eight_markers_total() {
        let markers = layout_markers(&TableSpec::default(), LabelSystem::Standard);
        assert_eq!(markers.len(), 28);
        assert_eq!(markers_on(Edge::Bottom).len(), 9);
        assert_eq!(markers_on(Edge::Top).len(), 9);
        assert_eq!(markers_on(Edge::Left).len(), 5);
        assert_eq!(markers_on(Edge::Right).len(), 5);
    }

    #[test]
    fn long_edge_positions_are_eighths() {
        let table = TableSpec::default();
        for (edge, y) in [(Edge::Bottom, -2.5), (Edge::Top, 154.9)] {
            for (i, m) in markers_on(edge).iter().enumerate() {
                assert_eq!(m.index, i);
                assert!((m.pos.x - i as f32 * table.height / 8.0).abs() < 1e-4);
                assert!((m.pos.y - y).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn short_edge_positions_are_quarters() {
        let table = TableSpec::default();
        for (edge, x) in [(Edge::Left, -2.5), (Edge::Right, 305.3)] {
            for (j, m) in markers_on(edge).iter().enumerate() {
                assert_eq!(m.index, j);
                assert!((m.pos.y - j as f32 * table.width / 4.0).abs() < 1e-4);
                assert!((m.pos.x - x).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn labels_follow_the_system() {
        let markers = layout_markers(&TableSpec::default(), LabelSystem::System50);
        let bottom: Vec<&str> = markers
            .iter()
            .filter(|m| m.edge == Edge::Bottom)
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(bottom, ["0", "5", "10", "15", "20", "25", "30", "35", "40"]);

        let left: Vec<&str> = markers
            .iter()
            .filter(|m| m.edge == Edge::Left)
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(left, ["0", "10", "20", "30", "40"]);
    }

    #[test]
    fn anchors_point_outward() {
        assert_eq!(Edge::Bottom.label_anchor(), LabelAnchor::Below);
        assert_eq!(Edge::Top.label_anchor(), LabelAnchor::Above);
        assert_eq!(Edge::Left.label_anchor(), LabelAnchor::LeftOf);
        assert_eq!(Edge::Right.label_anchor(), LabelAnchor::RightOf);
    }

    #[test]
    fn zero_band_puts_dots_on_the_edge() {
        let table = TableSpec::new(302.8, 152.4, 0.0).unwrap();
        let markers = layout_markers(&table, LabelSystem::Standard);
        let first_bottom = markers.iter().find(|m| m.edge == Edge::Bottom).unwrap();
        assert_eq!(first_bottom.pos.y, 0.0);
    }
}
