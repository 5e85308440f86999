// src/math/voronoi/graph_edge.rs

use crate::math::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein sichtbares, geclipptes Stück Voronoi-Kante.
///
/// `site_a` und `site_b` sind die (nullbasierten) Eingabe-Indizes der beiden
/// Sites, deren Zellen die Kante trennt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub start: Point,
    pub end: Point,
    pub site_a: usize,
    pub site_b: usize,
}

impl GraphEdge {
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Prüft, ob ein Endpunkt auf die ganzzahligen Koordinaten `(x, y)` abgeschnitten wird.
    pub fn has_vertex_int(&self, x: i64, y: i64) -> bool {
        let hits = |p: Point| p.x as i64 == x && p.y as i64 == y;
        hits(self.start) || hits(self.end)
    }

    /// Trennt die Kante die Zellen von `a` und `b` (Reihenfolge egal)?
    pub fn separates(&self, a: usize, b: usize) -> bool {
        (self.site_a == a && self.site_b == b) || (self.site_a == b && self.site_b == a)
    }
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start, self.end)
    }
}

impl From<GraphEdge> for geo::Line<f64> {
    fn from(edge: GraphEdge) -> Self {
        geo::Line::new(geo::Coord::from(edge.start), geo::Coord::from(edge.end))
    }
}
