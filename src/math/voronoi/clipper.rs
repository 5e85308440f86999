// src/math/voronoi/clipper.rs

use crate::math::{
    types::{Bounds2D, Point},
    voronoi::{bisector::BisectorEdge, graph_edge::GraphEdge},
};

/// Ergebnis eines Clip-Vorgangs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipOutcome {
    Emitted(GraphEdge),
    /// Erzeugende Sites liegen näher als der Mindestabstand (oder fallen zusammen)
    Suppressed,
    /// Sichtbarer Teil liegt komplett außerhalb des Rechtecks
    Outside,
}

/// Schneidet (halb-)unendliche Bisektoren auf das Clip-Rechteck zu.
#[derive(Debug, Clone, Copy)]
pub struct EdgeClipper {
    bounds: Bounds2D,
    min_distance: f64,
}

impl EdgeClipper {
    pub fn new(bounds: Bounds2D, min_distance: f64) -> Self {
        Self {
            bounds,
            min_distance,
        }
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Bekannte Endpunkte begrenzen die Linie, sonst die Rechteckkanten.
    pub fn clip(&self, edge: &BisectorEdge) -> ClipOutcome {
        if edge.generator_distance() < self.min_distance || !edge.has_finite_coefficients() {
            return ClipOutcome::Suppressed;
        }

        let Bounds2D { min, max } = self.bounds;
        let (a, b, c) = (edge.a, edge.b, edge.c);

        let (s1, s2) = if edge.is_x_normalized() && b >= 0.0 {
            (edge.endpoints[1], edge.endpoints[0])
        } else {
            (edge.endpoints[0], edge.endpoints[1])
        };
        let s1 = s1.map(|s| s.coord());
        let s2 = s2.map(|s| s.coord());

        let (mut x1, mut y1, mut x2, mut y2);
        if edge.is_x_normalized() {
            // s1 ist das untere, s2 das obere Ende
            if s1.is_some_and(|p| p.y > max.y) || s2.is_some_and(|p| p.y < min.y) {
                return ClipOutcome::Outside;
            }
            y1 = match s1 {
                Some(p) if p.y > min.y => p.y,
                _ => min.y,
            };
            if y1 > max.y {
                y1 = max.y;
            }
            x1 = c - b * y1;

            y2 = match s2 {
                Some(p) if p.y < max.y => p.y,
                _ => max.y,
            };
            if y2 < min.y {
                y2 = min.y;
            }
            x2 = c - b * y2;

            if (x1 > max.x && x2 > max.x) || (x1 < min.x && x2 < min.x) {
                return ClipOutcome::Outside;
            }
            if x1 > max.x {
                x1 = max.x;
                y1 = (c - x1) / b;
            }
            if x1 < min.x {
                x1 = min.x;
                y1 = (c - x1) / b;
            }
            if x2 > max.x {
                x2 = max.x;
                y2 = (c - x2) / b;
            }
            if x2 < min.x {
                x2 = min.x;
                y2 = (c - x2) / b;
            }
        } else {
            // s1 ist das linke, s2 das rechte Ende
            if s1.is_some_and(|p| p.x > max.x) || s2.is_some_and(|p| p.x < min.x) {
                return ClipOutcome::Outside;
            }
            x1 = match s1 {
                Some(p) if p.x > min.x => p.x,
                _ => min.x,
            };
            if x1 > max.x {
                x1 = max.x;
            }
            y1 = c - a * x1;

            x2 = match s2 {
                Some(p) if p.x < max.x => p.x,
                _ => max.x,
            };
            if x2 < min.x {
                x2 = min.x;
            }
            y2 = c - a * x2;

            if (y1 > max.y && y2 > max.y) || (y1 < min.y && y2 < min.y) {
                return ClipOutcome::Outside;
            }
            if y1 > max.y {
                y1 = max.y;
                x1 = (c - y1) / a;
            }
            if y1 < min.y {
                y1 = min.y;
                x1 = (c - y1) / a;
            }
            if y2 > max.y {
                y2 = max.y;
                x2 = (c - y2) / a;
            }
            if y2 < min.y {
                y2 = min.y;
                x2 = (c - y2) / a;
            }
        }

        let start = Point::new(x1, y1);
        let end = Point::new(x2, y2);
        if !start.is_finite() || !end.is_finite() {
            return ClipOutcome::Outside;
        }

        ClipOutcome::Emitted(GraphEdge {
            start,
            end,
            site_a: edge.region[0].index(),
            site_b: edge.region[1].index(),
        })
    }
}
