// src/math/voronoi/bisector.rs

use crate::math::voronoi::site::Site;

/// Seitenmarker eines Halfedges bzw. Index in `region` / `endpoints`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn slot(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Stabiler Handle auf eine Kante im Kanten-Arena des Sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// Mittelsenkrechte zwischen zwei Generator-Sites: `a·x + b·y = c`.
///
/// Der betragsmäßig größere Koeffizient ist exakt `1.0`. Solange keine
/// Endpunkte bekannt sind, ist die Linie in beide Richtungen unendlich.
#[derive(Debug, Clone)]
pub struct BisectorEdge {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// `region[0]` links, `region[1]` rechts
    pub region: [Site; 2],
    pub endpoints: [Option<Site>; 2],
    /// Laufende Nummer in Erzeugungsreihenfolge
    pub index: usize,
    /// Wurde bereits durch den Clipper geschickt
    pub clipped: bool,
}

impl BisectorEdge {
    /// Baut die normalisierte Mittelsenkrechte von `s1` und `s2`.
    ///
    /// Ist |dx| > |dy|, wird `a = 1` gesetzt, sonst `b = 1`; damit bleibt die
    /// freie Variable immer die Achse mit der größeren Ausdehnung.
    pub fn bisect(s1: Site, s2: Site, index: usize) -> Self {
        let p1 = s1.coord();
        let p2 = s2.coord();
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let c = p1.x * dx + p1.y * dy + (dx * dx + dy * dy) * 0.5;

        let (a, b, c) = if dx.abs() > dy.abs() {
            (1.0, dy / dx, c / dx)
        } else {
            (dx / dy, 1.0, c / dy)
        };

        Self {
            a,
            b,
            c,
            region: [s1, s2],
            endpoints: [None, None],
            index,
            clipped: false,
        }
    }

    /// `true` wenn die Linie in der Form `x = c - b·y` vorliegt.
    pub fn is_x_normalized(&self) -> bool {
        self.a == 1.0
    }

    pub fn region(&self, side: Side) -> Site {
        self.region[side.slot()]
    }

    pub fn endpoint(&self, side: Side) -> Option<Site> {
        self.endpoints[side.slot()]
    }

    /// Setzt einen Endpunkt; `true`, sobald beide Endpunkte bekannt sind.
    pub fn set_endpoint(&mut self, side: Side, vertex: Site) -> bool {
        self.endpoints[side.slot()] = Some(vertex);
        self.endpoints[side.opposite().slot()].is_some()
    }

    /// Abstand der beiden erzeugenden Sites
    pub fn generator_distance(&self) -> f64 {
        self.region[0].distance_to(&self.region[1])
    }

    pub fn has_finite_coefficients(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}
