// src/math/voronoi/site.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point},
    utils::buckets::sqrt_site_count,
};
use std::cmp::Ordering;

/// Ein Punkt, den die Sweepline kennt.
///
/// `Generator` ist eine Eingabe-Site mit ihrem Index in der Aufrufer-Liste,
/// `Vertex` ein während des Sweeps entdeckter Voronoi-Knoten mit laufender Nummer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Site {
    Generator { coord: Point, index: usize },
    Vertex { coord: Point, index: usize },
}

impl Site {
    pub fn coord(&self) -> Point {
        match *self {
            Site::Generator { coord, .. } | Site::Vertex { coord, .. } => coord,
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            Site::Generator { index, .. } | Site::Vertex { index, .. } => index,
        }
    }

    pub fn is_generator(&self) -> bool {
        matches!(self, Site::Generator { .. })
    }

    pub fn distance_to(&self, other: &Site) -> f64 {
        self.coord().distance_to(other.coord())
    }
}

/// Sweep-Reihenfolge: aufsteigend nach y, bei Gleichstand nach x.
pub fn sweep_order(a: Point, b: Point) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Hält die sortierten Eingabe-Sites und liefert sie einzeln in Sweep-Reihenfolge.
///
/// Der Store arbeitet auf einer Kopie; die Arrays des Aufrufers werden nie verändert.
/// Als `Iterator` ist er ein einmaliger Vorwärts-Cursor ohne Zurückspulen.
///
/// Sites mit identischen Koordinaten werden zu einer zusammengefasst; es
/// bleibt die mit dem kleinsten Eingabe-Index.
#[derive(Debug, Clone)]
pub struct SiteStore {
    sites: Vec<Site>,
    cursor: usize,
    bounds: Bounds2D,
    collapsed: usize,
}

impl SiteStore {
    pub fn new(xs: &[f64], ys: &[f64]) -> MathResult<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::MismatchedCoordinates {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        let points: Vec<Point> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::from_points(&points)
    }

    pub fn from_points(points: &[Point]) -> MathResult<Self> {
        if points.is_empty() {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }

        let mut sites = Vec::with_capacity(points.len());
        for (index, &coord) in points.iter().enumerate() {
            if !coord.is_finite() {
                return Err(MathError::NonFiniteCoordinate {
                    index,
                    x: coord.x,
                    y: coord.y,
                });
            }
            sites.push(Site::Generator { coord, index });
        }

        let bounds = Bounds2D::from_points_iter(sites.iter().map(Site::coord)).ok_or(
            MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            },
        )?;

        // stabil: bei gleichen Koordinaten steht der kleinere Index vorn
        sites.sort_by(|a, b| sweep_order(a.coord(), b.coord()));
        let before = sites.len();
        sites.dedup_by(|later, earlier| later.coord() == earlier.coord());

        Ok(Self {
            collapsed: before - sites.len(),
            sites,
            cursor: 0,
            bounds,
        })
    }

    /// Anzahl der unterschiedlichen Sites (unabhängig vom Cursor)
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Wie viele Eingaben als Duplikate verworfen wurden
    pub fn collapsed(&self) -> usize {
        self.collapsed
    }

    /// Hülle der Site-Menge (nicht das Clip-Rechteck der Ausgabe)
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// `floor(sqrt(n + 4))`, Basisgröße für Beachline-Hash und Event-Buckets.
    pub fn sqrt_site_count(&self) -> usize {
        sqrt_site_count(self.sites.len())
    }

    /// Sites in Sweep-Reihenfolge, ohne den Cursor zu bewegen
    pub fn sorted(&self) -> &[Site] {
        &self.sites
    }
}

impl Iterator for SiteStore {
    type Item = Site;

    fn next(&mut self) -> Option<Site> {
        let site = self.sites.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(site)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sites.len() - self.cursor;
        (remaining, Some(remaining))
    }
}
