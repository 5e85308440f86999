// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
///
/// Dient sowohl als Clip-Rechteck der Ausgabe als auch als Hülle der
/// Site-Menge, aus der die Hash-Tabellen der Sweepline dimensioniert werden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point,
    pub max: Point,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point, max: Point) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {} > max {}", min, max),
            });
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: non-finite corner {} / {}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            min: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Erstellt eine Bounding Box aus Einzelgrenzen.
    /// Vertauschte Grenzen (min > max) werden stillschweigend getauscht.
    pub fn from_extents(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self::from_points(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Erweitert die Bounding Box um verschiedene Margins
    pub fn expand_by(&self, margin_x: f64, margin_y: f64) -> Self {
        Self {
            min: Point::new(self.min.x - margin_x, self.min.y - margin_y),
            max: Point::new(self.max.x + margin_x, self.max.y + margin_y),
        }
    }

    /// Erweitert die Box relativ zu ihrer Größe (`factor` = 0.1 → 10% je Seite).
    /// Entartete Achsen (Breite oder Höhe 0) bekommen mindestens `min_margin`.
    pub fn pad(&self, factor: f64, min_margin: f64) -> Self {
        let margin_x = (self.width() * factor).max(min_margin);
        let margin_y = (self.height() * factor).max(min_margin);
        self.expand_by(margin_x, margin_y)
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,                           // unten links
            Point::new(self.max.x, self.min.y), // unten rechts
            self.max,                           // oben rechts
            Point::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D({} to {})", self.min, self.max)
    }
}
