// src/math/voronoi/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Bounds2D,
};
use serde::{Deserialize, Serialize};

/// Konfiguration für die Berechnung eines geclippten Voronoi-Diagramms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoronoiConfig {
    /// Kanten zwischen Sites, die näher als dieser Abstand liegen, werden verworfen.
    pub min_distance_between_sites: f64,
    /// Explizites Clip-Rechteck. Ohne Angabe wird die Hülle der Sites verwendet,
    /// vergrößert um `boundary_padding_factor`.
    pub clip_bounds: Option<Bounds2D>,
    /// Relativer Rand um die Site-Hülle, falls kein Clip-Rechteck gesetzt ist
    /// (z.B. 0.1 für 10% je Seite).
    pub boundary_padding_factor: f64,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            min_distance_between_sites: 0.0,
            clip_bounds: None,
            boundary_padding_factor: 0.15,
        }
    }
}

impl VoronoiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance_between_sites = distance;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds2D) -> Self {
        self.clip_bounds = Some(bounds);
        self
    }

    pub fn with_padding_factor(mut self, factor: f64) -> Self {
        self.boundary_padding_factor = factor;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.min_distance_between_sites.is_finite() || self.min_distance_between_sites < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Minimum distance between sites must be finite and non-negative, got {}",
                    self.min_distance_between_sites
                ),
            });
        }
        if !self.boundary_padding_factor.is_finite() || self.boundary_padding_factor < 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Boundary padding factor must be finite and non-negative, got {}",
                    self.boundary_padding_factor
                ),
            });
        }
        if let Some(bounds) = &self.clip_bounds {
            if !bounds.is_valid() {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Clip bounds are not a valid rectangle: {}", bounds),
                });
            }
        }
        Ok(())
    }
}
