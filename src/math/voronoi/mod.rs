// src/math/voronoi/mod.rs

pub mod beachline;
pub mod bisector;
pub mod builder;
pub mod clipper;
pub mod config;
pub mod event_queue;
pub mod graph_edge;
pub mod predicates;
pub mod site;

pub use builder::{SweepState, SweepStatistics, VoronoiGenerator};
pub use config::VoronoiConfig;
pub use graph_edge::GraphEdge;
pub use site::Site;

use crate::math::{error::MathResult, types::Bounds2D};

/// Kurzform für einen einzelnen Lauf mit festem Clip-Rechteck.
pub fn voronoi_edges(
    xs: &[f64],
    ys: &[f64],
    bounds: Bounds2D,
    min_distance: f64,
) -> MathResult<Vec<GraphEdge>> {
    let config = VoronoiConfig::new()
        .with_min_distance(min_distance)
        .with_bounds(bounds);
    VoronoiGenerator::new(config)?.generate(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::error::MathError;

    #[test]
    fn test_voronoi_edges_shortcut() {
        let edges = voronoi_edges(
            &[0.0, 10.0],
            &[0.0, 0.0],
            Bounds2D::from_extents(-5.0, 15.0, -5.0, 5.0),
            0.0,
        )
        .unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_string(), "(5,-5)->(5,5)");
    }

    #[test]
    fn test_voronoi_edges_rejects_negative_distance() {
        let result = voronoi_edges(
            &[0.0, 10.0],
            &[0.0, 0.0],
            Bounds2D::from_extents(0.0, 1.0, 0.0, 1.0),
            -1.0,
        );
        assert!(matches!(
            result,
            Err(MathError::InvalidConfiguration { .. })
        ));
    }
}
