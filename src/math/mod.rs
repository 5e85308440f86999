pub mod error;
pub mod types;
pub mod utils;
pub mod voronoi;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        types::*,
        voronoi::{
            builder::{SweepStatistics, VoronoiGenerator},
            config::VoronoiConfig,
            graph_edge::GraphEdge,
            site::Site,
            voronoi_edges,
        },
    };
}
