// ./src/lib.rs

// Eigene Module deklarieren
pub mod math;

pub use math::prelude;
pub use math::voronoi::voronoi_edges;
