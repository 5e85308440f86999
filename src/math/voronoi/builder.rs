// src/math/voronoi/builder.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point},
    utils::constants::MIN_BOUNDS_MARGIN,
    voronoi::{
        beachline::{Beachline, HalfEdgeId},
        bisector::{BisectorEdge, EdgeId, Side},
        clipper::{ClipOutcome, EdgeClipper},
        config::VoronoiConfig,
        event_queue::EventQueue,
        graph_edge::GraphEdge,
        predicates,
        site::{Site, SiteStore},
    },
};
use bevy::log::{debug, trace};

/// Zustand der Sweepline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    Running,
    Done,
}

/// Zähler eines Sweep-Laufs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStatistics {
    /// Unterschiedliche Sites nach dem Zusammenfassen von Duplikaten
    pub site_count: usize,
    pub collapsed_sites: usize,
    pub site_events: usize,
    pub vertex_events: usize,
    pub bisector_count: usize,
    pub vertex_count: usize,
    pub emitted_edges: usize,
    pub suppressed_edges: usize,
    pub outside_edges: usize,
}

/// Berechnet geclippte Voronoi-Kanten mit Fortunes Sweepline-Algorithmus.
///
/// Der Generator selbst ist zustandslos; jeder Aufruf baut Beachline,
/// Event-Queue und Kantenliste neu auf und kann daher beliebig oft
/// wiederverwendet werden.
#[derive(Debug, Clone)]
pub struct VoronoiGenerator {
    config: VoronoiConfig,
}

impl VoronoiGenerator {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?; // Validiert die übergebene Konfiguration
        Ok(Self { config })
    }

    pub fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    /// Kanten für die Sites `(xs[i], ys[i])`, geclippt auf die konfigurierten
    /// Grenzen (oder die gepolsterte Site-Hülle).
    pub fn generate(&self, xs: &[f64], ys: &[f64]) -> MathResult<Vec<GraphEdge>> {
        self.generate_with_statistics(xs, ys).map(|(edges, _)| edges)
    }

    pub fn generate_points(&self, points: &[Point]) -> MathResult<Vec<GraphEdge>> {
        let sites = SiteStore::from_points(points)?;
        let bounds = self.resolve_bounds(&sites);
        Ok(Sweep::new(sites, self.clipper(bounds))?.run().0)
    }

    /// Wie `generate`, aber mit explizitem Clip-Rechteck.
    pub fn generate_in(
        &self,
        xs: &[f64],
        ys: &[f64],
        bounds: Bounds2D,
    ) -> MathResult<Vec<GraphEdge>> {
        if !bounds.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Clip bounds are not a valid rectangle: {}", bounds),
            });
        }
        let sites = SiteStore::new(xs, ys)?;
        Ok(Sweep::new(sites, self.clipper(bounds))?.run().0)
    }

    /// Clip-Rechteck als Einzelgrenzen; vertauschte Grenzen werden korrigiert.
    pub fn generate_voronoi(
        &self,
        xs: &[f64],
        ys: &[f64],
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> MathResult<Vec<GraphEdge>> {
        if ![min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Clip extents must be finite, got x {}..{}, y {}..{}",
                    min_x, max_x, min_y, max_y
                ),
            });
        }
        self.generate_in(xs, ys, Bounds2D::from_extents(min_x, max_x, min_y, max_y))
    }

    pub fn generate_with_statistics(
        &self,
        xs: &[f64],
        ys: &[f64],
    ) -> MathResult<(Vec<GraphEdge>, SweepStatistics)> {
        let sites = SiteStore::new(xs, ys)?;
        let bounds = self.resolve_bounds(&sites);
        Ok(Sweep::new(sites, self.clipper(bounds))?.run())
    }

    fn resolve_bounds(&self, sites: &SiteStore) -> Bounds2D {
        self.config.clip_bounds.unwrap_or_else(|| {
            sites
                .bounds()
                .pad(self.config.boundary_padding_factor, MIN_BOUNDS_MARGIN)
        })
    }

    fn clipper(&self, bounds: Bounds2D) -> EdgeClipper {
        EdgeClipper::new(bounds, self.config.min_distance_between_sites)
    }
}

/// Gesamter veränderlicher Zustand eines einzelnen Laufs.
struct Sweep {
    sites: SiteStore,
    bottom_site: Site,
    next_site: Option<Site>,
    beachline: Beachline,
    queue: EventQueue,
    edges: Vec<BisectorEdge>,
    clipper: EdgeClipper,
    output: Vec<GraphEdge>,
    vertex_count: usize,
    state: SweepState,
    stats: SweepStatistics,
}

impl Sweep {
    fn new(mut sites: SiteStore, clipper: EdgeClipper) -> MathResult<Self> {
        let site_count = sites.len();
        let collapsed_sites = sites.collapsed();
        let site_bounds = sites.bounds();
        let sqrt_sites = sites.sqrt_site_count();

        let bottom_site = sites.next().ok_or(MathError::InsufficientPoints {
            expected: 1,
            actual: 0,
        })?;
        let next_site = sites.next();

        let beachline = Beachline::new(2 * sqrt_sites, site_bounds.min.x, site_bounds.width());
        let queue = EventQueue::new(4 * sqrt_sites, site_bounds.min.y, site_bounds.height());

        debug!(
            "Sweep: {} sites ({} duplicates collapsed), site bounds {}, clip bounds {}, beachline hash {}, event buckets {}",
            site_count,
            collapsed_sites,
            site_bounds,
            clipper.bounds(),
            beachline.hash_size(),
            queue.bucket_count()
        );

        Ok(Self {
            sites,
            bottom_site,
            next_site,
            beachline,
            queue,
            edges: Vec::new(),
            clipper,
            output: Vec::new(),
            vertex_count: 0,
            state: SweepState::Running,
            stats: SweepStatistics {
                site_count,
                collapsed_sites,
                ..Default::default()
            },
        })
    }

    fn run(mut self) -> (Vec<GraphEdge>, SweepStatistics) {
        while self.state == SweepState::Running {
            self.state = self.step();
        }
        self.clip_remaining();

        self.stats.bisector_count = self.edges.len();
        self.stats.vertex_count = self.vertex_count;
        debug!(
            "Sweep done: {} site events, {} vertex events, {} bisectors, {} edges emitted ({} suppressed, {} outside)",
            self.stats.site_events,
            self.stats.vertex_events,
            self.stats.bisector_count,
            self.stats.emitted_edges,
            self.stats.suppressed_edges,
            self.stats.outside_edges
        );
        (self.output, self.stats)
    }

    /// Verarbeitet das nächste Event: Site-Event, wenn die nächste Site (y, x)
    /// vor dem kleinsten Vertex-Event liegt, sonst Vertex-Event.
    fn step(&mut self) -> SweepState {
        let min_event = self.queue.peek_min(self.beachline.nodes());

        match (self.next_site, min_event) {
            (Some(site), None) => self.site_event(site),
            (Some(site), Some(event)) if precedes(site.coord(), event) => self.site_event(site),
            (_, Some(_)) => self.vertex_event(),
            (None, None) => return SweepState::Done,
        }
        SweepState::Running
    }

    fn site_event(&mut self, site: Site) {
        let p = site.coord();
        trace!("Sweep: site event {} at {}", site.index(), p);
        self.stats.site_events += 1;

        let lbnd = self.beachline.find_left_of(p, &self.edges);
        let rbnd = self.beachline.right(lbnd);
        let bot = self
            .beachline
            .right_region(lbnd, &self.edges, self.bottom_site);

        let edge = self.bisect(bot, site);

        let bisector = self.beachline.create(edge, Side::Left);
        self.beachline.insert_after(lbnd, bisector);
        if let Some(vertex) = self.intersect(lbnd, bisector) {
            let nodes = self.beachline.nodes_mut();
            self.queue.delete(nodes, lbnd);
            self.queue.insert(nodes, lbnd, vertex, vertex.distance_to(p));
        }

        let lbnd = bisector;
        let bisector = self.beachline.create(edge, Side::Right);
        self.beachline.insert_after(lbnd, bisector);
        if let Some(vertex) = self.intersect(bisector, rbnd) {
            let nodes = self.beachline.nodes_mut();
            self.queue.insert(nodes, bisector, vertex, vertex.distance_to(p));
        }

        self.next_site = self.sites.next();
    }

    fn vertex_event(&mut self) {
        let Some((lbnd, point)) = self.queue.extract_min(self.beachline.nodes_mut()) else {
            return;
        };
        self.stats.vertex_events += 1;

        let llbnd = self.beachline.left(lbnd);
        let rbnd = self.beachline.right(lbnd);
        let rrbnd = self.beachline.right(rbnd);
        let mut bot = self
            .beachline
            .left_region(lbnd, &self.edges, self.bottom_site);
        let mut top = self
            .beachline
            .right_region(rbnd, &self.edges, self.bottom_site);

        let vertex = self.make_vertex(point);
        trace!("Sweep: vertex event {} at {}", vertex.index(), point);

        self.close_halfedge(lbnd, vertex);
        self.close_halfedge(rbnd, vertex);
        self.beachline.delete(lbnd);
        self.queue.delete(self.beachline.nodes_mut(), rbnd);
        self.beachline.delete(rbnd);

        // Die feste Seite gehört zur Site mit dem größeren y
        let mut side = Side::Left;
        if bot.coord().y > top.coord().y {
            std::mem::swap(&mut bot, &mut top);
            side = Side::Right;
        }

        let edge = self.bisect(bot, top);
        let bisector = self.beachline.create(edge, side);
        self.beachline.insert_after(llbnd, bisector);
        self.endpoint(edge, side.opposite(), vertex);

        let bot_coord = bot.coord();
        if let Some(p) = self.intersect(llbnd, bisector) {
            let nodes = self.beachline.nodes_mut();
            self.queue.delete(nodes, llbnd);
            self.queue.insert(nodes, llbnd, p, p.distance_to(bot_coord));
        }
        if let Some(p) = self.intersect(bisector, rrbnd) {
            let nodes = self.beachline.nodes_mut();
            self.queue.insert(nodes, bisector, p, p.distance_to(bot_coord));
        }
    }

    fn bisect(&mut self, s1: Site, s2: Site) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(BisectorEdge::bisect(s1, s2, id.0));
        id
    }

    fn intersect(&self, first: HalfEdgeId, second: HalfEdgeId) -> Option<Point> {
        predicates::intersect(
            self.beachline.node(first),
            self.beachline.node(second),
            &self.edges,
        )
    }

    /// Vergibt die nächste Knotennummer; erst hier steht fest, dass das Event feuert.
    fn make_vertex(&mut self, coord: Point) -> Site {
        let vertex = Site::Vertex {
            coord,
            index: self.vertex_count,
        };
        self.vertex_count += 1;
        vertex
    }

    fn close_halfedge(&mut self, he: HalfEdgeId, vertex: Site) {
        let node = self.beachline.node(he);
        if let Some(edge) = node.edge {
            let side = node.side;
            self.endpoint(edge, side, vertex);
        }
    }

    fn endpoint(&mut self, edge: EdgeId, side: Side, vertex: Site) {
        if self.edges[edge.0].set_endpoint(side, vertex) {
            self.clip(edge);
        }
    }

    fn clip(&mut self, edge: EdgeId) {
        let bisector = &mut self.edges[edge.0];
        if bisector.clipped {
            return;
        }
        bisector.clipped = true;

        match self.clipper.clip(bisector) {
            ClipOutcome::Emitted(graph_edge) => {
                self.stats.emitted_edges += 1;
                self.output.push(graph_edge);
            }
            ClipOutcome::Suppressed => self.stats.suppressed_edges += 1,
            ClipOutcome::Outside => self.stats.outside_edges += 1,
        }
    }

    /// Nach dem Sweep: alle noch offenen Kanten der Beachline einmal clippen.
    fn clip_remaining(&mut self) {
        let open: Vec<EdgeId> = self
            .beachline
            .iter()
            .filter_map(|he| self.beachline.node(he).edge)
            .collect();
        for edge in open {
            self.clip(edge);
        }
    }
}

/// Kommt die Site vor dem Event (`event.y` = ystar, `event.x` = Knoten-x)?
fn precedes(site: Point, event: Point) -> bool {
    site.y < event.y || (site.y == event.y && site.x < event.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};
    use std::collections::HashSet;

    fn generator() -> VoronoiGenerator {
        VoronoiGenerator::new(VoronoiConfig::new()).unwrap()
    }

    fn random_sites(count: usize, seed: u64, extent: f64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                (
                    rng.random_range(-extent..extent),
                    rng.random_range(-extent..extent),
                )
            })
            .unzip()
    }

    fn sorted_key(edges: &[GraphEdge]) -> Vec<(usize, usize, i64, i64, i64, i64)> {
        let q = |v: f64| (v * 1e6).round() as i64;
        let mut keys: Vec<_> = edges
            .iter()
            .map(|e| {
                (
                    e.site_a,
                    e.site_b,
                    q(e.start.x),
                    q(e.start.y),
                    q(e.end.x),
                    q(e.end.y),
                )
            })
            .collect();
        keys.sort();
        keys
    }

    /// Jede Kante liegt im Rechteck und trennt genau die Zellen ihrer beiden Sites:
    /// am Mittelpunkt sind beide gleich weit entfernt und keine Site ist näher.
    fn assert_cell_boundaries(edges: &[GraphEdge], xs: &[f64], ys: &[f64], bounds: Bounds2D) {
        let sites: Vec<Point> = xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect();
        let tolerance = 1e-7;
        for e in edges {
            assert_ne!(e.site_a, e.site_b);
            assert!(e.site_a < sites.len() && e.site_b < sites.len());
            assert!(e.length() > 0.0, "zero-length edge {}", e);

            for p in [e.start, e.end] {
                assert!(p.x >= bounds.min.x - tolerance && p.x <= bounds.max.x + tolerance);
                assert!(p.y >= bounds.min.y - tolerance && p.y <= bounds.max.y + tolerance);
            }

            let mid = Point::new((e.start.x + e.end.x) * 0.5, (e.start.y + e.end.y) * 0.5);
            let da = mid.distance_to(sites[e.site_a]);
            let db = mid.distance_to(sites[e.site_b]);
            assert_relative_eq!(da, db, epsilon = 1e-6, max_relative = 1e-6);
            let nearest = sites
                .iter()
                .map(|s| mid.distance_to(*s))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest >= da.min(db) - 1e-6, "edge {} is not a cell boundary", e);
        }
    }

    #[test]
    fn test_two_sites_single_edge() {
        let edges = generator()
            .generate_voronoi(&[0.0, 10.0], &[0.0, 0.0], -5.0, 15.0, -5.0, 5.0)
            .unwrap();

        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert!(e.separates(0, 1));
        assert_relative_eq!(e.start.x, 5.0);
        assert_relative_eq!(e.end.x, 5.0);
        let (lo, hi) = (e.start.y.min(e.end.y), e.start.y.max(e.end.y));
        assert_relative_eq!(lo, -5.0);
        assert_relative_eq!(hi, 5.0);
    }

    #[test]
    fn test_two_sites_on_perpendicular_bisector() {
        let edges = generator()
            .generate_voronoi(&[1.0, 4.0], &[2.0, 6.0], -20.0, 20.0, -20.0, 20.0)
            .unwrap();
        assert_eq!(edges.len(), 1);

        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        for p in [edges[0].start, edges[0].end] {
            assert_relative_eq!(p.distance_to(a), p.distance_to(b), epsilon = 1e-9);
            assert!(Bounds2D::from_extents(-20.0, 20.0, -20.0, 20.0).contains_point(p));
        }
    }

    #[test]
    fn test_inverted_bounds_are_reordered() {
        let edges = generator()
            .generate_voronoi(&[0.0, 10.0], &[0.0, 0.0], 15.0, -5.0, 5.0, -5.0)
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_relative_eq!(edges[0].start.x, 5.0);
    }

    #[test]
    fn test_triangle_meets_at_circumcenter() {
        let (edges, stats) = VoronoiGenerator::new(
            VoronoiConfig::new().with_bounds(Bounds2D::from_extents(-20.0, 30.0, -20.0, 30.0)),
        )
        .unwrap()
        .generate_with_statistics(&[0.0, 10.0, 5.0], &[0.0, 0.0, 8.66])
        .unwrap();

        assert_eq!(edges.len(), 3);
        assert_eq!(stats.vertex_events, 1);
        assert_eq!(stats.vertex_count, 1);
        assert_eq!(stats.site_events, 2);

        let pairs: HashSet<(usize, usize)> = edges
            .iter()
            .map(|e| (e.site_a.min(e.site_b), e.site_a.max(e.site_b)))
            .collect();
        assert_eq!(pairs, HashSet::from([(0, 1), (0, 2), (1, 2)]));

        // Umkreismittelpunkt: gleich weit von allen drei Sites
        let center = Point::new(5.0, (8.66 * 8.66 - 25.0) / (2.0 * 8.66));
        for e in &edges {
            let touches = e.start.distance_to(center) < 1e-6 || e.end.distance_to(center) < 1e-6;
            assert!(touches, "edge {} misses circumcenter {}", e, center);
        }
    }

    #[test]
    fn test_sites_outside_rectangle() {
        let edges = generator()
            .generate_voronoi(&[-100.0, 100.0], &[0.0, 0.0], -5.0, 5.0, -5.0, 5.0)
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_relative_eq!(edges[0].start.x, 0.0);
        assert_relative_eq!(edges[0].end.x, 0.0);
        assert_relative_eq!(edges[0].start.y.abs(), 5.0);
        assert_relative_eq!(edges[0].end.y.abs(), 5.0);
    }

    #[test]
    fn test_close_sites_suppressed() {
        let generator = VoronoiGenerator::new(VoronoiConfig::new().with_min_distance(1.0)).unwrap();
        let (edges, stats) = generator
            .generate_with_statistics(&[0.0, 0.5, 10.0], &[0.0, 0.0, 10.0])
            .unwrap();
        assert!(edges.iter().all(|e| !e.separates(0, 1)));
        assert!(stats.suppressed_edges >= 1);
        assert!(!edges.is_empty());
    }

    #[test]
    fn test_single_site_yields_no_edges() {
        let (edges, stats) = generator()
            .generate_with_statistics(&[3.0], &[4.0])
            .unwrap();
        assert!(edges.is_empty());
        assert_eq!(stats.site_count, 1);
        assert_eq!(stats.bisector_count, 0);
    }

    #[test]
    fn test_invalid_input() {
        let g = generator();
        assert!(matches!(
            g.generate(&[], &[]),
            Err(MathError::InsufficientPoints { .. })
        ));
        assert!(matches!(
            g.generate(&[1.0, 2.0], &[1.0]),
            Err(MathError::MismatchedCoordinates { .. })
        ));
        assert!(matches!(
            g.generate(&[1.0, f64::INFINITY], &[1.0, 2.0]),
            Err(MathError::NonFiniteCoordinate { index: 1, .. })
        ));
        assert!(matches!(
            g.generate_voronoi(&[0.0, 1.0], &[0.0, 1.0], f64::NAN, 1.0, 0.0, 1.0),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(VoronoiGenerator::new(VoronoiConfig::new().with_min_distance(-2.0)).is_err());
    }

    #[test]
    fn test_collinear_horizontal_sites() {
        let edges = generator()
            .generate_voronoi(&[0.0, 10.0, 20.0], &[0.0, 0.0, 0.0], -5.0, 25.0, -5.0, 5.0)
            .unwrap();
        assert_eq!(edges.len(), 2);
        let mut xs: Vec<f64> = edges.iter().map(|e| e.start.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(xs[0], 5.0);
        assert_relative_eq!(xs[1], 15.0);
        assert!(edges.iter().any(|e| e.separates(0, 1)));
        assert!(edges.iter().any(|e| e.separates(1, 2)));
    }

    #[test]
    fn test_collinear_vertical_sites() {
        let edges = generator()
            .generate_voronoi(&[0.0, 0.0, 0.0], &[0.0, 10.0, 20.0], -5.0, 5.0, -5.0, 25.0)
            .unwrap();
        assert_eq!(edges.len(), 2);
        for e in &edges {
            assert_relative_eq!(e.start.y, e.end.y);
            assert_relative_eq!((e.start.x - e.end.x).abs(), 10.0);
        }
    }

    #[test]
    fn test_duplicate_sites_collapse() {
        let (edges, stats) = VoronoiGenerator::new(
            VoronoiConfig::new().with_bounds(Bounds2D::from_extents(-10.0, 10.0, -10.0, 10.0)),
        )
        .unwrap()
        .generate_with_statistics(&[1.0, 1.0, 5.0], &[1.0, 1.0, 5.0])
        .unwrap();

        assert_eq!(stats.site_count, 2);
        assert_eq!(stats.collapsed_sites, 1);
        assert_eq!(stats.suppressed_edges, 0);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].separates(0, 2));
        assert_relative_eq!(edges[0].start.x + edges[0].start.y, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_random_sites_with_duplicates() {
        let (mut xs, mut ys) = random_sites(200, 2024, 50.0);
        for i in (0..200).step_by(10) {
            xs.push(xs[i]);
            ys.push(ys[i]);
        }
        let bounds = Bounds2D::from_extents(-60.0, 60.0, -60.0, 60.0);
        let (edges, stats) = VoronoiGenerator::new(
            VoronoiConfig::new()
                .with_bounds(bounds)
                .with_min_distance(1e-9),
        )
        .unwrap()
        .generate_with_statistics(&xs, &ys)
        .unwrap();

        assert_eq!(stats.site_count, 200);
        assert_eq!(stats.collapsed_sites, 20);
        assert_eq!(stats.suppressed_edges, 0);
        // die Kopien haben die höheren Indizes und verschwinden
        assert!(edges.iter().all(|e| e.site_a < 200 && e.site_b < 200));
        assert_cell_boundaries(&edges, &xs, &ys, bounds);
    }

    #[test]
    fn test_edges_outside_rectangle_are_dropped() {
        // alle Knoten und Halbgeraden liegen oberhalb des Rechtecks
        let (edges, stats) = VoronoiGenerator::new(
            VoronoiConfig::new().with_bounds(Bounds2D::from_extents(-5.0, 5.0, -5.0, 5.0)),
        )
        .unwrap()
        .generate_with_statistics(&[-10.0, 10.0, 0.0, 0.0], &[100.0, 100.0, 80.0, 125.0])
        .unwrap();

        assert!(edges.is_empty(), "unexpected edges {:?}", edges);
        assert_eq!(stats.emitted_edges, 0);
        assert!(stats.outside_edges > 0);
    }

    #[test]
    fn test_square_grid() {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                xs.push(i as f64 * 10.0);
                ys.push(j as f64 * 10.0);
            }
        }
        let edges = generator()
            .generate_voronoi(&xs, &ys, -5.0, 25.0, -5.0, 25.0)
            .unwrap();

        // jede emittierte Kante liegt auf einer der Gitterlinien x/y = 5 oder 15;
        // Diagonalen zwischen kozirkulären Sites haben Länge null
        for e in &edges {
            assert!(e.site_a != e.site_b && e.site_a < 9 && e.site_b < 9);
            let vertical = (e.start.x - e.end.x).abs() < 1e-9;
            let value = if vertical { e.start.x } else { e.start.y };
            assert!(
                (value - 5.0).abs() < 1e-9 || (value - 15.0).abs() < 1e-9,
                "unexpected edge {}",
                e
            );
        }
        // die zwölf Nachbarpaare des Gitters tragen sichtbare Kanten
        for (a, b) in [(0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)] {
            assert!(edges.iter().any(|e| e.separates(a, b) && e.length() > 1e-9));
        }
        for (a, b) in [(0, 3), (3, 6), (1, 4), (4, 7), (2, 5), (5, 8)] {
            assert!(edges.iter().any(|e| e.separates(a, b) && e.length() > 1e-9));
        }
    }

    #[test]
    fn test_determinism() {
        let (xs, ys) = random_sites(300, 7, 100.0);
        let g = generator();
        let first = g.generate_voronoi(&xs, &ys, -120.0, 120.0, -120.0, 120.0).unwrap();
        let second = g.generate_voronoi(&xs, &ys, -120.0, 120.0, -120.0, 120.0).unwrap();
        assert_eq!(sorted_key(&first), sorted_key(&second));
    }

    #[test]
    fn test_random_sites_voronoi_property() {
        let (xs, ys) = random_sites(250, 42, 50.0);
        let bounds = Bounds2D::from_extents(-60.0, 60.0, -60.0, 60.0);
        let (edges, stats) = VoronoiGenerator::new(VoronoiConfig::new().with_bounds(bounds))
            .unwrap()
            .generate_with_statistics(&xs, &ys)
            .unwrap();

        assert!(!edges.is_empty());
        assert!(stats.vertex_count <= 2 * xs.len() - 5);
        assert_eq!(stats.site_events, xs.len() - 1);

        assert_cell_boundaries(&edges, &xs, &ys, bounds);
    }

    #[derive(Debug, Clone, Copy)]
    struct IndexedSite {
        position: Point2<f64>,
        index: usize,
    }

    impl HasPosition for IndexedSite {
        type Scalar = f64;

        fn position(&self) -> Point2<f64> {
            self.position
        }
    }

    #[test]
    fn test_edges_are_delaunay_neighbours() {
        let (xs, ys) = random_sites(150, 1234, 30.0);
        let edges = generator()
            .generate_voronoi(&xs, &ys, -40.0, 40.0, -40.0, 40.0)
            .unwrap();

        let mut triangulation: DelaunayTriangulation<IndexedSite> = DelaunayTriangulation::new();
        for (index, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            triangulation
                .insert(IndexedSite {
                    position: Point2::new(x, y),
                    index,
                })
                .unwrap();
        }
        let delaunay: HashSet<(usize, usize)> = triangulation
            .undirected_edges()
            .map(|edge| {
                let [a, b] = edge.vertices();
                let (a, b) = (a.data().index, b.data().index);
                (a.min(b), a.max(b))
            })
            .collect();

        let voronoi: HashSet<(usize, usize)> = edges
            .iter()
            .map(|e| (e.site_a.min(e.site_b), e.site_a.max(e.site_b)))
            .collect();

        assert!(!voronoi.is_empty());
        for pair in &voronoi {
            assert!(delaunay.contains(pair), "pair {:?} is not a Delaunay edge", pair);
        }
    }

    #[test]
    fn test_default_bounds_from_sites() {
        let g = VoronoiGenerator::new(VoronoiConfig::new().with_padding_factor(0.5)).unwrap();
        let edges = g.generate(&[0.0, 10.0], &[0.0, 10.0]).unwrap();
        assert_eq!(edges.len(), 1);
        // Hülle 0..10, 50% Rand → -5..15
        let padded = Bounds2D::from_extents(-5.0, 15.0, -5.0, 15.0);
        for p in [edges[0].start, edges[0].end] {
            assert!(padded.contains_point(p));
        }
        assert_relative_eq!(edges[0].length(), 20.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_generate_points_matches_arrays() {
        let (xs, ys) = random_sites(40, 99, 10.0);
        let points: Vec<Point> = xs.iter().zip(&ys).map(|(&x, &y)| Point::new(x, y)).collect();
        let g = VoronoiGenerator::new(
            VoronoiConfig::new().with_bounds(Bounds2D::from_extents(-12.0, 12.0, -12.0, 12.0)),
        )
        .unwrap();
        assert_eq!(
            sorted_key(&g.generate(&xs, &ys).unwrap()),
            sorted_key(&g.generate_points(&points).unwrap())
        );
    }
}
