// src/math/voronoi/beachline.rs

use crate::math::{
    types::Point,
    utils::buckets::bucket_index,
    voronoi::{
        bisector::{BisectorEdge, EdgeId, Side},
        predicates,
        site::Site,
    },
};

/// Stabiler Handle auf einen Knoten im Halfedge-Arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdgeId(pub usize);

/// Ein Bogen der Beachline.
///
/// Gelöschte Knoten bleiben als Tombstone im Arena, weil der Hash-Cache
/// noch auf sie zeigen kann.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// `None` nur bei den beiden Sentinels
    pub edge: Option<EdgeId>,
    pub side: Side,
    pub left: HalfEdgeId,
    pub right: HalfEdgeId,
    /// Geplanter Voronoi-Knoten, solange ein Vertex-Event in der Queue liegt
    pub vertex: Option<Point>,
    /// Sweep-Position, an der das Vertex-Event feuert
    pub ystar: f64,
    /// Verkettung innerhalb eines Queue-Buckets
    pub next_event: Option<HalfEdgeId>,
    pub deleted: bool,
}

impl HalfEdge {
    fn new(edge: Option<EdgeId>, side: Side, id: HalfEdgeId) -> Self {
        Self {
            edge,
            side,
            left: id,
            right: id,
            vertex: None,
            ystar: 0.0,
            next_event: None,
            deleted: false,
        }
    }
}

/// Doppelt verkettete Beachline zwischen zwei festen Sentinels.
///
/// Ein Hash über x-Buckets merkt sich zuletzt gefundene Bögen, damit
/// `find_left_of` nur ein kurzes Stück der Liste ablaufen muss.
#[derive(Debug, Clone)]
pub struct Beachline {
    nodes: Vec<HalfEdge>,
    hash: Vec<Option<HalfEdgeId>>,
    left_end: HalfEdgeId,
    right_end: HalfEdgeId,
    x_min: f64,
    delta_x: f64,
}

impl Beachline {
    pub fn new(hash_size: usize, x_min: f64, delta_x: f64) -> Self {
        let hash_size = hash_size.max(2);
        let left_end = HalfEdgeId(0);
        let right_end = HalfEdgeId(1);

        let mut left = HalfEdge::new(None, Side::Left, left_end);
        let mut right = HalfEdge::new(None, Side::Left, right_end);
        left.right = right_end;
        right.left = left_end;

        let mut hash = vec![None; hash_size];
        hash[0] = Some(left_end);
        hash[hash_size - 1] = Some(right_end);

        Self {
            nodes: vec![left, right],
            hash,
            left_end,
            right_end,
            x_min,
            delta_x,
        }
    }

    pub fn left_end(&self) -> HalfEdgeId {
        self.left_end
    }

    pub fn right_end(&self) -> HalfEdgeId {
        self.right_end
    }

    pub fn is_sentinel(&self, id: HalfEdgeId) -> bool {
        id == self.left_end || id == self.right_end
    }

    pub fn hash_size(&self) -> usize {
        self.hash.len()
    }

    /// Legt einen neuen, noch nicht verketteten Bogen an.
    pub fn create(&mut self, edge: EdgeId, side: Side) -> HalfEdgeId {
        let id = HalfEdgeId(self.nodes.len());
        self.nodes.push(HalfEdge::new(Some(edge), side, id));
        id
    }

    pub fn node(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[HalfEdge] {
        &self.nodes
    }

    /// Zugriff für die Event-Queue, die ihre Buckets über dieselben Knoten verkettet
    pub fn nodes_mut(&mut self) -> &mut [HalfEdge] {
        &mut self.nodes
    }

    pub fn left(&self, id: HalfEdgeId) -> HalfEdgeId {
        self.nodes[id.0].left
    }

    pub fn right(&self, id: HalfEdgeId) -> HalfEdgeId {
        self.nodes[id.0].right
    }

    /// Fügt `new` direkt rechts von `anchor` ein.
    pub fn insert_after(&mut self, anchor: HalfEdgeId, new: HalfEdgeId) {
        let right = self.nodes[anchor.0].right;
        self.nodes[new.0].left = anchor;
        self.nodes[new.0].right = right;
        self.nodes[right.0].left = new;
        self.nodes[anchor.0].right = new;
    }

    /// Hängt den Knoten aus und markiert ihn als gelöscht.
    pub fn delete(&mut self, id: HalfEdgeId) {
        let HalfEdge { left, right, .. } = self.nodes[id.0];
        self.nodes[left.0].right = right;
        self.nodes[right.0].left = left;
        self.nodes[id.0].deleted = true;
    }

    /// Site links vom Bogen; Sentinels liefern die unterste Site.
    pub fn left_region(&self, id: HalfEdgeId, edges: &[BisectorEdge], bottom: Site) -> Site {
        let node = &self.nodes[id.0];
        match node.edge {
            Some(edge) => edges[edge.0].region(node.side),
            None => bottom,
        }
    }

    /// Site rechts vom Bogen; Sentinels liefern die unterste Site.
    pub fn right_region(&self, id: HalfEdgeId, edges: &[BisectorEdge], bottom: Site) -> Site {
        let node = &self.nodes[id.0];
        match node.edge {
            Some(edge) => edges[edge.0].region(node.side.opposite()),
            None => bottom,
        }
    }

    /// Liegt `p` rechts vom Bogen? Der linke Sentinel gilt als -∞, der rechte als +∞.
    pub fn right_of(&self, id: HalfEdgeId, p: Point, edges: &[BisectorEdge]) -> bool {
        if id == self.left_end {
            return true;
        }
        let node = &self.nodes[id.0];
        match node.edge {
            Some(edge) => predicates::right_of(node.side, &edges[edge.0], p),
            None => false,
        }
    }

    /// Cache-Eintrag eines Buckets; Tombstones werden entfernt und zählen als Miss.
    fn cached(&mut self, bucket: isize) -> Option<HalfEdgeId> {
        if bucket < 0 || bucket as usize >= self.hash.len() {
            return None;
        }
        let slot = bucket as usize;
        let id = self.hash[slot]?;
        if self.nodes[id.0].deleted {
            self.hash[slot] = None;
            return None;
        }
        Some(id)
    }

    /// Findet den Bogen unmittelbar links von `p` bei der aktuellen Sweep-Position.
    pub fn find_left_of(&mut self, p: Point, edges: &[BisectorEdge]) -> HalfEdgeId {
        let size = self.hash.len();
        let bucket = bucket_index(p.x, self.x_min, self.delta_x, size);

        let mut start = self.cached(bucket);
        if start.is_none() {
            for i in 1..size as isize {
                start = self.cached(bucket - i).or_else(|| self.cached(bucket + i));
                if start.is_some() {
                    break;
                }
            }
        }

        // Slot 0 hält immer den linken Sentinel, der nie gelöscht wird
        let mut he = start.unwrap_or(self.left_end);
        if self.right_of(he, p, edges) {
            loop {
                he = self.right(he);
                if !self.right_of(he, p, edges) {
                    break;
                }
            }
            he = self.left(he);
        } else {
            loop {
                he = self.left(he);
                if self.right_of(he, p, edges) {
                    break;
                }
            }
        }

        if bucket > 0 && (bucket as usize) < size - 1 {
            self.hash[bucket as usize] = Some(he);
        }
        he
    }

    /// Lebende Bögen von links nach rechts, ohne Sentinels
    pub fn iter(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        std::iter::successors(Some(self.right(self.left_end)), move |&id| {
            Some(self.right(id))
        })
        .take_while(move |&id| id != self.right_end)
    }
}
