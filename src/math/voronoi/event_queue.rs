// src/math/voronoi/event_queue.rs

use crate::math::{
    types::Point,
    utils::buckets::bucket_index,
    voronoi::beachline::{HalfEdge, HalfEdgeId},
};
use bevy::log::warn;

/// Prioritätswarteschlange der Vertex-Events (Kreis-Events).
///
/// Der y-Bereich der Sites wird in feste Buckets geteilt; jeder Bucket ist eine
/// über `HalfEdge::next_event` verkettete Liste, sortiert nach `ystar` und dann
/// nach der x-Koordinate des Knotens. Da die Sweepline nie rückwärts läuft,
/// wandert `min_bucket` nur vorwärts, außer ein Insert landet darunter.
/// Die Korrektheit hängt nicht von der Bucket-Anzahl ab.
#[derive(Debug, Clone)]
pub struct EventQueue {
    buckets: Vec<Option<HalfEdgeId>>,
    count: usize,
    min_bucket: usize,
    y_min: f64,
    delta_y: f64,
}

impl EventQueue {
    pub fn new(bucket_count: usize, y_min: f64, delta_y: f64) -> Self {
        Self {
            buckets: vec![None; bucket_count.max(1)],
            count: 0,
            min_bucket: 0,
            y_min,
            delta_y,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket(&mut self, ystar: f64) -> usize {
        let bucket = bucket_index(ystar, self.y_min, self.delta_y, self.buckets.len()) as usize;
        if bucket < self.min_bucket {
            self.min_bucket = bucket;
        }
        bucket
    }

    /// Plant für `he` ein Vertex-Event bei `vertex`, das bei `vertex.y + offset` feuert.
    /// Ein bereits geplantes Event desselben Halfedges wird vorher entfernt.
    pub fn insert(&mut self, nodes: &mut [HalfEdge], he: HalfEdgeId, vertex: Point, offset: f64) {
        if nodes[he.0].vertex.is_some() {
            self.delete(nodes, he);
        }

        let ystar = vertex.y + offset;
        nodes[he.0].vertex = Some(vertex);
        nodes[he.0].ystar = ystar;

        let bucket = self.bucket(ystar);
        let mut prev = None;
        let mut next = self.buckets[bucket];
        while let Some(candidate) = next {
            let node = &nodes[candidate.0];
            let node_x = node.vertex.map_or(f64::NEG_INFINITY, |v| v.x);
            if ystar > node.ystar || (ystar == node.ystar && vertex.x > node_x) {
                prev = Some(candidate);
                next = node.next_event;
            } else {
                break;
            }
        }

        nodes[he.0].next_event = next;
        match prev {
            Some(prev) => nodes[prev.0].next_event = Some(he),
            None => self.buckets[bucket] = Some(he),
        }
        self.count += 1;
    }

    /// Entfernt das Event von `he`; ohne geplantes Event passiert nichts.
    pub fn delete(&mut self, nodes: &mut [HalfEdge], he: HalfEdgeId) {
        if nodes[he.0].vertex.is_none() {
            return;
        }

        let bucket = self.bucket(nodes[he.0].ystar);
        let mut prev = None;
        let mut current = self.buckets[bucket];
        while let Some(candidate) = current {
            if candidate == he {
                break;
            }
            prev = Some(candidate);
            current = nodes[candidate.0].next_event;
        }

        if current.is_none() {
            warn!(
                "EventQueue: halfedge {:?} carries a vertex but is missing from bucket {}",
                he, bucket
            );
            nodes[he.0].vertex = None;
            return;
        }

        let next = nodes[he.0].next_event;
        match prev {
            Some(prev) => nodes[prev.0].next_event = next,
            None => self.buckets[bucket] = next,
        }
        nodes[he.0].next_event = None;
        nodes[he.0].vertex = None;
        self.count -= 1;
    }

    /// Schiebt `min_bucket` auf den ersten nicht-leeren Bucket.
    fn advance_to_min(&mut self) -> Option<HalfEdgeId> {
        if self.count == 0 {
            return None;
        }
        while self.min_bucket < self.buckets.len() {
            if let Some(head) = self.buckets[self.min_bucket] {
                return Some(head);
            }
            self.min_bucket += 1;
        }
        None
    }

    /// Kleinster Schlüssel als Punkt: `x` des Knotens, `y = ystar`.
    pub fn peek_min(&mut self, nodes: &[HalfEdge]) -> Option<Point> {
        let head = self.advance_to_min()?;
        let node = &nodes[head.0];
        node.vertex.map(|v| Point::new(v.x, node.ystar))
    }

    /// Entnimmt das kleinste Event und liefert Halfedge und geplanten Knoten.
    pub fn extract_min(&mut self, nodes: &mut [HalfEdge]) -> Option<(HalfEdgeId, Point)> {
        let head = self.advance_to_min()?;
        self.buckets[self.min_bucket] = nodes[head.0].next_event.take();
        self.count -= 1;
        let vertex = nodes[head.0].vertex.take()?;
        Some((head, vertex))
    }
}
