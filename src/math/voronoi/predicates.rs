// src/math/voronoi/predicates.rs

//! Geometrische Prädikate der Sweepline.
//!
//! Beide Funktionen arbeiten direkt auf den normalisierten Koeffizienten der
//! Bisektoren. Die Fallunterscheidungen (inklusive der Gleichheitsfälle) legen
//! fest, welche Vertex-Events bei kollinearen oder y-gleichen Sites entstehen,
//! und dürfen nicht "vereinfacht" werden.

use crate::math::{
    types::Point,
    utils::constants::DETERMINANT_EPSILON,
    voronoi::{
        beachline::HalfEdge,
        bisector::{BisectorEdge, Side},
    },
};

/// Liegt `p` rechts von dem Bogen, den ein Halfedge mit Seite `side` auf `edge` begrenzt?
pub fn right_of(side: Side, edge: &BisectorEdge, p: Point) -> bool {
    let top = edge.region[1].coord();
    let right_of_site = p.x > top.x;

    if right_of_site && side == Side::Left {
        return true;
    }
    if !right_of_site && side == Side::Right {
        return false;
    }

    let above = if edge.is_x_normalized() {
        let dyp = p.y - top.y;
        let dxp = p.x - top.x;
        let mut fast = false;
        let mut above;

        if (!right_of_site && edge.b < 0.0) || (right_of_site && edge.b >= 0.0) {
            above = dyp >= edge.b * dxp;
            fast = above;
        } else {
            above = p.x + p.y * edge.b > edge.c;
            if edge.b < 0.0 {
                above = !above;
            }
            if !above {
                fast = true;
            }
        }

        if !fast {
            let dxs = top.x - edge.region[0].coord().x;
            above = edge.b * (dxp * dxp - dyp * dyp)
                < dxs * dyp * (1.0 + 2.0 * dxp / dxs + edge.b * edge.b);
            if edge.b < 0.0 {
                above = !above;
            }
        }
        above
    } else {
        // b == 1
        let yl = edge.c - edge.a * p.x;
        let t1 = p.y - yl;
        let t2 = p.x - top.x;
        let t3 = yl - top.y;
        t1 * t1 > t2 * t2 + t3 * t3
    };

    match side {
        Side::Left => above,
        Side::Right => !above,
    }
}

/// Schnittpunkt der Bisektoren zweier benachbarter Bögen, falls dort ein
/// legales Vertex-Event entsteht.
///
/// Kein Ergebnis bei Sentinels, gemeinsamer oberer Site, (nahezu) parallelen
/// Linien, oder wenn der Schnitt auf der falschen Seite der tieferen Kante liegt.
pub fn intersect(first: &HalfEdge, second: &HalfEdge, edges: &[BisectorEdge]) -> Option<Point> {
    let (e1, e2) = match (first.edge, second.edge) {
        (Some(a), Some(b)) => (&edges[a.0], &edges[b.0]),
        _ => return None,
    };

    if e1.region[1].index() == e2.region[1].index() {
        return None;
    }

    let d = e1.a * e2.b - e1.b * e2.a;
    if !d.is_finite() || d.abs() < DETERMINANT_EPSILON {
        return None;
    }

    let x = (e1.c * e2.b - e2.c * e1.b) / d;
    let y = (e2.c * e1.a - e1.c * e2.a) / d;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let top1 = e1.region[1].coord();
    let top2 = e2.region[1].coord();
    let (side, edge) = if top1.y < top2.y || (top1.y == top2.y && top1.x < top2.x) {
        (first.side, e1)
    } else {
        (second.side, e2)
    };

    let right_of_site = x >= edge.region[1].coord().x;
    if (right_of_site && side == Side::Left) || (!right_of_site && side == Side::Right) {
        return None;
    }

    Some(Point::new(x, y))
}
