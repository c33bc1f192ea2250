//! Circular-distance collision checks.
//!
//! Linear scans: a single garden holds tens to low hundreds of points.

use crate::cluster::ClusterZone;
use crate::geometry::Point;

/// True iff some point lies strictly closer than `min_distance` to `candidate`.
pub fn too_close(candidate: Point, points: &[Point], min_distance: f64) -> bool {
    points.iter().any(|p| candidate.distance(*p) < min_distance)
}

/// True iff `candidate` lies strictly inside some zone's disk.
pub fn inside_any_zone(candidate: Point, zones: &[ClusterZone]) -> bool {
    zones.iter().any(|z| z.contains(candidate))
}

/// Growing set of occupied points plus the zones that are off-limits.
#[derive(Clone, Debug)]
pub struct CollisionIndex<'a> {
    points: Vec<Point>,
    zones: &'a [ClusterZone],
}

impl<'a> CollisionIndex<'a> {
    pub fn new(points: impl IntoIterator<Item = Point>, zones: &'a [ClusterZone]) -> Self {
        Self {
            points: points.into_iter().collect(),
            zones,
        }
    }

    pub fn insert(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A candidate is free iff it keeps `min_distance` from every point and
    /// sits outside every zone.
    pub fn is_free(&self, candidate: Point, min_distance: f64) -> bool {
        !too_close(candidate, &self.points, min_distance) && !inside_any_zone(candidate, self.zones)
    }
}
