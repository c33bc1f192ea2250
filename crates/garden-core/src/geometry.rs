use rand::Rng;
use serde::{Deserialize, Serialize};

/// A point on the garden plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Offset by `distance` along `angle` (radians, counter-clockwise from +x).
    pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}

/// Axis-aligned rectangle that placement is confined to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The `[margin, width - margin] × [margin, height - margin]` rectangle.
    /// May be inverted when the garden is smaller than twice the margin.
    pub fn inset(width: f64, height: f64, margin: f64) -> Self {
        Self {
            min_x: margin,
            max_x: width - margin,
            min_y: margin,
            max_y: height - margin,
        }
    }

    /// Clamp into the rectangle. Inverted bounds resolve to the minimum
    /// corner instead of panicking like `f64::clamp` would.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: self.min_x.max(self.max_x.min(p.x)),
            y: self.min_y.max(self.max_y.min(p.y)),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Uniformly random point inside the rectangle.
    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point {
            x: uniform(rng, self.min_x, self.max_x),
            y: uniform(rng, self.min_y, self.max_y),
        }
    }
}

/// Uniform draw from `[lo, hi]`. Returns `lo` for empty, inverted or
/// non-finite ranges, where `Rng::random_range` would panic.
pub fn uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    if lo < hi && lo.is_finite() && hi.is_finite() {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}
