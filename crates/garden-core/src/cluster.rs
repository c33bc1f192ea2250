use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::emotion::Emotion;
use crate::error::{LayoutError, Result};
use crate::geometry::Point;

/// Circular region of the garden where one emotion's flowers grow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterZone {
    pub emotion: Emotion,
    pub center: Point,
    pub radius: f64,
}

impl ClusterZone {
    pub fn new(emotion: Emotion, x: f64, y: f64, radius: f64) -> Self {
        Self {
            emotion,
            center: Point::new(x, y),
            radius,
        }
    }

    /// Strictly inside the disk.
    pub fn contains(&self, p: Point) -> bool {
        p.distance(self.center) < self.radius
    }
}

/// Validated, immutable set of cluster zones. Always contains the
/// [`Emotion::FALLBACK`] zone, so every lookup succeeds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClusterTable {
    zones: Vec<ClusterZone>,
}

impl ClusterTable {
    /// Build and validate a table: at least one zone, a fallback zone, no
    /// duplicates, finite geometry, and no disk lying entirely inside another.
    pub fn new(zones: Vec<ClusterZone>) -> Result<Self> {
        if zones.is_empty() {
            return Err(LayoutError::EmptyTable);
        }
        for (i, z) in zones.iter().enumerate() {
            if !z.center.x.is_finite() || !z.center.y.is_finite() {
                return Err(LayoutError::InvalidZone {
                    emotion: z.emotion,
                    reason: "center must be finite".into(),
                });
            }
            if !z.radius.is_finite() || z.radius < 0.0 {
                return Err(LayoutError::InvalidZone {
                    emotion: z.emotion,
                    reason: format!("radius must be finite and >= 0, got {}", z.radius),
                });
            }
            if zones[..i].iter().any(|prev| prev.emotion == z.emotion) {
                return Err(LayoutError::DuplicateZone(z.emotion));
            }
        }
        if !zones.iter().any(|z| z.emotion == Emotion::FALLBACK) {
            return Err(LayoutError::MissingFallbackZone);
        }
        for (i, a) in zones.iter().enumerate() {
            for b in &zones[i + 1..] {
                let (outer, inner) = if a.radius >= b.radius { (a, b) } else { (b, a) };
                if a.center.distance(b.center) + inner.radius <= outer.radius {
                    return Err(LayoutError::NestedZones {
                        outer: outer.emotion,
                        inner: inner.emotion,
                    });
                }
            }
        }
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[ClusterZone] {
        &self.zones
    }

    /// Zone for `emotion`, or the fallback zone if this table has none for it.
    pub fn zone(&self, emotion: Emotion) -> &ClusterZone {
        self.zones
            .iter()
            .find(|z| z.emotion == emotion)
            .or_else(|| self.zones.iter().find(|z| z.emotion == Emotion::FALLBACK))
            .unwrap_or(&self.zones[0])
    }

    /// Zone for a raw tag; unrecognised tags map to the `happy` zone.
    pub fn zone_for(&self, tag: &str) -> &ClusterZone {
        self.zone(Emotion::from_str_lossy(tag))
    }
}

/// The 100×80 garden layout: four large clusters in the corners'
/// quadrants, four smaller ones on the axes. Validated on first use.
static DEFAULT_TABLE: LazyLock<ClusterTable> = LazyLock::new(|| {
    ClusterTable::new(vec![
        ClusterZone::new(Emotion::Happy, 25.0, 20.0, 20.0),
        ClusterZone::new(Emotion::Romantic, 75.0, 20.0, 20.0),
        ClusterZone::new(Emotion::Sad, 25.0, 60.0, 20.0),
        ClusterZone::new(Emotion::Calm, 75.0, 60.0, 20.0),
        ClusterZone::new(Emotion::Angry, 50.0, 40.0, 15.0),
        ClusterZone::new(Emotion::Nostalgic, 15.0, 40.0, 15.0),
        ClusterZone::new(Emotion::Excited, 85.0, 40.0, 15.0),
        ClusterZone::new(Emotion::Proud, 50.0, 10.0, 15.0),
    ])
    .expect("built-in cluster table must validate")
});

impl Default for ClusterTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl<'de> Deserialize<'de> for ClusterTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let zones = Vec::<ClusterZone>::deserialize(deserializer)?;
        ClusterTable::new(zones).map_err(serde::de::Error::custom)
    }
}
