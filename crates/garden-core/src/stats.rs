//! Summary numbers shown alongside a garden.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cluster::ClusterTable;
use crate::config::LifecycleThresholds;
use crate::emotion::Emotion;
use crate::geometry::Point;
use crate::layout::GardenLayout;
use crate::lifecycle::LifecycleState;
use crate::memory::MemoryRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleCounts {
    pub buds: usize,
    pub blooms: usize,
    pub fruits: usize,
}

impl LifecycleCounts {
    pub fn from_records(
        records: &[MemoryRecord],
        thresholds: &LifecycleThresholds,
        now: DateTime<Utc>,
    ) -> Self {
        Self::from_states(records.iter().map(|r| thresholds.classify_record(r, now)))
    }

    pub fn from_layout(layout: &GardenLayout) -> Self {
        Self::from_states(layout.flowers.iter().map(|f| f.state))
    }

    fn from_states(states: impl Iterator<Item = LifecycleState>) -> Self {
        let mut counts = Self::default();
        for state in states {
            match state {
                LifecycleState::Bud => counts.buds += 1,
                LifecycleState::Bloom => counts.blooms += 1,
                LifecycleState::Fruit => counts.fruits += 1,
            }
        }
        counts
    }

    pub fn get(&self, state: LifecycleState) -> usize {
        match state {
            LifecycleState::Bud => self.buds,
            LifecycleState::Bloom => self.blooms,
            LifecycleState::Fruit => self.fruits,
        }
    }

    pub fn total(&self) -> usize {
        self.buds + self.blooms + self.fruits
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClusterStats {
    pub emotion: Emotion,
    pub count: usize,
    pub center: Point,
    pub radius: f64,
    pub plant: &'static str,
}

/// Per-zone flower counts, in table order.
pub fn cluster_stats(layout: &GardenLayout, table: &ClusterTable) -> Vec<ClusterStats> {
    table
        .zones()
        .iter()
        .map(|zone| ClusterStats {
            emotion: zone.emotion,
            count: layout
                .flowers
                .iter()
                .filter(|f| f.cluster == zone.emotion)
                .count(),
            center: zone.center,
            radius: zone.radius,
            plant: zone.emotion.plant().name,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GardenStats {
    pub flowers: usize,
    pub empty_slots: usize,
    pub total_spots: usize,
    /// Share of spots holding a memory, in percent. Zero for an empty garden.
    pub coverage_percent: f64,
}

impl GardenStats {
    pub fn from_layout(layout: &GardenLayout) -> Self {
        let flowers = layout.flowers.len();
        let empty_slots = layout.slots.len();
        let total_spots = flowers + empty_slots;
        let coverage_percent = if total_spots == 0 {
            0.0
        } else {
            flowers as f64 / total_spots as f64 * 100.0
        };
        Self {
            flowers,
            empty_slots,
            total_spots,
            coverage_percent,
        }
    }
}
