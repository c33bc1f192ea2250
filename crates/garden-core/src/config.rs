use serde::{Deserialize, Serialize};

use crate::constants::{
    BLOOM_MAX_DAYS, BUD_MAX_DAYS, GARDEN_HEIGHT, GARDEN_WIDTH, JITTER, MARGIN,
    MAX_ATTEMPTS_PER_SLOT, MEMORIES_PER_SLOT, MIN_EMPTY_SLOTS, MIN_SPACING, SPREAD,
};
use crate::error::{LayoutError, Result};
use crate::geometry::Bounds;

/// Age cut-offs (in whole days) between lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleThresholds {
    pub bud_max_days: i64,
    pub bloom_max_days: i64,
}

impl Default for LifecycleThresholds {
    fn default() -> Self {
        Self {
            bud_max_days: BUD_MAX_DAYS,
            bloom_max_days: BLOOM_MAX_DAYS,
        }
    }
}

/// Garden geometry and placement parameters.
///
/// Immutable once handed to a [`LayoutGenerator`](crate::layout::LayoutGenerator).
/// Tests shrink the garden or the attempt budget to make collision behaviour
/// observable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub min_spacing: f64,
    pub max_attempts_per_slot: u32,
    pub min_empty_slots: usize,
    pub memories_per_slot: usize,
    pub spread: f64,
    pub jitter: f64,
    pub lifecycle: LifecycleThresholds,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            width: GARDEN_WIDTH,
            height: GARDEN_HEIGHT,
            margin: MARGIN,
            min_spacing: MIN_SPACING,
            max_attempts_per_slot: MAX_ATTEMPTS_PER_SLOT,
            min_empty_slots: MIN_EMPTY_SLOTS,
            memories_per_slot: MEMORIES_PER_SLOT,
            spread: SPREAD,
            jitter: JITTER,
            lifecycle: LifecycleThresholds::default(),
        }
    }
}

impl GardenConfig {
    /// The margin-inset rectangle flowers are clamped to and slots drawn from.
    pub fn placement_bounds(&self) -> Bounds {
        Bounds::inset(self.width, self.height, self.margin)
    }

    /// Number of empty slots to request for `memory_count` memories:
    /// `max(min_empty_slots, memory_count / memories_per_slot)`.
    pub fn slot_count(&self, memory_count: usize) -> usize {
        let per_memory = memory_count
            .checked_div(self.memories_per_slot)
            .unwrap_or(0);
        self.min_empty_slots.max(per_memory)
    }

    /// Reject values that would make placement meaningless. A zero-area
    /// garden is allowed; it just yields clamped flowers and few slots.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("min_spacing", self.min_spacing),
            ("jitter", self.jitter),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.spread) {
            return Err(LayoutError::InvalidConfig(format!(
                "spread must be within [0, 1], got {}",
                self.spread
            )));
        }
        if self.memories_per_slot == 0 {
            return Err(LayoutError::InvalidConfig(
                "memories_per_slot must be at least 1".into(),
            ));
        }
        let t = self.lifecycle;
        if t.bud_max_days > t.bloom_max_days {
            return Err(LayoutError::InvalidConfig(format!(
                "bud_max_days ({}) exceeds bloom_max_days ({})",
                t.bud_max_days, t.bloom_max_days
            )));
        }
        Ok(())
    }
}
