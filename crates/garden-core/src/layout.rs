use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cluster::ClusterTable;
use crate::config::GardenConfig;
use crate::emotion::Emotion;
use crate::error::Result;
use crate::geometry::Point;
use crate::lifecycle::LifecycleState;
use crate::memory::MemoryRecord;
use crate::placement::place_flowers;
use crate::slots::{EmptySlot, SlotAllocator};

/// A memory positioned in the garden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedFlower {
    pub memory: MemoryRecord,
    pub x: f64,
    pub y: f64,
    pub state: LifecycleState,
    pub cluster: Emotion,
}

impl PositionedFlower {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One rendering pass worth of garden: flowers in input order, empty slots in
/// allocation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GardenLayout {
    pub flowers: Vec<PositionedFlower>,
    pub slots: Vec<EmptySlot>,
    /// How many empty slots were asked for; `slots` may be shorter.
    pub requested_slots: usize,
}

impl GardenLayout {
    /// Number of requested slots that could not be placed.
    pub fn shortfall(&self) -> usize {
        self.requested_slots.saturating_sub(self.slots.len())
    }
}

/// Immutable layout engine. Cheap to share across threads; every call brings
/// its own rng.
#[derive(Clone, Debug)]
pub struct LayoutGenerator {
    config: GardenConfig,
    table: ClusterTable,
}

impl Default for LayoutGenerator {
    /// Default config and table, both checked by the same validation as
    /// [`LayoutGenerator::new`].
    fn default() -> Self {
        let config = GardenConfig::default();
        debug_assert!(config.validate().is_ok(), "default garden config must validate");
        Self {
            config,
            table: ClusterTable::default(),
        }
    }
}

impl LayoutGenerator {
    /// Validates `config`; `table` was validated when it was built.
    pub fn new(config: GardenConfig, table: ClusterTable) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn table(&self) -> &ClusterTable {
        &self.table
    }

    /// Classify and position every record, then backfill empty slots around
    /// the resulting flowers. Never fails: degenerate input yields a valid,
    /// possibly empty, layout.
    pub fn generate(
        &self,
        records: &[MemoryRecord],
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> GardenLayout {
        let positions = place_flowers(records, &self.table, &self.config, rng);
        let flowers: Vec<PositionedFlower> = records
            .iter()
            .zip(&positions)
            .map(|(record, p)| PositionedFlower {
                memory: record.clone(),
                x: p.x,
                y: p.y,
                state: self.config.lifecycle.classify_record(record, now),
                cluster: self.table.zone(record.resolved_emotion()).emotion,
            })
            .collect();

        let requested_slots = self.config.slot_count(records.len());
        let slots = SlotAllocator::from_config(&self.config).allocate(
            requested_slots,
            &positions,
            self.table.zones(),
            rng,
        );

        let layout = GardenLayout {
            flowers,
            slots,
            requested_slots,
        };
        tracing::debug!(
            flowers = layout.flowers.len(),
            slots = layout.slots.len(),
            requested = requested_slots,
            shortfall = layout.shortfall(),
            "generated garden layout"
        );
        layout
    }
}
