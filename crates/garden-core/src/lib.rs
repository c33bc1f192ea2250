//! Memory garden layout and lifecycle engine.
//!
//! Turns one user's memory records into a garden scene: every memory becomes
//! a flower placed in its emotion's cluster with a lifecycle state
//! (bud/bloom/fruit) derived from lock status and age, and the free ground
//! between clusters is seeded with plantable empty slots by bounded
//! rejection sampling.
//!
//! Zero I/O: pure math engine. Randomness is injected by the caller.

pub mod classifier;
pub mod cluster;
pub mod collision;
pub mod config;
pub mod constants;
pub mod emotion;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod lifecycle;
pub mod memory;
pub mod placement;
pub mod serde_compat;
pub mod slots;
pub mod stats;
pub mod time;

pub use classifier::classify_text;
pub use cluster::{ClusterTable, ClusterZone};
pub use collision::{CollisionIndex, inside_any_zone, too_close};
pub use config::{GardenConfig, LifecycleThresholds};
pub use emotion::{Emotion, Plant};
pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Point};
pub use layout::{GardenLayout, LayoutGenerator, PositionedFlower};
pub use lifecycle::{LifecycleState, classify, is_locked};
pub use memory::MemoryRecord;
pub use placement::place_flowers;
pub use serde_compat::{export_layout, import_records};
pub use slots::{EmptySlot, SlotAllocator};
pub use stats::{ClusterStats, GardenStats, LifecycleCounts, cluster_stats};
pub use time::parse_timestamp;
