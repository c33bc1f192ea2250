use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cluster::ClusterZone;
use crate::collision::CollisionIndex;
use crate::config::GardenConfig;
use crate::geometry::{Bounds, Point};

/// Plantable point with no memory attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmptySlot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub ready_to_plant: bool,
}

impl EmptySlot {
    fn new(position: Point, rng: &mut impl Rng) -> Self {
        Self {
            id: uuid::Builder::from_random_bytes(rng.random()).into_uuid(),
            x: position.x,
            y: position.y,
            ready_to_plant: true,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Best-effort rejection sampler for empty slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotAllocator {
    pub bounds: Bounds,
    pub min_spacing: f64,
    pub max_attempts_per_slot: u32,
}

impl SlotAllocator {
    pub fn from_config(config: &GardenConfig) -> Self {
        Self {
            bounds: config.placement_bounds(),
            min_spacing: config.min_spacing,
            max_attempts_per_slot: config.max_attempts_per_slot,
        }
    }

    /// Draw up to `count` slots. Each slot gets `max_attempts_per_slot`
    /// uniform draws; a draw is accepted iff it keeps `min_spacing` from every
    /// flower and every slot accepted so far and lies outside every zone.
    /// Slots whose attempts run out are dropped, so the result may be short.
    pub fn allocate(
        &self,
        count: usize,
        flowers: &[Point],
        zones: &[ClusterZone],
        rng: &mut impl Rng,
    ) -> Vec<EmptySlot> {
        if self.max_attempts_per_slot == 0 {
            return Vec::new();
        }
        let mut index = CollisionIndex::new(flowers.iter().copied(), zones);
        // `count` comes straight from config; grow on demand.
        let mut slots = Vec::new();

        for slot_idx in 0..count {
            let accepted = (0..self.max_attempts_per_slot)
                .map(|_| self.bounds.sample(rng))
                .find(|candidate| index.is_free(*candidate, self.min_spacing));

            match accepted {
                Some(position) => {
                    index.insert(position);
                    slots.push(EmptySlot::new(position, rng));
                }
                None => tracing::debug!(
                    slot = slot_idx,
                    attempts = self.max_attempts_per_slot,
                    "dropping unplaceable empty slot"
                ),
            }
        }

        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterTable;
    use crate::emotion::Emotion;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn assert_constraints(slots: &[EmptySlot], flowers: &[Point], zones: &[ClusterZone], spacing: f64) {
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(a.position().distance(b.position()) >= spacing);
            }
            for f in flowers {
                assert!(a.position().distance(*f) >= spacing);
            }
            for z in zones {
                assert!(a.position().distance(z.center) >= z.radius);
            }
            assert!(a.ready_to_plant);
        }
    }

    #[test]
    fn test_default_garden_constraints_hold() {
        let mut rng = rng();
        let config = GardenConfig::default();
        let table = ClusterTable::default();
        let flowers = vec![Point::new(25.0, 20.0), Point::new(50.0, 40.0)];
        let slots = SlotAllocator::from_config(&config).allocate(20, &flowers, table.zones(), &mut rng);

        assert!(slots.len() <= 20);
        assert_constraints(&slots, &flowers, table.zones(), config.min_spacing);
    }

    #[test]
    fn test_open_field_fills_request() {
        let mut rng = rng();
        let allocator = SlotAllocator {
            bounds: Bounds::inset(1000.0, 1000.0, 10.0),
            min_spacing: 5.0,
            max_attempts_per_slot: 100,
        };
        let slots = allocator.allocate(10, &[], &[], &mut rng);
        assert_eq!(slots.len(), 10);
        assert_constraints(&slots, &[], &[], 5.0);
    }

    #[test]
    fn test_congested_garden_under_allocates() {
        let mut rng = rng();
        // 20×20 garden with margin 10 collapses to the single point (10, 10),
        // which is occupied.
        let allocator = SlotAllocator {
            bounds: Bounds::inset(20.0, 20.0, 10.0),
            min_spacing: 15.0,
            max_attempts_per_slot: 10,
        };
        let slots = allocator.allocate(5, &[Point::new(10.0, 10.0)], &[], &mut rng);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_slots_avoid_each_other() {
        let mut rng = rng();
        // Room for exactly one slot: the whole area is a 1×1 square.
        let allocator = SlotAllocator {
            bounds: Bounds::inset(21.0, 21.0, 10.0),
            min_spacing: 15.0,
            max_attempts_per_slot: 100,
        };
        let slots = allocator.allocate(3, &[], &[], &mut rng);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_zone_blocks_slots() {
        let mut rng = rng();
        let zones = [ClusterZone::new(Emotion::Happy, 50.0, 50.0, 100.0)];
        let allocator = SlotAllocator {
            bounds: Bounds::inset(100.0, 100.0, 10.0),
            min_spacing: 1.0,
            max_attempts_per_slot: 50,
        };
        assert!(allocator.allocate(5, &[], &zones, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let mut rng = rng();
        let slots = SlotAllocator::from_config(&GardenConfig::default()).allocate(0, &[], &[], &mut rng);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_huge_request_without_attempts_is_empty() {
        let mut rng = rng();
        let allocator = SlotAllocator {
            bounds: Bounds::inset(100.0, 80.0, 10.0),
            min_spacing: 15.0,
            max_attempts_per_slot: 0,
        };
        assert!(allocator.allocate(usize::MAX, &[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_ids_are_unique_v4() {
        let mut rng = rng();
        let allocator = SlotAllocator {
            bounds: Bounds::inset(1000.0, 1000.0, 0.0),
            min_spacing: 1.0,
            max_attempts_per_slot: 100,
        };
        let slots = allocator.allocate(8, &[], &[], &mut rng);
        let ids: std::collections::HashSet<_> = slots.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), slots.len());
        assert!(slots.iter().all(|s| s.id.get_version_num() == 4));
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let allocator = SlotAllocator::from_config(&GardenConfig::default());
        let zones = ClusterTable::default();
        let a = allocator.allocate(20, &[], zones.zones(), &mut rng());
        let b = allocator.allocate(20, &[], zones.zones(), &mut rng());
        assert_eq!(a, b);
    }
}
