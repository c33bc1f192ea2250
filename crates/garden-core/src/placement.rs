use std::f64::consts::TAU;

use rand::Rng;

use crate::cluster::ClusterTable;
use crate::config::GardenConfig;
use crate::emotion::Emotion;
use crate::geometry::{Point, uniform};
use crate::memory::MemoryRecord;

/// Group record indices by resolved emotion. Groups appear in order of first
/// occurrence; members keep input order.
pub fn group_by_emotion(records: &[MemoryRecord]) -> Vec<(Emotion, Vec<usize>)> {
    let mut groups: Vec<(Emotion, Vec<usize>)> = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let emotion = record.resolved_emotion();
        match groups.iter_mut().find(|(e, _)| *e == emotion) {
            Some((_, members)) => members.push(i),
            None => groups.push((emotion, vec![i])),
        }
    }
    groups
}

/// Position one flower per record inside its emotion's cluster.
///
/// Member `i` of a group of `k` sits at angle `i/k · 2π` from the zone
/// center, at a random distance up to `spread · radius`, then gets per-axis
/// jitter and is clamped to the margin-inset garden. Jitter may push a flower
/// slightly outside its own zone. Returned positions follow input order.
pub fn place_flowers(
    records: &[MemoryRecord],
    table: &ClusterTable,
    config: &GardenConfig,
    rng: &mut impl Rng,
) -> Vec<Point> {
    let bounds = config.placement_bounds();
    let mut positions = vec![Point::new(0.0, 0.0); records.len()];

    for (emotion, members) in group_by_emotion(records) {
        let zone = table.zone(emotion);
        let k = members.len() as f64;
        for (i, &record_idx) in members.iter().enumerate() {
            let angle = (i as f64 / k) * TAU;
            let distance = uniform(rng, 0.0, config.spread * zone.radius);
            let base = zone.center.polar_offset(angle, distance);
            let jittered = Point::new(
                base.x + uniform(rng, -config.jitter, config.jitter),
                base.y + uniform(rng, -config.jitter, config.jitter),
            );
            positions[record_idx] = bounds.clamp(jittered);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterZone;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn record(id: &str, emotion: &str) -> MemoryRecord {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        MemoryRecord::new(id, t).with_emotion(emotion)
    }

    #[test]
    fn test_grouping_preserves_order() {
        let records = vec![
            record("a", "sad"),
            record("b", "calm"),
            record("c", "sad"),
            record("d", "unknown"),
            record("e", "happy"),
        ];
        let groups = group_by_emotion(&records);
        assert_eq!(
            groups,
            vec![
                (Emotion::Sad, vec![0, 2]),
                (Emotion::Calm, vec![1]),
                (Emotion::Happy, vec![3, 4]),
            ]
        );
    }

    #[test]
    fn test_empty_input_places_nothing() {
        let mut rng = rng();
        let positions =
            place_flowers(&[], &ClusterTable::default(), &GardenConfig::default(), &mut rng);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_flowers_near_their_cluster() {
        let mut rng = rng();
        let table = ClusterTable::default();
        let config = GardenConfig::default();
        let records: Vec<_> = (0..12).map(|i| record(&format!("r{i}"), "calm")).collect();
        let positions = place_flowers(&records, &table, &config, &mut rng);

        let zone = table.zone(Emotion::Calm);
        let max_offset = config.spread * zone.radius + config.jitter * 2f64.sqrt();
        for p in &positions {
            assert!(p.distance(zone.center) <= max_offset + 1e-9);
            assert!(config.placement_bounds().contains(*p));
        }
    }

    #[test]
    fn test_angular_skeleton_without_randomness() {
        // Zero spread and jitter pin every member to the zone center.
        let table = ClusterTable::new(vec![ClusterZone::new(Emotion::Happy, 40.0, 40.0, 10.0)]).unwrap();
        let config = GardenConfig { spread: 0.0, jitter: 0.0, ..Default::default() };
        let mut rng = rng();
        let records: Vec<_> = (0..4).map(|i| record(&format!("r{i}"), "happy")).collect();
        let positions = place_flowers(&records, &table, &config, &mut rng);
        for p in positions {
            assert_eq!(p, Point::new(40.0, 40.0));
        }
    }

    #[test]
    fn test_members_fan_out_around_center() {
        // Large spread, no jitter: each member lies on its own angular ray.
        let table = ClusterTable::new(vec![ClusterZone::new(Emotion::Happy, 40.0, 40.0, 20.0)]).unwrap();
        let config = GardenConfig { jitter: 0.0, ..Default::default() };
        let mut rng = rng();
        let records: Vec<_> = (0..4).map(|i| record(&format!("r{i}"), "happy")).collect();
        let positions = place_flowers(&records, &table, &config, &mut rng);

        for (i, p) in positions.iter().enumerate() {
            let dx = p.x - 40.0;
            let dy = p.y - 40.0;
            if dx.hypot(dy) < 1e-9 {
                continue;
            }
            let expected = i as f64 / 4.0 * TAU;
            let actual = dy.atan2(dx).rem_euclid(TAU);
            let diff = (actual - expected).abs();
            assert!(
                diff < 1e-9 || (TAU - diff) < 1e-9,
                "member {i}: expected angle {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_clamped_into_tiny_garden() {
        let mut rng = rng();
        let config = GardenConfig { width: 30.0, height: 30.0, ..Default::default() };
        let records: Vec<_> = Emotion::ALL.iter().map(|e| record(e.as_str(), e.as_str())).collect();
        let positions = place_flowers(&records, &ClusterTable::default(), &config, &mut rng);
        for p in positions {
            assert!((10.0..=20.0).contains(&p.x) && (10.0..=20.0).contains(&p.y), "{p:?}");
        }
    }
}
