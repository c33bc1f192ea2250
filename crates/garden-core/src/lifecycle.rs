use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LifecycleThresholds;
use crate::memory::MemoryRecord;
use crate::time::age_days;

/// Display state of a memory, derived from lock status and age.
/// Never stored; recomputed on every read because `now` moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Locked, or created within the last week.
    Bud,
    /// Mid-age. Also the state for records with no usable creation time.
    Bloom,
    /// Old.
    Fruit,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 3] = [Self::Bud, Self::Bloom, Self::Fruit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bud => "bud",
            Self::Bloom => "bloom",
            Self::Fruit => "fruit",
        }
    }
}

/// True iff the memory has an unlock time still in the future.
pub fn is_locked(unlock_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    unlock_at.is_some_and(|t| t > now)
}

/// Classify with the default 7 / 30 day thresholds.
pub fn classify(
    created_at: Option<DateTime<Utc>>,
    unlock_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> LifecycleState {
    LifecycleThresholds::default().classify(created_at, unlock_at, now)
}

impl LifecycleThresholds {
    pub fn classify(
        &self,
        created_at: Option<DateTime<Utc>>,
        unlock_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> LifecycleState {
        if is_locked(unlock_at, now) {
            return LifecycleState::Bud;
        }
        let Some(created_at) = created_at else {
            return LifecycleState::Bloom;
        };
        let age = age_days(created_at, now);
        if age > self.bloom_max_days {
            LifecycleState::Fruit
        } else if age > self.bud_max_days {
            LifecycleState::Bloom
        } else {
            LifecycleState::Bud
        }
    }

    pub fn classify_record(&self, record: &MemoryRecord, now: DateTime<Utc>) -> LifecycleState {
        self.classify(record.created_at, record.unlock_at, now)
    }
}
