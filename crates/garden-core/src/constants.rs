/// Garden plane width (x extent).
pub const GARDEN_WIDTH: f64 = 100.0;

/// Garden plane height (y extent).
pub const GARDEN_HEIGHT: f64 = 80.0;

/// Inset from every garden edge that placement never crosses.
pub const MARGIN: f64 = 10.0;

/// Minimum distance between an empty slot and any flower or other slot.
pub const MIN_SPACING: f64 = 15.0;

/// Rejection-sampling budget per empty slot.
pub const MAX_ATTEMPTS_PER_SLOT: u32 = 100;

/// Lower bound on the number of empty slots requested per layout.
pub const MIN_EMPTY_SLOTS: usize = 20;

/// One extra empty slot is requested per this many memories.
pub const MEMORIES_PER_SLOT: usize = 2;

/// Flowers sit at most `SPREAD * radius` from their cluster center (before jitter).
pub const SPREAD: f64 = 0.8;

/// Per-axis uniform jitter half-width applied to flower positions.
pub const JITTER: f64 = 3.0;

/// Memories at most this many days old are buds.
pub const BUD_MAX_DAYS: i64 = 7;

/// Memories at most this many days old (and older than a bud) are in bloom.
pub const BLOOM_MAX_DAYS: i64 = 30;

/// Seconds per day, used for whole-day age computation.
pub const SECONDS_PER_DAY: i64 = 86_400;
