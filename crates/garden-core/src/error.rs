use std::fmt;

use crate::emotion::Emotion;

/// Configuration errors. Layout generation itself never fails; only building
/// an invalid cluster table or garden config does.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    EmptyTable,
    MissingFallbackZone,
    DuplicateZone(Emotion),
    InvalidZone { emotion: Emotion, reason: String },
    NestedZones { outer: Emotion, inner: Emotion },
    InvalidConfig(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyTable => write!(f, "cluster table has no zones"),
            LayoutError::MissingFallbackZone => {
                write!(f, "cluster table has no '{}' zone", Emotion::FALLBACK.as_str())
            }
            LayoutError::DuplicateZone(e) => write!(f, "duplicate zone for '{}'", e.as_str()),
            LayoutError::InvalidZone { emotion, reason } => {
                write!(f, "invalid zone '{}': {reason}", emotion.as_str())
            }
            LayoutError::NestedZones { outer, inner } => write!(
                f,
                "zone '{}' lies entirely inside zone '{}'",
                inner.as_str(),
                outer.as_str()
            ),
            LayoutError::InvalidConfig(msg) => write!(f, "invalid garden config: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}

pub type Result<T> = std::result::Result<T, LayoutError>;
