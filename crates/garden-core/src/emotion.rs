use serde::{Deserialize, Serialize};

/// Emotion tag attached to a memory. Determines which cluster the memory's
/// flower grows in and which plant it is drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Happy,
    Romantic,
    Sad,
    Calm,
    Angry,
    Nostalgic,
    Excited,
    Proud,
}

/// Visual descriptor for the plant an emotion grows into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plant {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

impl Emotion {
    /// Zone used for absent or unrecognised tags.
    pub const FALLBACK: Emotion = Emotion::Happy;

    pub const ALL: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Romantic,
        Emotion::Sad,
        Emotion::Calm,
        Emotion::Angry,
        Emotion::Nostalgic,
        Emotion::Excited,
        Emotion::Proud,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Romantic => "romantic",
            Self::Sad => "sad",
            Self::Calm => "calm",
            Self::Angry => "angry",
            Self::Nostalgic => "nostalgic",
            Self::Excited => "excited",
            Self::Proud => "proud",
        }
    }

    /// Exact parse. Tags are case-sensitive: `"Sad"` is not `sad`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }

    /// Opt-in lenient parse for free-form input such as classifier output or
    /// a user typing a tag: trims and lower-cases before matching. Stored
    /// tags never go through this.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        Self::parse(&s.trim().to_lowercase())
    }

    /// Parse a tag, falling back to [`Emotion::FALLBACK`] for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::FALLBACK)
    }

    /// Resolve an optional tag as stored on a memory record.
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.map(Self::from_str_lossy).unwrap_or(Self::FALLBACK)
    }

    pub fn plant(&self) -> Plant {
        let (name, emoji, color) = match self {
            Self::Happy => ("Sunflower", "🌻", "#FFD700"),
            Self::Romantic => ("Rose", "🌹", "#FF69B4"),
            Self::Sad => ("Fern", "🌿", "#228B22"),
            Self::Calm => ("Pine", "🌲", "#32CD32"),
            Self::Angry => ("Cactus", "🌵", "#8B4513"),
            Self::Nostalgic => ("Daisy", "🌼", "#FFA500"),
            Self::Excited => ("Tulip", "🌷", "#FF1493"),
            Self::Proud => ("Hibiscus", "🌺", "#FF4500"),
        };
        Plant { name, emoji, color }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
