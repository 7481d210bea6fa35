use serde::Serialize;
use std::fmt;

/// One of the eight moods a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
    Tired,
    Anxious,
    Sick,
    Surprised,
}

impl Mood {
    /// Dropdown order.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Anxious,
        Mood::Sick,
        Mood::Surprised,
    ];

    /// The raw token written to the store, e.g. `😍 (Happy)`.
    pub fn token(self) -> &'static str {
        match self {
            Mood::Happy => "😍 (Happy)",
            Mood::Neutral => "😐 (Neutral)",
            Mood::Sad => "😭 (Sad)",
            Mood::Angry => "😡 (Angry)",
            Mood::Tired => "😴 (Tired)",
            Mood::Anxious => "😰 (Anxious)",
            Mood::Sick => "🤢 (Sick)",
            Mood::Surprised => "😲 (Surprised)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Anxious => "Anxious",
            Mood::Sick => "Sick",
            Mood::Surprised => "Surprised",
        }
    }

    /// Exact token match only; labels are not accepted here.
    pub fn from_token(token: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.token() == token)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored mood after mapping through the catalog. Tokens edited into the
/// sheet by hand that match no mood land in `Other` instead of vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Known(Mood),
    Other,
}

impl Category {
    pub fn from_token(token: &str) -> Self {
        Mood::from_token(token).map_or(Category::Other, Category::Known)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Known(mood) => mood.label(),
            Category::Other => "Other",
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogItem {
    pub token: &'static str,
    pub label: &'static str,
}

pub fn catalog() -> Vec<CatalogItem> {
    Mood::ALL
        .into_iter()
        .map(|mood| CatalogItem {
            token: mood.token(),
            label: mood.label(),
        })
        .collect()
}
