//! Fixed task category catalogue.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Optional tag attached to a manual task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Study,
    Workout,
    Eat,
    Sleep,
    Commute,
    Social,
    Hobby,
    Chores,
    Health,
    Other,
}

impl Category {
    /// Every category in picker order.
    pub const ALL: [Category; 11] = [
        Category::Work,
        Category::Study,
        Category::Workout,
        Category::Eat,
        Category::Sleep,
        Category::Commute,
        Category::Social,
        Category::Hobby,
        Category::Chores,
        Category::Health,
        Category::Other,
    ];

    /// Stable identifier used in storage.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Study => "study",
            Category::Workout => "workout",
            Category::Eat => "eat",
            Category::Sleep => "sleep",
            Category::Commute => "commute",
            Category::Social => "social",
            Category::Hobby => "hobby",
            Category::Chores => "chores",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Study => "Study",
            Category::Workout => "Workout",
            Category::Eat => "Eat",
            Category::Sleep => "Sleep",
            Category::Commute => "Commute",
            Category::Social => "Social",
            Category::Hobby => "Hobby",
            Category::Chores => "Chores",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Work => "💼",
            Category::Study => "📚",
            Category::Workout => "💪",
            Category::Eat => "🍽️",
            Category::Sleep => "😴",
            Category::Commute => "🚗",
            Category::Social => "👥",
            Category::Hobby => "🎨",
            Category::Chores => "🧹",
            Category::Health => "🏥",
            Category::Other => "📌",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| format!("Invalid category: {s}"))
    }
}

/// Reads a stored category field.
///
/// Older records store an empty string when no category was picked, and ids
/// outside the catalogue are kept as [`Category::Other`] rather than failing
/// the whole schedule.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(id) => Some(id.parse().unwrap_or(Category::Other)),
    })
}
