//! Expense categories and the colors they are displayed with.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

/// The color used for any category that is not one of the known categories.
pub const NEUTRAL_COLOR: &str = "#cccccc";

/// The category of an expense.
///
/// User input can only produce the eight known categories. `Unknown` exists so that persisted data
/// carrying some other category name can still be loaded and aggregated instead of being thrown
/// away.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Food,
    Transport,
    Rent,
    Shopping,
    Bills,
    Education,
    Health,
    #[default]
    Other,
    Unknown(String),
}

impl Category {
    /// All of the known categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Rent,
        Category::Shopping,
        Category::Bills,
        Category::Education,
        Category::Health,
        Category::Other,
    ];

    pub fn name(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Rent => "Rent",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Other => "Other",
            Category::Unknown(name) => name,
        }
    }

    /// The hex color used to display this category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#f59e0b",
            Category::Transport => "#3b82f6",
            Category::Rent => "#ef4444",
            Category::Shopping => "#ec4899",
            Category::Bills => "#6366f1",
            Category::Education => "#8b5cf6",
            Category::Health => "#10b981",
            Category::Other => "#64748b",
            Category::Unknown(_) => NEUTRAL_COLOR,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }

    /// Maps a persisted name to a category, keeping names we do not recognize as `Unknown`.
    fn from_persisted(name: String) -> Category {
        match Category::ALL.iter().find(|c| c.name() == name) {
            Some(known) => known.clone(),
            None => {
                warn!("Unrecognized category '{name}' found in stored data");
                Category::Unknown(name)
            }
        }
    }
}

/// The error returned when a string is not one of the known category names.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategoryError(String);

impl Display for CategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = Category::ALL.iter().map(|c| c.name().to_string()).collect();
        write!(
            f,
            "invalid category '{}', expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryError {}

impl FromStr for Category {
    type Err = CategoryError;

    /// Parses one of the known category names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .cloned()
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_persisted(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ignores_case() {
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(Category::from_str(" RENT ").unwrap(), Category::Rent);
        assert_eq!(Category::from_str("Other").unwrap(), Category::Other);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Category::from_str("Groceries").unwrap_err();
        assert!(err.to_string().contains("Groceries"));
        assert!(err.to_string().contains("Education"));
    }

    #[test]
    fn test_deserialize_known_and_unknown() {
        let c: Category = serde_json::from_str("\"Health\"").unwrap();
        assert_eq!(c, Category::Health);
        let u: Category = serde_json::from_str("\"Groceries\"").unwrap();
        assert_eq!(u, Category::Unknown("Groceries".to_string()));
        assert!(!u.is_known());
        // persisted names are matched exactly
        let lower: Category = serde_json::from_str("\"food\"").unwrap();
        assert_eq!(lower, Category::Unknown("food".to_string()));
    }

    #[test]
    fn test_serialize_round_trip() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.name()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, c);
        }
        let u = Category::Unknown("Pets".to_string());
        assert_eq!(serde_json::to_string(&u).unwrap(), "\"Pets\"");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Category::Food.color(), "#f59e0b");
        assert_eq!(Category::Other.color(), "#64748b");
        assert_eq!(Category::Unknown("Pets".into()).color(), NEUTRAL_COLOR);
    }
}
