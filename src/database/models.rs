//! Data models for journal database entities

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use crate::error::{JournalError, Result};
use crate::{DEFAULT_RATING, MAX_RATING, MIN_RATING};

/// Registered journal owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-assigned user ID
    pub id: i64,
    /// Unique login email
    pub email: String,
    /// Opaque credential, hashing is the caller's concern
    #[serde(skip_serializing)]
    pub password: String,
}

/// Meal category stored with every entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Category {
    /// All storable categories in display order
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
    ];

    /// Name as stored in `journals.category`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Snacks => "Snacks",
        }
    }

    /// Parse a category name, case-insensitive
    ///
    /// "All" is a filter value and is rejected here.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| JournalError::InvalidCategory(value.to_string()))
    }

    /// Exact-match lookup used when decoding stored rows
    pub(crate) fn from_db(value: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector used when browsing entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    /// Parse "All" or a category name, case-insensitive
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::parse(value).map(CategoryFilter::Only)
    }

    /// Check whether an entry category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Meal rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
            return Err(JournalError::InvalidRating(value));
        }
        Ok(Rating(value as u8))
    }

    /// Numeric value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Decode `journals.rating`, treating NULL as the default rating
    pub(crate) fn from_db(value: Option<i64>) -> Result<Self> {
        match value {
            None => Ok(Rating::default()),
            Some(v) => Rating::new(v).map_err(|_| {
                JournalError::InvalidData(format!("rating {v} out of range in journals.rating"))
            }),
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(DEFAULT_RATING)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Rating::new(value).map_err(serde::de::Error::custom)
    }
}

/// Journal entry as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Auto-assigned entry ID
    pub id: i64,
    /// Owning user ID
    pub user_id: i64,
    /// Local image file handle
    pub image: String,
    /// Free-text meal description
    pub description: String,
    /// Creation time, never changed by updates
    pub date: DateTime<Utc>,
    /// Meal category
    pub category: Category,
    /// Meal rating
    pub rating: Rating,
}

/// Editable entry fields supplied by the entry form
///
/// Used for both create and update. `user_id` and `date` are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
    /// Local image file handle from camera or gallery
    pub image: String,
    /// Meal description
    pub description: String,
    /// Meal category
    pub category: Category,
    /// Meal rating
    #[serde(default)]
    pub rating: Rating,
}

impl EntryInput {
    /// Build form input with the default rating
    ///
    /// The description is trimmed, matching what the entry form saves.
    pub fn new(image: impl Into<String>, description: &str, category: Category) -> Self {
        Self {
            image: image.into(),
            description: description.trim().to_string(),
            category,
            rating: Rating::default(),
        }
    }

    /// Set the meal rating
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Caller-side form check run before saving
    ///
    /// The store trusts its callers and does not repeat this check.
    pub fn validate(&self) -> Result<()> {
        if self.image.trim().is_empty() {
            return Err(JournalError::Validation("an image is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(JournalError::Validation("a description is required".to_string()));
        }
        Ok(())
    }
}

/// Mean rating across entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    /// Mean rounded to one decimal
    Value(f64),
    /// No entries to average
    NotApplicable,
}

impl AverageRating {
    /// Numeric value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            AverageRating::Value(v) => Some(*v),
            AverageRating::NotApplicable => None,
        }
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::Value(v) => write!(f, "{v:.1}"),
            AverageRating::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregate figures for a set of entries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JournalStatistics {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
    pub snacks: usize,
    pub total: usize,
    pub average_rating: AverageRating,
}

impl JournalStatistics {
    /// Count for one category
    pub fn count_for(&self, category: Category) -> usize {
        match category {
            Category::Breakfast => self.breakfast,
            Category::Lunch => self.lunch,
            Category::Dinner => self.dinner,
            Category::Snacks => self.snacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("Lunch").unwrap(), Category::Lunch);
        assert_eq!(Category::parse(" snacks ").unwrap(), Category::Snacks);
        assert!(matches!(
            Category::parse("All"),
            Err(JournalError::InvalidCategory(_))
        ));
        assert!(Category::parse("Brunch").is_err());
    }

    #[test]
    fn test_category_from_db_is_exact() {
        assert_eq!(Category::from_db("Dinner"), Some(Category::Dinner));
        assert_eq!(Category::from_db("dinner"), None);
        assert_eq!(Category::from_db("All"), None);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::parse("All").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("breakfast").unwrap(),
            CategoryFilter::Only(Category::Breakfast)
        );
        assert!(CategoryFilter::parse("Supper").is_err());

        assert!(CategoryFilter::All.matches(Category::Dinner));
        assert!(CategoryFilter::from(Category::Lunch).matches(Category::Lunch));
        assert!(!CategoryFilter::from(Category::Lunch).matches(Category::Dinner));
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(matches!(Rating::new(0), Err(JournalError::InvalidRating(0))));
        assert!(matches!(Rating::new(6), Err(JournalError::InvalidRating(6))));
        assert!(Rating::new(-3).is_err());
        assert_eq!(Rating::default().value(), DEFAULT_RATING);
    }

    #[test]
    fn test_rating_from_db() {
        assert_eq!(Rating::from_db(None).unwrap(), Rating::default());
        assert_eq!(Rating::from_db(Some(4)).unwrap().value(), 4);
        assert!(matches!(
            Rating::from_db(Some(11)),
            Err(JournalError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap().value(), 2);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn test_entry_input_trims_description() {
        let input = EntryInput::new("img.jpg", "  Oatmeal \n", Category::Breakfast);
        assert_eq!(input.description, "Oatmeal");
        assert_eq!(input.rating, Rating::default());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_entry_input_validation() {
        let missing_image = EntryInput::new("", "Toast", Category::Breakfast);
        assert!(matches!(
            missing_image.validate(),
            Err(JournalError::Validation(_))
        ));

        let blank_description = EntryInput::new("img.jpg", "   ", Category::Lunch);
        assert!(matches!(
            blank_description.validate(),
            Err(JournalError::Validation(_))
        ));
    }

    #[test]
    fn test_entry_input_deserialize_defaults_rating() {
        let input: EntryInput = serde_json::from_str(
            r#"{"image": "a.jpg", "description": "Soup", "category": "Dinner"}"#,
        )
        .unwrap();
        assert_eq!(input.rating.value(), 3);
        assert_eq!(input.category, Category::Dinner);
    }

    #[test]
    fn test_average_rating_display() {
        assert_eq!(AverageRating::Value(4.0).to_string(), "4.0");
        assert_eq!(AverageRating::Value(3.7).to_string(), "3.7");
        assert_eq!(AverageRating::NotApplicable.to_string(), "N/A");
        assert_eq!(AverageRating::NotApplicable.value(), None);
    }

    #[test]
    fn test_user_serialization_skips_password() {
        let user = User {
            id: 1,
            email: "a@b.c".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }
}
