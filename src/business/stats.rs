//! Journal statistics
//!
//! Pure aggregation over entries already loaded by the caller.

use crate::database::models::{AverageRating, Category, JournalEntry, JournalStatistics};
use crate::utils::round_one_decimal;

/// Count entries per category and average their ratings
///
/// The average is rounded to one decimal, or `NotApplicable` for no entries.
pub fn compute_statistics(entries: &[JournalEntry]) -> JournalStatistics {
    let count = |category: Category| entries.iter().filter(|e| e.category == category).count();

    let total = entries.len();
    let average_rating = if total == 0 {
        AverageRating::NotApplicable
    } else {
        let rating_sum: u32 = entries.iter().map(|e| u32::from(e.rating.value())).sum();
        AverageRating::Value(round_one_decimal(f64::from(rating_sum) / total as f64))
    };

    JournalStatistics {
        breakfast: count(Category::Breakfast),
        lunch: count(Category::Lunch),
        dinner: count(Category::Dinner),
        snacks: count(Category::Snacks),
        total,
        average_rating,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::database::models::Rating;
    use chrono::{TimeZone, Utc};

    pub fn entry(id: i64, category: Category, rating: i64, description: &str) -> JournalEntry {
        JournalEntry {
            id,
            user_id: 1,
            image: format!("img{id}.jpg"),
            description: description.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            category,
            rating: Rating::new(rating).unwrap(),
        }
    }

    #[test]
    fn test_statistics_counts_and_average() {
        let entries = vec![
            entry(1, Category::Breakfast, 5, "Pancakes"),
            entry(2, Category::Breakfast, 3, "Toast"),
            entry(3, Category::Lunch, 4, "Salad"),
        ];

        let stats = compute_statistics(&entries);
        assert_eq!(stats.breakfast, 2);
        assert_eq!(stats.lunch, 1);
        assert_eq!(stats.dinner, 0);
        assert_eq!(stats.snacks, 0);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_rating, AverageRating::Value(4.0));
        assert_eq!(stats.average_rating.to_string(), "4.0");
    }

    #[test]
    fn test_statistics_empty() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, AverageRating::NotApplicable);
        assert_eq!(stats.average_rating.to_string(), "N/A");
        for category in Category::ALL {
            assert_eq!(stats.count_for(category), 0);
        }
    }

    #[test]
    fn test_statistics_rounds_to_one_decimal() {
        let entries = vec![
            entry(1, Category::Dinner, 5, "Steak"),
            entry(2, Category::Snacks, 5, "Chips"),
            entry(3, Category::Snacks, 1, "Stale crackers"),
        ];

        let stats = compute_statistics(&entries);
        assert_eq!(stats.average_rating, AverageRating::Value(3.7));
        assert_eq!(stats.count_for(Category::Snacks), 2);
        assert_eq!(stats.count_for(Category::Dinner), 1);
    }

    #[test]
    fn test_statistics_default_ratings() {
        let mut entries = vec![entry(1, Category::Lunch, 3, "Wrap")];
        entries[0].rating = Rating::default();

        let stats = compute_statistics(&entries);
        assert_eq!(stats.average_rating.value(), Some(3.0));
    }

    #[test]
    fn test_statistics_serialized_shape() {
        let entries = vec![
            entry(1, Category::Breakfast, 5, "Pancakes"),
            entry(2, Category::Breakfast, 3, "Toast"),
            entry(3, Category::Lunch, 4, "Salad"),
        ];

        let json = serde_json::to_value(compute_statistics(&entries)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Breakfast": 2,
                "Lunch": 1,
                "Dinner": 0,
                "Snacks": 0,
                "Total": 3,
                "AverageRating": "4.0"
            })
        );

        let empty = serde_json::to_value(compute_statistics(&[])).unwrap();
        assert_eq!(empty["AverageRating"], "N/A");
        assert_eq!(empty["Total"], 0);
    }
}
