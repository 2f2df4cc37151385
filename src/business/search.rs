//! Search and filtering
//!
//! Pure filtering over entries already loaded by the caller.

use crate::database::models::{CategoryFilter, JournalEntry};

/// Convert a string to lowercase for case-insensitive search
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Check if a string contains the search phrase (case-insensitive)
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    to_lower(text).contains(&to_lower(phrase))
}

/// Keep entries matching the category filter and search text
///
/// - `CategoryFilter::All` matches every category
/// - Empty `search_text` matches every description
/// - Otherwise the description must contain `search_text`, ignoring case
///
/// Input order is preserved.
pub fn filter_entries(
    entries: &[JournalEntry],
    category: CategoryFilter,
    search_text: &str,
) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| category.matches(e.category))
        .filter(|e| search_text.is_empty() || contains_phrase(&e.description, search_text))
        .cloned()
        .collect()
}
