use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// Response for the library overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryOverview {
    /// Books across all categories
    pub total_books: usize,
    /// Books added in the current calendar month
    pub recently_added: usize,
    /// Categories holding at least one book
    pub active_categories: usize,
    /// Year the overview was computed for
    pub current_year: i32,
    /// One row per category, in menu order
    pub categories: Vec<CategoryCount>,
}

/// Number of books in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}
