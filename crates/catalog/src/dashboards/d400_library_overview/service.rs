use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_library_overview::dto::{CategoryCount, LibraryOverview};
use contracts::domain::a001_book::Book;
use contracts::enums::Category;

/// Overview of the catalog as of `today`
pub fn compute(books: &[Book], today: NaiveDate) -> LibraryOverview {
    let categories: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: books.iter().filter(|b| b.category == category).count(),
        })
        .collect();

    let recently_added = books
        .iter()
        .filter(|b| {
            let created = b.base.created_at.date_naive();
            created.year() == today.year() && created.month() == today.month()
        })
        .count();

    LibraryOverview {
        total_books: books.len(),
        recently_added,
        active_categories: categories.iter().filter(|c| c.count > 0).count(),
        current_year: today.year(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_book::demo_books;

    #[test]
    fn test_overview_of_demo_catalog() {
        let books = demo_books().all();
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let overview = compute(&books, today);

        assert_eq!(overview.total_books, 5);
        assert_eq!(overview.active_categories, 5);
        assert_eq!(overview.recently_added, 1);
        assert_eq!(overview.current_year, 2024);
        assert_eq!(overview.categories.len(), 5);
        assert_eq!(overview.categories[0].category, Category::Poetry);
        assert!(overview.categories.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_empty_catalog() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let overview = compute(&[], today);
        assert_eq!(overview.total_books, 0);
        assert_eq!(overview.active_categories, 0);
    }
}
