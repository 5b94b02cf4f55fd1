use chrono::{Datelike, Month};
use contracts::dashboards::d401_yearly_summary::dto::{
    CategoryTrend, MonthlyCount, YearlySummary, YearlySummaryRequest,
};
use contracts::domain::a001_book::Book;
use contracts::enums::Category;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn added_in(books: &[Book], year: i32) -> impl Iterator<Item = &Book> {
    books
        .iter()
        .filter(move |b| b.base.created_at.year() == year)
}

/// Change against the previous year; `None` without a baseline
fn percent_change(current: usize, previous: Option<usize>) -> Option<f64> {
    match previous {
        None | Some(0) => None,
        Some(previous) => Some((current as f64 - previous as f64) / previous as f64 * 100.0),
    }
}

/// Yearly summary of books added to the catalog (by creation timestamp)
pub fn compute(books: &[Book], request: YearlySummaryRequest) -> YearlySummary {
    let year = request.year;

    let mut per_month = [0usize; 12];
    for book in added_in(books, year) {
        per_month[book.base.created_at.month0() as usize] += 1;
    }
    let total_added: usize = per_month.iter().sum();
    // i32::MIN has no previous year
    let previous_year = year.checked_sub(1);
    let previous_total = previous_year.map(|prev| added_in(books, prev).count());

    // earliest month with the maximum
    let most_active_month = per_month
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .fold(None::<(usize, usize)>, |best, (i, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((i, *count)),
        })
        .map(|(i, _)| MONTHS[i]);

    let mut categories: Vec<CategoryTrend> = Category::ALL
        .into_iter()
        .map(|category| {
            let added = added_in(books, year).filter(|b| b.category == category).count();
            let previous = previous_year.map(|prev| {
                added_in(books, prev)
                    .filter(|b| b.category == category)
                    .count()
            });
            CategoryTrend {
                category,
                added,
                trend_percent: percent_change(added, previous),
            }
        })
        .collect();
    // stable sort keeps menu order on ties
    categories.sort_by(|a, b| b.added.cmp(&a.added));

    YearlySummary {
        year,
        total_added,
        monthly: MONTHS
            .iter()
            .zip(per_month)
            .map(|(month, count)| MonthlyCount {
                month: *month,
                count,
            })
            .collect(),
        monthly_average: (total_added as f64 / 12.0 * 10.0).round() / 10.0,
        most_active_month,
        growth_percent: percent_change(total_added, previous_total),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_book::service::sample_dto;
    use chrono::{TimeZone, Utc};

    fn added(category: Category, y: i32, m: u32, d: u32) -> Book {
        let created_at = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        Book::new_with_created_at(sample_dto(category, y), created_at)
    }

    #[test]
    fn test_monthly_breakdown_and_average() {
        let books = vec![
            added(Category::Poetry, 2024, 3, 1),
            added(Category::Poetry, 2024, 3, 9),
            added(Category::Drama, 2024, 10, 5),
            added(Category::Reading, 2023, 3, 1),
        ];
        let summary = compute(&books, YearlySummaryRequest { year: 2024 });

        assert_eq!(summary.total_added, 3);
        assert_eq!(summary.monthly.len(), 12);
        assert_eq!(summary.monthly[2].count, 2);
        assert_eq!(summary.monthly[9].month, Month::October);
        assert_eq!(summary.monthly_average, 0.3);
        assert_eq!(summary.most_active_month, Some(Month::March));
        assert_eq!(summary.growth_percent, Some(200.0));
    }

    #[test]
    fn test_category_trends() {
        let books = vec![
            added(Category::Poetry, 2023, 1, 1),
            added(Category::Poetry, 2023, 2, 1),
            added(Category::Poetry, 2024, 1, 1),
            added(Category::Drama, 2024, 2, 1),
            added(Category::Drama, 2024, 2, 2),
        ];
        let summary = compute(&books, YearlySummaryRequest { year: 2024 });

        assert_eq!(summary.categories[0].category, Category::Drama);
        assert_eq!(summary.categories[0].trend_percent, None);
        assert_eq!(summary.categories[1].category, Category::Poetry);
        assert_eq!(summary.categories[1].trend_percent, Some(-50.0));
        assert_eq!(summary.categories[2].added, 0);
    }

    #[test]
    fn test_ties_pick_earliest_month_and_empty_year() {
        let books = vec![
            added(Category::Folding, 2024, 6, 1),
            added(Category::Folding, 2024, 2, 1),
        ];
        let summary = compute(&books, YearlySummaryRequest { year: 2024 });
        assert_eq!(summary.most_active_month, Some(Month::February));

        let empty = compute(&books, YearlySummaryRequest { year: 2020 });
        assert_eq!(empty.total_added, 0);
        assert_eq!(empty.most_active_month, None);
        assert_eq!(empty.growth_percent, None);
        assert_eq!(empty.monthly_average, 0.0);
    }

    #[test]
    fn test_earliest_representable_year_has_no_baseline() {
        let books = vec![added(Category::Poetry, 2024, 1, 1)];
        let summary = compute(&books, YearlySummaryRequest { year: i32::MIN });
        assert_eq!(summary.total_added, 0);
        assert_eq!(summary.growth_percent, None);
        assert!(summary.categories.iter().all(|c| c.trend_percent.is_none()));
    }
}
