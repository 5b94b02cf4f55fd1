//! Query execution over a snapshot and facet computation

use std::collections::BTreeSet;

use contracts::domain::common::Filterable;
use contracts::enums::Category;
use contracts::shared::filter::FilterState;

use super::predicate::Predicate;

/// Predicates of a screen filter for record kind `R`
pub fn predicates_for<R: Filterable>(state: &FilterState) -> Vec<Predicate> {
    vec![
        Predicate::CategoryEquals(state.category),
        Predicate::text_contains(&state.search, R::search_fields()),
        Predicate::YearEquals(state.year),
        Predicate::StatusEquals(state.status),
    ]
}

/// AND of all predicates; an empty set matches everything
pub fn matches_all<R: Filterable>(record: &R, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| p.matches(record))
}

/// Single left-to-right scan keeping input order
pub fn run<R: Filterable + Clone>(records: &[R], predicates: &[Predicate]) -> Vec<R> {
    let result: Vec<R> = records
        .iter()
        .filter(|r| matches_all(*r, predicates))
        .cloned()
        .collect();
    tracing::debug!(
        total = records.len(),
        matched = result.len(),
        predicates = predicates.len(),
        "query executed"
    );
    result
}

/// Distinct values of a field, ascending
pub fn distinct_values<R, V, F>(records: &[R], selector: F) -> BTreeSet<V>
where
    V: Ord,
    F: Fn(&R) -> Option<V>,
{
    records.iter().filter_map(selector).collect()
}

/// Years present in the collection, newest first
pub fn year_facet<R: Filterable>(records: &[R]) -> Vec<i32> {
    distinct_values(records, |r| r.year())
        .into_iter()
        .rev()
        .collect()
}

/// Categories present in the collection, in menu order
pub fn category_facet<R: Filterable>(records: &[R]) -> Vec<Category> {
    let present = distinct_values(records, |r| r.category());
    Category::ALL
        .into_iter()
        .filter(|c| present.contains(c))
        .collect()
}
