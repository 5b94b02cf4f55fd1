pub mod engine;
pub mod predicate;

pub use engine::{category_facet, distinct_values, matches_all, predicates_for, run, year_facet};
pub use predicate::Predicate;
