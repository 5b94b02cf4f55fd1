//! Field-level matchers over catalog records

use contracts::domain::common::Filterable;
use contracts::shared::filter::{CategoryScope, StatusSelector, YearSelector};

/// One list filter; filters compose by AND
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Wildcard scope matches everything, otherwise exact category
    CategoryEquals(CategoryScope),
    /// Wildcard matches everything, otherwise exact year
    YearEquals(YearSelector),
    /// Case-insensitive substring over any of `fields`
    TextContains {
        term: String,
        fields: Vec<&'static str>,
    },
    /// Wildcard matches everything, otherwise completion flag equality
    StatusEquals(StatusSelector),
}

impl Predicate {
    pub fn text_contains(term: &str, fields: &[&'static str]) -> Self {
        Predicate::TextContains {
            term: term.to_lowercase(),
            fields: fields.to_vec(),
        }
    }

    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        match self {
            Predicate::CategoryEquals(scope) => match scope {
                CategoryScope::All => true,
                CategoryScope::Only(category) => record.category() == Some(*category),
            },
            Predicate::YearEquals(selector) => match selector {
                YearSelector::All => true,
                YearSelector::Year(year) => record.year() == Some(*year),
            },
            Predicate::TextContains { term, fields } => {
                if term.is_empty() {
                    return true;
                }
                let term = term.to_lowercase();
                fields.iter().any(|field| {
                    record
                        .text_field(field)
                        .map(|value| value.to_lowercase().contains(term.as_str()))
                        .unwrap_or(false)
                })
            }
            Predicate::StatusEquals(selector) => match selector.flag() {
                None => true,
                Some(flag) => record.completion() == Some(flag),
            },
        }
    }
}
