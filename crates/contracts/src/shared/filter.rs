//! Transient list filter state: category scope, search term, year and status selectors

use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// Wildcard value used by every selector
pub const ALL: &str = "all";

/// Category scope taken from the route (`/admin/books/<category>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryScope {
    #[default]
    All,
    Only(Category),
}

impl CategoryScope {
    /// Absent segment and `all` mean no restriction
    pub fn from_route_param(param: Option<&str>) -> Result<Self, String> {
        match param {
            None | Some(ALL) => Ok(CategoryScope::All),
            Some(code) => Category::from_code(code)
                .map(CategoryScope::Only)
                .ok_or_else(|| format!("Unknown category: {}", code)),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryScope::All => None,
            CategoryScope::Only(c) => Some(*c),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CategoryScope::All => ALL,
            CategoryScope::Only(c) => c.code(),
        }
    }
}

/// Year selector of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearSelector {
    #[default]
    All,
    Year(i32),
}

impl YearSelector {
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value == ALL {
            return Ok(YearSelector::All);
        }
        value
            .parse::<i32>()
            .map(YearSelector::Year)
            .map_err(|_| format!("Invalid year selector: {}", value))
    }

    pub fn as_value(&self) -> String {
        match self {
            YearSelector::All => ALL.to_string(),
            YearSelector::Year(y) => y.to_string(),
        }
    }
}

/// Completion status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSelector {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusSelector {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim() {
            ALL => Ok(StatusSelector::All),
            "pending" => Ok(StatusSelector::Pending),
            "completed" => Ok(StatusSelector::Completed),
            other => Err(format!("Invalid status selector: {}", other)),
        }
    }

    /// Requested completion flag, `None` for the wildcard
    pub fn flag(&self) -> Option<bool> {
        match self {
            StatusSelector::All => None,
            StatusSelector::Pending => Some(false),
            StatusSelector::Completed => Some(true),
        }
    }
}

/// Filter state of one list screen; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryScope,
    pub search: String,
    pub year: YearSelector,
    pub status: StatusSelector,
}

impl FilterState {
    pub fn for_scope(category: CategoryScope) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Search term or a non-wildcard selector is set (the route scope does not count)
    pub fn has_user_filters(&self) -> bool {
        !self.search.is_empty() || self.year != YearSelector::All || self.status != StatusSelector::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_scope_parsing() {
        assert_eq!(CategoryScope::from_route_param(None), Ok(CategoryScope::All));
        assert_eq!(CategoryScope::from_route_param(Some("all")), Ok(CategoryScope::All));
        assert_eq!(
            CategoryScope::from_route_param(Some("drama")),
            Ok(CategoryScope::Only(Category::Drama))
        );
        assert!(CategoryScope::from_route_param(Some("sculpture")).is_err());
    }

    #[test]
    fn test_selectors() {
        assert_eq!(YearSelector::parse("all"), Ok(YearSelector::All));
        assert_eq!(YearSelector::parse("2023"), Ok(YearSelector::Year(2023)));
        assert!(YearSelector::parse("last year").is_err());
        assert_eq!(YearSelector::Year(2024).as_value(), "2024");

        assert_eq!(StatusSelector::parse("pending").unwrap().flag(), Some(false));
        assert_eq!(StatusSelector::parse("completed").unwrap().flag(), Some(true));
        assert_eq!(StatusSelector::parse("all").unwrap().flag(), None);
        assert!(StatusSelector::parse("done").is_err());
    }

    #[test]
    fn test_user_filters_ignore_scope() {
        let mut state = FilterState::for_scope(CategoryScope::Only(Category::Poetry));
        assert!(!state.has_user_filters());
        state.year = YearSelector::Year(2022);
        assert!(state.has_user_filters());
    }
}
