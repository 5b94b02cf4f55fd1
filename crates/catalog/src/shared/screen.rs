//! Explicit state of one list screen: records, filter and facets
//!
//! All transitions go through the query engine and the mutation gateway;
//! rendering stays with the caller.

use contracts::domain::common::{Comment, Filterable};
use contracts::shared::filter::{CategoryScope, FilterState, StatusSelector, YearSelector};

use crate::shared::errors::{CatalogError, CatalogResult};
use crate::shared::mutation::{Mutable, MutationGateway};
use crate::shared::query;

/// Result of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    pub scope: CategoryScope,
    /// Filtered records in insertion order
    pub records: Vec<R>,
    /// Years of the whole collection, newest first
    pub available_years: Vec<i32>,
    /// Search or selectors narrow the list (drives the empty-state hint)
    pub has_user_filters: bool,
}

impl<R> ListView<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ListScreen<R> {
    gateway: MutationGateway<R>,
    filter: FilterState,
}

impl<R: Mutable + Filterable> ListScreen<R> {
    pub fn new(gateway: MutationGateway<R>, scope: CategoryScope) -> Self {
        Self {
            gateway,
            filter: FilterState::for_scope(scope),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn gateway(&self) -> &MutationGateway<R> {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut MutationGateway<R> {
        &mut self.gateway
    }

    /// Switch the category scope from a route segment; other filters stay
    pub fn open_route(&mut self, category: Option<&str>) -> CatalogResult<()> {
        self.filter.category =
            CategoryScope::from_route_param(category).map_err(CatalogError::UnknownCategory)?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    pub fn select_year(&mut self, value: &str) -> CatalogResult<()> {
        self.filter.year = YearSelector::parse(value).map_err(CatalogError::InvalidSelector)?;
        Ok(())
    }

    pub fn select_status(&mut self, value: &str) -> CatalogResult<()> {
        self.filter.status = StatusSelector::parse(value).map_err(CatalogError::InvalidSelector)?;
        Ok(())
    }

    /// Reset search and selectors, keep the route scope
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::for_scope(self.filter.category);
    }

    pub fn view(&self) -> ListView<R> {
        let snapshot = self.gateway.snapshot();
        let predicates = query::predicates_for::<R>(&self.filter);
        let records = query::run(snapshot.as_slice(), &predicates);
        tracing::debug!(
            "{} [{}]: {} of {}",
            R::list_name(),
            self.filter.category.code(),
            records.len(),
            snapshot.len()
        );
        ListView {
            scope: self.filter.category,
            records,
            available_years: query::year_facet(snapshot.as_slice()),
            has_user_filters: self.filter.has_user_filters(),
        }
    }

    pub fn create(&mut self, dto: R::Dto) -> CatalogResult<R> {
        self.gateway.create(dto)
    }

    pub fn update(&mut self, id: R::Id, patch: &R::Patch) -> CatalogResult<R> {
        self.gateway.update(id, patch)
    }

    pub fn delete(&mut self, id: R::Id) -> CatalogResult<R> {
        self.gateway.delete(id)
    }

    pub fn add_comment(&mut self, id: R::Id, text: &str, author: &str) -> CatalogResult<Comment> {
        self.gateway.add_comment(id, text, author)
    }
}
