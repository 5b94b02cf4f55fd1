//! Упорядоченное хранилище записей одного вида в памяти

use std::sync::Arc;

use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::errors::{CatalogError, CatalogResult};

/// Снимок коллекции: неизменяемый для уже выданных копий
pub type Snapshot<R> = Arc<Vec<R>>;

/// Хранилище записей в порядке вставки
///
/// Ключи назначает хранилище. Каждая мутация порождает новый логический
/// снимок (copy-on-write), ранее выданные снимки не меняются.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Snapshot<R>,
}

impl<R: AggregateRoot> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AggregateRoot> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
        }
    }

    /// Хранилище с начальными записями (каждая получает новый ключ)
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Добавить запись в конец; возвращает назначенный ключ
    pub fn insert(&mut self, mut record: R) -> R::Id {
        let id = R::Id::generate();
        record.base_mut().id = id;
        Arc::make_mut(&mut self.records).push(record);
        id
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn position(&self, id: R::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.position(id).is_some()
    }

    /// Изменить запись на месте; позиция и ключ сохраняются
    pub fn update<F>(&mut self, id: R::Id, apply: F) -> CatalogResult<&R>
    where
        F: FnOnce(&mut R),
    {
        let index = self.position(id).ok_or_else(|| not_found::<R>(id))?;
        let records = Arc::make_mut(&mut self.records);
        let record = &mut records[index];
        apply(record);
        // ключ принадлежит хранилищу
        record.base_mut().id = id;
        Ok(&records[index])
    }

    /// Удалить запись вместе с её комментариями
    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        let index = self.position(id)?;
        Some(Arc::make_mut(&mut self.records).remove(index))
    }

    pub fn delete(&mut self, id: R::Id) -> bool {
        self.remove(id).is_some()
    }

    /// Текущий снимок в порядке вставки
    pub fn all(&self) -> Snapshot<R> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub(crate) fn not_found<R: AggregateRoot>(id: R::Id) -> CatalogError {
    CatalogError::NotFound(format!("{} {}", R::element_name(), id.as_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_book::service::sample_dto;
    use contracts::domain::a001_book::Book;
    use contracts::enums::Category;

    fn book(title: &str) -> Book {
        let mut dto = sample_dto(Category::Poetry, 2023);
        dto.title = title.into();
        Book::new_for_insert(dto)
    }

    #[test]
    fn test_insert_preserves_order_and_assigns_keys() {
        let mut store = RecordStore::new();
        let template = book("A");
        let a = store.insert(template.clone());
        let b = store.insert(template);
        assert_ne!(a, b);

        let titles: Vec<_> = store.all().iter().map(|b| b.id()).collect();
        assert_eq!(titles, vec![a, b]);
    }

    #[test]
    fn test_update_unknown_key_is_not_found() {
        let mut store: RecordStore<Book> = RecordStore::new();
        let missing = book("ghost").id();
        let err = store.update(missing, |b| b.year = 1999).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = RecordStore::with_records(vec![book("A"), book("B"), book("C")]);
        let middle = store.all()[1].id();
        store.update(middle, |b| b.title = "B2".into()).unwrap();

        let snapshot = store.all();
        assert_eq!(snapshot[1].title, "B2");
        assert_eq!(snapshot[1].id(), middle);
    }

    #[test]
    fn test_earlier_snapshot_is_unchanged() {
        let mut store = RecordStore::with_records(vec![book("A")]);
        let before = store.all();
        let id = before[0].id();

        assert!(store.delete(id));
        assert_eq!(before.len(), 1);
        assert!(store.is_empty());
        assert!(!store.delete(id));
    }
}
