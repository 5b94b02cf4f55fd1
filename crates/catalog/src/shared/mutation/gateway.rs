//! Мутации [`RecordStore`] с проверкой входных данных

use chrono::Utc;
use contracts::domain::common::{AggregateId, AggregateRoot, Comment, CommentId, Completable};

use crate::shared::data::record_store::not_found;
use crate::shared::data::{RecordStore, Snapshot};
use crate::shared::errors::{CatalogError, CatalogResult};

/// Вид записи, который можно создавать и частично обновлять через шлюз
pub trait Mutable: AggregateRoot {
    /// Форма создания
    type Dto;
    /// Частичное обновление
    type Patch;

    /// Новая запись из формы (ключ будет переназначен хранилищем)
    fn from_dto(dto: Self::Dto) -> Self;

    fn apply_patch(&mut self, patch: &Self::Patch);

    fn patch_is_empty(patch: &Self::Patch) -> bool;
}

/// Шлюз мутаций
///
/// Проверяет входные данные до изменения хранилища: при ошибке хранилище
/// остаётся в прежнем состоянии.
#[derive(Debug, Clone)]
pub struct MutationGateway<R> {
    store: RecordStore<R>,
}

impl<R: Mutable> Default for MutationGateway<R> {
    fn default() -> Self {
        Self::new(RecordStore::new())
    }
}

impl<R: Mutable> MutationGateway<R> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot<R> {
        self.store.all()
    }

    pub fn get(&self, id: R::Id) -> CatalogResult<&R> {
        self.store.get(id).ok_or_else(|| not_found::<R>(id))
    }

    /// Создать запись; она становится последней в порядке вставки
    pub fn create(&mut self, dto: R::Dto) -> CatalogResult<R> {
        let record = R::from_dto(dto);
        record.validate().map_err(|e| rejected::<R>("create", e))?;

        let id = self.store.insert(record);
        let created = self.get(id)?.clone();
        tracing::info!(
            "{} created: {} ({})",
            R::full_name(),
            created.description(),
            id.as_string()
        );
        Ok(created)
    }

    /// Слить заданные поля в запись; позиция и ключ не меняются
    pub fn update(&mut self, id: R::Id, patch: &R::Patch) -> CatalogResult<R> {
        let current = self.get(id)?;
        if R::patch_is_empty(patch) {
            return Ok(current.clone());
        }

        let mut candidate = current.clone();
        candidate.apply_patch(patch);
        candidate.validate().map_err(|e| rejected::<R>("update", e))?;

        let updated = self.store.update(id, move |r| *r = candidate)?.clone();
        tracing::info!("{} updated: {}", R::element_name(), id.as_string());
        Ok(updated)
    }

    /// Удалить запись вместе с её комментариями
    pub fn delete(&mut self, id: R::Id) -> CatalogResult<R> {
        let removed = self.store.remove(id).ok_or_else(|| not_found::<R>(id))?;
        tracing::info!(
            "{} deleted: {} ({} comments)",
            R::element_name(),
            id.as_string(),
            removed.base().comments.len()
        );
        Ok(removed)
    }

    /// Добавить комментарий с текущей датой
    pub fn add_comment(&mut self, id: R::Id, text: &str, author: &str) -> CatalogResult<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(rejected::<R>("comment", "Comment cannot be empty".into()));
        }
        if !self.store.contains(id) {
            return Err(not_found::<R>(id));
        }

        let comment = Comment::new(
            CommentId::generate(),
            text.to_string(),
            author.to_string(),
            Utc::now().date_naive(),
        );
        let pushed = comment.clone();
        self.store.update(id, move |r| r.base_mut().push_comment(pushed))?;
        tracing::info!("Comment added to {} {}", R::element_name(), id.as_string());
        Ok(comment)
    }
}

impl<R: Mutable + Completable> MutationGateway<R> {
    /// Переключить флаг выполнения
    pub fn toggle_status(&mut self, id: R::Id) -> CatalogResult<R> {
        let toggled = self
            .store
            .update(id, |r| {
                let completed = r.is_completed();
                r.set_completed(!completed);
            })?
            .clone();
        tracing::info!(
            "{} {} marked {}",
            R::element_name(),
            id.as_string(),
            if toggled.is_completed() { "completed" } else { "pending" }
        );
        Ok(toggled)
    }
}

fn rejected<R: AggregateRoot>(operation: &str, message: String) -> CatalogError {
    tracing::warn!("{} {} rejected: {}", R::element_name(), operation, message);
    CatalogError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_book::service::sample_dto;
    use crate::domain::a002_arts_plan_item::service::sample_item_dto;
    use contracts::domain::a001_book::{Book, BookPatch};
    use contracts::domain::a002_arts_plan_item::{ArtsPlanItem, ArtsPlanItemPatch};
    use contracts::enums::Category;

    fn books() -> MutationGateway<Book> {
        let mut gateway = MutationGateway::default();
        gateway.create(sample_dto(Category::Poetry, 2023)).unwrap();
        gateway.create(sample_dto(Category::Drama, 2024)).unwrap();
        gateway
    }

    fn items() -> MutationGateway<ArtsPlanItem> {
        let mut gateway = MutationGateway::default();
        gateway.create(sample_item_dto(Category::Poetry)).unwrap();
        gateway
    }

    #[test]
    fn test_create_appends_last() {
        let mut gateway = books();
        let created = gateway.create(sample_dto(Category::Folding, 2022)).unwrap();
        let snapshot = gateway.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.last().unwrap().id(), created.id());
    }

    #[test]
    fn test_create_rejects_blank_required_fields() {
        let mut gateway = books();
        let mut dto = sample_dto(Category::Poetry, 2023);
        dto.author = "  ".into();
        let err = gateway.create(dto).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(gateway.snapshot().len(), 2);

        let mut items = items();
        let mut dto = sample_item_dto(Category::Drama);
        dto.examination = String::new();
        assert!(items.create(dto).unwrap_err().is_validation());
        assert_eq!(items.snapshot().len(), 1);
    }

    #[test]
    fn test_create_then_delete_restores_records() {
        let mut gateway = books();
        let before = gateway.snapshot();
        let created = gateway.create(sample_dto(Category::Reading, 2021)).unwrap();
        gateway.delete(created.id()).unwrap();
        assert_eq!(*gateway.snapshot(), *before);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut gateway = books();
        let first = gateway.snapshot()[0].clone();
        let updated = gateway.update(first.id(), &BookPatch::default()).unwrap();
        assert_eq!(updated, first);
    }

    #[test]
    fn test_update_merges_and_keeps_position() {
        let mut gateway = books();
        let first = gateway.snapshot()[0].clone();
        let patch = BookPatch {
            title: Some("Collected Poems".into()),
            ..Default::default()
        };
        let updated = gateway.update(first.id(), &patch).unwrap();
        assert_eq!(updated.title, "Collected Poems");
        assert_eq!(updated.author, first.author);
        assert_eq!(gateway.snapshot()[0].id(), first.id());
    }

    #[test]
    fn test_update_rejects_blank_required_field_without_mutation() {
        let mut gateway = items();
        let before = gateway.snapshot();
        let id = before[0].id();
        let patch = ArtsPlanItemPatch {
            name: Some(" ".into()),
            place: Some("Cultural Center".into()),
            ..Default::default()
        };
        assert!(gateway.update(id, &patch).unwrap_err().is_validation());
        assert_eq!(*gateway.snapshot(), *before);
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let mut gateway = items();
        let stranger = ArtsPlanItem::new_for_insert(sample_item_dto(Category::Poetry)).id();
        assert!(gateway.update(stranger, &ArtsPlanItemPatch::default()).unwrap_err().is_not_found());
        assert!(gateway.delete(stranger).unwrap_err().is_not_found());
        assert!(gateway.toggle_status(stranger).unwrap_err().is_not_found());
        assert!(gateway.add_comment(stranger, "hello", "admin").unwrap_err().is_not_found());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut gateway = items();
        let original = gateway.snapshot()[0].clone();
        let once = gateway.toggle_status(original.id()).unwrap();
        assert!(once.completed);
        let twice = gateway.toggle_status(original.id()).unwrap();
        assert_eq!(twice, original);
    }

    #[test]
    fn test_whitespace_comment_is_rejected() {
        let mut gateway = items();
        let id = gateway.snapshot()[0].id();
        let err = gateway.add_comment(id, "  ", "admin").unwrap_err();
        assert!(err.is_validation());
        assert!(gateway.get(id).unwrap().base.comments.is_empty());
    }

    #[test]
    fn test_comments_keep_order_and_go_away_with_record() {
        let mut gateway = items();
        let id = gateway.snapshot()[0].id();
        gateway.add_comment(id, "Venue confirmed", "admin").unwrap();
        let second = gateway.add_comment(id, "Budget approved", "curator").unwrap();

        let comments = &gateway.get(id).unwrap().base.comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "Venue confirmed");
        assert_eq!(comments[1], second);
        assert_eq!(second.created_on, Utc::now().date_naive());

        let removed = gateway.delete(id).unwrap();
        assert_eq!(removed.base.comments.len(), 2);
        assert!(gateway.snapshot().is_empty());
    }
}
