use super::{AggregateId, BaseAggregate};

/// Трейт для корня агрегата (записи каталога)
///
/// Определяет доступ к базовым полям и статические метаданные вида записи.
pub trait AggregateRoot: Clone {
    /// Тип идентификатора записи
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    fn base(&self) -> &BaseAggregate<Self::Id>;

    fn base_mut(&mut self) -> &mut BaseAggregate<Self::Id>;

    /// Получить ID записи
    fn id(&self) -> Self::Id {
        self.base().id
    }

    /// Название записи для логов и сообщений
    fn description(&self) -> &str;

    /// Проверка обязательных полей
    fn validate(&self) -> Result<(), String>;

    // ============================================================================
    // Метаданные вида записи
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "book")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a001_book")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Запись с флагом выполнения
pub trait Completable {
    fn is_completed(&self) -> bool;

    fn set_completed(&mut self, completed: bool);
}
