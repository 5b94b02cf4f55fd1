use crate::enums::Category;

/// Поля записи, по которым работают фильтры списков
pub trait Filterable {
    /// Категория записи, если у вида записи она есть
    fn category(&self) -> Option<Category>;

    /// Год записи
    fn year(&self) -> Option<i32>;

    /// Флаг выполнения; `None` для видов записей без статуса
    fn completion(&self) -> Option<bool> {
        None
    }

    /// Значение текстового поля по имени
    fn text_field(&self, field: &str) -> Option<&str>;

    /// Поля, по которым ищет строка поиска экрана
    fn search_fields() -> &'static [&'static str];
}
