use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, Filterable};
use crate::enums::Category;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id!(
    /// Уникальный идентификатор книги
    BookId
);

/// Ссылка на PDF-файл книги
///
/// Непрозрачная строка: открытие и отображение файла выполняет внешний
/// просмотрщик, ядро путь не интерпретирует.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentLink(pub String);

impl DocumentLink {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Книга каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    pub base: BaseAggregate<BookId>,

    pub title: String,
    pub author: String,
    pub category: Category,
    pub year: i32,
    pub description: String,

    #[serde(rename = "filePath")]
    pub file_path: DocumentLink,
}

impl Book {
    /// Создать новую книгу для вставки в каталог
    pub fn new_for_insert(dto: BookDto) -> Self {
        Self::from_dto(BaseAggregate::new(BookId::generate()), dto)
    }

    /// Создать книгу с заданной датой создания (для демо-данных)
    pub fn new_with_created_at(dto: BookDto, created_at: DateTime<Utc>) -> Self {
        Self::from_dto(
            BaseAggregate::with_created_at(BookId::generate(), created_at),
            dto,
        )
    }

    fn from_dto(base: BaseAggregate<BookId>, dto: BookDto) -> Self {
        Self {
            base,
            title: dto.title,
            author: dto.author,
            category: dto.category,
            year: dto.year,
            description: dto.description,
            file_path: dto.file_path,
        }
    }

    /// Применить частичное обновление: незаданные поля не меняются
    pub fn apply_patch(&mut self, patch: &BookPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(author) = &patch.author {
            self.author = author.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(file_path) = &patch.file_path {
            self.file_path = file_path.clone();
        }
    }
}

impl AggregateRoot for Book {
    type Id = BookId;

    fn base(&self) -> &BaseAggregate<BookId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<BookId> {
        &mut self.base
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".into());
        }
        if self.author.trim().is_empty() {
            return Err("Author cannot be empty".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "book"
    }

    fn element_name() -> &'static str {
        "Book"
    }

    fn list_name() -> &'static str {
        "Books"
    }
}

impl Filterable for Book {
    fn category(&self) -> Option<Category> {
        Some(self.category)
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "author" => Some(&self.author),
            "description" => Some(&self.description),
            "filePath" => Some(self.file_path.as_str()),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "author"]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания книги
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "filePath", default)]
    pub file_path: DocumentLink,
}

/// Частичное обновление книги
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    pub year: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<DocumentLink>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
