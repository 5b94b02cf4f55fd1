use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Comment;

/// Базовые поля, общие для всех записей каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Дата создания записи
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Комментарии в порядке добавления
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новую запись с текущим временем создания
    pub fn new(id: Id) -> Self {
        Self::with_created_at(id, Utc::now())
    }

    /// Создать запись с заданным временем создания (демо-данные, импорт)
    pub fn with_created_at(id: Id, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            comments: Vec::new(),
        }
    }

    /// Добавить комментарий в конец списка
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
