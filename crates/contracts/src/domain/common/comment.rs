use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_id!(
    /// Уникальный идентификатор комментария
    CommentId
);

/// Комментарий к записи
///
/// Принадлежит ровно одной записи и создаётся только через её путь мутаций.
/// Комментарии не редактируются, только добавляются.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    /// Подпись автора (например, имя пользователя сессии)
    pub author: String,
    #[serde(rename = "createdOn")]
    pub created_on: NaiveDate,
}

impl Comment {
    pub fn new(id: CommentId, text: String, author: String, created_on: NaiveDate) -> Self {
        Self {
            id,
            text,
            author,
            created_on,
        }
    }
}
