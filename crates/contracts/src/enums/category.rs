use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Категории библиотеки (закрытый набор)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Poetry,
    Tradition,
    Reading,
    Drama,
    Folding,
}

impl Category {
    /// Все категории в порядке меню
    pub const ALL: [Category; 5] = [
        Category::Poetry,
        Category::Tradition,
        Category::Reading,
        Category::Drama,
        Category::Folding,
    ];

    /// Код категории (сегмент маршрута)
    pub fn code(&self) -> &'static str {
        match self {
            Category::Poetry => "poetry",
            Category::Tradition => "tradition",
            Category::Reading => "reading",
            Category::Drama => "drama",
            Category::Folding => "folding",
        }
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
