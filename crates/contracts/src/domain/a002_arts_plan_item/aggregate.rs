use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::budget_plan::BudgetPlan;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, Completable, Filterable};
use crate::enums::Category;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id!(
    /// Уникальный идентификатор пункта годового плана
    ArtsPlanItemId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пункт годового плана мероприятий (Annual Arts Plan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtsPlanItem {
    #[serde(flatten)]
    pub base: BaseAggregate<ArtsPlanItemId>,

    pub name: String,
    /// Свободный текст периода, например "2024-03-15 to 2024-03-20"
    pub dates: String,
    pub place: String,
    pub examination: String,
    pub category: Category,
    pub completed: bool,

    #[serde(default)]
    pub budget: BudgetPlan,
}

impl ArtsPlanItem {
    /// Создать новый пункт плана; новый пункт всегда не выполнен
    pub fn new_for_insert(dto: ArtsPlanItemDto) -> Self {
        Self::from_dto(BaseAggregate::new(ArtsPlanItemId::generate()), dto)
    }

    /// Создать пункт с заданной датой создания (для демо-данных)
    pub fn new_with_created_at(dto: ArtsPlanItemDto, created_at: DateTime<Utc>) -> Self {
        Self::from_dto(
            BaseAggregate::with_created_at(ArtsPlanItemId::generate(), created_at),
            dto,
        )
    }

    fn from_dto(base: BaseAggregate<ArtsPlanItemId>, dto: ArtsPlanItemDto) -> Self {
        Self {
            base,
            name: dto.name,
            dates: dto.dates,
            place: dto.place,
            examination: dto.examination,
            category: dto.category,
            completed: false,
            budget: dto.budget,
        }
    }

    /// Первая дата периода в формате YYYY-MM-DD, если она есть
    pub fn start_date(&self) -> Option<NaiveDate> {
        let first = self.dates.split_whitespace().next()?;
        NaiveDate::parse_from_str(first, "%Y-%m-%d").ok()
    }

    /// Заполнить форму редактирования из пункта
    pub fn to_dto(&self) -> ArtsPlanItemDto {
        ArtsPlanItemDto {
            name: self.name.clone(),
            dates: self.dates.clone(),
            place: self.place.clone(),
            examination: self.examination.clone(),
            category: self.category,
            budget: self.budget,
        }
    }

    /// Применить частичное обновление: незаданные поля не меняются
    pub fn apply_patch(&mut self, patch: &ArtsPlanItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(dates) = &patch.dates {
            self.dates = dates.clone();
        }
        if let Some(place) = &patch.place {
            self.place = place.clone();
        }
        if let Some(examination) = &patch.examination {
            self.examination = examination.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
    }
}

impl AggregateRoot for ArtsPlanItem {
    type Id = ArtsPlanItemId;

    fn base(&self) -> &BaseAggregate<ArtsPlanItemId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<ArtsPlanItemId> {
        &mut self.base
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), String> {
        let required = [
            ("Name", &self.name),
            ("Dates", &self.dates),
            ("Place", &self.place),
            ("Examination", &self.examination),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", label));
            }
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "arts_plan_item"
    }

    fn element_name() -> &'static str {
        "Arts Plan Item"
    }

    fn list_name() -> &'static str {
        "Annual Arts Plan"
    }
}

impl Completable for ArtsPlanItem {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

impl Filterable for ArtsPlanItem {
    fn category(&self) -> Option<Category> {
        Some(self.category)
    }

    /// Год начала мероприятия, иначе год создания пункта
    fn year(&self) -> Option<i32> {
        Some(
            self.start_date()
                .map(|d| d.year())
                .unwrap_or_else(|| self.base.created_at.year()),
        )
    }

    fn completion(&self) -> Option<bool> {
        Some(self.completed)
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "dates" => Some(&self.dates),
            "place" => Some(&self.place),
            "examination" => Some(&self.examination),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "place"]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма создания/редактирования пункта плана
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtsPlanItemDto {
    pub name: String,
    pub dates: String,
    pub place: String,
    pub examination: String,
    pub category: Category,
    #[serde(default)]
    pub budget: BudgetPlan,
}

impl ArtsPlanItemDto {
    /// Пустая форма с заданной категорией
    pub fn blank(category: Category) -> Self {
        Self {
            name: String::new(),
            dates: String::new(),
            place: String::new(),
            examination: String::new(),
            category,
            budget: BudgetPlan::empty(),
        }
    }

    /// Форма как полное обновление существующего пункта
    pub fn into_patch(self) -> ArtsPlanItemPatch {
        ArtsPlanItemPatch {
            name: Some(self.name),
            dates: Some(self.dates),
            place: Some(self.place),
            examination: Some(self.examination),
            category: Some(self.category),
            budget: Some(self.budget),
        }
    }
}

/// Частичное обновление пункта плана
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtsPlanItemPatch {
    pub name: Option<String>,
    pub dates: Option<String>,
    pub place: Option<String>,
    pub examination: Option<String>,
    pub category: Option<Category>,
    pub budget: Option<BudgetPlan>,
}

impl ArtsPlanItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
