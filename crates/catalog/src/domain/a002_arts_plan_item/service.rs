use chrono::{Month, TimeZone, Utc};
use contracts::domain::a002_arts_plan_item::{
    ArtsPlanItem, ArtsPlanItemDto, ArtsPlanItemPatch, BudgetPlan,
};
use contracts::enums::Category;

use crate::shared::data::RecordStore;
use crate::shared::mutation::Mutable;

impl Mutable for ArtsPlanItem {
    type Dto = ArtsPlanItemDto;
    type Patch = ArtsPlanItemPatch;

    fn from_dto(dto: ArtsPlanItemDto) -> Self {
        ArtsPlanItem::new_for_insert(dto)
    }

    fn apply_patch(&mut self, patch: &ArtsPlanItemPatch) {
        ArtsPlanItem::apply_patch(self, patch)
    }

    fn patch_is_empty(patch: &ArtsPlanItemPatch) -> bool {
        patch.is_empty()
    }
}

/// Демо-план на год
pub fn demo_items() -> RecordStore<ArtsPlanItem> {
    let data = [
        (
            "Poetry Workshop Preparation",
            "2024-03-15 to 2024-03-20",
            "Central Library",
            "Poetry analysis and creative writing assessment",
            Category::Poetry,
            false,
            (2024, 1, 15),
            BudgetPlan::empty().with_month(Month::February).with_month(Month::March),
        ),
        (
            "Traditional Arts Exhibition",
            "2024-04-10 to 2024-04-15",
            "Cultural Center",
            "Traditional arts knowledge test",
            Category::Tradition,
            true,
            (2024, 1, 20),
            BudgetPlan::empty().with_month(Month::April),
        ),
        (
            "Reading Comprehension Seminar",
            "2024-05-01 to 2024-05-05",
            "University Hall",
            "Reading comprehension evaluation",
            Category::Reading,
            false,
            (2024, 2, 1),
            BudgetPlan::empty(),
        ),
    ];

    RecordStore::with_records(data.into_iter().filter_map(
        |(name, dates, place, examination, category, completed, (y, m, d), budget)| {
            let created_at = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single()?;
            let dto = ArtsPlanItemDto {
                name: name.into(),
                dates: dates.into(),
                place: place.into(),
                examination: examination.into(),
                category,
                budget,
            };
            let mut item = ArtsPlanItem::new_with_created_at(dto, created_at);
            item.completed = completed;
            Some(item)
        },
    ))
}

#[cfg(test)]
pub(crate) fn sample_item_dto(category: Category) -> ArtsPlanItemDto {
    ArtsPlanItemDto {
        name: "Drama Evening".into(),
        dates: "2025-09-01 to 2025-09-02".into(),
        place: "Town Theatre".into(),
        examination: "Stage reading review".into(),
        category,
        budget: BudgetPlan::empty(),
    }
}
