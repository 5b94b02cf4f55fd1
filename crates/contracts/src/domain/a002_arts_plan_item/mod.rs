pub mod aggregate;
pub mod budget_plan;

pub use aggregate::{ArtsPlanItem, ArtsPlanItemDto, ArtsPlanItemId, ArtsPlanItemPatch};
pub use budget_plan::{BudgetPlan, Quarter};
