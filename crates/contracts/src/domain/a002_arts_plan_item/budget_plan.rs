//! Квартальный план бюджета: 12 флагов месяцев, сгруппированных по кварталам

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Квартал года
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Месяцы квартала по порядку
    pub fn months(&self) -> [Month; 3] {
        match self {
            Quarter::Q1 => [Month::January, Month::February, Month::March],
            Quarter::Q2 => [Month::April, Month::May, Month::June],
            Quarter::Q3 => [Month::July, Month::August, Month::September],
            Quarter::Q4 => [Month::October, Month::November, Month::December],
        }
    }

    /// Квартал, которому принадлежит месяц
    pub fn of(month: Month) -> Quarter {
        match month.number_from_month() {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }
}

const ALL_MONTHS_MASK: u16 = 0x0FFF;

/// Набор отмеченных месяцев; бит `n` соответствует месяцу `n + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct BudgetPlan {
    months: u16,
}

impl BudgetPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Создать план из битовой маски; старшие биты за пределами 12 месяцев запрещены
    pub fn from_bits(bits: u16) -> Result<Self, String> {
        if bits & !ALL_MONTHS_MASK != 0 {
            return Err(format!("Invalid budget plan mask: {:#06x}", bits));
        }
        Ok(Self { months: bits })
    }

    pub fn bits(&self) -> u16 {
        self.months
    }

    fn bit(month: Month) -> u16 {
        1 << month.number_from_month().saturating_sub(1)
    }

    pub fn is_planned(&self, month: Month) -> bool {
        self.months & Self::bit(month) != 0
    }

    pub fn set(&mut self, month: Month, planned: bool) {
        if planned {
            self.months |= Self::bit(month);
        } else {
            self.months &= !Self::bit(month);
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.set(month, true);
        self
    }

    /// Флаги трёх месяцев квартала по порядку
    pub fn quarter_flags(&self, quarter: Quarter) -> [bool; 3] {
        quarter.months().map(|m| self.is_planned(m))
    }

    /// Все месяцы квартала отмечены
    pub fn is_quarter_planned(&self, quarter: Quarter) -> bool {
        self.quarter_flags(quarter).iter().all(|f| *f)
    }

    /// Отметить или снять все месяцы квартала
    pub fn set_quarter(&mut self, quarter: Quarter, planned: bool) {
        for month in quarter.months() {
            self.set(month, planned);
        }
    }

    pub fn planned_months(&self) -> Vec<Month> {
        Quarter::ALL
            .iter()
            .flat_map(|q| q.months())
            .filter(|m| self.is_planned(*m))
            .collect()
    }

    pub fn planned_count(&self) -> u32 {
        self.months.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.months == 0
    }
}

impl TryFrom<u16> for BudgetPlan {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_bits(value)
    }
}

impl From<BudgetPlan> for u16 {
    fn from(plan: BudgetPlan) -> Self {
        plan.months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_months() {
        let mut plan = BudgetPlan::empty();
        plan.set(Month::March, true);
        plan.set(Month::November, true);
        assert!(plan.is_planned(Month::March));
        assert!(!plan.is_planned(Month::April));
        assert_eq!(plan.planned_months(), vec![Month::March, Month::November]);

        plan.set(Month::March, false);
        assert_eq!(plan.planned_count(), 1);
    }

    #[test]
    fn test_quarter_grouping() {
        let mut plan = BudgetPlan::empty();
        plan.set_quarter(Quarter::Q2, true);
        assert!(plan.is_quarter_planned(Quarter::Q2));
        assert_eq!(plan.quarter_flags(Quarter::Q1), [false, false, false]);
        assert_eq!(Quarter::of(Month::June), Quarter::Q2);
        assert_eq!(Quarter::of(Month::December), Quarter::Q4);

        plan.set(Month::May, false);
        assert_eq!(plan.quarter_flags(Quarter::Q2), [true, false, true]);
        assert!(!plan.is_quarter_planned(Quarter::Q2));
    }

    #[test]
    fn test_serialized_as_mask() {
        let plan = BudgetPlan::empty()
            .with_month(Month::January)
            .with_month(Month::December);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, "2049");

        let restored: BudgetPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, plan);
        assert!(serde_json::from_str::<BudgetPlan>("4096").is_err());
    }
}
