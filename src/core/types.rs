use serde::Serialize;

pub const DEFAULT_TAX_RATE: f64 = 0.304;
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceInputs {
    pub yearly_income: f64,
    // percent, 0..=100
    pub contribution_percentage: f64,
    pub monthly_rent: f64,
    pub monthly_personal_expenses: f64,
}

// Fractions are expected to sum to 1.0; not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRule {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetRule {
    pub const FIFTY_THIRTY_TWENTY: BudgetRule = BudgetRule {
        needs: 0.50,
        wants: 0.30,
        savings: 0.20,
    };

    pub const SIXTY_THIRTY_TEN: BudgetRule = BudgetRule {
        needs: 0.60,
        wants: 0.30,
        savings: 0.10,
    };

    pub fn total(self) -> f64 {
        self.needs + self.wants + self.savings
    }
}

impl Default for BudgetRule {
    fn default() -> Self {
        Self::FIFTY_THIRTY_TWENTY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetSplit {
    pub fn total(self) -> f64 {
        self.needs + self.wants + self.savings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    pub tax_rate: f64,
    pub rule: BudgetRule,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            rule: BudgetRule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceResult {
    pub net_monthly_income: f64,
    pub remaining_monthly_income: f64,
    pub theoretical_split: BudgetSplit,
    pub actual_split: BudgetSplit,
}
