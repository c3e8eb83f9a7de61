mod engine;
mod types;

pub use engine::{
    apply_budget_rule, calculate_finances, compute_remaining_income,
    compute_remaining_income_with, net_monthly_income, salary_after_contribution,
    salary_after_tax,
};
pub use types::{
    Assumptions, BudgetRule, BudgetSplit, DEFAULT_TAX_RATE, FinanceInputs, FinanceResult,
    MONTHS_PER_YEAR,
};
