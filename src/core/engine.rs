use super::types::{
    Assumptions, BudgetRule, BudgetSplit, DEFAULT_TAX_RATE, FinanceInputs, FinanceResult,
    MONTHS_PER_YEAR,
};

pub fn salary_after_contribution(yearly_income: f64, contribution_percentage: f64) -> f64 {
    yearly_income * (1.0 - contribution_percentage / 100.0)
}

pub fn salary_after_tax(salary: f64, tax_rate: f64) -> f64 {
    salary * (1.0 - tax_rate)
}

fn annual_after_tax(inputs: &FinanceInputs, tax_rate: f64) -> f64 {
    let after_contribution =
        salary_after_contribution(inputs.yearly_income, inputs.contribution_percentage);
    salary_after_tax(after_contribution, tax_rate)
}

fn annual_expenses(inputs: &FinanceInputs) -> f64 {
    (inputs.monthly_rent + inputs.monthly_personal_expenses) * MONTHS_PER_YEAR
}

pub fn net_monthly_income(inputs: &FinanceInputs, tax_rate: f64) -> f64 {
    annual_after_tax(inputs, tax_rate) / MONTHS_PER_YEAR
}

pub fn compute_remaining_income_with(inputs: &FinanceInputs, tax_rate: f64) -> f64 {
    (annual_after_tax(inputs, tax_rate) - annual_expenses(inputs)) / MONTHS_PER_YEAR
}

pub fn compute_remaining_income(inputs: &FinanceInputs) -> f64 {
    compute_remaining_income_with(inputs, DEFAULT_TAX_RATE)
}

pub fn apply_budget_rule(
    monthly_income: f64,
    needs_fraction: f64,
    wants_fraction: f64,
    savings_fraction: f64,
) -> BudgetSplit {
    BudgetSplit {
        needs: monthly_income * needs_fraction,
        wants: monthly_income * wants_fraction,
        savings: monthly_income * savings_fraction,
    }
}

impl BudgetRule {
    pub fn apply(self, monthly_income: f64) -> BudgetSplit {
        apply_budget_rule(monthly_income, self.needs, self.wants, self.savings)
    }
}

pub fn calculate_finances(inputs: &FinanceInputs, assumptions: &Assumptions) -> FinanceResult {
    let net_monthly_income = net_monthly_income(inputs, assumptions.tax_rate);
    let remaining_monthly_income = compute_remaining_income_with(inputs, assumptions.tax_rate);
    FinanceResult {
        net_monthly_income,
        remaining_monthly_income,
        theoretical_split: assumptions.rule.apply(net_monthly_income),
        actual_split: assumptions.rule.apply(remaining_monthly_income),
    }
}
