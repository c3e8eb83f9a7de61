use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::core::{
    Assumptions, BudgetRule, BudgetSplit, FinanceInputs, FinanceResult, calculate_finances,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{flag} must be a finite number, got {value}")]
    NonFinite { flag: &'static str, value: f64 },
    #[error("--tax-rate must be between 0 and 100, got {0}")]
    TaxRateOutOfRange(f64),
    #[error("{flag} must be between 0 and 100, got {value}")]
    RulePercentOutOfRange { flag: &'static str, value: f64 },
    #[error("inputs are too large to compute a finite result")]
    NonFiniteResult,
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliBudgetRule {
    FiftyThirtyTwenty,
    SixtyThirtyTen,
    Custom,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "budgetcalc",
    about = "Monthly budget calculator (pre-tax contribution + flat tax + rent + needs/wants/savings split)"
)]
struct Cli {
    #[arg(long, allow_negative_numbers = true, help = "Gross yearly income")]
    yearly_income: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Pre-tax retirement contribution in percent of gross income, clamped to 0..=100"
    )]
    contribution_percentage: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    monthly_rent: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    monthly_personal_expenses: f64,
    #[arg(
        long,
        default_value_t = 30.4,
        allow_negative_numbers = true,
        help = "Flat tax rate in percent applied after the contribution"
    )]
    tax_rate: f64,
    #[arg(long, value_enum, default_value_t = CliBudgetRule::FiftyThirtyTwenty)]
    rule: CliBudgetRule,
    #[arg(
        long,
        allow_negative_numbers = true,
        required_if_eq("rule", "custom"),
        help = "Needs share in percent, required when --rule=custom"
    )]
    needs_percent: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        required_if_eq("rule", "custom"),
        help = "Wants share in percent, required when --rule=custom"
    )]
    wants_percent: Option<f64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        required_if_eq("rule", "custom"),
        help = "Savings/debt repayment share in percent, required when --rule=custom"
    )]
    savings_percent: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug)]
struct CliRequest {
    inputs: FinanceInputs,
    assumptions: Assumptions,
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    inputs: FinanceInputs,
    assumptions: Assumptions,
    result: FinanceResult,
}

pub fn run_cli() -> Result<String, CliError> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<String, CliError> {
    let request = build_request(cli)?;
    let result = calculate_finances(&request.inputs, &request.assumptions);
    if !result_is_finite(&result) {
        return Err(CliError::NonFiniteResult);
    }
    log::debug!(
        "net monthly income {:.2}, remaining {:.2}",
        result.net_monthly_income,
        result.remaining_monthly_income
    );

    match request.format {
        OutputFormat::Text => Ok(render_text(&request.assumptions, &result)),
        OutputFormat::Json => render_json(Report {
            inputs: request.inputs,
            assumptions: request.assumptions,
            result,
        }),
    }
}

fn result_is_finite(result: &FinanceResult) -> bool {
    [result.theoretical_split, result.actual_split]
        .iter()
        .flat_map(|split| [split.needs, split.wants, split.savings])
        .chain([result.net_monthly_income, result.remaining_monthly_income])
        .all(f64::is_finite)
}

fn build_request(cli: Cli) -> Result<CliRequest, CliError> {
    let inputs = build_inputs(&cli)?;
    let assumptions = build_assumptions(&cli)?;
    log::debug!("inputs after clamping: {inputs:?}, assumptions: {assumptions:?}");
    Ok(CliRequest {
        inputs,
        assumptions,
        format: cli.format,
    })
}

fn ensure_finite(flag: &'static str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CliError::NonFinite { flag, value })
    }
}

fn clamp_input(flag: &'static str, value: f64, min: f64, max: f64) -> Result<f64, CliError> {
    let value = ensure_finite(flag, value)?;
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{flag} {value} is out of range, using {clamped}");
    }
    Ok(clamped)
}

fn build_inputs(cli: &Cli) -> Result<FinanceInputs, CliError> {
    Ok(FinanceInputs {
        yearly_income: clamp_input("--yearly-income", cli.yearly_income, 0.0, f64::MAX)?,
        contribution_percentage: clamp_input(
            "--contribution-percentage",
            cli.contribution_percentage,
            0.0,
            100.0,
        )?,
        monthly_rent: clamp_input("--monthly-rent", cli.monthly_rent, 0.0, f64::MAX)?,
        monthly_personal_expenses: clamp_input(
            "--monthly-personal-expenses",
            cli.monthly_personal_expenses,
            0.0,
            f64::MAX,
        )?,
    })
}

// Presence under --rule=custom is enforced by clap at parse time.
fn rule_percent(flag: &'static str, value: Option<f64>) -> Result<f64, CliError> {
    let value = ensure_finite(flag, value.unwrap_or_default())?;
    if !(0.0..=100.0).contains(&value) {
        return Err(CliError::RulePercentOutOfRange { flag, value });
    }
    Ok(value / 100.0)
}

fn build_assumptions(cli: &Cli) -> Result<Assumptions, CliError> {
    let tax_rate = ensure_finite("--tax-rate", cli.tax_rate)?;
    if !(0.0..=100.0).contains(&tax_rate) {
        return Err(CliError::TaxRateOutOfRange(tax_rate));
    }

    if cli.rule != CliBudgetRule::Custom
        && (cli.needs_percent.is_some()
            || cli.wants_percent.is_some()
            || cli.savings_percent.is_some())
    {
        log::warn!("share percentages are ignored unless --rule=custom");
    }

    let rule = match cli.rule {
        CliBudgetRule::FiftyThirtyTwenty => BudgetRule::FIFTY_THIRTY_TWENTY,
        CliBudgetRule::SixtyThirtyTen => BudgetRule::SIXTY_THIRTY_TEN,
        CliBudgetRule::Custom => {
            let rule = BudgetRule {
                needs: rule_percent("--needs-percent", cli.needs_percent)?,
                wants: rule_percent("--wants-percent", cli.wants_percent)?,
                savings: rule_percent("--savings-percent", cli.savings_percent)?,
            };
            if (rule.total() - 1.0).abs() > 1e-9 {
                log::warn!(
                    "custom rule shares add up to {}%, not 100%",
                    format_percent(rule.total())
                );
            }
            rule
        }
    };

    Ok(Assumptions {
        tax_rate: tax_rate / 100.0,
        rule,
    })
}

pub fn format_currency(amount: f64) -> String {
    let digits = format!("{:.2}", amount.abs());
    if amount < 0.0 && digits != "0.00" {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

fn format_percent(fraction: f64) -> String {
    let pct = (fraction * 10_000.0).round() / 100.0;
    format!("{pct}")
}

fn render_split(out: &mut String, rule: BudgetRule, split: BudgetSplit) {
    for (label, fraction, amount) in [
        ("Needs", rule.needs, split.needs),
        ("Wants", rule.wants, split.wants),
        ("Savings/Debt Repayment", rule.savings, split.savings),
    ] {
        out.push_str(&format!(
            "- {label} ({}%): {}\n",
            format_percent(fraction),
            format_currency(amount)
        ));
    }
}

fn render_text(assumptions: &Assumptions, result: &FinanceResult) -> String {
    let mut out = String::from("Rent and Budget Calculator\n\n");
    out.push_str(&format!(
        "Net Monthly Income (after contribution and {}% tax): {}\n",
        format_percent(assumptions.tax_rate),
        format_currency(result.net_monthly_income)
    ));
    out.push_str(&format!(
        "Remaining Monthly Income: {}\n\n",
        format_currency(result.remaining_monthly_income)
    ));
    out.push_str("Theoretical Budget Allocation (Based on Net Income):\n");
    render_split(&mut out, assumptions.rule, result.theoretical_split);
    out.push_str("\nActual Budget Allocation (After Rent and Personal Expenses):\n");
    render_split(&mut out, assumptions.rule, result.actual_split);
    out
}

fn render_json(report: Report) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&report)?)
}
