use crate::args::SummaryArgs;
use crate::commands::Out;
use crate::model::DATE_FORMAT;
use crate::report::{CategoryData, ExpenseSummary, MonthlyData};
use crate::{Config, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the summary command reports.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SummaryReport {
    /// The date the report treats as today.
    pub as_of: String,
    pub summary: ExpenseSummary,
    pub by_category: Vec<CategoryData>,
    pub by_month: Vec<MonthlyData>,
}

/// Computes the summary totals, the category breakdown and the monthly breakdown as of the date in
/// `args`, or `today` if it has none.
pub async fn summary(
    config: Config,
    args: SummaryArgs,
    today: NaiveDate,
) -> Result<Out<SummaryReport>> {
    let as_of = args.as_of().unwrap_or(today);
    // Seed data is always dated relative to the real today.
    let store = config.open_store(today)?;
    let report = SummaryReport {
        as_of: as_of.format(DATE_FORMAT).to_string(),
        summary: store.summary(as_of),
        by_category: store.by_category(),
        by_month: store.by_month(as_of),
    };
    Ok(Out::new(render(&report), report))
}

fn render(report: &SummaryReport) -> String {
    let s = &report.summary;
    let highest = match &s.highest_category {
        Some(category) => format!("{category} ({})", s.highest_category_amount),
        None => "none".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("Summary as of {}\n", report.as_of));
    out.push_str(&format!("  Total spent:   {}\n", s.total));
    out.push_str(&format!("  This month:    {}\n", s.monthly_total));
    out.push_str(&format!("  Today:         {}\n", s.daily_total));
    out.push_str(&format!("  Top category:  {highest}\n"));

    out.push_str("\nBy category:\n");
    if report.by_category.is_empty() {
        out.push_str("  (no expenses)\n");
    }
    for c in &report.by_category {
        out.push_str(&format!(
            "  {:<10} {:>12}  {}\n",
            c.name.name(),
            c.value.to_string(),
            c.color
        ));
    }

    out.push_str(&format!("\nLast {} months:\n", report.by_month.len()));
    for m in &report.by_month {
        out.push_str(&format!("  {:<4} {:>12}\n", m.name, m.amount.to_string()));
    }
    out.trim_end().to_string()
}
