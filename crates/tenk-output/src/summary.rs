//! Human-readable renderings.
//!
//! Fixed-width ASCII for terminals and Markdown for documents. Missing
//! values render as `-`, unbounded ones as `inf` / `-inf`.

use tenk_analytics::{CompanyProfile, KeyMetrics, NormalizedFiling, NormalizedItem, Report};

const WIDTH: usize = 80;

fn amount(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.is_nan() => "-".to_string(),
        Some(v) if v.is_infinite() => (if v > 0.0 { "inf" } else { "-inf" }).to_string(),
        Some(v) if v.abs() >= 1e6 => format!("{:.2}M", v / 1e6),
        Some(v) => format!("{v:.2}"),
    }
}

fn ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.4}"),
        other => amount(other),
    }
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}%"),
        other => amount(other),
    }
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn item(item: Option<&NormalizedItem>) -> Option<f64> {
    item.and_then(|i| i.value)
}

/// Headline figures shared by both renderings.
fn headline(filing: &NormalizedFiling) -> Vec<(&'static str, String)> {
    let income = filing.income_statement.as_ref();
    let balance = filing.balance_sheet.as_ref();
    let cash_flow = filing.cash_flow_statement.as_ref();
    let ratios = filing.calculated_ratios.unwrap_or_default();
    let growth = filing.growth();

    vec![
        ("Revenue", amount(item(income.and_then(|s| s.revenue.as_ref())))),
        ("Gross Profit", amount(item(income.and_then(|s| s.gross_profit.as_ref())))),
        ("Operating Income", amount(item(income.and_then(|s| s.operating_income.as_ref())))),
        ("Net Income", amount(item(income.and_then(|s| s.net_income.as_ref())))),
        ("Total Assets", amount(item(balance.and_then(|s| s.total_assets.as_ref())))),
        ("Total Liabilities", amount(item(balance.and_then(|s| s.total_liabilities.as_ref())))),
        ("Total Equity", amount(item(balance.and_then(|s| s.total_equity.as_ref())))),
        (
            "Operating Cash Flow",
            amount(item(cash_flow.and_then(|s| s.cash_from_operating_activities.as_ref()))),
        ),
        ("Gross Margin", ratio(ratios.gross_margin)),
        ("Operating Margin", ratio(ratios.operating_margin)),
        ("Net Profit Margin", ratio(ratios.net_profit_margin)),
        ("Current Ratio", ratio(ratios.current_ratio)),
        ("Debt to Equity", ratio(ratios.debt_to_equity_ratio)),
        ("Revenue Growth YoY", percent(growth.revenue_growth_pct)),
        ("Net Income Growth YoY", percent(growth.net_income_growth_pct)),
        (
            "Financial Health",
            filing
                .financial_health_status
                .map_or_else(|| "-".to_string(), |s| s.to_string()),
        ),
    ]
}

/// Format a report as an ASCII table, one column per filing.
pub fn render_report_table(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nFinancial Statements Summary: {}\n", report.symbol));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No annual filings.\n");
        return output;
    }

    output.push_str(&format!("{:<24}", "Fiscal Year"));
    for filing in &report.filings {
        output.push_str(&format!(" {:>16}", filing.year));
    }
    output.push('\n');
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    let columns: Vec<Vec<(&str, String)>> = report.filings.iter().map(headline).collect();
    let rows = columns.first().map_or(0, Vec::len);
    for row in 0..rows {
        output.push_str(&format!("{:<24}", columns[0][row].0));
        for column in &columns {
            output.push_str(&format!(" {:>16}", column[row].1));
        }
        output.push('\n');
    }

    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output
}

/// Format a report as Markdown, one table row per filing.
pub fn render_report_markdown(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Financial Statements Summary: {}\n\n", report.symbol));

    if report.is_empty() {
        output.push_str("_No annual filings._\n");
        return output;
    }

    let labels: Vec<&str> = report
        .latest()
        .map(|f| headline(f).into_iter().map(|(label, _)| label).collect())
        .unwrap_or_default();

    output.push_str("| Fiscal Year | Period End |");
    for label in &labels {
        output.push_str(&format!(" {label} |"));
    }
    output.push('\n');
    output.push_str("|---|---|");
    for _ in &labels {
        output.push_str("---|");
    }
    output.push('\n');

    for filing in &report.filings {
        output.push_str(&format!(
            "| {} | {} |",
            filing.year,
            text(filing.end_date.as_deref())
        ));
        for (_, value) in headline(filing) {
            output.push_str(&format!(" {value} |"));
        }
        output.push('\n');
    }

    output
}

/// Format key metrics for terminal display.
pub fn render_metrics_text(metrics: &KeyMetrics) -> String {
    let label = |s: Option<String>| s.unwrap_or_else(|| "-".to_string());
    let mut output = String::new();

    output.push_str(&format!("\nKey Metrics: {}\n", metrics.symbol));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    let rows = [
        ("P/E (TTM)", ratio(metrics.pe_ratio_ttm)),
        ("P/S (TTM)", ratio(metrics.ps_ratio_ttm)),
        ("P/B", ratio(metrics.pb_ratio)),
        ("Market Cap (M)", amount(metrics.market_capitalization)),
        ("EPS (TTM)", amount(metrics.eps_ttm)),
        ("ROE (TTM)", ratio(metrics.roe_ttm)),
        ("ROA (TTM)", ratio(metrics.roa_ttm)),
        ("Net Margin (TTM)", ratio(metrics.net_profit_margin_ttm)),
        ("Current Ratio", ratio(metrics.current_ratio_annual)),
        ("Quick Ratio", ratio(metrics.quick_ratio_annual)),
        ("Debt/Equity", ratio(metrics.total_debt_to_equity_annual)),
        ("Revenue Growth (TTM)", percent(metrics.revenue_growth_ttm_yoy)),
        ("EPS Growth (TTM)", percent(metrics.eps_growth_ttm_yoy)),
        ("Dividend/Share (TTM)", amount(metrics.dividend_per_share_ttm)),
        ("Beta", ratio(metrics.beta)),
        ("52-Week High", amount(metrics.fifty_two_week_high)),
        ("52-Week Low", amount(metrics.fifty_two_week_low)),
        ("Valuation", label(metrics.valuation_status.map(|s| s.to_string()))),
        ("Profitability", label(metrics.profitability_assessment.map(|s| s.to_string()))),
        ("Liquidity", label(metrics.liquidity_assessment.map(|s| s.to_string()))),
    ];
    for (name, value) in rows {
        output.push_str(&format!("  {name:<24}{value:>20}\n"));
    }

    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output
}

/// Format a company profile for terminal display.
pub fn render_profile_text(profile: &CompanyProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} ({})\n", profile.name, profile.symbol));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    let rows = [
        ("Exchange", profile.exchange.clone()),
        ("Industry", text(profile.industry.as_deref()).to_string()),
        ("Country", text(profile.country.as_deref()).to_string()),
        ("Currency", text(profile.currency.as_deref()).to_string()),
        ("IPO Date", text(profile.ipo_date.as_deref()).to_string()),
        ("Market Cap (M)", amount(profile.market_capitalization)),
        ("Shares Out (M)", amount(profile.shares_outstanding)),
        ("Website", text(profile.website.as_deref()).to_string()),
    ];
    for (name, value) in rows {
        output.push_str(&format!("  {name:<18}{value}\n"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tenk_analytics::{HealthStatus, RatioSet};

    fn filing(year: i32, revenue: f64) -> NormalizedFiling {
        NormalizedFiling {
            symbol: "ACME".to_string(),
            access_number: format!("acc-{year}"),
            form_type: "10-K".to_string(),
            year,
            quarter: 0,
            start_date: None,
            end_date: Some(format!("{year}-12-31 00:00:00")),
            filed_date: None,
            accepted_date: None,
            income_statement: Some(tenk_analytics::IncomeStatement {
                revenue: Some(NormalizedItem {
                    label: "Revenue".to_string(),
                    value: Some(revenue),
                    unit: Some("usd".to_string()),
                }),
                ..Default::default()
            }),
            balance_sheet: None,
            cash_flow_statement: None,
            calculated_ratios: Some(RatioSet {
                current_ratio: Some(f64::INFINITY),
                ..RatioSet::default()
            }),
            revenue_growth_yoy_percent: Some(8.25),
            net_income_growth_yoy_percent: None,
            financial_health_status: Some(HealthStatus::Strong),
        }
    }

    fn report() -> Report {
        Report {
            symbol: "ACME".to_string(),
            filings: vec![filing(2023, 383_285_000_000.0), filing(2022, 950.0)],
        }
    }

    #[rstest]
    #[case(None, "-")]
    #[case(Some(f64::NAN), "-")]
    #[case(Some(f64::INFINITY), "inf")]
    #[case(Some(f64::NEG_INFINITY), "-inf")]
    #[case(Some(2_500_000.0), "2.50M")]
    #[case(Some(-12.346), "-12.35")]
    fn test_amount(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(amount(value), expected);
    }

    #[test]
    fn test_table() {
        let table = render_report_table(&report());
        assert!(table.contains("Financial Statements Summary: ACME"));
        assert!(table.contains("2023"));
        assert!(table.contains("383285.00M"));
        assert!(table.contains("950.00"));
        assert!(table.contains("inf"));
        assert!(table.contains("8.25%"));
        assert!(table.contains("Strong"));
    }

    #[test]
    fn test_markdown() {
        let markdown = render_report_markdown(&report());
        let rows: Vec<&str> = markdown.lines().filter(|l| l.starts_with('|')).collect();

        // Header, separator and one row per filing
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Revenue"));
        assert!(rows[2].starts_with("| 2023 | 2023-12-31 00:00:00 |"));
    }

    #[test]
    fn test_empty_report() {
        let empty = Report {
            symbol: "ACME".to_string(),
            filings: vec![],
        };
        assert!(render_report_table(&empty).contains("No annual filings."));
        assert!(render_report_markdown(&empty).contains("_No annual filings._"));
    }
}
