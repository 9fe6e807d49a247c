//! Export of normalized results.
//!
//! Every exportable type supports CSV and JSON. Reports flatten to one CSV
//! row per filing carrying the headline line items, ratios, growth and
//! health label.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tenk_analytics::{CompanyProfile, KeyMetrics, NormalizedFiling, NormalizedItem, Report};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// One CSV row of a flattened report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingRow {
    /// Ticker symbol
    pub symbol: String,
    /// SEC accession number
    pub access_number: String,
    /// Form type
    pub form_type: String,
    /// Fiscal year
    pub year: i32,
    /// Fiscal quarter
    pub quarter: i32,
    /// Period start
    pub start_date: Option<String>,
    /// Period end
    pub end_date: Option<String>,
    /// Filing date
    pub filed_date: Option<String>,
    /// Revenue
    pub revenue: Option<f64>,
    /// Gross profit
    pub gross_profit: Option<f64>,
    /// Operating income
    pub operating_income: Option<f64>,
    /// Net income
    pub net_income: Option<f64>,
    /// Basic EPS
    pub eps_basic: Option<f64>,
    /// Total assets
    pub total_assets: Option<f64>,
    /// Total liabilities
    pub total_liabilities: Option<f64>,
    /// Total equity
    pub total_equity: Option<f64>,
    /// Operating cash flow
    pub cash_from_operating_activities: Option<f64>,
    /// Capital expenditures
    pub capital_expenditures: Option<f64>,
    /// Gross margin
    pub gross_margin: Option<f64>,
    /// Operating margin
    pub operating_margin: Option<f64>,
    /// Net profit margin
    pub net_profit_margin: Option<f64>,
    /// Current ratio
    pub current_ratio: Option<f64>,
    /// Debt-to-equity ratio
    pub debt_to_equity_ratio: Option<f64>,
    /// Revenue growth, percent
    pub revenue_growth_yoy_percent: Option<f64>,
    /// Net income growth, percent
    pub net_income_growth_yoy_percent: Option<f64>,
    /// Health label
    pub financial_health_status: Option<String>,
}

/// Drop values CSV cannot represent meaningfully.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn item_value(item: Option<&NormalizedItem>) -> Option<f64> {
    finite(item.and_then(|i| i.value))
}

impl From<&NormalizedFiling> for FilingRow {
    fn from(filing: &NormalizedFiling) -> Self {
        let income = filing.income_statement.as_ref();
        let balance = filing.balance_sheet.as_ref();
        let cash_flow = filing.cash_flow_statement.as_ref();
        let ratios = filing.calculated_ratios.unwrap_or_default();
        let growth = filing.growth();

        Self {
            symbol: filing.symbol.clone(),
            access_number: filing.access_number.clone(),
            form_type: filing.form_type.clone(),
            year: filing.year,
            quarter: filing.quarter,
            start_date: filing.start_date.clone(),
            end_date: filing.end_date.clone(),
            filed_date: filing.filed_date.clone(),
            revenue: item_value(income.and_then(|s| s.revenue.as_ref())),
            gross_profit: item_value(income.and_then(|s| s.gross_profit.as_ref())),
            operating_income: item_value(income.and_then(|s| s.operating_income.as_ref())),
            net_income: item_value(income.and_then(|s| s.net_income.as_ref())),
            eps_basic: item_value(income.and_then(|s| s.eps_basic.as_ref())),
            total_assets: item_value(balance.and_then(|s| s.total_assets.as_ref())),
            total_liabilities: item_value(balance.and_then(|s| s.total_liabilities.as_ref())),
            total_equity: item_value(balance.and_then(|s| s.total_equity.as_ref())),
            cash_from_operating_activities: item_value(
                cash_flow.and_then(|s| s.cash_from_operating_activities.as_ref()),
            ),
            capital_expenditures: item_value(
                cash_flow.and_then(|s| s.capital_expenditures.as_ref()),
            ),
            gross_margin: finite(ratios.gross_margin),
            operating_margin: finite(ratios.operating_margin),
            net_profit_margin: finite(ratios.net_profit_margin),
            current_ratio: finite(ratios.current_ratio),
            debt_to_equity_ratio: finite(ratios.debt_to_equity_ratio),
            revenue_growth_yoy_percent: finite(growth.revenue_growth_pct),
            net_income_growth_yoy_percent: finite(growth.net_income_growth_pct),
            financial_health_status: filing.financial_health_status.map(|s| s.to_string()),
        }
    }
}

fn write_csv<T: Serialize>(records: impl IntoIterator<Item = T>) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ExportError> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

impl Exporter for Report {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => write_csv(self.filings.iter().map(FilingRow::from)),
            ExportFormat::Json => write_json(self, false),
            ExportFormat::PrettyJson => write_json(self, true),
        }
    }
}

impl Exporter for KeyMetrics {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => write_csv([self]),
            ExportFormat::Json => write_json(self, false),
            ExportFormat::PrettyJson => write_json(self, true),
        }
    }
}

impl Exporter for CompanyProfile {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => write_csv([self]),
            ExportFormat::Json => write_json(self, false),
            ExportFormat::PrettyJson => write_json(self, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenk_analytics::{HealthStatus, IncomeStatement, RatioSet};

    fn filing() -> NormalizedFiling {
        NormalizedFiling {
            symbol: "ACME".to_string(),
            access_number: "0000012345-24-000007".to_string(),
            form_type: "10-K".to_string(),
            year: 2023,
            quarter: 0,
            start_date: Some("2023-01-01 00:00:00".to_string()),
            end_date: Some("2023-12-31 00:00:00".to_string()),
            filed_date: None,
            accepted_date: None,
            income_statement: Some(IncomeStatement {
                revenue: Some(NormalizedItem {
                    label: "Revenue".to_string(),
                    value: Some(1200.0),
                    unit: Some("usd".to_string()),
                }),
                ..IncomeStatement::default()
            }),
            balance_sheet: None,
            cash_flow_statement: None,
            calculated_ratios: Some(RatioSet {
                gross_margin: Some(0.45),
                current_ratio: Some(f64::INFINITY),
                ..RatioSet::default()
            }),
            revenue_growth_yoy_percent: Some(f64::NEG_INFINITY),
            net_income_growth_yoy_percent: Some(12.5),
            financial_health_status: Some(HealthStatus::Stable),
        }
    }

    fn report() -> Report {
        Report {
            symbol: "ACME".to_string(),
            filings: vec![filing()],
        }
    }

    #[test]
    fn test_report_csv_one_row_per_filing() {
        let csv = report().export_to_string(ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("symbol,access_number,form_type"));
        assert!(lines[1].contains("0000012345-24-000007"));
        assert!(lines[1].contains("1200.0"));
        assert!(lines[1].contains("Stable"));
    }

    #[test]
    fn test_csv_non_finite_cells_are_empty() {
        let row = FilingRow::from(&filing());
        assert_eq!(row.current_ratio, None);
        assert_eq!(row.revenue_growth_yoy_percent, None);
        assert_eq!(row.gross_margin, Some(0.45));

        let csv = report().export_to_string(ExportFormat::Csv).unwrap();
        assert!(!csv.contains("inf"));
    }

    #[test]
    fn test_report_json_non_finite_is_null() {
        let json = report().export_to_string(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let filing = &value["filings"][0];
        assert_eq!(filing["calculated_ratios"]["current_ratio"], serde_json::Value::Null);
        assert_eq!(filing["revenue_growth_yoy_percent"], serde_json::Value::Null);
        assert_eq!(filing["financial_health_status"], "Stable");
        assert_eq!(filing["income_statement"]["revenue"]["value"], 1200.0);
    }

    #[test]
    fn test_pretty_json() {
        let json = report().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("\n  \"filings\""));
    }

    #[test]
    fn test_empty_report_csv() {
        let empty = Report {
            symbol: "ACME".to_string(),
            filings: vec![],
        };
        assert_eq!(empty.export_to_string(ExportFormat::Csv).unwrap(), "");
    }

    #[test]
    fn test_export_to_file() {
        let path = std::env::temp_dir().join("tenk_export_test.json");
        report().export_to_file(&path, ExportFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"ACME\""));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
