//! Report assembly.
//!
//! Walks the selected filings newest-first. Each filing's revenue and net
//! income are carried forward as an explicit accumulator, and the next
//! (older) filing's growth is measured against that carried state.

use crate::concepts::ConceptMap;
use crate::error::SelectionError;
use crate::growth::PriorPeriod;
use crate::health::assess;
use crate::ratios::{RatioInputs, compute_ratios};
use crate::report::{NormalizedFiling, Report};
use crate::selector::select_annual;
use crate::statements::{BalanceSheet, CashFlowStatement, IncomeStatement};
use tenk_data::{RawFilingRecord, RawReportedFinancials};

/// Builds [`Report`]s from raw reported financials.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    concepts: ConceptMap,
}

impl ReportAssembler {
    /// Assembler using the standard concept catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler using a custom concept catalog.
    pub const fn with_concepts(concepts: ConceptMap) -> Self {
        Self { concepts }
    }

    /// Select annual filings from a raw bundle and build the report.
    ///
    /// # Errors
    /// Propagates the [`SelectionError`] when nothing is left to analyse.
    pub fn assemble(
        &self,
        symbol: &str,
        raw: &RawReportedFinancials,
    ) -> Result<Report, SelectionError> {
        let received = raw.data.as_ref().map_or(0, Vec::len);
        let selected = select_annual(raw.data.as_deref())?;
        tracing::debug!(symbol, received, selected = selected.len(), "Selected annual filings");
        Ok(self.build(symbol, &selected))
    }

    /// Build a report from filings already selected and ordered newest-first.
    pub fn build(&self, symbol: &str, selected: &[&RawFilingRecord]) -> Report {
        let (filings, _) = selected.iter().fold(
            (Vec::with_capacity(selected.len()), PriorPeriod::default()),
            |(mut filings, prior), filing| {
                let (normalized, current) = self.normalize_filing(filing, &prior);
                filings.push(normalized);
                (filings, current)
            },
        );

        Report {
            symbol: symbol.to_string(),
            filings,
        }
    }

    /// Normalize one filing against the carried-forward prior period.
    ///
    /// Returns the normalized filing and the period to carry to the next
    /// (older) filing.
    pub fn normalize_filing(
        &self,
        filing: &RawFilingRecord,
        prior: &PriorPeriod,
    ) -> (NormalizedFiling, PriorPeriod) {
        let sections = filing.sections.as_ref();
        let income =
            IncomeStatement::resolve(sections.and_then(|s| s.ic.as_deref()), &self.concepts);
        let balance =
            BalanceSheet::resolve(sections.and_then(|s| s.bs.as_deref()), &self.concepts);
        let cash_flow =
            CashFlowStatement::resolve(sections.and_then(|s| s.cf.as_deref()), &self.concepts);

        let ratios = compute_ratios(&RatioInputs::from_statements(&income, &balance));

        let current = PriorPeriod {
            revenue: income.revenue_value(),
            net_income: income.net_income_value(),
        };
        let growth = current.growth_over(prior);

        let health = assess(
            current.net_income,
            cash_flow.cash_from_operations_value(),
            ratios.current_ratio,
            ratios.debt_to_equity_ratio,
        );

        let normalized = NormalizedFiling {
            symbol: filing.symbol.clone(),
            access_number: filing.access_number.clone(),
            form_type: filing.form.clone(),
            year: filing.year,
            quarter: filing.quarter,
            start_date: filing.start_date.clone(),
            end_date: filing.end_date.clone(),
            filed_date: filing.filed_date.clone(),
            accepted_date: filing.accepted_date.clone(),
            income_statement: income.is_populated().then_some(income),
            balance_sheet: balance.is_populated().then_some(balance),
            cash_flow_statement: cash_flow.is_populated().then_some(cash_flow),
            calculated_ratios: ratios.is_meaningful().then_some(ratios),
            revenue_growth_yoy_percent: growth.revenue_growth_pct,
            net_income_growth_yoy_percent: growth.net_income_growth_pct,
            financial_health_status: health,
        };

        (normalized, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthStatus;
    use tenk_data::{RawConceptItem, RawStatementSections};

    fn usd(concept: &str, value: f64) -> RawConceptItem {
        RawConceptItem::new(concept, concept.trim_start_matches("us-gaap_"), value, "usd")
    }

    fn annual(year: i32, revenue: f64, net_income: f64) -> RawFilingRecord {
        RawFilingRecord {
            access_number: format!("acc-{year}"),
            symbol: "ACME".to_string(),
            year,
            quarter: 0,
            form: "10-K".to_string(),
            end_date: Some(format!("{year}-12-31 00:00:00")),
            sections: Some(RawStatementSections {
                ic: Some(vec![
                    usd("us-gaap_Revenues", revenue),
                    usd("us-gaap_NetIncomeLoss", net_income),
                ]),
                bs: Some(vec![
                    usd("us-gaap_AssetsCurrent", 300.0),
                    usd("us-gaap_LiabilitiesCurrent", 100.0),
                    usd("us-gaap_Liabilities", 400.0),
                    usd("us-gaap_StockholdersEquity", 800.0),
                ]),
                cf: Some(vec![usd(
                    "us-gaap_NetCashProvidedByUsedInOperatingActivities",
                    net_income * 1.5,
                )]),
            }),
            ..RawFilingRecord::default()
        }
    }

    #[test]
    fn test_growth_uses_carried_forward_state() {
        let filings = [annual(2023, 1_100.0, 110.0), annual(2022, 1_000.0, 100.0)];
        let selected: Vec<&RawFilingRecord> = filings.iter().collect();

        let report = ReportAssembler::new().build("ACME", &selected);

        assert_eq!(report.symbol, "ACME");
        assert_eq!(report.len(), 2);
        // Nothing is carried into the newest filing
        assert_eq!(report.filings[0].revenue_growth_yoy_percent, None);
        // The older filing is measured against the newer one carried forward
        assert_eq!(report.filings[1].revenue_growth_yoy_percent, Some(-9.09));
        assert_eq!(report.filings[1].net_income_growth_yoy_percent, Some(-9.09));
    }

    #[test]
    fn test_health_and_ratios() {
        let filing = annual(2023, 1_000.0, 100.0);
        let (normalized, carried) =
            ReportAssembler::new().normalize_filing(&filing, &PriorPeriod::default());

        let ratios = normalized.calculated_ratios.unwrap();
        assert_eq!(ratios.net_profit_margin, Some(0.1));
        assert_eq!(ratios.current_ratio, Some(3.0));
        assert_eq!(ratios.debt_to_equity_ratio, Some(0.5));
        assert_eq!(normalized.financial_health_status, Some(HealthStatus::Strong));
        assert_eq!(carried.revenue, Some(1_000.0));
        assert_eq!(carried.net_income, Some(100.0));
    }

    #[test]
    fn test_custom_concept_catalog() {
        use crate::concepts::Slot;

        let filing = RawFilingRecord {
            form: "10-K".to_string(),
            sections: Some(RawStatementSections {
                ic: Some(vec![usd(
                    "us-gaap_RevenueFromContractWithCustomerExcludingAssessedTax",
                    640.0,
                )]),
                ..RawStatementSections::default()
            }),
            ..RawFilingRecord::default()
        };

        let (standard, _) =
            ReportAssembler::new().normalize_filing(&filing, &PriorPeriod::default());
        assert!(standard.income_statement.is_none());

        let concepts = ConceptMap::standard().with_candidates(
            Slot::Revenue,
            ["us-gaap_Revenues", "us-gaap_RevenueFromContractWithCustomerExcludingAssessedTax"],
        );
        let (custom, carried) = ReportAssembler::with_concepts(concepts)
            .normalize_filing(&filing, &PriorPeriod::default());
        assert_eq!(carried.revenue, Some(640.0));
        assert!(custom.income_statement.is_some());
    }

    #[test]
    fn test_growth_accessor_matches_fields() {
        let filings = [annual(2023, 1_250.0, 100.0), annual(2022, 1_000.0, 80.0)];
        let selected: Vec<&RawFilingRecord> = filings.iter().collect();
        let report = ReportAssembler::new().build("ACME", &selected);

        let growth = report.filings[1].growth();
        assert_eq!(growth.revenue_growth_pct, Some(-20.0));
        assert_eq!(growth.net_income_growth_pct, Some(-20.0));
        assert_eq!(report.filings[0].growth(), crate::growth::GrowthPair::default());
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let filing = RawFilingRecord {
            form: "10-K".to_string(),
            sections: Some(RawStatementSections {
                ic: Some(vec![usd("us-gaap_Revenues", 50.0)]),
                bs: Some(vec![usd("us-gaap_SomethingUnmapped", 1.0)]),
                cf: None,
            }),
            ..RawFilingRecord::default()
        };

        let (normalized, _) =
            ReportAssembler::new().normalize_filing(&filing, &PriorPeriod::default());

        assert!(normalized.income_statement.is_some());
        assert!(normalized.balance_sheet.is_none());
        assert!(normalized.cash_flow_statement.is_none());
        assert!(normalized.calculated_ratios.is_none());
        assert_eq!(normalized.financial_health_status, None);
    }

    #[test]
    fn test_assemble_reports_selection_failure() {
        let assembler = ReportAssembler::new();

        let absent = RawReportedFinancials::default();
        assert_eq!(
            assembler.assemble("ACME", &absent),
            Err(SelectionError::NoFilings)
        );

        let mut quarterly = annual(2023, 1.0, 1.0);
        quarterly.quarter = 3;
        let only_quarterly = RawReportedFinancials {
            data: Some(vec![quarterly]),
            ..RawReportedFinancials::default()
        };
        assert_eq!(
            assembler.assemble("ACME", &only_quarterly),
            Err(SelectionError::NoAnnualFilings { total: 1 })
        );
    }
}
