//! Normalized statement sections.

use crate::concepts::{ConceptMap, Slot};
use crate::resolver::resolve;
use serde::{Deserialize, Serialize};
use tenk_data::RawConceptItem;

/// A resolved line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    /// Label chosen by the filer
    pub label: String,
    /// Value, `None` when the raw value was missing or not numeric
    pub value: Option<f64>,
    /// Unit of measure
    pub unit: Option<String>,
}

impl NormalizedItem {
    /// Build from the raw item that matched a candidate concept.
    pub fn from_raw(item: &RawConceptItem) -> Self {
        Self {
            label: item.label.clone(),
            value: item.numeric_value(),
            unit: (!item.unit.is_empty()).then(|| item.unit.clone()),
        }
    }
}

fn value_of(item: Option<&NormalizedItem>) -> Option<f64> {
    item.and_then(|item| item.value)
}

/// Income statement slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Total revenue
    pub revenue: Option<NormalizedItem>,
    /// Cost of revenue
    pub cost_of_revenue: Option<NormalizedItem>,
    /// Gross profit
    pub gross_profit: Option<NormalizedItem>,
    /// Operating expenses
    pub operating_expenses: Option<NormalizedItem>,
    /// Operating income
    pub operating_income: Option<NormalizedItem>,
    /// Net income
    pub net_income: Option<NormalizedItem>,
    /// Basic earnings per share
    pub eps_basic: Option<NormalizedItem>,
}

impl IncomeStatement {
    /// Resolve every slot against the `ic` item list.
    pub fn resolve(items: Option<&[RawConceptItem]>, concepts: &ConceptMap) -> Self {
        let get = |slot| resolve(items, concepts.candidates(slot));
        Self {
            revenue: get(Slot::Revenue),
            cost_of_revenue: get(Slot::CostOfRevenue),
            gross_profit: get(Slot::GrossProfit),
            operating_expenses: get(Slot::OperatingExpenses),
            operating_income: get(Slot::OperatingIncome),
            net_income: get(Slot::NetIncome),
            eps_basic: get(Slot::EpsBasic),
        }
    }

    /// Whether at least one slot resolved.
    pub const fn is_populated(&self) -> bool {
        self.revenue.is_some()
            || self.cost_of_revenue.is_some()
            || self.gross_profit.is_some()
            || self.operating_expenses.is_some()
            || self.operating_income.is_some()
            || self.net_income.is_some()
            || self.eps_basic.is_some()
    }

    /// Revenue value, if resolved and numeric.
    pub fn revenue_value(&self) -> Option<f64> {
        value_of(self.revenue.as_ref())
    }

    /// Net income value, if resolved and numeric.
    pub fn net_income_value(&self) -> Option<f64> {
        value_of(self.net_income.as_ref())
    }
}

/// Balance sheet slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Cash and cash equivalents
    pub cash_and_cash_equivalents: Option<NormalizedItem>,
    /// Current marketable securities
    pub marketable_securities: Option<NormalizedItem>,
    /// Accounts receivable
    pub accounts_receivable: Option<NormalizedItem>,
    /// Total current assets
    pub total_current_assets: Option<NormalizedItem>,
    /// Property, plant and equipment
    pub property_plant_equipment: Option<NormalizedItem>,
    /// Goodwill
    pub goodwill: Option<NormalizedItem>,
    /// Total assets
    pub total_assets: Option<NormalizedItem>,
    /// Accounts payable
    pub accounts_payable: Option<NormalizedItem>,
    /// Deferred revenue
    pub deferred_revenue: Option<NormalizedItem>,
    /// Total current liabilities
    pub total_current_liabilities: Option<NormalizedItem>,
    /// Long-term debt
    pub long_term_debt: Option<NormalizedItem>,
    /// Total liabilities
    pub total_liabilities: Option<NormalizedItem>,
    /// Total stockholders' equity
    pub total_equity: Option<NormalizedItem>,
}

impl BalanceSheet {
    /// Resolve every slot against the `bs` item list.
    pub fn resolve(items: Option<&[RawConceptItem]>, concepts: &ConceptMap) -> Self {
        let get = |slot| resolve(items, concepts.candidates(slot));
        Self {
            cash_and_cash_equivalents: get(Slot::CashAndCashEquivalents),
            marketable_securities: get(Slot::MarketableSecurities),
            accounts_receivable: get(Slot::AccountsReceivable),
            total_current_assets: get(Slot::TotalCurrentAssets),
            property_plant_equipment: get(Slot::PropertyPlantEquipment),
            goodwill: get(Slot::Goodwill),
            total_assets: get(Slot::TotalAssets),
            accounts_payable: get(Slot::AccountsPayable),
            deferred_revenue: get(Slot::DeferredRevenue),
            total_current_liabilities: get(Slot::TotalCurrentLiabilities),
            long_term_debt: get(Slot::LongTermDebt),
            total_liabilities: get(Slot::TotalLiabilities),
            total_equity: get(Slot::TotalEquity),
        }
    }

    /// Whether at least one slot resolved.
    pub const fn is_populated(&self) -> bool {
        self.cash_and_cash_equivalents.is_some()
            || self.marketable_securities.is_some()
            || self.accounts_receivable.is_some()
            || self.total_current_assets.is_some()
            || self.property_plant_equipment.is_some()
            || self.goodwill.is_some()
            || self.total_assets.is_some()
            || self.accounts_payable.is_some()
            || self.deferred_revenue.is_some()
            || self.total_current_liabilities.is_some()
            || self.long_term_debt.is_some()
            || self.total_liabilities.is_some()
            || self.total_equity.is_some()
    }
}

/// Cash-flow statement slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Net income
    pub net_income: Option<NormalizedItem>,
    /// Depreciation and amortization
    pub depreciation_amortization: Option<NormalizedItem>,
    /// Changes in working capital
    pub changes_in_working_capital: Option<NormalizedItem>,
    /// Net cash from operating activities
    pub cash_from_operating_activities: Option<NormalizedItem>,
    /// Capital expenditures
    pub capital_expenditures: Option<NormalizedItem>,
    /// Net cash from investing activities
    pub cash_from_investing_activities: Option<NormalizedItem>,
    /// Dividends paid
    pub dividends_paid: Option<NormalizedItem>,
    /// Net cash from financing activities
    pub cash_from_financing_activities: Option<NormalizedItem>,
    /// Net change in cash
    pub net_increase_decrease_in_cash: Option<NormalizedItem>,
}

impl CashFlowStatement {
    /// Resolve every slot against the `cf` item list.
    pub fn resolve(items: Option<&[RawConceptItem]>, concepts: &ConceptMap) -> Self {
        let get = |slot| resolve(items, concepts.candidates(slot));
        Self {
            net_income: get(Slot::CashFlowNetIncome),
            depreciation_amortization: get(Slot::DepreciationAmortization),
            changes_in_working_capital: get(Slot::ChangesInWorkingCapital),
            cash_from_operating_activities: get(Slot::CashFromOperatingActivities),
            capital_expenditures: get(Slot::CapitalExpenditures),
            cash_from_investing_activities: get(Slot::CashFromInvestingActivities),
            dividends_paid: get(Slot::DividendsPaid),
            cash_from_financing_activities: get(Slot::CashFromFinancingActivities),
            net_increase_decrease_in_cash: get(Slot::NetIncreaseDecreaseInCash),
        }
    }

    /// Whether at least one slot resolved.
    pub const fn is_populated(&self) -> bool {
        self.net_income.is_some()
            || self.depreciation_amortization.is_some()
            || self.changes_in_working_capital.is_some()
            || self.cash_from_operating_activities.is_some()
            || self.capital_expenditures.is_some()
            || self.cash_from_investing_activities.is_some()
            || self.dividends_paid.is_some()
            || self.cash_from_financing_activities.is_some()
            || self.net_increase_decrease_in_cash.is_some()
    }

    /// Operating cash flow value, if resolved and numeric.
    pub fn cash_from_operations_value(&self) -> Option<f64> {
        value_of(self.cash_from_operating_activities.as_ref())
    }
}
