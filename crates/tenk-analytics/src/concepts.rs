//! Statement slots and the concept identifiers that can fill them.
//!
//! Filers and data vendors tag the same fact differently, and the same
//! filer may switch tags between years. A [`ConceptMap`] lists, for every
//! [`Slot`], the acceptable concept identifiers in priority order.

use std::collections::HashMap;

/// A named line item of a normalized statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    // Income statement
    /// Total revenue
    Revenue,
    /// Cost of revenue
    CostOfRevenue,
    /// Gross profit
    GrossProfit,
    /// Operating expenses
    OperatingExpenses,
    /// Operating income
    OperatingIncome,
    /// Net income as reported on the income statement
    NetIncome,
    /// Basic earnings per share
    EpsBasic,

    // Balance sheet
    /// Cash and cash equivalents
    CashAndCashEquivalents,
    /// Current marketable securities
    MarketableSecurities,
    /// Net current accounts receivable
    AccountsReceivable,
    /// Total current assets
    TotalCurrentAssets,
    /// Net property, plant and equipment
    PropertyPlantEquipment,
    /// Goodwill
    Goodwill,
    /// Total assets
    TotalAssets,
    /// Current accounts payable
    AccountsPayable,
    /// Current deferred revenue
    DeferredRevenue,
    /// Total current liabilities
    TotalCurrentLiabilities,
    /// Long-term debt
    LongTermDebt,
    /// Total liabilities
    TotalLiabilities,
    /// Total stockholders' equity
    TotalEquity,

    // Cash-flow statement
    /// Net income as reported on the cash-flow statement
    CashFlowNetIncome,
    /// Depreciation, depletion and amortization
    DepreciationAmortization,
    /// Changes in working capital
    ChangesInWorkingCapital,
    /// Net cash from operating activities
    CashFromOperatingActivities,
    /// Capital expenditures
    CapitalExpenditures,
    /// Net cash from investing activities
    CashFromInvestingActivities,
    /// Dividends paid
    DividendsPaid,
    /// Net cash from financing activities
    CashFromFinancingActivities,
    /// Net change in cash
    NetIncreaseDecreaseInCash,
}

impl Slot {
    /// Every slot, grouped by section in schema order.
    pub const ALL: [Self; 29] = [
        Self::Revenue,
        Self::CostOfRevenue,
        Self::GrossProfit,
        Self::OperatingExpenses,
        Self::OperatingIncome,
        Self::NetIncome,
        Self::EpsBasic,
        Self::CashAndCashEquivalents,
        Self::MarketableSecurities,
        Self::AccountsReceivable,
        Self::TotalCurrentAssets,
        Self::PropertyPlantEquipment,
        Self::Goodwill,
        Self::TotalAssets,
        Self::AccountsPayable,
        Self::DeferredRevenue,
        Self::TotalCurrentLiabilities,
        Self::LongTermDebt,
        Self::TotalLiabilities,
        Self::TotalEquity,
        Self::CashFlowNetIncome,
        Self::DepreciationAmortization,
        Self::ChangesInWorkingCapital,
        Self::CashFromOperatingActivities,
        Self::CapitalExpenditures,
        Self::CashFromInvestingActivities,
        Self::DividendsPaid,
        Self::CashFromFinancingActivities,
        Self::NetIncreaseDecreaseInCash,
    ];

    /// Default candidate concepts, most preferred first.
    const fn standard_candidates(self) -> &'static [&'static str] {
        match self {
            Self::Revenue => &["us-gaap_Revenues", "us-gaap_SalesRevenueNet"],
            Self::CostOfRevenue => &["us-gaap_CostOfRevenue"],
            Self::GrossProfit => &["us-gaap_GrossProfit"],
            Self::OperatingExpenses => &["us-gaap_OperatingExpenses"],
            Self::OperatingIncome => &["us-gaap_OperatingIncomeLoss"],
            Self::NetIncome | Self::CashFlowNetIncome => &["us-gaap_NetIncomeLoss"],
            Self::EpsBasic => &["us-gaap_EarningsPerShareBasic"],
            Self::CashAndCashEquivalents => &["us-gaap_CashAndCashEquivalentsAtCarryingValue"],
            Self::MarketableSecurities => &["us-gaap_MarketableSecuritiesCurrent"],
            Self::AccountsReceivable => &["us-gaap_AccountsReceivableNetCurrent"],
            Self::TotalCurrentAssets => &["us-gaap_AssetsCurrent"],
            Self::PropertyPlantEquipment => &["us-gaap_PropertyPlantAndEquipmentNet"],
            Self::Goodwill => &["us-gaap_Goodwill"],
            Self::TotalAssets => &["us-gaap_Assets"],
            Self::AccountsPayable => &["us-gaap_AccountsPayableCurrent"],
            Self::DeferredRevenue => &["us-gaap_DeferredRevenueCurrent"],
            Self::TotalCurrentLiabilities => &["us-gaap_LiabilitiesCurrent"],
            Self::LongTermDebt => &["us-gaap_LongTermDebt"],
            Self::TotalLiabilities => &["us-gaap_Liabilities"],
            Self::TotalEquity => &["us-gaap_StockholdersEquity"],
            Self::DepreciationAmortization => &["us-gaap_DepreciationDepletionAndAmortization"],
            Self::ChangesInWorkingCapital => &["us-gaap_IncreaseDecreaseInOperatingCapital"],
            Self::CashFromOperatingActivities => {
                &["us-gaap_NetCashProvidedByUsedInOperatingActivities"]
            }
            Self::CapitalExpenditures => &["us-gaap_PaymentsToAcquireProductiveAssets"],
            Self::CashFromInvestingActivities => {
                &["us-gaap_NetCashProvidedByUsedInInvestingActivities"]
            }
            Self::DividendsPaid => &["us-gaap_PaymentsOfDividends"],
            Self::CashFromFinancingActivities => {
                &["us-gaap_NetCashProvidedByUsedInFinancingActivities"]
            }
            Self::NetIncreaseDecreaseInCash => {
                &["us-gaap_CashAndCashEquivalentsPeriodIncreaseDecrease"]
            }
        }
    }
}

/// Candidate concept identifiers for every [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptMap {
    candidates: HashMap<Slot, Vec<String>>,
}

impl ConceptMap {
    /// The standard `us-gaap_` catalog.
    pub fn standard() -> Self {
        let candidates = Slot::ALL
            .iter()
            .map(|&slot| {
                let tags = slot
                    .standard_candidates()
                    .iter()
                    .map(|tag| (*tag).to_string())
                    .collect();
                (slot, tags)
            })
            .collect();
        Self { candidates }
    }

    /// Replace the candidate list of one slot.
    pub fn with_candidates<I, S>(mut self, slot: Slot, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates
            .insert(slot, candidates.into_iter().map(Into::into).collect());
        self
    }

    /// Candidate concepts for a slot, most preferred first.
    pub fn candidates(&self, slot: Slot) -> &[String] {
        self.candidates.get(&slot).map_or(&[], Vec::as_slice)
    }
}

impl Default for ConceptMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_candidates_order() {
        let map = ConceptMap::standard();
        assert_eq!(
            map.candidates(Slot::Revenue),
            ["us-gaap_Revenues", "us-gaap_SalesRevenueNet"]
        );
    }

    #[test]
    fn test_every_slot_has_candidates() {
        let map = ConceptMap::standard();
        for slot in Slot::ALL {
            assert!(!map.candidates(slot).is_empty(), "{slot:?} has no candidates");
        }
    }

    #[test]
    fn test_override_single_slot() {
        let map = ConceptMap::standard().with_candidates(
            Slot::Revenue,
            ["us-gaap_RevenueFromContractWithCustomerExcludingAssessedTax", "us-gaap_Revenues"],
        );
        assert_eq!(map.candidates(Slot::Revenue).len(), 2);
        assert_eq!(
            map.candidates(Slot::Revenue)[0],
            "us-gaap_RevenueFromContractWithCustomerExcludingAssessedTax"
        );
        assert_eq!(map.candidates(Slot::GrossProfit), ["us-gaap_GrossProfit"]);
    }
}
