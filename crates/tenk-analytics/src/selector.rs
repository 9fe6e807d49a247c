//! Annual filing selection.

use crate::error::SelectionError;
use tenk_data::{PeriodType, RawFilingRecord};

/// Whether a filing is an annual 10-K with statements attached.
pub fn is_annual_report(filing: &RawFilingRecord) -> bool {
    filing.quarter == 0
        && PeriodType::from_form(&filing.form) == Some(PeriodType::Annual)
        && filing.sections.is_some()
}

/// Select annual 10-K filings, newest period end first.
///
/// End dates compare as strings; the upstream format is fixed-width. Filings
/// without an end date sort last, and equal end dates keep their upstream
/// order.
///
/// # Errors
/// [`SelectionError::NoFilings`] when `filings` is absent or empty,
/// [`SelectionError::NoAnnualFilings`] when nothing passes the filter.
pub fn select_annual(
    filings: Option<&[RawFilingRecord]>,
) -> Result<Vec<&RawFilingRecord>, SelectionError> {
    let filings = match filings {
        Some(filings) if !filings.is_empty() => filings,
        _ => return Err(SelectionError::NoFilings),
    };

    let mut selected: Vec<&RawFilingRecord> =
        filings.iter().filter(|f| is_annual_report(f)).collect();

    if selected.is_empty() {
        return Err(SelectionError::NoAnnualFilings {
            total: filings.len(),
        });
    }

    selected.sort_by(|a, b| end_date_key(b).cmp(end_date_key(a)));
    Ok(selected)
}

fn end_date_key(filing: &RawFilingRecord) -> &str {
    filing.end_date.as_deref().unwrap_or_default()
}
