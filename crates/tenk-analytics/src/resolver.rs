//! Concept resolution.

use crate::statements::NormalizedItem;
use tenk_data::RawConceptItem;

/// Resolve the first candidate concept present in `items`.
///
/// Candidates are tried in the order given; the first candidate with a
/// matching item wins regardless of where the item sits in the document.
/// Among items sharing a concept, the first in document order is taken.
/// A matched item whose value is not numeric resolves to an item with a
/// `None` value.
///
/// Returns `None` when `items` is absent or no candidate matches.
pub fn resolve<S: AsRef<str>>(
    items: Option<&[RawConceptItem]>,
    candidates: &[S],
) -> Option<NormalizedItem> {
    let items = items?;
    candidates.iter().find_map(|candidate| {
        items
            .iter()
            .find(|item| item.concept == candidate.as_ref())
            .map(NormalizedItem::from_raw)
    })
}
