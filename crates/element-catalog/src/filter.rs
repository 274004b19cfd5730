//! Element filter-set construction.
//!
//! A probe query's element filter combines two inputs: the caller's
//! "always need this" weighted hints and the user's explicit element list.
//! The combination rule below encodes a real precedence decision
//! (caller-required elements survive even when the user's list would
//! otherwise exclude them) and must not be simplified:
//!
//! - every catalog element starts at weight 0
//! - each caller hint adds its boost (normally 1; a boost > 1 marks the
//!   element "forced")
//! - each user-selected element adds 1
//! - elements with weight >= 2 are selected, except when the user supplied
//!   no list and nothing was forced, in which case weight >= 1 selects
//!   (i.e. all hinted elements, or the caller's defaults).

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::catalog::CATALOG;
use crate::id::ElementId;

/// The probe front-end's standard hints: weight 1 on every catalog
/// element. Combined with the threshold rule this makes a user list
/// select exactly its entries and an empty list select everything.
pub fn default_interest() -> Vec<(ElementId, u8)> {
    CATALOG.iter().map(|spec| (spec.id, 1u8)).collect()
}

/// Build the set of element ids a query should accept.
///
/// `requested` is the user's explicit list (empty = no preference);
/// `interest` is the caller's weighted hints. A `MatchAll` entry in
/// `requested` boosts every catalog element.
pub fn build_filter_set(
    requested: &[ElementId],
    interest: &[(ElementId, u8)],
) -> BTreeSet<ElementId> {
    let mut weights: HashMap<ElementId, u8> =
        CATALOG.iter().map(|spec| (spec.id, 0u8)).collect();

    let mut forced = false;
    for &(id, boost) in interest {
        if let Some(w) = weights.get_mut(&id) {
            *w = w.saturating_add(boost);
        }
        if boost > 1 {
            forced = true;
        }
    }

    let match_all = requested.contains(&ElementId::MatchAll);
    for &id in requested {
        if id == ElementId::MatchAll {
            for w in weights.values_mut() {
                *w = w.saturating_add(1);
            }
        } else if let Some(w) = weights.get_mut(&id) {
            *w = w.saturating_add(1);
        }
    }

    let threshold = if requested.is_empty() && !forced { 1 } else { 2 };

    let selected: BTreeSet<ElementId> = weights
        .into_iter()
        .filter(|&(_, w)| w >= threshold)
        .map(|(id, _)| id)
        .collect();

    debug!(
        requested = requested.len(),
        match_all,
        threshold,
        selected = selected.len(),
        "built element filter set"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_list_intersected_with_interest() {
        // Caller hints MaxT and MinT; user asks for MaxT and QPF. Only
        // MaxT reaches weight 2.
        let set = build_filter_set(
            &[ElementId::MaxTemp, ElementId::Qpf],
            &[(ElementId::MaxTemp, 1), (ElementId::MinTemp, 1)],
        );
        assert!(set.contains(&ElementId::MaxTemp));
        assert!(!set.contains(&ElementId::Qpf));
        assert!(!set.contains(&ElementId::MinTemp));
    }

    #[test]
    fn empty_user_list_selects_all_hinted() {
        let set = build_filter_set(&[], &[(ElementId::MaxTemp, 1), (ElementId::Sky, 1)]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ElementId::MaxTemp));
        assert!(set.contains(&ElementId::Sky));
    }

    #[test]
    fn forced_entry_suppresses_select_all_fallback() {
        // MaxT is forced (boost 2); Sky only hinted. With no user list the
        // fallback is suppressed and only the forced entry survives.
        let set = build_filter_set(&[], &[(ElementId::MaxTemp, 2), (ElementId::Sky, 1)]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&ElementId::MaxTemp));
    }

    #[test]
    fn forced_entry_survives_exclusion_by_user_list() {
        // User asked only for QPF, but the caller forced MaxT: both win.
        let set = build_filter_set(&[ElementId::Qpf], &[(ElementId::MaxTemp, 2)]);
        assert!(set.contains(&ElementId::MaxTemp));
        assert!(!set.contains(&ElementId::Qpf), "QPF alone only reaches weight 1");
    }

    #[test]
    fn match_all_boosts_everything() {
        let set = build_filter_set(&[ElementId::MatchAll], &[(ElementId::MaxTemp, 1)]);
        // Every element got +1 from MatchAll; only MaxT reaches 2.
        assert_eq!(set.len(), 1);
        assert!(set.contains(&ElementId::MaxTemp));
    }

    #[test]
    fn no_inputs_selects_nothing() {
        assert!(build_filter_set(&[], &[]).is_empty());
    }
}
