//! Trouble code instance selection.

use std::collections::HashSet;

use autodiag_observability::tracing_setup::events;

/// Result of asking for the next trouble code to work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DtcSelection {
    Selected(String),
    Exhausted,
}

/// Drop repeated codes, keeping the first occurrence of each.
pub fn dedup_dtcs(dtcs: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    dtcs.iter()
        .filter(|dtc| seen.insert(dtc.as_str()))
        .cloned()
        .collect()
}

/// Take the first-reported unused code out of `remaining`.
pub fn select_dtc_instance(remaining: &mut Vec<String>) -> DtcSelection {
    *remaining = dedup_dtcs(remaining);
    if remaining.is_empty() {
        return DtcSelection::Exhausted;
    }
    let dtc = remaining.remove(0);
    events::dtc_selected(&dtc, remaining.len());
    DtcSelection::Selected(dtc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_reported_wins() {
        let mut remaining = codes(&["P0300", "P0101", "P0300"]);
        assert_eq!(
            select_dtc_instance(&mut remaining),
            DtcSelection::Selected("P0300".into())
        );
        assert_eq!(remaining, codes(&["P0101"]));
        assert_eq!(
            select_dtc_instance(&mut remaining),
            DtcSelection::Selected("P0101".into())
        );
        assert_eq!(select_dtc_instance(&mut remaining), DtcSelection::Exhausted);
    }

    #[test]
    fn empty_list_is_exhausted() {
        assert_eq!(select_dtc_instance(&mut Vec::new()), DtcSelection::Exhausted);
    }

    #[test]
    fn dedup_is_stable() {
        assert_eq!(
            dedup_dtcs(&codes(&["B", "A", "B", "C", "A"])),
            codes(&["B", "A", "C"])
        );
    }
}
