//! History Filter
//!
//! Client-side filtering of fetched request records.

use crate::models::RequestRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    /// Raw text from the history search box
    pub text: String,
    pub show_deleted: bool,
}

impl HistoryFilter {
    pub fn matches(&self, record: &RequestRecord) -> bool {
        if record.is_deleted() && !self.show_deleted {
            return false;
        }
        if self.text.is_empty() {
            return true;
        }
        let term = self.text.to_lowercase();
        record.control_number.to_lowercase().contains(&term)
            || record
                .items
                .iter()
                .any(|item| item.item_description.to_lowercase().contains(&term))
    }

    /// Matching records in their original order
    pub fn apply(&self, records: &[RequestRecord]) -> Vec<RequestRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, RequestStatus};

    fn record(cn: &str, status: RequestStatus, descriptions: &[&str]) -> RequestRecord {
        RequestRecord {
            id: None,
            control_number: cn.to_string(),
            request_date: "2024-05-03T08:15:00".to_string(),
            items: descriptions
                .iter()
                .map(|d| LineItem {
                    item_description: d.to_string(),
                    item_brand: None,
                    supplier: None,
                    unit_cost: 1.0,
                    quantity: 1,
                })
                .collect(),
            last_edited: None,
            status,
            deleted_date: None,
        }
    }

    fn history() -> Vec<RequestRecord> {
        vec![
            record("RIS-1", RequestStatus::Active, &["Surgical Gauze", "Syringe"]),
            record("RIS-2", RequestStatus::Deleted, &["Gauze Pad"]),
            record("CREQ-2405003", RequestStatus::Active, &["Catheter"]),
        ]
    }

    fn control_numbers(records: &[RequestRecord]) -> Vec<&str> {
        records.iter().map(|r| r.control_number.as_str()).collect()
    }

    #[test]
    fn test_hides_deleted_by_default() {
        let filter = HistoryFilter::default();
        let shown = filter.apply(&history()[..2]);

        assert_eq!(control_numbers(&shown), vec!["RIS-1"]);
    }

    #[test]
    fn test_show_deleted_includes_them() {
        let filter = HistoryFilter { text: String::new(), show_deleted: true };
        let shown = filter.apply(&history());

        assert_eq!(control_numbers(&shown), vec!["RIS-1", "RIS-2", "CREQ-2405003"]);
    }

    #[test]
    fn test_matches_control_number_case_insensitive() {
        let filter = HistoryFilter { text: "creq-24".to_string(), show_deleted: false };
        let shown = filter.apply(&history());

        assert_eq!(control_numbers(&shown), vec!["CREQ-2405003"]);
    }

    #[test]
    fn test_matches_any_item_description() {
        let filter = HistoryFilter { text: "GAUZE".to_string(), show_deleted: false };
        assert_eq!(control_numbers(&filter.apply(&history())), vec!["RIS-1"]);

        let filter = HistoryFilter { text: "gauze".to_string(), show_deleted: true };
        assert_eq!(control_numbers(&filter.apply(&history())), vec!["RIS-1", "RIS-2"]);
    }

    #[test]
    fn test_no_match() {
        let filter = HistoryFilter { text: "bandage".to_string(), show_deleted: true };
        assert!(filter.apply(&history()).is_empty());
    }
}
