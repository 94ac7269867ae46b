//! Frontend Models
//!
//! Data structures matching the requisition API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Quantities from the server are plain integers; keep them in `1..=u32::MAX`.
fn positive_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(1);
    Ok(u32::try_from(raw.max(1)).unwrap_or(u32::MAX))
}

/// Catalog entry returned by keyword search (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_description: String,
    #[serde(default)]
    pub item_brand: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,
}

impl CatalogItem {
    /// Uniqueness key inside a draft
    pub fn key(&self) -> (&str, Option<&str>) {
        (&self.item_description, self.item_brand.as_deref())
    }
}

/// One requested catalog item with its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_description: String,
    #[serde(default)]
    pub item_brand: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,
    #[serde(default = "one", deserialize_with = "positive_quantity")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl LineItem {
    pub fn from_catalog(item: CatalogItem) -> Self {
        Self {
            item_description: item.item_description,
            item_brand: item.item_brand,
            supplier: item.supplier,
            unit_cost: item.unit_cost,
            quantity: 1,
        }
    }

    pub fn key(&self) -> (&str, Option<&str>) {
        (&self.item_description, self.item_brand.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Active,
    Deleted,
    /// Any status this client does not know; shown like an active record
    #[serde(other)]
    Unknown,
}

/// Saved requisition as listed by `GET /requests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub control_number: String,
    pub request_date: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub last_edited: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RequestStatus,
    #[serde(default)]
    pub deleted_date: Option<String>,
}

impl RequestRecord {
    pub fn is_deleted(&self) -> bool {
        self.status == RequestStatus::Deleted
    }
}

/// Body returned by create/update; only the control number matters here
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitReceipt {
    pub control_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    /// Grouping key; null when stored items lack a description
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_description: String,
    pub request_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFrequency {
    pub date: String,
    pub request_count: u32,
    pub item_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_item_tolerates_nulls() {
        let json = r#"{"item_description":null,"item_brand":null,"supplier":"Medline","unit_cost":null}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_description, "");
        assert_eq!(item.item_brand, None);
        assert_eq!(item.supplier.as_deref(), Some("Medline"));
        assert_eq!(item.unit_cost, 0.0);
    }

    #[test]
    fn test_request_record_from_api() {
        let json = r#"{
            "_id": "665f1c",
            "control_number": "CREQ-2405001",
            "request_date": "2024-05-03T08:15:00",
            "items": [
                {"item_description":"Gauze","item_brand":"A","supplier":null,"unit_cost":10.5,"quantity":2}
            ],
            "last_edited": null,
            "status": "deleted",
            "deleted_date": "2024-05-04T09:00:00"
        }"#;
        let record: RequestRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id.as_deref(), Some("665f1c"));
        assert!(record.is_deleted());
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.last_edited, None);
    }

    #[test]
    fn test_status_defaults_to_active() {
        let json = r#"{"control_number":"CREQ-2405002","request_date":"2024-05-03T08:15:00"}"#;
        let record: RequestRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.status, RequestStatus::Active);
        assert!(record.items.is_empty());
    }

    #[test]
    fn test_line_item_payload_shape() {
        let item = LineItem::from_catalog(CatalogItem {
            item_description: "Syringe 5ml".to_string(),
            item_brand: Some("Terumo".to_string()),
            supplier: None,
            unit_cost: 4.25,
        });
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["item_description"], "Syringe 5ml");
        assert_eq!(value["item_brand"], "Terumo");
        assert!(value["supplier"].is_null());
        assert_eq!(value["quantity"], 1);
    }

    #[test]
    fn test_unknown_status_keeps_history() {
        let json = r#"[
            {"control_number":"CREQ-2405001","request_date":"2024-05-03T08:15:00","status":"archived"},
            {"control_number":"CREQ-2405002","request_date":"2024-05-04T08:15:00","status":"deleted"},
            {"control_number":"CREQ-2405003","request_date":"2024-05-05T08:15:00","status":null}
        ]"#;
        let records: Vec<RequestRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, RequestStatus::Unknown);
        assert!(!records[0].is_deleted());
        assert!(records[1].is_deleted());
        assert_eq!(records[2].status, RequestStatus::Active);
    }

    #[test]
    fn test_out_of_range_quantities_are_clamped() {
        let json = r#"[
            {"item_description":"Gauze","unit_cost":1.0,"quantity":-2},
            {"item_description":"Tape","unit_cost":1.0,"quantity":0},
            {"item_description":"Swab","unit_cost":1.0,"quantity":99999999999},
            {"item_description":"Glove","unit_cost":1.0,"quantity":null},
            {"item_description":"Mask","unit_cost":1.0}
        ]"#;
        let items: Vec<LineItem> = serde_json::from_str(json).unwrap();
        let quantities: Vec<u32> = items.iter().map(|i| i.quantity).collect();

        assert_eq!(quantities, vec![1, 1, u32::MAX, 1, 1]);
    }

    #[test]
    fn test_dashboard_rows_from_api() {
        let top = r#"[
            {"item_description":"Gauze 4x4","request_count":12},
            {"item_description":null,"request_count":1}
        ]"#;
        let items: Vec<TopItem> = serde_json::from_str(top).unwrap();
        assert_eq!(items[0].item_description, "Gauze 4x4");
        assert_eq!(items[0].request_count, 12);
        assert_eq!(items[1].item_description, "");

        let frequency = r#"[{"date":"2024-05-03","request_count":4,"item_count":9}]"#;
        let days: Vec<DailyFrequency> = serde_json::from_str(frequency).unwrap();
        assert_eq!(
            days,
            vec![DailyFrequency { date: "2024-05-03".to_string(), request_count: 4, item_count: 9 }]
        );
    }
}
