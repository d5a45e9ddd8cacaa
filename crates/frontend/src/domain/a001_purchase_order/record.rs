//! Purchase order records as returned by the download endpoint
//!
//! The backend answers with JSON (an object or a list of objects) or with
//! CSV text that has a header row. Both are read into a loose field map:
//! CSV rows carry only the columns the backend chose to export, so the
//! strict [`PurchaseOrder`](contracts::domain::a001_purchase_order::PurchaseOrder)
//! shape cannot be assumed.

use super::error::ExportError;
use serde_json::{Map, Value};

/// Rendered in place of a missing or blank value
pub const MISSING: &str = "-";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRecord {
    fields: Map<String, Value>,
}

impl OrderRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Printable text of a field; lists are joined with ", "
    pub fn display(&self, key: &str) -> String {
        display_value(self.fields.get(key))
    }

    /// Nested label records.
    ///
    /// Reads a JSON list of objects, or a string cell holding such a list
    /// (the CSV export serializes nested labels that way).
    pub fn labels(&self) -> Vec<OrderRecord> {
        let items = match self.fields.get("labels") {
            Some(Value::Array(items)) => items.clone(),
            Some(Value::String(s)) if s.trim_start().starts_with('[') => {
                serde_json::from_str::<Vec<Value>>(s).unwrap_or_default()
            }
            _ => Vec::new(),
        };
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(OrderRecord::new(map)),
                _ => None,
            })
            .collect()
    }
}

pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.trim().to_string(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .filter(|s| !s.is_empty())
                .collect();
            if parts.is_empty() {
                MISSING.to_string()
            } else {
                parts.join(", ")
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Picks the purchase order out of a download response body.
///
/// When several records come back, the one whose `po_number` matches the
/// requested PO wins, falling back to the first; the rest are dropped with
/// a warning. `Ok(None)` means the response held no record at all.
pub fn parse_order_payload(
    body: &str,
    content_type: Option<&str>,
    po_number: &str,
) -> Result<Option<OrderRecord>, ExportError> {
    let records = if looks_like_json(body, content_type) {
        parse_json_records(body)?
    } else {
        parse_csv_records(body)?
    };
    Ok(select_record(records, po_number))
}

fn looks_like_json(body: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("json")) {
        return true;
    }
    let trimmed = body.trim_start_matches('\u{FEFF}').trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn parse_json_records(body: &str) -> Result<Vec<OrderRecord>, ExportError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| ExportError::Malformed(e.to_string()))?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(vec![OrderRecord::new(map)]),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(OrderRecord::new(map)),
                _ => None,
            })
            .collect()),
        other => Err(ExportError::Malformed(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

fn parse_csv_records(body: &str) -> Result<Vec<OrderRecord>, ExportError> {
    // Strip UTF-8 BOM if present
    let text = body.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ExportError::Malformed(format!("Failed to read CSV headers: {}", e)))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| ExportError::Malformed(e.to_string()))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let fields: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(OrderRecord::new(fields));
    }
    Ok(records)
}

fn select_record(mut records: Vec<OrderRecord>, po_number: &str) -> Option<OrderRecord> {
    if records.is_empty() {
        return None;
    }
    let wanted = po_number.trim();
    let index = records
        .iter()
        .position(|r| r.get("po_number").and_then(Value::as_str).map(str::trim) == Some(wanted))
        .unwrap_or(0);
    if records.len() > 1 {
        log::warn!(
            "PO {}: {} records returned, using record #{}",
            wanted,
            records.len(),
            index + 1
        );
    }
    Some(records.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_single_row() {
        let record = parse_order_payload("po_number,customer_name\nPO-1001,Acme", None, "PO-1001")
            .unwrap()
            .unwrap();
        assert_eq!(record.display("po_number"), "PO-1001");
        assert_eq!(record.display("customer_name"), "Acme");
        assert_eq!(record.display("bags"), MISSING);
        assert!(record.labels().is_empty());
    }

    #[test]
    fn test_csv_prefers_matching_row() {
        let body = "po_number,customer_name\nPO-1,First\n\nPO-2,Second\n";
        let record = parse_order_payload(body, Some("text/csv"), "PO-2")
            .unwrap()
            .unwrap();
        assert_eq!(record.display("customer_name"), "Second");

        let record = parse_order_payload(body, Some("text/csv"), "PO-9")
            .unwrap()
            .unwrap();
        assert_eq!(record.display("customer_name"), "First");
    }

    #[test]
    fn test_csv_header_only_has_no_record() {
        assert_eq!(
            parse_order_payload("po_number,customer_name\n", None, "PO-1").unwrap(),
            None
        );
        assert_eq!(parse_order_payload("", None, "PO-1").unwrap(), None);
    }

    #[test]
    fn test_csv_with_bom_and_label_cell() {
        let body = "\u{FEFF}po_number,labels\nPO-5,\"[{\"\"vendor_id\"\":\"\"V1\"\"}]\"\n";
        let record = parse_order_payload(body, None, "PO-5").unwrap().unwrap();
        let labels = record.labels();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].display("vendor_id"), "V1");
    }

    #[test]
    fn test_json_object() {
        let body = r#"{"po_number":"PO-7","bags":12,"sizes":["S"," ","M"],
            "labels":[{"vendor_id":"V1","trims":["zip","button"]},{"vendor_id":"V2"}]}"#;
        let record = parse_order_payload(body, Some("application/json"), "PO-7")
            .unwrap()
            .unwrap();
        assert_eq!(record.display("bags"), "12");
        assert_eq!(record.display("sizes"), "S, M");
        let labels = record.labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].display("trims"), "zip, button");
        assert_eq!(labels[1].display("trims"), MISSING);
    }

    #[test]
    fn test_json_detected_without_content_type() {
        let record = parse_order_payload(r#"[{"po_number":"A"},{"po_number":"B"}]"#, None, "B")
            .unwrap()
            .unwrap();
        assert_eq!(record.display("po_number"), "B");
    }

    #[test]
    fn test_json_null_has_no_record() {
        assert_eq!(
            parse_order_payload("null", Some("application/json"), "PO-1").unwrap(),
            None
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_order_payload("{\"po_number\":", Some("application/json"), "PO-1")
            .unwrap_err();
        assert!(matches!(err, ExportError::Malformed(_)));

        let err = parse_order_payload("42", Some("application/json"), "PO-1").unwrap_err();
        assert!(matches!(err, ExportError::Malformed(_)));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "-");
        assert_eq!(display_value(Some(&Value::Null)), "-");
        assert_eq!(display_value(Some(&Value::String("  ".into()))), "-");
        assert_eq!(display_value(Some(&serde_json::json!([]))), "-");
        assert_eq!(display_value(Some(&serde_json::json!(2.5))), "2.5");
        assert_eq!(display_value(Some(&serde_json::json!(true))), "true");
    }
}
