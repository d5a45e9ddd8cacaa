use serde::{Deserialize, Serialize};

/// Yarn ordered from a vendor (`POST /request_yarn/`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YarnRequest {
    /// Yarn count (Ne)
    pub count: u32,
    pub content: String,
    pub spun_type: String,
    pub bags: u32,
    pub kgs: f64,
}

impl YarnRequest {
    /// First text field left blank, if any
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [("content", &self.content), ("spun_type", &self.spun_type)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// Yarn delivered by a vendor (`POST /receive_yarn/`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YarnReceipt {
    pub spun_type: String,
    pub kgs_received: f64,
    /// The backend spells this field `bags_recevied`
    #[serde(rename = "bags_recevied")]
    pub bags_received: u32,
    /// `datetime-local` value, e.g. `2024-05-01T09:30`
    pub received_date: String,
    pub vendor_id: String,
}

impl YarnReceipt {
    /// First text field left blank, if any
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("spun_type", &self.spun_type),
            ("received_date", &self.received_date),
            ("vendor_id", &self.vendor_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Stored receipt as listed by `GET /view_all_yarn/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YarnRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub spun_type: Option<String>,
    pub vendor_id: Option<String>,
    pub kgs_received: Option<f64>,
    #[serde(rename = "bags_recevied")]
    pub bags_received: Option<f64>,
    pub request_id: Option<String>,
    pub order_no: Option<String>,
    pub received_date: Option<String>,
}

/// Query string of `GET /view_yarn/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YarnStatusQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_keeps_backend_spelling() {
        let receipt = YarnReceipt {
            spun_type: "ring".into(),
            kgs_received: 250.5,
            bags_received: 10,
            received_date: "2024-05-01T09:30".into(),
            vendor_id: "V-3".into(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["bags_recevied"], 10);
        assert!(json.get("bags_received").is_none());
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: YarnRecord =
            serde_json::from_str(r#"{"_id":"66aa","spun_type":"open end","kgs_received":12}"#)
                .unwrap();
        assert_eq!(record.id.as_deref(), Some("66aa"));
        assert_eq!(record.kgs_received, Some(12.0));
        assert_eq!(record.order_no, None);
    }

    #[test]
    fn test_first_missing_field() {
        let mut request = YarnRequest {
            count: 30,
            content: "cotton".into(),
            spun_type: " ".into(),
            bags: 2,
            kgs: 50.0,
        };
        assert_eq!(request.first_missing_field(), Some("spun_type"));
        request.spun_type = "combed".into();
        assert_eq!(request.first_missing_field(), None);

        let receipt = YarnReceipt::default();
        assert_eq!(receipt.first_missing_field(), Some("spun_type"));
    }
}
