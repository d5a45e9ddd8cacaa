use serde::{Deserialize, Serialize};

/// Order fields that must be filled before the order can be submitted.
/// `dyeing_color` and `additional_info` are optional.
pub const MANDATORY_ORDER_FIELDS: [&str; 12] = [
    "customer_name",
    "order_number",
    "bags",
    "company_order_number",
    "yarn_count",
    "content",
    "spun",
    "sizes",
    "knitting_type",
    "dyeing_type",
    "finishing_type",
    "po_number",
];

/// Label fields that must be filled on every label line.
pub const MANDATORY_LABEL_FIELDS: [&str; 4] =
    ["vendor_id", "quality", "printed_woven", "elastic_type"];

/// Per-garment specification line attached to a purchase order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLabel {
    pub vendor_id: String,
    pub quality: String,
    /// "printed" or "woven", free text on the wire
    pub printed_woven: String,
    pub elastic_type: String,
    #[serde(default)]
    pub elastic_vendor_id: Option<String>,
    #[serde(default)]
    pub trims: Option<Vec<String>>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Purchase order as accepted by `POST /receive_order/`
///
/// `po_number` is the key used to download the order later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub customer_name: String,
    pub order_number: String,
    /// Number of bags, must be greater than zero
    pub bags: u32,
    pub company_order_number: String,
    /// Yarn count, must be greater than zero
    pub yarn_count: u32,
    pub content: String,
    pub spun: String,
    /// Ordered size list, e.g. `["S", "M", "L"]` or `["32x34"]`
    pub sizes: Vec<String>,
    pub knitting_type: String,
    pub dyeing_type: String,
    pub dyeing_color: String,
    pub finishing_type: String,
    pub po_number: String,
    #[serde(default)]
    pub labels: Option<Vec<OrderLabel>>,
    /// Free-text note for the whole order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl PurchaseOrder {
    /// Returns the first mandatory field (in [`MANDATORY_ORDER_FIELDS`] order)
    /// that is blank, zero or an empty list.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        MANDATORY_ORDER_FIELDS
            .iter()
            .copied()
            .find(|field| !self.is_field_filled(field))
    }

    fn is_field_filled(&self, field: &str) -> bool {
        let text = |s: &str| !s.trim().is_empty();
        match field {
            "customer_name" => text(&self.customer_name),
            "order_number" => text(&self.order_number),
            "bags" => self.bags != 0,
            "company_order_number" => text(&self.company_order_number),
            "yarn_count" => self.yarn_count != 0,
            "content" => text(&self.content),
            "spun" => text(&self.spun),
            "sizes" => !self.sizes.is_empty(),
            "knitting_type" => text(&self.knitting_type),
            "dyeing_type" => text(&self.dyeing_type),
            "dyeing_color" => text(&self.dyeing_color),
            "finishing_type" => text(&self.finishing_type),
            "po_number" => text(&self.po_number),
            _ => true,
        }
    }
}
