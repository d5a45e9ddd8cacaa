//! Editable state of the "Receive New Order" form
//!
//! Pure data and transitions; the view model wraps [`OrderForm`] in a signal.

use crate::shared::number_input::parse_count;
use contracts::domain::a001_purchase_order::aggregate::MANDATORY_LABEL_FIELDS;
use contracts::domain::a001_purchase_order::{OrderLabel, PurchaseOrder};
use contracts::domain::common::field_name::{humanize_field_name, non_blank, split_comma_list};

/// Scalar order inputs rendered as one text/number field each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    CustomerName,
    OrderNumber,
    Bags,
    CompanyOrderNumber,
    YarnCount,
    Content,
    Spun,
    KnittingType,
    DyeingType,
    DyeingColor,
    FinishingType,
    PoNumber,
}

impl OrderField {
    pub const ALL: [OrderField; 12] = [
        OrderField::CustomerName,
        OrderField::OrderNumber,
        OrderField::Bags,
        OrderField::CompanyOrderNumber,
        OrderField::YarnCount,
        OrderField::Content,
        OrderField::Spun,
        OrderField::KnittingType,
        OrderField::DyeingType,
        OrderField::DyeingColor,
        OrderField::FinishingType,
        OrderField::PoNumber,
    ];

    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            OrderField::CustomerName => "customer_name",
            OrderField::OrderNumber => "order_number",
            OrderField::Bags => "bags",
            OrderField::CompanyOrderNumber => "company_order_number",
            OrderField::YarnCount => "yarn_count",
            OrderField::Content => "content",
            OrderField::Spun => "spun",
            OrderField::KnittingType => "knitting_type",
            OrderField::DyeingType => "dyeing_type",
            OrderField::DyeingColor => "dyeing_color",
            OrderField::FinishingType => "finishing_type",
            OrderField::PoNumber => "po_number",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, OrderField::Bags | OrderField::YarnCount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    VendorId,
    Quality,
    PrintedWoven,
    ElasticType,
    ElasticVendorId,
    Trims,
    Sizes,
    AdditionalInfo,
}

impl LabelField {
    pub const ALL: [LabelField; 8] = [
        LabelField::VendorId,
        LabelField::Quality,
        LabelField::PrintedWoven,
        LabelField::ElasticType,
        LabelField::ElasticVendorId,
        LabelField::Trims,
        LabelField::Sizes,
        LabelField::AdditionalInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LabelField::VendorId => "vendor_id",
            LabelField::Quality => "quality",
            LabelField::PrintedWoven => "printed_woven",
            LabelField::ElasticType => "elastic_type",
            LabelField::ElasticVendorId => "elastic_vendor_id",
            LabelField::Trims => "trims",
            LabelField::Sizes => "sizes",
            LabelField::AdditionalInfo => "additional_info",
        }
    }

    /// Fields typed as one comma-separated string
    pub fn is_list(self) -> bool {
        matches!(self, LabelField::Trims | LabelField::Sizes)
    }
}

/// A label line as typed: every field is plain text, lists are comma separated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelForm {
    pub vendor_id: String,
    pub quality: String,
    pub printed_woven: String,
    pub elastic_type: String,
    pub elastic_vendor_id: String,
    pub trims: String,
    pub sizes: String,
    pub additional_info: String,
}

impl LabelForm {
    pub fn get(&self, field: LabelField) -> &str {
        match field {
            LabelField::VendorId => &self.vendor_id,
            LabelField::Quality => &self.quality,
            LabelField::PrintedWoven => &self.printed_woven,
            LabelField::ElasticType => &self.elastic_type,
            LabelField::ElasticVendorId => &self.elastic_vendor_id,
            LabelField::Trims => &self.trims,
            LabelField::Sizes => &self.sizes,
            LabelField::AdditionalInfo => &self.additional_info,
        }
    }

    pub fn set(&mut self, field: LabelField, value: String) {
        let slot = match field {
            LabelField::VendorId => &mut self.vendor_id,
            LabelField::Quality => &mut self.quality,
            LabelField::PrintedWoven => &mut self.printed_woven,
            LabelField::ElasticType => &mut self.elastic_type,
            LabelField::ElasticVendorId => &mut self.elastic_vendor_id,
            LabelField::Trims => &mut self.trims,
            LabelField::Sizes => &mut self.sizes,
            LabelField::AdditionalInfo => &mut self.additional_info,
        };
        *slot = value;
    }

    pub fn first_missing_field(&self) -> Option<&'static str> {
        LabelField::ALL
            .into_iter()
            .filter(|f| MANDATORY_LABEL_FIELDS.contains(&f.name()))
            .find(|f| self.get(*f).trim().is_empty())
            .map(LabelField::name)
    }

    /// Maps the typed label onto the wire shape
    pub fn to_label(&self) -> OrderLabel {
        OrderLabel {
            vendor_id: self.vendor_id.trim().to_string(),
            quality: self.quality.trim().to_string(),
            printed_woven: self.printed_woven.trim().to_string(),
            elastic_type: self.elastic_type.trim().to_string(),
            elastic_vendor_id: non_blank(&self.elastic_vendor_id),
            trims: Some(split_comma_list(&self.trims)),
            sizes: Some(split_comma_list(&self.sizes)),
            additional_info: non_blank(&self.additional_info),
        }
    }
}

/// Whole form: the order itself plus its label lines as typed.
///
/// `order.labels` stays `None` while editing; labels are taken from
/// `labels` when the payload is built.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub order: PurchaseOrder,
    pub labels: Vec<LabelForm>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            order: PurchaseOrder::default(),
            labels: vec![LabelForm::default()],
        }
    }
}

impl OrderForm {
    pub fn field_value(&self, field: OrderField) -> String {
        let o = &self.order;
        match field {
            OrderField::CustomerName => o.customer_name.clone(),
            OrderField::OrderNumber => o.order_number.clone(),
            OrderField::Bags => o.bags.to_string(),
            OrderField::CompanyOrderNumber => o.company_order_number.clone(),
            OrderField::YarnCount => o.yarn_count.to_string(),
            OrderField::Content => o.content.clone(),
            OrderField::Spun => o.spun.clone(),
            OrderField::KnittingType => o.knitting_type.clone(),
            OrderField::DyeingType => o.dyeing_type.clone(),
            OrderField::DyeingColor => o.dyeing_color.clone(),
            OrderField::FinishingType => o.finishing_type.clone(),
            OrderField::PoNumber => o.po_number.clone(),
        }
    }

    /// Numeric fields are coerced on every keystroke
    pub fn set_field(&mut self, field: OrderField, raw: String) {
        let o = &mut self.order;
        match field {
            OrderField::Bags => o.bags = parse_count(&raw),
            OrderField::YarnCount => o.yarn_count = parse_count(&raw),
            OrderField::CustomerName => o.customer_name = raw,
            OrderField::OrderNumber => o.order_number = raw,
            OrderField::CompanyOrderNumber => o.company_order_number = raw,
            OrderField::Content => o.content = raw,
            OrderField::Spun => o.spun = raw,
            OrderField::KnittingType => o.knitting_type = raw,
            OrderField::DyeingType => o.dyeing_type = raw,
            OrderField::DyeingColor => o.dyeing_color = raw,
            OrderField::FinishingType => o.finishing_type = raw,
            OrderField::PoNumber => o.po_number = raw,
        }
    }

    pub fn set_additional_info(&mut self, value: String) {
        self.order.additional_info = Some(value);
    }

    pub fn add_size(&mut self) {
        self.order.sizes.push(String::new());
    }

    pub fn update_size(&mut self, index: usize, value: String) {
        if let Some(size) = self.order.sizes.get_mut(index) {
            *size = value;
        }
    }

    pub fn remove_size(&mut self, index: usize) {
        if index < self.order.sizes.len() {
            self.order.sizes.remove(index);
        }
    }

    pub fn add_label(&mut self) {
        self.labels.push(LabelForm::default());
    }

    pub fn remove_label(&mut self, index: usize) {
        if index < self.labels.len() {
            self.labels.remove(index);
        }
    }

    pub fn update_label(&mut self, index: usize, field: LabelField, value: String) {
        if let Some(label) = self.labels.get_mut(index) {
            label.set(field, value);
        }
    }

    /// First problem that blocks submission, as shown to the user
    pub fn validate(&self) -> Result<(), String> {
        if let Some(field) = self.normalized_order().first_missing_field() {
            return Err(format!(
                "Please fill the mandatory order field: {}",
                humanize_field_name(field)
            ));
        }
        for (i, label) in self.labels.iter().enumerate() {
            if let Some(field) = label.first_missing_field() {
                return Err(format!(
                    "Please fill mandatory label field \"{}\" for label #{}",
                    field,
                    i + 1
                ));
            }
        }
        Ok(())
    }

    /// Validated, normalized order ready to be sent
    pub fn to_payload(&self) -> Result<PurchaseOrder, String> {
        self.validate()?;

        let mut order = self.normalized_order();
        order.labels = Some(self.labels.iter().map(LabelForm::to_label).collect());
        Ok(order)
    }

    /// Order with blank size rows dropped and a blank note removed
    fn normalized_order(&self) -> PurchaseOrder {
        let mut order = self.order.clone();
        order.sizes = order
            .sizes
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        order.additional_info = order.additional_info.as_deref().and_then(non_blank);
        order
    }

    pub fn reset(&mut self) {
        *self = OrderForm::default();
    }
}
