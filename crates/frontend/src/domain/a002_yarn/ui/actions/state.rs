//! State of the yarn page: which action is selected, the sub-form of each
//! action and the shared loading/error/result slot.

use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::parse_datetime_local;
use crate::shared::number_input::{format_amount, parse_amount, parse_count};
use contracts::domain::a002_yarn::{YarnReceipt, YarnRecord, YarnRequest};
use contracts::domain::common::field_name::{humanize_field_name, non_blank};
use serde_json::Value;

pub const NO_RECORDS_MESSAGE: &str = "No records to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YarnAction {
    Request,
    View,
    Receive,
    ViewAll,
}

impl YarnAction {
    pub const ALL: [YarnAction; 4] = [
        YarnAction::Request,
        YarnAction::View,
        YarnAction::Receive,
        YarnAction::ViewAll,
    ];

    pub fn caption(self) -> &'static str {
        match self {
            YarnAction::Request => "Request Yarn",
            YarnAction::View => "View Yarn",
            YarnAction::Receive => "Receive Yarn",
            YarnAction::ViewAll => "View All Yarn",
        }
    }

    /// Submit button text while the call is running
    pub fn busy_caption(self) -> &'static str {
        match self {
            YarnAction::Request | YarnAction::Receive => "Submitting...",
            YarnAction::View => "Fetching...",
            YarnAction::ViewAll => "Loading...",
        }
    }

    pub fn submit_caption(self) -> &'static str {
        match self {
            YarnAction::ViewAll => "Fetch All Yarn Records",
            other => other.caption(),
        }
    }
}

/// The API call an action resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum YarnCall {
    Request(YarnRequest),
    View { status: Option<String> },
    Receive(YarnReceipt),
    ViewAll,
}

#[derive(Debug, Clone, PartialEq)]
pub enum YarnOutcome {
    /// Answer shown as-is: echoed documents and the filtered `view` list
    Record(Value),
    /// Stored receipts from "view all", shown as cards
    Records(Vec<YarnRecord>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Count,
    Content,
    SpunType,
    Bags,
    Kgs,
}

impl RequestField {
    pub const ALL: [RequestField; 5] = [
        RequestField::Count,
        RequestField::Content,
        RequestField::SpunType,
        RequestField::Bags,
        RequestField::Kgs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RequestField::Count => "count",
            RequestField::Content => "content",
            RequestField::SpunType => "spun_type",
            RequestField::Bags => "bags",
            RequestField::Kgs => "kgs",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RequestField::Content | RequestField::SpunType => "text",
            _ => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    SpunType,
    KgsReceived,
    BagsReceived,
    ReceivedDate,
    VendorId,
}

impl ReceiptField {
    pub const ALL: [ReceiptField; 5] = [
        ReceiptField::SpunType,
        ReceiptField::KgsReceived,
        ReceiptField::BagsReceived,
        ReceiptField::ReceivedDate,
        ReceiptField::VendorId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReceiptField::SpunType => "spun_type",
            ReceiptField::KgsReceived => "kgs_received",
            ReceiptField::BagsReceived => "bags_received",
            ReceiptField::ReceivedDate => "received_date",
            ReceiptField::VendorId => "vendor_id",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ReceiptField::ReceivedDate => "datetime-local",
            ReceiptField::KgsReceived | ReceiptField::BagsReceived => "number",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YarnPageState {
    pub selected: Option<YarnAction>,
    pub request: YarnRequest,
    pub receipt: YarnReceipt,
    /// Optional filter of the "view" action
    pub status: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<Value>,
    /// `None` until a list has been fetched
    pub records: Option<Vec<YarnRecord>>,
    /// Text typed into the decimal inputs, kept so "12." survives a re-render
    kgs_draft: Option<String>,
    kgs_received_draft: Option<String>,
}

impl YarnPageState {
    /// Switches the sub-form; the shared result slot is cleared
    pub fn select(&mut self, action: YarnAction) {
        self.selected = Some(action);
        self.clear_outcome();
    }

    fn clear_outcome(&mut self) {
        self.error = None;
        self.result = None;
        self.records = None;
    }

    pub fn request_value(&self, field: RequestField) -> String {
        let r = &self.request;
        match field {
            RequestField::Count => r.count.to_string(),
            RequestField::Content => r.content.clone(),
            RequestField::SpunType => r.spun_type.clone(),
            RequestField::Bags => r.bags.to_string(),
            RequestField::Kgs => self
                .kgs_draft
                .clone()
                .unwrap_or_else(|| format_amount(r.kgs)),
        }
    }

    pub fn set_request_value(&mut self, field: RequestField, raw: String) {
        let r = &mut self.request;
        match field {
            RequestField::Count => r.count = parse_count(&raw),
            RequestField::Content => r.content = raw,
            RequestField::SpunType => r.spun_type = raw,
            RequestField::Bags => r.bags = parse_count(&raw),
            RequestField::Kgs => {
                r.kgs = parse_amount(&raw);
                self.kgs_draft = Some(raw);
            }
        }
    }

    pub fn receipt_value(&self, field: ReceiptField) -> String {
        let r = &self.receipt;
        match field {
            ReceiptField::SpunType => r.spun_type.clone(),
            ReceiptField::KgsReceived => self
                .kgs_received_draft
                .clone()
                .unwrap_or_else(|| format_amount(r.kgs_received)),
            ReceiptField::BagsReceived => r.bags_received.to_string(),
            ReceiptField::ReceivedDate => r.received_date.clone(),
            ReceiptField::VendorId => r.vendor_id.clone(),
        }
    }

    pub fn set_receipt_value(&mut self, field: ReceiptField, raw: String) {
        let r = &mut self.receipt;
        match field {
            ReceiptField::SpunType => r.spun_type = raw,
            ReceiptField::KgsReceived => {
                r.kgs_received = parse_amount(&raw);
                self.kgs_received_draft = Some(raw);
            }
            ReceiptField::BagsReceived => r.bags_received = parse_count(&raw),
            ReceiptField::ReceivedDate => r.received_date = raw,
            ReceiptField::VendorId => r.vendor_id = raw,
        }
    }

    /// Resolves the selected action into a call and marks the page busy.
    ///
    /// Returns `None` when nothing should be sent: no action selected, a
    /// call already running, or the sub-form failed validation (the
    /// message is left in `error`).
    pub fn begin(&mut self) -> Option<YarnCall> {
        if self.loading {
            return None;
        }
        let action = self.selected?;
        self.clear_outcome();

        let call = match self.call_for(action) {
            Ok(call) => call,
            Err(message) => {
                self.error = Some(message);
                return None;
            }
        };
        self.loading = true;
        Some(call)
    }

    fn call_for(&self, action: YarnAction) -> Result<YarnCall, String> {
        match action {
            YarnAction::Request => {
                if let Some(field) = self.request.first_missing_field() {
                    return Err(missing_field_message(field));
                }
                Ok(YarnCall::Request(self.request.clone()))
            }
            YarnAction::View => Ok(YarnCall::View {
                status: non_blank(&self.status),
            }),
            YarnAction::Receive => {
                if let Some(field) = self.receipt.first_missing_field() {
                    return Err(missing_field_message(field));
                }
                if parse_datetime_local(&self.receipt.received_date).is_none() {
                    return Err("Received date must be a date and time (YYYY-MM-DDTHH:MM).".into());
                }
                Ok(YarnCall::Receive(self.receipt.clone()))
            }
            YarnAction::ViewAll => Ok(YarnCall::ViewAll),
        }
    }

    /// Stores the answer of the call started by [`begin`](Self::begin)
    pub fn finish(&mut self, outcome: Result<YarnOutcome, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(YarnOutcome::Record(value)) => self.result = Some(value),
            Ok(YarnOutcome::Records(records)) => self.records = Some(records),
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Pretty JSON of a single-document answer
    pub fn result_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .filter(|v| !v.is_null())
            .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()))
    }

    /// Placeholder shown instead of an empty record list
    pub fn records_placeholder(&self) -> Option<&'static str> {
        if self.loading {
            return None;
        }
        let empty = self.records.as_ref().map_or(true, Vec::is_empty);
        let list_expected = self.selected == Some(YarnAction::ViewAll) || self.records.is_some();
        (empty && list_expected).then_some(NO_RECORDS_MESSAGE)
    }
}

fn missing_field_message(field: &str) -> String {
    format!("Please fill the {} field.", humanize_field_name(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_receipt() -> YarnReceipt {
        YarnReceipt {
            spun_type: "ring".into(),
            kgs_received: 120.0,
            bags_received: 4,
            received_date: "2024-05-01T09:30".into(),
            vendor_id: "V-3".into(),
        }
    }

    #[test]
    fn test_begin_without_selection_does_nothing() {
        let mut state = YarnPageState::default();
        assert_eq!(state.begin(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_select_clears_shared_slot() {
        let mut state = YarnPageState {
            error: Some("boom".into()),
            result: Some(json!({"ok": true})),
            records: Some(vec![YarnRecord::default()]),
            ..Default::default()
        };
        state.select(YarnAction::View);
        assert_eq!(state.error, None);
        assert_eq!(state.result, None);
        assert_eq!(state.records, None);
    }

    #[test]
    fn test_view_sends_optional_status() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::View);
        state.status = "  ".into();
        assert_eq!(state.begin(), Some(YarnCall::View { status: None }));
        assert!(state.loading);

        state.finish(Ok(YarnOutcome::Record(json!({"status": "pending"}))));
        state.status = " pending ".into();
        assert_eq!(
            state.begin(),
            Some(YarnCall::View {
                status: Some("pending".into())
            })
        );
    }

    #[test]
    fn test_begin_is_ignored_while_loading() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::ViewAll);
        assert_eq!(state.begin(), Some(YarnCall::ViewAll));
        assert_eq!(state.begin(), None);
    }

    #[test]
    fn test_request_numbers_are_coerced() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::Request);
        state.set_request_value(RequestField::Count, "30".into());
        state.set_request_value(RequestField::Bags, "12".into());
        state.set_request_value(RequestField::Kgs, "600.5".into());
        state.set_request_value(RequestField::Content, "cotton".into());
        state.set_request_value(RequestField::SpunType, "combed".into());
        assert_eq!(state.request_value(RequestField::Kgs), "600.5");
        state.set_request_value(RequestField::Kgs, "600.".into());
        assert_eq!(state.request_value(RequestField::Kgs), "600.");
        state.set_request_value(RequestField::Kgs, "600.5".into());

        match state.begin() {
            Some(YarnCall::Request(request)) => {
                assert_eq!(request.count, 30);
                assert_eq!(request.bags, 12);
                assert_eq!(request.kgs, 600.5);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_request_missing_text_field() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::Request);
        assert_eq!(state.begin(), None);
        assert_eq!(state.error.as_deref(), Some("Please fill the content field."));
        assert!(!state.loading);
    }

    #[test]
    fn test_receive_requires_datetime() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::Receive);
        state.receipt = filled_receipt();
        state.set_receipt_value(ReceiptField::ReceivedDate, "yesterday".into());
        assert_eq!(state.begin(), None);
        assert!(state.error.as_deref().unwrap().starts_with("Received date"));

        state.set_receipt_value(ReceiptField::ReceivedDate, "2024-05-01T09:30".into());
        assert_eq!(state.begin(), Some(YarnCall::Receive(filled_receipt())));
    }

    #[test]
    fn test_view_all_empty_shows_placeholder() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::ViewAll);
        assert_eq!(state.begin(), Some(YarnCall::ViewAll));
        assert_eq!(state.records_placeholder(), None);

        state.finish(Ok(YarnOutcome::Records(Vec::new())));
        assert!(!state.loading);
        assert_eq!(state.records_placeholder(), Some(NO_RECORDS_MESSAGE));
        assert_eq!(state.result_text(), None);
    }

    #[test]
    fn test_view_all_with_records_has_no_placeholder() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::ViewAll);
        state.begin();
        state.finish(Ok(YarnOutcome::Records(vec![YarnRecord::default()])));
        assert_eq!(state.records_placeholder(), None);
    }

    #[test]
    fn test_error_uses_backend_detail() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::Request);
        state.request = YarnRequest {
            count: 30,
            content: "cotton".into(),
            spun_type: "combed".into(),
            bags: 1,
            kgs: 25.0,
        };
        state.begin();
        state.finish(Err(ApiError::Http {
            status: 422,
            detail: Some("Unknown spun type".into()),
        }));
        assert_eq!(state.error.as_deref(), Some("Unknown spun type"));
        assert!(!state.loading);
    }

    #[test]
    fn test_view_list_keeps_every_field() {
        let mut state = YarnPageState::default();
        state.select(YarnAction::View);
        state.status = "pending".into();
        state.begin();
        let answer = json!([{
            "_id": "r1",
            "count": 30,
            "content": "cotton",
            "spun_type": "combed",
            "bags": 4,
            "kgs": 600.5,
            "status": "pending"
        }]);
        state.finish(Ok(YarnOutcome::Record(answer.clone())));

        assert_eq!(state.records, None);
        assert_eq!(state.records_placeholder(), None);
        let text = state.result_text().unwrap();
        let shown: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(shown, answer);
    }

    #[test]
    fn test_result_text_is_pretty_json() {
        let mut state = YarnPageState::default();
        state.finish(Ok(YarnOutcome::Record(json!({"id": 1}))));
        assert_eq!(state.result_text().as_deref(), Some("{\n  \"id\": 1\n}"));
    }
}
