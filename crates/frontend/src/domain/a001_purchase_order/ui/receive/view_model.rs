use super::form::{LabelField, OrderField, OrderForm};
use crate::domain::a001_purchase_order::api;
use crate::shared::status_message::StatusMessage;
use leptos::prelude::*;

pub const RECEIVED_MESSAGE: &str = "Order received successfully!";
pub const RECEIVE_FAILED_MESSAGE: &str = "Failed to receive order. Check console for details.";

/// ViewModel for the "Receive New Order" form, created once per mount
#[derive(Clone, Copy)]
pub struct ReceiveOrderViewModel {
    pub form: RwSignal<OrderForm>,
    pub loading: RwSignal<bool>,
    pub message: RwSignal<Option<StatusMessage>>,
}

impl ReceiveOrderViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm::default()),
            loading: RwSignal::new(false),
            message: RwSignal::new(None),
        }
    }

    pub fn set_field(&self, field: OrderField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn update_label(&self, index: usize, field: LabelField, value: String) {
        self.form.update(|f| f.update_label(index, field, value));
    }

    pub fn update_size(&self, index: usize, value: String) {
        self.form.update(|f| f.update_size(index, value));
    }

    /// Validates, sends the normalized order and resets the form on success
    pub fn submit_command(&self) {
        if self.loading.get_untracked() {
            return;
        }
        self.message.set(None);

        let payload = match self.form.with_untracked(OrderForm::to_payload) {
            Ok(payload) => payload,
            Err(e) => {
                self.message.set(Some(StatusMessage::error(e)));
                return;
            }
        };

        self.loading.set(true);
        let this = *self;
        leptos::task::spawn_local(async move {
            match api::receive_order(&payload).await {
                Ok(_) => {
                    log::info!("Order {} received", payload.po_number);
                    this.form.update(OrderForm::reset);
                    this.message.set(Some(StatusMessage::success(RECEIVED_MESSAGE)));
                }
                Err(e) => {
                    log::error!("Failed to receive order: {}", e);
                    this.message
                        .set(Some(StatusMessage::error(RECEIVE_FAILED_MESSAGE)));
                }
            }
            this.loading.set(false);
        });
    }
}

impl Default for ReceiveOrderViewModel {
    fn default() -> Self {
        Self::new()
    }
}
