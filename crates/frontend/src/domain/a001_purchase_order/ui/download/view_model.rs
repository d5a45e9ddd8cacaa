use super::model;
use crate::shared::status_message::StatusMessage;
use leptos::prelude::*;

pub const MISSING_PO_MESSAGE: &str = "Please enter PO number to download.";

/// ViewModel for the "Download Purchase Order" card
#[derive(Clone, Copy)]
pub struct DownloadOrderViewModel {
    pub po_number: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub message: RwSignal<Option<StatusMessage>>,
}

impl DownloadOrderViewModel {
    pub fn new() -> Self {
        Self {
            po_number: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            message: RwSignal::new(None),
        }
    }

    pub fn download_command(&self) {
        if self.loading.get_untracked() {
            return;
        }
        let po_number = self.po_number.get_untracked().trim().to_string();
        if po_number.is_empty() {
            self.message.set(Some(StatusMessage::error(MISSING_PO_MESSAGE)));
            return;
        }

        self.message.set(None);
        self.loading.set(true);
        let this = *self;
        leptos::task::spawn_local(async move {
            match model::export_purchase_order(&po_number).await {
                Ok(()) => {
                    log::info!("Purchase order {} exported", po_number);
                    this.message.set(Some(StatusMessage::success(format!(
                        "Purchase Order #{} downloaded successfully!",
                        po_number
                    ))));
                }
                Err(e) => {
                    log::error!("Export of PO {} failed: {}", po_number, e);
                    this.message.set(Some(StatusMessage::error(e.user_message())));
                }
            }
            this.loading.set(false);
        });
    }
}

impl Default for DownloadOrderViewModel {
    fn default() -> Self {
        Self::new()
    }
}
