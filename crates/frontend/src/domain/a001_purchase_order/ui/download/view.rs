use super::view_model::DownloadOrderViewModel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::status_message::StatusLine;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DownloadOrderCard() -> impl IntoView {
    let vm = DownloadOrderViewModel::new();

    view! {
        <PageFrame page_id="a001_purchase_order--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2 class="page__title">"Download Purchase Order"</h2>
            </div>

            <div class="page__content">
                <form
                    class="download-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.download_command();
                    }
                >
                    <div class="form-group">
                        <label for="po_number_lookup" class="form__label">"PO Number"</label>
                        <input
                            type="text"
                            id="po_number_lookup"
                            class="form__input"
                            prop:value=move || vm.po_number.get()
                            on:input=move |ev| vm.po_number.set(event_target_value(&ev))
                            placeholder="Enter PO number"
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || vm.loading.get()>
                        {move || if vm.loading.get() { "Downloading..." } else { "Download PO" }}
                    </button>
                </form>

                <Show when=move || vm.loading.get()>
                    <Flex gap=FlexGap::Small style="align-items:center;">
                        <Spinner />
                        <span>"Generating PDF..."</span>
                    </Flex>
                </Show>

                <StatusLine message=vm.message />
            </div>
        </PageFrame>
    }
}
