use super::state::{ReceiptField, RequestField, YarnAction};
use super::view_model::YarnActionsViewModel;
use crate::shared::date_utils::format_datetime;
use crate::shared::number_input::format_amount;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::domain::a002_yarn::YarnRecord;
use contracts::domain::common::field_name::humanize_field_name;
use leptos::prelude::*;
use thaw::*;

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn record_card(index: usize, yarn: YarnRecord) -> impl IntoView {
    let title = format!(
        "🧵 Yarn ID: {}",
        yarn.id.clone().unwrap_or_else(|| format!("#{}", index + 1))
    );
    let kgs = yarn.kgs_received.map(format_amount).unwrap_or_else(|| "-".into());
    let bags = yarn.bags_received.map(format_amount).unwrap_or_else(|| "-".into());
    let received = yarn
        .received_date
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".into());

    view! {
        <Card>
            <div class="yarn-card">
                <h3 class="yarn-card__title">{title}</h3>
                <div class="yarn-card__grid">
                    <p><span class="form__label">"Spun Type: "</span>{or_dash(&yarn.spun_type)}</p>
                    <p><span class="form__label">"Vendor ID: "</span>{or_dash(&yarn.vendor_id)}</p>
                    <p><span class="form__label">"Kgs Received: "</span>{kgs}</p>
                    <p><span class="form__label">"Bags Received: "</span>{bags}</p>
                    <p><span class="form__label">"Request ID: "</span>{or_dash(&yarn.request_id)}</p>
                    <p>
                        <span class="form__label">"Order No: "</span>
                        {yarn.order_no.clone().unwrap_or_else(|| "N/A".into())}
                    </p>
                    <p><span class="form__label">"Received Date: "</span>{received}</p>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn YarnActionsPage() -> impl IntoView {
    let vm = YarnActionsViewModel::new();
    let state = vm.state;
    // memos keep sub-forms from re-rendering on every keystroke
    let selected = Memo::new(move |_| state.with(|s| s.selected));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let records = Memo::new(move |_| state.with(|s| s.records.clone()));

    let action_buttons = YarnAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if selected.get() == Some(action) { "btn btn-primary" } else { "btn btn-secondary" }
                    }
                    on:click=move |_| state.update(|s| s.select(action))
                >
                    {action.caption()}
                </button>
            }
        })
        .collect_view();

    let request_inputs = move || {
        RequestField::ALL
            .into_iter()
            .map(|field| {
                view! {
                    <div class="form-group">
                        <label class="form__label capitalize">{humanize_field_name(field.name())}</label>
                        <input
                            required
                            type=field.input_type()
                            class="form__input"
                            prop:value=move || state.with(|s| s.request_value(field))
                            on:input=move |ev| state.update(|s| s.set_request_value(field, event_target_value(&ev)))
                        />
                    </div>
                }
            })
            .collect_view()
    };

    let receipt_inputs = move || {
        ReceiptField::ALL
            .into_iter()
            .map(|field| {
                view! {
                    <div class="form-group">
                        <label class="form__label capitalize">{humanize_field_name(field.name())}</label>
                        <input
                            required
                            type=field.input_type()
                            class="form__input"
                            prop:value=move || state.with(|s| s.receipt_value(field))
                            on:input=move |ev| state.update(|s| s.set_receipt_value(field, event_target_value(&ev)))
                        />
                    </div>
                }
            })
            .collect_view()
    };

    let status_input = move || {
        view! {
            <div class="form-group">
                <label class="form__label">"Status (Optional)"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || state.with(|s| s.status.clone())
                    on:input=move |ev| state.update(|s| s.status = event_target_value(&ev))
                    placeholder="e.g., pending, approved"
                />
            </div>
        }
    };

    let sub_form = move || match selected.get() {
        None => view! { <p class="hint">"Choose an action to continue."</p> }.into_any(),
        Some(action) => {
            let fields = match action {
                YarnAction::Request => request_inputs().into_any(),
                YarnAction::View => status_input().into_any(),
                YarnAction::Receive => receipt_inputs().into_any(),
                YarnAction::ViewAll => view! {}.into_any(),
            };
            view! {
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.action_command();
                    }
                >
                    {fields}
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { action.busy_caption() } else { action.submit_caption() }}
                    </button>
                </form>
            }
            .into_any()
        }
    };

    let record_cards = move || {
        records
            .get()
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, yarn)| record_card(index, yarn))
            .collect_view()
    };

    view! {
        <PageFrame page_id="a002_yarn--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2 class="page__title">"Yarn Management"</h2>
                <p>"Select an action below to manage yarn data."</p>
            </div>

            <div class="page__content">
                <div class="yarn-actions">{action_buttons}</div>

                {sub_form}

                <Show when=move || loading.get()>
                    <Flex gap=FlexGap::Small style="align-items:center;">
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                </Show>

                <div class="yarn-records">{record_cards}</div>

                {move || state.with(|s| s.records_placeholder()).map(|text| view! { <p class="hint">{text}</p> })}

                {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error">"⚠️ "{e}</div> })}

                {move || state.with(|s| s.result_text()).map(|text| view! { <pre class="result">"✅ "{text}</pre> })}
            </div>
        </PageFrame>
    }
}
