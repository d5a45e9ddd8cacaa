use super::form::{LabelField, OrderField};
use super::view_model::ReceiveOrderViewModel;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::status_message::StatusLine;
use contracts::domain::common::field_name::humanize_field_name;
use leptos::prelude::*;

#[component]
pub fn ReceiveOrderForm() -> impl IntoView {
    let vm = ReceiveOrderViewModel::new();
    // rows are rebuilt only when their count changes, not on every keystroke
    let size_count = Memo::new(move |_| vm.form.with(|f| f.order.sizes.len()));
    let label_count = Memo::new(move |_| vm.form.with(|f| f.labels.len()));

    let order_inputs = OrderField::ALL
        .into_iter()
        .map(|field| {
            let caption = humanize_field_name(field.name());
            let input_type = if field.is_numeric() { "number" } else { "text" };
            view! {
                <div class="form-group">
                    <label for=field.name() class="form__label capitalize">{caption.clone()}</label>
                    <input
                        type=input_type
                        id=field.name()
                        class="form__input"
                        prop:value=move || vm.form.with(|f| f.field_value(field))
                        on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                        placeholder=format!("Enter {}", caption)
                    />
                </div>
            }
        })
        .collect_view();

    let size_rows = move || {
        let count = size_count.get();
        (0..count)
            .map(|index| {
                view! {
                    <div class="size-row">
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || {
                                vm.form.with(|f| f.order.sizes.get(index).cloned().unwrap_or_default())
                            }
                            on:input=move |ev| vm.update_size(index, event_target_value(&ev))
                            placeholder="Enter size (e.g. S, M, L or 32x34)"
                        />
                        <Show when=move || (count > 1)>
                            <button
                                type="button"
                                class="btn btn-link btn-danger"
                                on:click=move |_| vm.form.update(|f| f.remove_size(index))
                            >
                                "✕"
                            </button>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    let label_cards = move || {
        let count = label_count.get();
        (0..count)
            .map(|index| {
                let inputs = LabelField::ALL
                    .into_iter()
                    .map(|field| {
                        let caption = humanize_field_name(field.name());
                        let hint = if field.is_list() {
                            format!("Enter {} (comma-separated allowed)", caption)
                        } else {
                            format!("Enter {}", caption)
                        };
                        view! {
                            <div class="form-group">
                                <label class="form__label capitalize">{caption}</label>
                                <input
                                    type="text"
                                    class="form__input"
                                    prop:value=move || {
                                        vm.form.with(|f| {
                                            f.labels
                                                .get(index)
                                                .map(|l| l.get(field).to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| vm.update_label(index, field, event_target_value(&ev))
                                    placeholder=hint
                                />
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="label-card">
                        <div class="label-card__grid">{inputs}</div>
                        <button
                            type="button"
                            class="btn btn-link btn-danger"
                            on:click=move |_| vm.form.update(|f| f.remove_label(index))
                        >
                            "Remove Label"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a001_purchase_order--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <h2 class="page__title">"Receive New Order"</h2>
            </div>

            <div class="page__content">
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    {order_inputs}

                    <div class="form-group">
                        <label class="form__label">"Sizes"</label>
                        {size_rows}
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| vm.form.update(|f| f.add_size())
                        >
                            "+ Add Size"
                        </button>
                    </div>

                    <div class="form-group">
                        <label for="additional_info" class="form__label">"Additional Info"</label>
                        <textarea
                            id="additional_info"
                            class="form__textarea"
                            rows="3"
                            prop:value=move || vm.form.with(|f| f.order.additional_info.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.set_additional_info(event_target_value(&ev)))
                            placeholder="Enter any extra details or notes..."
                        />
                    </div>

                    <div class="labels-section">
                        <h3>"Labels"</h3>
                        {label_cards}
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| vm.form.update(|f| f.add_label())
                        >
                            "+ Add Label"
                        </button>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || vm.loading.get()>
                        {move || if vm.loading.get() { "Receiving..." } else { "Receive Order" }}
                    </button>
                </form>

                <StatusLine message=vm.message />
            </div>
        </PageFrame>
    }
}
