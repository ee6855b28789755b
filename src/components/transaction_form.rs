//! Transaction Form Component
//!
//! Buy and sell forms: pick an item, enter quantity and unit price, submit.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::item_picker::ItemPickerField;
use crate::context::use_app_context;
use crate::draft::{format_amount, load_finished, submit_failure_message, TransactionDraft, SUBMIT_SUCCEEDED};
use crate::models::{Item, TransactionKind};
use crate::routes::Route;

#[component]
pub fn BuyForm() -> impl IntoView {
    view! { <TransactionForm kind=TransactionKind::Buy /> }
}

#[component]
pub fn SellForm() -> impl IntoView {
    view! { <TransactionForm kind=TransactionKind::Sell /> }
}

/// Shared buy/sell form; `kind` decides endpoint, stock cap and messages
#[component]
pub fn TransactionForm(kind: TransactionKind) -> impl IntoView {
    let ctx = use_app_context();

    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);
    let draft = RwSignal::new(TransactionDraft::new(kind));

    // Load the item list once per form session
    Effect::new(move |_| {
        set_loading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let (loaded, failure) = load_finished(api.list_items(None).await);
            set_items.try_set(loaded);
            if let Some(msg) = failure {
                draft.try_update(|d| d.show_error(msg));
            }
            set_loading.try_set(false);
        });
    });

    let on_pick = move |item: Item| {
        let mut picked = Ok(());
        draft.update(|d| picked = d.select_item(&item));
        if let Err(e) = picked {
            log::warn!(target: "PICKER", "Ignored pick: {e}");
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match draft.with_untracked(|d| d.validate()) {
            Ok(request) => request,
            Err(e) => {
                draft.update(|d| d.show_error(e.to_string()));
                return;
            }
        };

        draft.update(|d| d.dismiss_error());
        set_success.set(false);
        set_submitting.set(true);
        let api = ctx.api();
        let delay = ctx.redirect_delay_ms();
        spawn_local(async move {
            let result = api.create_transaction(kind, &request).await;
            set_submitting.try_set(false);
            match result {
                Ok(_) => {
                    log::info!(
                        target: "TRANSACTION",
                        "{:?} recorded: item #{} x{} @ {}",
                        kind, request.item, request.no_of_item, request.price_of_one_piece
                    );
                    set_success.try_set(true);
                    draft.try_update(|d| d.reset());
                    TimeoutFuture::new(delay).await;
                    ctx.navigate(Route::Directory);
                }
                Err(e) => {
                    // draft is kept so the user can resubmit as-is
                    log::error!(target: "TRANSACTION", "Error adding {kind:?} transaction: {e}");
                    draft.try_update(|d| d.show_error(submit_failure_message(kind, &e)));
                }
            }
        });
    };

    let min_price = format_amount(kind.min_unit_price());

    view! {
        <div class="row justify-content-center">
            <div class="col-md-8">
                <div class="card">
                    <div class="card-header">
                        <h3>{kind.title()}</h3>
                    </div>
                    <div class="card-body">
                        <Show when=move || success.get()>
                            <div class="alert alert-success">{SUBMIT_SUCCEEDED}</div>
                        </Show>
                        {move || draft.with(|d| d.error().map(str::to_string)).map(|msg| view! {
                            <div class="alert alert-danger">{msg}</div>
                        })}
                        <Show when=move || loading.get()>
                            <p class="text-muted">"Loading items..."</p>
                        </Show>
                        <form on:submit=on_submit>
                            <ItemPickerField items=items draft=draft on_pick=on_pick />
                            <div class="mb-3">
                                <label for="no_of_item" class="form-label">"Quantity"</label>
                                <input
                                    type="number"
                                    class=move || {
                                        if draft.with(|d| d.quantity_warning().is_some()) {
                                            "form-control is-invalid"
                                        } else {
                                            "form-control"
                                        }
                                    }
                                    id="no_of_item"
                                    min="1"
                                    max=move || draft.with(|d| d.max_quantity().map(|m| m.to_string()))
                                    prop:value=move || draft.with(|d| d.quantity_text().to_string())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        draft.update(|d| d.set_quantity_text(text));
                                    }
                                />
                                {move || draft.with(|d| d.quantity_warning()).map(|msg| view! {
                                    <div class="invalid-feedback d-block">{msg}</div>
                                })}
                            </div>
                            <div class="mb-3">
                                <label for="price_of_one_piece" class="form-label">"Price per Unit (₹)"</label>
                                <input
                                    type="number"
                                    class="form-control"
                                    id="price_of_one_piece"
                                    min=min_price
                                    step="0.01"
                                    prop:value=move || draft.with(|d| d.unit_price_text().to_string())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        draft.update(|d| d.set_unit_price_text(text));
                                    }
                                />
                            </div>
                            <div class="mb-3">
                                <label for="total_rupees" class="form-label">"Total Amount (₹)"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="total_rupees"
                                    readonly=true
                                    prop:value=move || draft.with(|d| format_amount(d.total()))
                                />
                            </div>
                            <div class="d-flex justify-content-end">
                                <button
                                    type="button"
                                    class="btn btn-secondary me-2"
                                    on:click=move |_| ctx.navigate(Route::Directory)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
