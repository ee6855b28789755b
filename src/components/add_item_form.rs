//! Add Item Form Component
//!
//! Create an item by name, then return to the directory.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::new_item::{self, ADD_SUCCEEDED};
use crate::routes::Route;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let body = match new_item::validate_name(&name.get_untracked()) {
            Ok(body) => body,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);
        let api = ctx.api();
        let delay = ctx.redirect_delay_ms();
        spawn_local(async move {
            let result = api.create_item(&body).await;
            set_submitting.try_set(false);
            match result {
                Ok(item) => {
                    log::info!(target: "ADD_ITEM", "Created item #{} {:?}", item.id, item.name);
                    set_success.try_set(true);
                    set_name.try_set(String::new());
                    TimeoutFuture::new(delay).await;
                    ctx.navigate(Route::Directory);
                }
                Err(e) => {
                    log::error!(target: "ADD_ITEM", "Error adding item: {e}");
                    set_error.try_set(Some(new_item::add_failure_message(&e)));
                }
            }
        });
    };

    view! {
        <div class="row justify-content-center">
            <div class="col-md-6">
                <div class="card">
                    <div class="card-header">
                        <h3>"Add New Item"</h3>
                    </div>
                    <div class="card-body">
                        <Show when=move || success.get()>
                            <div class="alert alert-success">{ADD_SUCCEEDED}</div>
                        </Show>
                        {move || error.get().map(|msg| view! {
                            <div class="alert alert-danger">{msg}</div>
                        })}
                        <form on:submit=on_submit>
                            <div class="mb-3">
                                <label for="name" class="form-label">"Item Name"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
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
                                    {move || if submitting.get() { "Adding..." } else { "Add Item" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
