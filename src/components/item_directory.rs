//! Item Directory Component
//!
//! Inventory table with a server-side search box.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::use_app_context;
use crate::directory::{DirectoryRow, DirectoryState, DirectoryStateStoreFields};

#[component]
pub fn ItemDirectory() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(DirectoryState::default());

    // Retry is always user-driven: mount, or another search submit.
    let fetch = move || {
        let Some(search) = store.try_update(|s| s.begin_fetch()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_items(search.as_deref()).await;
            if let Ok(items) = &result {
                log::info!(target: "DIRECTORY", "Loaded {} items (search={:?})", items.len(), search);
            }
            store.try_update(|s| s.finish_fetch(result));
        });
    };

    Effect::new(move |_| fetch());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        fetch();
    };

    view! {
        <div class="container">
            <h2 class="mb-4">"Inventory Items"</h2>

            <form class="mb-4" on:submit=on_search>
                <div class="input-group">
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Search items..."
                        prop:value=move || store.search().get()
                        on:input=move |ev| store.search().set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || store.loading().get()>
                        "Search"
                    </button>
                </div>
            </form>

            {move || store.error().get().map(|msg| view! {
                <div class="alert alert-danger">{msg}</div>
            })}

            <Show when=move || store.loading().get()>
                <div class="text-center">
                    <div class="spinner-border" role="status">
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                </div>
            </Show>

            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Available Quantity"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.with(|s| s.rows()).into_iter().map(|row| match row {
                            DirectoryRow::Item(item) => view! {
                                <tr>
                                    <td>{item.id}</td>
                                    <td>{item.name}</td>
                                    <td>{item.no_of_available_item}</td>
                                </tr>
                            }.into_any(),
                            DirectoryRow::Placeholder(text) => view! {
                                <tr>
                                    <td colspan="3" class="text-center">{text}</td>
                                </tr>
                            }.into_any(),
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
