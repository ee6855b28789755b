//! Item Picker Component
//!
//! Search box with a dropdown of matching items.

use leptos::prelude::*;

use crate::draft::TransactionDraft;
use crate::models::Item;

/// Item search field bound to a transaction draft
///
/// Props:
/// - items: full item list, filtered in memory
/// - draft: draft owning the picker state
/// - on_pick: called with the clicked item (only for selectable entries)
#[component]
pub fn ItemPickerField(
    items: ReadSignal<Vec<Item>>,
    draft: RwSignal<TransactionDraft>,
    #[prop(into)] on_pick: Callback<Item>,
) -> impl IntoView {
    // (item, selectable) pairs, or None when the dropdown is hidden
    let suggestions = move || {
        let items = items.get();
        draft.with(|d| {
            d.picker.suggestions(&items).map(|matches| {
                matches
                    .map(|item| (item.clone(), d.picker.can_select(item)))
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="mb-3 position-relative">
            <label for="searchTerm" class="form-label">"Item Name"</label>
            <input
                type="text"
                class="form-control"
                id="searchTerm"
                placeholder="Type to search items..."
                autocomplete="off"
                prop:value=move || draft.with(|d| d.picker.query().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    draft.update(|d| d.set_query(query));
                }
            />
            {move || suggestions().map(|entries| view! {
                <div class="dropdown-menu show w-100">
                    {entries.into_iter().map(|(item, selectable)| {
                        let label = item.suggestion_label();
                        view! {
                            <a
                                href="#"
                                class=if selectable { "dropdown-item" } else { "dropdown-item text-muted disabled" }
                                aria-disabled=if selectable { "false" } else { "true" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    if selectable {
                                        on_pick.run(item.clone());
                                    }
                                }
                            >
                                {label}
                            </a>
                        }
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}
