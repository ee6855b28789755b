//! Inventory App
//!
//! Navbar plus the page for the current route.

use leptos::prelude::*;

use crate::components::{AddItemForm, BuyForm, ItemDirectory, Navbar, SellForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial = Route::from_hash(&window().location().hash().unwrap_or_default());
    let (route, set_route) = signal(initial);

    let ctx = AppContext::new(config, (route, set_route));
    provide_context(ctx);

    // Back/forward and hand-typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        ctx.sync_from_hash(&hash);
    });

    view! {
        <div class="App">
            <Navbar />
            <div class="container mt-4">
                {move || {
                    let current = route.get();
                    log::debug!(target: "APP", "Showing {:?}", current);
                    match current {
                        Route::Directory => view! { <ItemDirectory /> }.into_any(),
                        Route::AddItem => view! { <AddItemForm /> }.into_any(),
                        Route::Buy => view! { <BuyForm /> }.into_any(),
                        Route::Sell => view! { <SellForm /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}
