//! Navbar Component
//!
//! Top bar linking the four pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container">
                <a
                    class="navbar-brand"
                    href=Route::Directory.hash()
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Directory);
                    }
                >
                    "Inventory Management"
                </a>
                <ul class="navbar-nav">
                    {Route::ALL.into_iter().map(|route| {
                        let is_active = move || ctx.route.get() == route;
                        view! {
                            <li class="nav-item">
                                <a
                                    class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                    href=route.hash()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(route);
                                    }
                                >
                                    {route.label()}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </nav>
    }
}
