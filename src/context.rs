//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::routes::Route;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Build-time configuration
    config: StoredValue<AppConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(config: AppConfig, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
        }
    }

    /// Fresh client for the configured backend
    pub fn api(&self) -> ApiClient {
        self.config.with_value(|c| ApiClient::new(c.api_base_url.clone()))
    }

    pub fn redirect_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.redirect_delay_ms)
    }

    /// Switch page and mirror it into the address bar
    pub fn navigate(&self, route: Route) {
        if self.route.try_get_untracked() == Some(route) {
            return;
        }
        self.set_route.try_set(route);
        if let Err(e) = window().location().set_hash(route.hash()) {
            log::warn!(target: "APP", "Could not update location hash: {e:?}");
        }
    }

    /// Follow a hash change made by the browser (back button, typed URL)
    pub fn sync_from_hash(&self, hash: &str) {
        let route = Route::from_hash(hash);
        if self.route.try_get_untracked() != Some(route) {
            self.set_route.try_set(route);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
