//! Backend Status Badge
//!
//! Header badge showing whether the recommender API answered its health check.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBadge() -> impl IntoView {
    let store = use_app_store();

    // Checked once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let online = match api::health().await {
                Ok(status) => {
                    log::info!("[StatusBadge] Backend says: {} ({})", status.status, status.message);
                    status.is_healthy()
                }
                Err(e) => {
                    log::warn!("[StatusBadge] Health check failed: {}", e);
                    false
                }
            };
            *store.backend_online().write() = Some(online);
        });
    });

    let badge = move || match store.backend_online().get() {
        Some(true) => ("status-badge online", "API online"),
        Some(false) => ("status-badge offline", "API offline"),
        None => ("status-badge pending", "Checking API..."),
    };

    view! {
        <span class=move || badge().0>{move || badge().1}</span>
    }
}
