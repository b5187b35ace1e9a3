//! Landing page behind the gate. Document storage screens mount here; they
//! talk to Drive and Sheets on their own and only rely on the gate having
//! rendered them.

use crate::app_lib::config::AppConfig;
use crate::components::AppShell;
use leptos::prelude::*;

/// Renders the landing page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_name = AppConfig::load().app_name;

    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{app_name}</h1>
            <p class="mt-2 text-gray-500 dark:text-gray-400">
                "Store and browse your documents."
            </p>
        </AppShell>
    }
}
