//! Shared layout wrapper with the header and content container. The lock
//! button only drops the client-side marker; there is no server session.

use crate::app_lib::config::AppConfig;
use crate::features::gate::state::use_password;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let password = use_password();
    let app_name = AppConfig::load().app_name;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <span class="material-symbols-outlined text-blue-600">"folder_open"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            {app_name}
                        </span>
                    </A>
                    <nav class="flex items-center gap-6 text-sm font-medium">
                        <A
                            href="/health"
                            {..}
                            class="text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                        >
                            "Build"
                        </A>
                        <button
                            type="button"
                            class="inline-flex items-center gap-1 text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                            on:click=move |_| password.logout()
                        >
                            <span class="material-symbols-outlined text-base">"lock"</span>
                            "Lock"
                        </button>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
