use crate::components::Toaster;
use crate::features::gate::{PasswordGate, state::PasswordProvider};
use crate::features::notify::state::ToastProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <PasswordProvider>
                <PasswordGate>
                    <Router>
                        <AppRoutes />
                    </Router>
                </PasswordGate>
                <Toaster />
            </PasswordProvider>
        </ToastProvider>
    }
}
