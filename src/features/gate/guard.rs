use crate::app_lib::{config::AppConfig, theme::Theme};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::gate::form::{ChallengeForm, GateView, SubmitOutcome};
use crate::features::gate::state::use_password;
use crate::features::notify::state::use_toast;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Renders `children` only once the session is unlocked.
#[component]
pub fn PasswordGate(children: ChildrenFn) -> impl IntoView {
    let password = use_password();

    view! {
        {move || match GateView::resolve(password.phase()) {
            GateView::Loading => view! { <LoadingScreen /> }.into_any(),
            GateView::Challenge => view! { <PasswordChallenge /> }.into_any(),
            GateView::Protected => view! { {children()} }.into_any(),
        }}
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-white dark:bg-gray-900">
            <div class="text-center space-y-4">
                <Spinner />
                <p class="text-gray-500 dark:text-gray-400">"Loading..."</p>
            </div>
        </div>
    }
}

#[component]
fn PasswordChallenge() -> impl IntoView {
    let password = use_password();
    let toasts = use_toast();
    let app_name = AppConfig::load().app_name;
    let form = RwSignal::new(ChallengeForm::default());
    let disabled = Signal::derive(move || !form.with(ChallengeForm::can_submit));

    let welcome_name = app_name.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let mut outcome = SubmitOutcome::Ignored;
        form.update(|form| {
            outcome = form.submit(|candidate| password.authenticate(candidate));
        });
        if let Some(message) = outcome.toast(&welcome_name) {
            toasts.push(message);
        }
    };

    view! {
        <div class=Theme::GATE_BACKDROP>
            <div class=Theme::GATE_CARD>
                <div class="text-center pb-4">
                    <div class="mx-auto mb-4 p-3 rounded-full bg-blue-50 dark:bg-blue-900/20 w-fit">
                        <span class="material-symbols-outlined text-4xl text-blue-600 dark:text-blue-400">
                            "lock"
                        </span>
                    </div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        {format!("{app_name} Access")}
                    </h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Enter the password to access the application"
                    </p>
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <div class="relative">
                        <input
                            id="access-password"
                            type=move || form.with(ChallengeForm::input_type)
                            class=Theme::INPUT
                            placeholder="Enter password"
                            autocomplete="current-password"
                            required
                            prop:value=move || form.with(|form| form.input().to_string())
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                form.update(|form| form.set_input(value));
                            }
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2"
                            aria-label=move || {
                                if form.with(ChallengeForm::is_revealed) {
                                    "Hide password"
                                } else {
                                    "Show password"
                                }
                            }
                            on:click=move |_| form.update(ChallengeForm::toggle_reveal)
                        >
                            <span class=Theme::ICON_SMALL>
                                {move || {
                                    if form.with(ChallengeForm::is_revealed) {
                                        "visibility_off"
                                    } else {
                                        "visibility"
                                    }
                                }}
                            </span>
                        </button>
                    </div>
                    <Button button_type="submit" disabled=disabled>
                        {move || form.with(ChallengeForm::submit_label)}
                    </Button>
                </form>
                <div class="mt-6">
                    <Alert
                        kind=AlertKind::Info
                        message="This application is password protected. Please contact your administrator for access credentials."
                            .to_string()
                    />
                </div>
            </div>
        </div>
    }
}
