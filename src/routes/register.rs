//! Registration route. Validates the form locally, creates the account,
//! and forwards the email address to the OTP verification page so the next
//! form starts pre-filled. Nothing is persisted locally on success — the
//! account is unusable until the emailed code is verified.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::types::RegisterRequest;
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct RegisterInput {
    email: String,
    password: String,
}

/// Renders the registration form and drives the register call.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                email: input.email.clone(),
                password: input.password,
            };
            client::register(&request)
                .await
                .map(|response| (input.email, response))
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok((email_value, response)) => {
                    if response.success {
                        navigate(&verify_otp_path(&email_value), Default::default());
                    } else {
                        set_form_error.set(Some(response.message));
                    }
                }
                Err(err) => set_form_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let email_check = validate::email_error(&email_value);
        let password_check = validate::new_password_error(&password_value);
        let confirm_check = validate::confirm_password_error(&password_value, &confirm_value);

        let blocked =
            email_check.is_some() || password_check.is_some() || confirm_check.is_some();
        set_email_error.set(email_check);
        set_password_error.set(password_check);
        set_confirm_error.set(confirm_check);
        if blocked {
            return;
        }

        register_action.dispatch(RegisterInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold text-slate-900">"Create account"</h1>
                <p class="mb-6 text-sm text-slate-500">
                    "We will email you a 6-digit code to verify your address."
                </p>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        autocomplete="email"
                        inputmode="email"
                        placeholder="name@inbox.im"
                        on:input=move |event| {
                            set_email.set(event_target_value(&event));
                            set_email_error.set(None);
                        }
                    />
                    {move || {
                        email_error
                            .get()
                            .map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        autocomplete="new-password"
                        on:input=move |event| {
                            set_password.set(event_target_value(&event));
                            set_password_error.set(None);
                        }
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-slate-700"
                        for="confirm_password"
                    >
                        "Confirm password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class="w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        autocomplete="new-password"
                        on:input=move |event| {
                            set_confirm_password.set(event_target_value(&event));
                            set_confirm_error.set(None);
                        }
                    />
                    {move || {
                        confirm_error
                            .get()
                            .map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    form_error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

/// Builds the verification path with the email carried as a query
/// parameter.
#[cfg(target_arch = "wasm32")]
fn verify_otp_path(email: &str) -> String {
    match web_sys::UrlSearchParams::new() {
        Ok(params) => {
            params.append("email", email);
            format!("/verify-otp?{}", String::from(params.to_string()))
        }
        Err(_) => "/verify-otp".to_string(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn verify_otp_path(_email: &str) -> String {
    "/verify-otp".to_string()
}
