//! OTP verification route. The email arrives pre-filled via the `email`
//! query parameter when the user comes from registration; the code field
//! drops non-digits and caps at six characters as the user types. On
//! success the user is sent to the login page — verification grants no
//! session by itself.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::types::VerifyOtpRequest;
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct VerifyInput {
    email: String,
    code: String,
}

/// Renders the verification form and drives the verify call.
#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let (email, set_email) = signal(initial_email());
    let (code, set_code) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (code_error, set_code_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();
    // Arriving with a pre-filled address means the account was just created.
    let from_registration = !email.get_untracked().is_empty();

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            let request = VerifyOtpRequest {
                email: input.email,
                otp_code: input.code,
            };
            client::verify_otp(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(response) => {
                    if response.success {
                        navigate("/login", Default::default());
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
        let code_value = code.get_untracked();

        let email_check = validate::email_error(&email_value);
        let code_check = validate::otp_error(&code_value);

        let blocked = email_check.is_some() || code_check.is_some();
        set_email_error.set(email_check);
        set_code_error.set(code_check);
        if blocked {
            return;
        }

        verify_action.dispatch(VerifyInput {
            email: email_value,
            code: code_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-2 text-2xl font-semibold text-slate-900">"Verify your email"</h1>
                <p class="mb-6 text-sm text-slate-500">
                    "Enter the 6-digit code we sent to your inbox."
                </p>
                {from_registration
                    .then_some(view! {
                        <div class="mb-5">
                            <Alert
                                kind=AlertKind::Success
                                message="Account created. Check your inbox.".to_string()
                            />
                        </div>
                    })}
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
                        prop:value=move || email.get()
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
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="otp_code">
                        "Verification code"
                    </label>
                    <input
                        id="otp_code"
                        type="text"
                        class="w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-center font-mono text-2xl tracking-widest text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="000000"
                        prop:value=move || code.get()
                        on:input=move |event| {
                            set_code.set(validate::sanitize_otp(&event_target_value(&event)));
                            set_code_error.set(None);
                        }
                    />
                    {move || {
                        code_error
                            .get()
                            .map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <Button button_type="submit" disabled=verify_action.pending()>
                    "Verify email"
                </Button>
                {move || {
                    verify_action
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
                <p class="mt-6 text-center text-sm text-slate-500">
                    "Need to change email? "
                    <A href="/register" {..} class="font-semibold text-slate-700 hover:text-slate-900">
                        "Go back"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}

/// Email forwarded from the registration page, if any.
#[cfg(target_arch = "wasm32")]
fn initial_email() -> String {
    email_from_query().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_email() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn email_from_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("email")
}
