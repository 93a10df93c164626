//! Login route. Validates locally, exchanges credentials for a session
//! token, then re-derives the auth flag from storage rather than trusting
//! the response flag — a successful response without a token leaves the
//! user signed out.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::{AuthContext, use_auth};
use crate::features::auth::types::LoginRequest;
use crate::features::auth::{client, validate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

/// Renders the login page, surfacing a configuration error when mounted
/// outside the auth provider.
#[component]
pub fn LoginPage() -> impl IntoView {
    match use_auth() {
        Ok(auth) => view! {
            <AppShell>
                <LoginForm auth=auth />
            </AppShell>
        }
        .into_any(),
        Err(err) => view! {
            <div class="p-6">
                <Alert kind=AlertKind::Error message=err.to_string() />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn LoginForm(auth: AuthContext) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (password_error, set_password_error) = signal::<Option<String>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = LoginRequest {
                email: input.email,
                password: input.password,
            };
            client::login(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    // The flag mirrors storage, not the response flag.
                    auth.set_authenticated(client::is_authenticated());
                    if response.success {
                        navigate("/", Default::default());
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

        let email_check = validate::email_error(&email_value);
        let password_check = validate::password_error(&password_value);

        let blocked = email_check.is_some() || password_check.is_some();
        set_email_error.set(email_check);
        set_password_error.set(password_check);
        if blocked {
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-slate-900">"Sign in"</h1>
            <div class="mb-5">
                <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                    "Your email"
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
                    "Your password"
                </label>
                <input
                    id="password"
                    type="password"
                    class="w-full rounded-xl border border-slate-200 bg-white px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                    autocomplete="current-password"
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
            <Button button_type="submit" disabled=login_action.pending()>
                "Sign in"
            </Button>
            {move || {
                login_action
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
                "No account yet? "
                <A href="/register" {..} class="font-semibold text-slate-700 hover:text-slate-900">
                    "Create one"
                </A>
            </p>
        </form>
    }
}
