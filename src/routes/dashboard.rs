//! Protected landing page. Visible only with a persisted session; the
//! guard bounces everyone else to the login page.

use crate::components::{Alert, AlertKind, AppShell};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders the dashboard behind the auth guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DashboardContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = match use_auth() {
        Ok(auth) => auth,
        Err(err) => {
            return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any();
        }
    };
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        auth.logout();
        navigate("/login", Default::default());
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <div class="rounded-2xl border border-slate-200 bg-white p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-semibold text-slate-900">"Welcome back"</h1>
                        <p class="mt-1 text-sm text-slate-500">"You are signed in."</p>
                    </div>
                    <button
                        type="button"
                        class="rounded-xl border border-slate-200 px-4 py-2 text-sm font-semibold text-slate-700 hover:bg-slate-100"
                        on:click=on_sign_out
                    >
                        "Sign out"
                    </button>
                </div>
            </div>
            <div class="mt-6 rounded-2xl border border-slate-200 bg-white p-6">
                <h2 class="text-sm font-semibold text-slate-900">"Account status"</h2>
                <dl class="mt-4 space-y-2 text-sm">
                    <div class="flex justify-between">
                        <dt class="text-slate-500">"Status"</dt>
                        <dd class="font-semibold text-emerald-600">"Active"</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-slate-500">"Email verified"</dt>
                        <dd class="font-semibold text-emerald-600">"Yes"</dd>
                    </div>
                </dl>
            </div>
        </div>
    }
    .into_any()
}
