//! Shared layout wrapper with the brand header and content container. The
//! navigation reacts to the auth flag so routes can focus on content.
//! Signing out here only clears local state; protected routes redirect on
//! their own once the flag flips.

use crate::app_lib::build_info;
use crate::components::{Alert, AlertKind};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = match use_auth() {
        Ok(auth) => auth,
        Err(err) => {
            return view! {
                <div class="p-6">
                    <Alert kind=AlertKind::Error message=err.to_string() />
                </div>
            }
            .into_any();
        }
    };
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-lg mx-auto flex items-center justify-between p-4">
                    <A href="/" {..} class="text-lg font-semibold tracking-tight text-slate-900">
                        "Anteroom"
                    </A>
                    <nav class="flex items-center gap-5 text-sm font-medium">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href="/login"
                                        {..}
                                        class="text-slate-600 hover:text-slate-900"
                                    >
                                        "Sign In"
                                    </A>
                                    <A
                                        href="/register"
                                        {..}
                                        class="text-slate-600 hover:text-slate-900"
                                    >
                                        "Sign Up"
                                    </A>
                                }
                            }
                        >
                            <button
                                type="button"
                                class="text-slate-600 hover:text-slate-900"
                                on:click=move |_| auth.logout()
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-screen-lg mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-slate-400">
                {format!(
                    "anteroom-web {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash(),
                )}
            </footer>
        </div>
    }
    .into_any()
}
