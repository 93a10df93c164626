//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center text-center">
                <h1 class="text-7xl font-black text-slate-200 select-none">"404"</h1>
                <p class="mt-2 text-lg font-semibold text-slate-900">"Page not found"</p>
                <A
                    href="/"
                    {..}
                    class="mt-6 rounded-xl bg-slate-900 px-5 py-2.5 text-sm font-semibold text-white hover:bg-slate-700"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
