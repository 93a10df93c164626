use crate::components::{Alert, AlertKind};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Redirects unauthenticated visitors to the login page. UX-only guard;
/// real access control must live on the API.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let auth = match use_auth() {
        Ok(auth) => auth,
        Err(err) => {
            return view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any();
        }
    };
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            navigate("/login", Default::default());
        }
    });

    view! { {children()} }.into_any()
}
