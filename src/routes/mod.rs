mod dashboard;
mod login;
mod not_found;
mod register;
mod verify_otp;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use verify_otp::VerifyOtpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-otp") view=VerifyOtpPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
