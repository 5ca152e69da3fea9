use crate::dashboards::Dashboard;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastService, ToastStack};
use crate::system::auth::context::{use_session, SessionProvider};
use crate::system::pages::auth::AuthPage;
use leptos::prelude::*;

/// Signed-in users get the dashboard, everyone else the auth page.
#[component]
fn AppGate() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| view! { <AuthPage /> }
        >
            <Dashboard />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shown by both the auth page and the dashboard.
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <SessionProvider>
                <AppGate />
            </SessionProvider>
            <ToastStack />
        </ThemeProvider>
    }
}
