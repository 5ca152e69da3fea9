use leptos::ev;
use leptos::prelude::*;

use crate::shared::format::initials;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Avatar button with a dropdown: name, email, profile, logout.
#[component]
pub fn UserMenu(on_profile: Callback<()>) -> impl IntoView {
    let session = use_session();
    let (open, set_open) = signal(false);

    let handle = window_event_listener(ev::click, move |_| {
        if open.get_untracked() {
            set_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let name = move || session.user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || session.user.with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="user-menu" on:click=|ev| ev.stop_propagation()>
            <button class="user-avatar" title=name on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || initials(&name())}
            </button>
            <Show when=move || open.get()>
                <div class="user-dropdown">
                    <div class="user-dropdown-header">
                        <strong>{name}</strong>
                        <span class="muted">{email}</span>
                    </div>
                    <button
                        class="dropdown-item"
                        on:click=move |_| {
                            set_open.set(false);
                            on_profile.run(());
                        }
                    >
                        {icon("user")}" My profile"
                    </button>
                    <button
                        class="dropdown-item danger"
                        on:click=move |_| {
                            log::info!("Signing out");
                            session.sign_out();
                        }
                    >
                        {icon("logout")}" Log out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
