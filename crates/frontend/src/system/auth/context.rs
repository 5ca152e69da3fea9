use contracts::system::users::{SessionUser, UpdateProfileDto};
use leptos::prelude::*;

use super::storage;

/// The signed-in user, shared through context.
///
/// `None` shows the auth page; `Some` shows the dashboard.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    /// Restores the session kept in localStorage, if any.
    pub fn restore() -> Self {
        let user = storage::load_user();
        if let Some(u) = &user {
            log::debug!("Restored session for user {}", u.id);
        }
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn sign_in(&self, user: SessionUser) {
        storage::save_user(&user);
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        storage::clear_user();
        self.user.set(None);
    }

    /// Merges saved profile fields into the session and persists it.
    pub fn update_profile(&self, profile: &UpdateProfileDto) {
        self.user.update(|user| {
            if let Some(user) = user {
                user.apply_profile(profile);
                storage::save_user(user);
            }
        });
    }
}

/// Auth context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::error!("SessionProvider not found in component tree");
        SessionContext {
            user: RwSignal::new(None),
        }
    })
}
