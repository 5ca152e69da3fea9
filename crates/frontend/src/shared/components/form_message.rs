use crate::shared::config::config;
use crate::shared::request_seq::RequestSequence;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct FormMessageState {
    pub success: bool,
    pub text: String,
}

/// Inline form message that hides itself after `message_timeout_ms`.
///
/// A newer message restarts the timer; the older timer then does nothing.
#[derive(Clone, Copy)]
pub struct FormMessage {
    state: RwSignal<Option<FormMessageState>>,
    shown: StoredValue<RequestSequence>,
}

impl FormMessage {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(None),
            shown: StoredValue::new(RequestSequence::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(true, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(false, text.into());
    }

    pub fn hide(&self) {
        self.shown.update_value(|s| {
            s.issue();
        });
        self.state.set(None);
    }

    fn show(&self, success: bool, text: String) {
        let mut seq = 0;
        self.shown.update_value(|s| seq = s.issue());
        self.state.set(Some(FormMessageState { success, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(config().ui.message_timeout_ms).await;
            if this.shown.try_with_value(|s| s.is_current(seq)).unwrap_or(false) {
                let _ = this.state.try_set(None);
            }
        });
    }
}

impl Default for FormMessage {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FormMessageView(message: FormMessage) -> impl IntoView {
    view! {
        {move || message.state.get().map(|m| view! {
            <div class=if m.success { "form-message success" } else { "form-message error" } role="alert">
                {m.text}
            </div>
        })}
    }
}
