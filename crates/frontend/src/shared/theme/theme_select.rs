use super::{use_theme, Mode, ACCENT_PRESETS};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Light/dark switch button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="btn-icon"
            title="Toggle dark mode"
            on:click=move |_| {
                if let Some(ctx) = ctx {
                    ctx.toggle_mode();
                }
            }
        >
            {move || match ctx.map(|c| c.mode.get()).unwrap_or_default() {
                Mode::Dark => icon("sun"),
                Mode::Light => icon("moon"),
            }}
        </button>
    }
}

/// Accent color dropdown. Closes on selection or on any click outside it.
#[component]
pub fn AccentSelector() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    // Clicks inside the selector stop propagation, so any click reaching the
    // window is outside.
    let handle = window_event_listener(ev::click, move |_| {
        if dropdown_open.get_untracked() {
            set_dropdown_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let select_accent = move |key: &'static str| {
        if let Some(ctx) = ctx {
            ctx.set_accent(key);
        }
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" class:open=move || dropdown_open.get() on:click=|ev| ev.stop_propagation()>
            <button
                class="theme-selector-trigger"
                title="Change accent color"
                on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
            >
                {icon("palette")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-selector-dropdown">
                    <div class="theme-dropdown-header">"Accent Color"</div>
                    <div class="theme-colors-grid">
                        {ACCENT_PRESETS.iter().map(|preset| {
                            let key = preset.key;
                            let is_active = move || ctx.map(|c| c.accent.get() == key).unwrap_or(false);
                            view! {
                                <button
                                    class=move || if is_active() { "theme-color-btn active" } else { "theme-color-btn" }
                                    title=preset.name
                                    style=format!("--btn-color: {}", preset.primary)
                                    on:click=move |_| select_accent(key)
                                >
                                    <span class="color-preview" style=format!("background: {}", preset.primary)></span>
                                    <span class="color-name">{preset.name}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
