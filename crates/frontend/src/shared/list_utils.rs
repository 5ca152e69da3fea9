/// List helpers shared by the catalog: debounced search input.
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::request_seq::RequestSequence;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Search box with debounce and a clear button.
///
/// `on_change` fires once typing pauses for `search_debounce_ms`; a keystroke
/// invalidates the pending timer through a generation counter. Clearing fires
/// immediately.
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the settled text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Lets the page focus the box from a keyboard shortcut
    #[prop(optional)]
    node_ref: NodeRef<Input>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search products, brands...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let generation = StoredValue::new(RequestSequence::new());

    // External resets (e.g. "reset filters") must show up in the box.
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            generation.update_value(|g| {
                g.issue();
            });
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let mut seq = 0;
        generation.update_value(|g| seq = g.issue());

        let delay = config().catalog.search_debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.with_value(|g| g.is_current(seq)) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| {
            g.issue();
        });
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-box">
            <span class="search-icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input"
                node_ref=node_ref
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        if let Some(input) = node_ref.get() {
                            let _ = input.blur();
                        }
                    }
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-clear" title="Clear" on:click=clear_filter>
                    {icon("x")}
                </button>
            </Show>
            <kbd class="search-shortcut">"⌘K"</kbd>
        </div>
    }
}
