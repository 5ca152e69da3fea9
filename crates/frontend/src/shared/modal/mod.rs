use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Closes on the × button, a click on the overlay, or Escape.
///
/// Mount it only while open (inside `<Show>`): the Escape listener lives as
/// long as the component.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(optional, into)]
    title: String,
    /// Extra class for the dialog box
    #[prop(optional, into)]
    class: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Handle Escape key
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let has_title = !title.is_empty();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {}", class) on:click=stop_propagation>
                <div class="modal-header">
                    {has_title.then(|| view! { <h2 class="modal-title">{title}</h2> })}
                    <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
