use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;

use super::profile_summary::ProfileSummary;
use super::user_menu::UserMenu;
use crate::domain::a001_product::ui::details::{ProductDetails, ProductDetailsViewModel};
use crate::domain::a001_product::ui::list::{Catalog, CatalogFilters, CatalogList};
use crate::domain::a002_recommendation::ui::personal::PersonalRecommendations;
use crate::shared::icons::icon;
use crate::shared::theme::theme_select::{AccentSelector, ThemeToggle};
use crate::shared::toast::use_toasts;
use crate::system::users::ui::details::ProfileEditor;

/// Main page of a signed-in user.
#[component]
pub fn Dashboard() -> impl IntoView {
    let toasts = use_toasts();
    let catalog = Catalog::new();
    let details = ProductDetailsViewModel::new();

    let (profile_open, set_profile_open) = signal(false);
    let (recommendations_reload, set_recommendations_reload) = signal(0u32);
    let search_ref = NodeRef::<Input>::new();

    // Ctrl/Cmd+K focuses the search box
    let handle = window_event_listener(ev::keydown, move |event| {
        if (event.ctrl_key() || event.meta_key()) && event.key().eq_ignore_ascii_case("k") {
            event.prevent_default();
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    });
    on_cleanup(move || handle.remove());

    let open_product = Callback::new(move |product_id: String| details.open(product_id, toasts));
    let open_profile = Callback::new(move |_| set_profile_open.set(true));

    view! {
        <div class="dashboard">
            <nav class="navbar">
                <div class="navbar-brand">
                    {icon("sparkles")}
                    <span class="brand-name">"GlowUp"</span>
                </div>
                <div class="navbar-actions">
                    <AccentSelector />
                    <ThemeToggle />
                    <UserMenu on_profile=open_profile />
                </div>
            </nav>

            <div class="dashboard-body">
                <aside class="sidebar">
                    <ProfileSummary on_edit=open_profile />
                    <CatalogFilters catalog=catalog />
                </aside>

                <main class="main-content">
                    <PersonalRecommendations reload=recommendations_reload on_open=open_product />
                    <CatalogList catalog=catalog on_open=open_product search_ref=search_ref />
                </main>
            </div>

            <Show when=move || profile_open.get()>
                <ProfileEditor
                    on_close=Callback::new(move |_| set_profile_open.set(false))
                    on_saved=Callback::new(move |_| set_recommendations_reload.update(|n| *n += 1))
                />
            </Show>

            <ProductDetails vm=details />
        </div>
    }
}
