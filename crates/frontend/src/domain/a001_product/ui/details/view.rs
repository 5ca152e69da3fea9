use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{ProductDetailsViewModel, DETAIL_HIGHLIGHTS};
use crate::domain::a002_recommendation::ui::state::RecommendationsState;
use crate::shared::format::format_count;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Details modal of the product currently held by the view model.
#[component]
pub fn ProductDetails(vm: ProductDetailsViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.is_open()>
            <Modal class="product-modal" on_close=Callback::new(move |_| vm.close())>
                {move || vm.product.get().map(|product| view! { <ProductSummary product=product /> })}
                <RecommendationsPanel vm=vm />
            </Modal>
        </Show>
    }
}

#[component]
fn ProductSummary(product: Product) -> impl IntoView {
    let highlights = product.highlights.first(DETAIL_HIGHLIGHTS);
    let category = product
        .primary_category
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="product-detail">
            <div class="detail-header">
                <span class="detail-brand">{product.brand_name.clone()}</span>
                {product.is_popular().then(|| view! { <span class="card-badge">"Popular"</span> })}
            </div>
            <h2 class="detail-name">{product.product_name.clone()}</h2>

            <div class="detail-stats">
                <div class="stat">
                    {icon("star")}
                    <span class="stat-value">{product.rating_label()}</span>
                    <span class="stat-label">{format!("({} reviews)", product.reviews.unwrap_or(0))}</span>
                </div>
                <div class="stat">
                    {icon("heart")}
                    <span class="stat-value">{format_count(product.loves())}</span>
                    <span class="stat-label">"loves"</span>
                </div>
                <div class="stat">
                    <span class="detail-price">{product.price_label()}</span>
                </div>
            </div>

            <dl class="detail-info">
                <dt>"Category"</dt>
                <dd>{category}</dd>
                <dt>"Skin type"</dt>
                <dd>{product.skin_type_label()}</dd>
            </dl>

            <div class="detail-highlights">
                <h4>"Highlights"</h4>
                {if highlights.is_empty() {
                    view! { <p class="muted">"None specified"</p> }.into_any()
                } else {
                    view! {
                        <div class="highlight-tags">
                            {highlights.into_iter().map(|h| view! { <span class="highlight-tag">{h}</span> }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn RecommendationsPanel(vm: ProductDetailsViewModel) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let on_generate = move |_| {
        let user_id = session.user.with_untracked(|u| u.as_ref().map(|u| u.id));
        vm.generate(user_id);
    };

    let open_item = move |product_id: String| vm.open(product_id, toasts);

    view! {
        <section class="detail-recommendations">
            <div class="recommendations-header">
                <h3>{icon("sparkles")}" Similar products"</h3>
                <div class="recommendation-filters">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.filter_skin_type.get()
                            on:change=move |ev| vm.filter_skin_type.set(event_target_checked(&ev))
                        />
                        " Match my skin type"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.filter_allergies.get()
                            on:change=move |ev| vm.filter_allergies.set(event_target_checked(&ev))
                        />
                        " Exclude my allergens"
                    </label>
                </div>
                <button
                    class="btn-primary"
                    disabled=move || vm.recommendations.with(RecommendationsState::is_loading)
                    on:click=on_generate
                >
                    "Generate recommendations"
                </button>
            </div>

            <div class="recommendations-body">
                {move || match vm.recommendations.get() {
                    RecommendationsState::Hint => view! {
                        <p class="placeholder">"Generate recommendations to see similar products."</p>
                    }.into_any(),
                    RecommendationsState::Loading => view! {
                        <div class="placeholder"><Spinner /></div>
                    }.into_any(),
                    RecommendationsState::Empty => view! {
                        <p class="placeholder">"No recommendations found with these filters."</p>
                    }.into_any(),
                    RecommendationsState::Failed(message) => view! {
                        <p class="placeholder error">{icon("alert")}" "{message}</p>
                    }.into_any(),
                    RecommendationsState::Items(items) => view! {
                        <ul class="recommendation-list">
                            {items.into_iter().map(|p| {
                                let id = p.product_id.clone();
                                view! {
                                    <li class="recommendation-item" on:click=move |_| open_item(id.clone())>
                                        <div class="rec-info">
                                            <span class="rec-brand">{p.brand_name.clone()}</span>
                                            <span class="rec-name">{p.product_name.clone()}</span>
                                        </div>
                                        <div class="rec-meta">
                                            <span>{icon("star")}" "{p.rating_label()}</span>
                                            <span class="rec-price">{p.price_label()}</span>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
