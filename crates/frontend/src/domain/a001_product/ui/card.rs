use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::shared::format::format_count;
use crate::shared::icons::icon;

const CARD_HIGHLIGHTS: usize = 4;
const CARD_INGREDIENTS: usize = 5;

/// Badge text of a card: popularity wins over the recommendation mark.
pub fn card_badge(product: &Product, recommended: bool) -> Option<&'static str> {
    if product.is_popular() {
        Some("Popular")
    } else if recommended {
        Some("Recommended")
    } else {
        None
    }
}

/// Catalog / recommendation card with a hover overlay. Click opens the details modal.
#[component]
pub fn ProductCard(
    product: Product,
    /// Marks cards of the personal recommendations panel
    #[prop(optional)]
    recommended: bool,
    on_open: Callback<String>,
) -> impl IntoView {
    let badge = card_badge(&product, recommended);
    let skin_type = product
        .skin_type
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|_| product.skin_type_label());
    let highlights = product.highlights.first(CARD_HIGHLIGHTS);
    let ingredients = product.key_ingredients(CARD_INGREDIENTS);
    let product_id = product.product_id.clone();

    view! {
        <article class="product-card" on:click=move |_| on_open.run(product_id.clone())>
            <div class="card-main">
                <div class="card-header">
                    <span class="card-brand">{product.brand_name.clone()}</span>
                    {badge.map(|b| view! { <span class="card-badge">{b}</span> })}
                </div>

                <h3 class="card-name">{product.product_name.clone()}</h3>

                <div class="card-stats">
                    <div class="stat">
                        <span class="stat-icon">{icon("star")}</span>
                        <span class="stat-value">{product.rating_label()}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-icon">{icon("heart")}</span>
                        <span class="stat-value">{format_count(product.loves())}</span>
                    </div>
                </div>

                <div class="card-footer">
                    <span class="card-price">{product.price_label()}</span>
                    {skin_type.map(|s| view! { <span class="card-skin-type">{s}</span> })}
                </div>
            </div>

            <div class="card-hover-overlay">
                <div class="hover-content">
                    <p class="hover-category">{product.category_label()}</p>

                    {(!highlights.is_empty()).then(|| view! {
                        <div class="hover-highlights">
                            {highlights.into_iter().map(|h| view! { <span class="highlight-tag">{h}</span> }).collect_view()}
                        </div>
                    })}

                    {(!ingredients.is_empty()).then(|| view! {
                        <p class="hover-ingredients">
                            <strong>"Key ingredients: "</strong>
                            {format!("{}...", ingredients.join(", "))}
                        </p>
                    })}

                    <button class="btn-view-details">{icon("eye")}" View details"</button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_priority() {
        let popular = Product {
            loves_count: Some(50_001),
            ..Default::default()
        };
        let plain = Product {
            loves_count: Some(50_000),
            ..Default::default()
        };
        assert_eq!(card_badge(&popular, true), Some("Popular"));
        assert_eq!(card_badge(&plain, true), Some("Recommended"));
        assert_eq!(card_badge(&plain, false), None);
    }
}
