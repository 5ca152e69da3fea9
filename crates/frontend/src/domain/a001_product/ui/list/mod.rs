//! Product catalog: filter sidebar, search, sort, grid and pagination.
//!
//! The components share one [`Catalog`] handle. It wraps the pure
//! [`CatalogController`] in a signal and performs the HTTP round trip of
//! each [`FetchTicket`].

pub mod state;

use contracts::domain::a001_product::aggregate::SkinType;
use leptos::html::{Input, Section};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{CatalogController, CatalogStatus, Completion, FetchTicket, FilterBindings, SortKey};
use super::card::ProductCard;
use crate::domain::a001_product::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Filter controls as signals, read untracked by the controller.
#[derive(Clone, Copy)]
pub struct FilterSignals {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub skin_type: RwSignal<String>,
    pub max_price: RwSignal<f64>,
    pub in_stock: RwSignal<bool>,
    pub sort: RwSignal<SortKey>,
}

impl FilterSignals {
    pub fn new(price_ceiling: f64) -> Self {
        Self {
            search: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            skin_type: RwSignal::new(String::new()),
            max_price: RwSignal::new(price_ceiling),
            in_stock: RwSignal::new(false),
            sort: RwSignal::new(SortKey::default()),
        }
    }
}

impl FilterBindings for FilterSignals {
    fn search_text(&self) -> String {
        self.search.get_untracked()
    }

    fn category(&self) -> String {
        self.category.get_untracked()
    }

    fn skin_type(&self) -> String {
        self.skin_type.get_untracked()
    }

    fn max_price(&self) -> f64 {
        self.max_price.get_untracked()
    }

    fn in_stock(&self) -> bool {
        self.in_stock.get_untracked()
    }

    fn sort_key(&self) -> SortKey {
        self.sort.get_untracked()
    }

    fn restore_defaults(&mut self, price_ceiling: f64) {
        self.search.set(String::new());
        self.category.set(String::new());
        self.skin_type.set(String::new());
        self.max_price.set(price_ceiling);
        self.in_stock.set(false);
        self.sort.set(SortKey::default());
    }
}

/// Shared catalog handle, created once per dashboard.
#[derive(Clone, Copy)]
pub struct Catalog {
    pub filters: FilterSignals,
    controller: RwSignal<CatalogController<FilterSignals>>,
}

impl Catalog {
    pub fn new() -> Self {
        let settings = &config().catalog;
        let filters = FilterSignals::new(settings.price_ceiling);
        Self {
            filters,
            controller: RwSignal::new(CatalogController::new(
                filters,
                settings.page_size,
                settings.price_ceiling,
            )),
        }
    }

    fn run(&self, ticket: Option<FetchTicket>) {
        let Some(FetchTicket { seq, query }) = ticket else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let outcome = api::fetch_products(&query).await;
            if let Some(Completion::Refetch(next)) = this.controller.try_update(|c| c.complete(seq, outcome)) {
                this.run(Some(next));
            }
        });
    }

    pub fn apply_filters(&self) {
        self.run(self.controller.try_update(|c| c.apply_filters()));
    }

    pub fn refresh(&self) {
        self.run(self.controller.try_update(|c| c.refresh()));
    }

    pub fn reset_filters(&self) {
        self.run(self.controller.try_update(|c| c.reset_filters()));
    }

    /// Returns `false` when the page is out of range and nothing was fetched.
    pub fn go_to_page(&self, page: usize) -> bool {
        let ticket = self.controller.try_update(|c| c.go_to_page(page)).flatten();
        let started = ticket.is_some();
        self.run(ticket);
        started
    }

    pub fn sort(&self, key: SortKey) {
        self.filters.sort.set(key);
        self.controller.update(|c| c.apply_selected_sort());
    }

    pub fn has_active_filters(&self) -> bool {
        self.controller.with(|c| !c.active_filters().is_empty())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Sidebar filters. Categories are fetched once; a failure leaves only
/// "All categories".
#[component]
pub fn CatalogFilters(catalog: Catalog) -> impl IntoView {
    let filters = catalog.filters;
    let categories = RwSignal::new(Vec::<String>::new());
    let ceiling = catalog.controller.with_untracked(|c| c.price_ceiling());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
    });

    view! {
        <div class="filters-panel">
            <div class="filters-header">
                <h3>{icon("filter")}" Filters"</h3>
                <Show when=move || catalog.has_active_filters()>
                    <span class="filters-active-dot"></span>
                </Show>
            </div>

            <div class="filter-group">
                <label for="categoryFilter">"Category"</label>
                <select
                    id="categoryFilter"
                    prop:value=move || filters.category.get()
                    on:change=move |ev| {
                        filters.category.set(event_target_value(&ev));
                        catalog.apply_filters();
                    }
                >
                    <option value="">"All categories"</option>
                    {move || categories.get().into_iter().map(|c| view! {
                        <option value=c.clone()>{c.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-group">
                <label for="skinTypeFilter">"Skin type"</label>
                <select
                    id="skinTypeFilter"
                    prop:value=move || filters.skin_type.get()
                    on:change=move |ev| {
                        filters.skin_type.set(event_target_value(&ev));
                        catalog.apply_filters();
                    }
                >
                    <option value="">"All skin types"</option>
                    {SkinType::CATALOG_FILTERS.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-group">
                <label for="priceFilter">
                    "Max price: "
                    <span class="price-value">{move || format!("${:.0}", filters.max_price.get())}</span>
                </label>
                <input
                    type="range"
                    id="priceFilter"
                    min="0"
                    max=ceiling.to_string()
                    step="5"
                    prop:value=move || filters.max_price.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            filters.max_price.set(value);
                        }
                    }
                    on:change=move |_| catalog.apply_filters()
                />
            </div>

            <div class="filter-group">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || filters.in_stock.get()
                        on:change=move |ev| {
                            filters.in_stock.set(event_target_checked(&ev));
                            catalog.apply_filters();
                        }
                    />
                    " In stock only"
                </label>
            </div>

            <button class="btn-secondary btn-block" on:click=move |_| catalog.reset_filters()>
                "Reset filters"
            </button>
        </div>
    }
}

/// Search bar, sort select, product grid and pagination.
#[component]
pub fn CatalogList(
    catalog: Catalog,
    on_open: Callback<String>,
    /// Focus target of the Ctrl/Cmd+K shortcut
    #[prop(optional)]
    search_ref: NodeRef<Input>,
) -> impl IntoView {
    let filters = catalog.filters;
    let controller = catalog.controller;
    let top_ref = NodeRef::<Section>::new();

    // Initial load
    catalog.apply_filters();

    let on_search = Callback::new(move |text: String| {
        filters.search.set(text);
        catalog.apply_filters();
    });

    let on_page_change = Callback::new(move |page: usize| {
        if catalog.go_to_page(page) {
            if let Some(el) = top_ref.get_untracked() {
                el.scroll_into_view_with_bool(true);
            }
        }
    });

    let page_controls = Signal::derive(move || controller.with(|c| c.page_controls()));

    view! {
        <section
            class="catalog"
            class:loading=move || controller.with(|c| c.is_loading())
            node_ref=top_ref
        >
            <div class="catalog-toolbar">
                <SearchInput
                    value=filters.search
                    on_change=on_search
                    node_ref=search_ref
                />
                <select
                    class="sort-select"
                    prop:value=move || filters.sort.get().as_value()
                    on:change=move |ev| catalog.sort(SortKey::from_value(&event_target_value(&ev)))
                >
                    {SortKey::ALL.iter().map(|key| view! {
                        <option value=key.as_value()>{key.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="results-info">
                {move || controller.with(|c| match c.status() {
                    CatalogStatus::Loaded | CatalogStatus::Empty => {
                        format!("{} products found", c.total_results())
                    }
                    _ => String::new(),
                })}
            </div>

            {move || controller.with(|c| match c.status() {
                CatalogStatus::Idle | CatalogStatus::Loading => view! {
                    <div class="placeholder loading">
                        <Spinner />
                        <p>"Loading products..."</p>
                    </div>
                }.into_any(),
                CatalogStatus::Empty => view! {
                    <div class="placeholder empty">
                        {icon("search")}
                        <p>"No products found. Try adjusting your filters."</p>
                    </div>
                }.into_any(),
                CatalogStatus::Failed(message) => {
                    let message = message.clone();
                    view! {
                        <div class="placeholder error">
                            {icon("alert")}
                            <p>{message}</p>
                            <button class="btn-secondary" on:click=move |_| catalog.refresh()>"Try again"</button>
                        </div>
                    }.into_any()
                }
                CatalogStatus::Loaded => {
                    let products = c.products().to_vec();
                    view! {
                        <div class="products-grid">
                            {products.into_iter().map(|product| view! {
                                <ProductCard product=product on_open=on_open />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            })}

            <PaginationControls controls=page_controls on_page_change=on_page_change />
        </section>
    }
}
