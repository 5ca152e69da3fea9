//! Catalog view state: filters, page, cached results.
//!
//! [`CatalogController`] holds no DOM handles and performs no I/O. A fetch is
//! split in two: `fetch_page` and friends return a [`FetchTicket`] with the
//! request sequence number and query, and the caller hands the outcome back to
//! [`CatalogController::complete`]. Outcomes of superseded tickets are dropped.

use crate::shared::components::pagination_controls::{build_page_controls, total_pages, PageControl};
use crate::shared::error::ApiError;
use crate::shared::request_seq::RequestSequence;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::dto::{FilterSet, ProductListQuery, ProductListResponse};

/// Local ordering of the cached page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Popularity,
    Rating,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::Rating,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_value(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Unknown values select the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Popularity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Most popular",
            SortKey::Rating => "Highest rated",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
        }
    }
}

/// Read/write access to the filter controls.
///
/// Implemented over Leptos signals by the catalog page and by
/// [`FilterControls`] for tests.
pub trait FilterBindings {
    fn search_text(&self) -> String;
    fn category(&self) -> String;
    fn skin_type(&self) -> String;
    fn max_price(&self) -> f64;
    fn in_stock(&self) -> bool;
    fn sort_key(&self) -> SortKey;

    /// Empty search and selects, slider at `price_ceiling`, in-stock off,
    /// default sort.
    fn restore_defaults(&mut self, price_ceiling: f64);
}

/// Plain-value filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    pub search: String,
    pub category: String,
    pub skin_type: String,
    pub max_price: f64,
    pub in_stock: bool,
    pub sort: SortKey,
}

impl FilterControls {
    pub fn with_ceiling(price_ceiling: f64) -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            skin_type: String::new(),
            max_price: price_ceiling,
            in_stock: false,
            sort: SortKey::default(),
        }
    }
}

impl FilterBindings for FilterControls {
    fn search_text(&self) -> String {
        self.search.clone()
    }

    fn category(&self) -> String {
        self.category.clone()
    }

    fn skin_type(&self) -> String {
        self.skin_type.clone()
    }

    fn max_price(&self) -> f64 {
        self.max_price
    }

    fn in_stock(&self) -> bool {
        self.in_stock
    }

    fn sort_key(&self) -> SortKey {
        self.sort
    }

    fn restore_defaults(&mut self, price_ceiling: f64) {
        *self = Self::with_ceiling(price_ceiling);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
    /// User-facing message of the failed fetch.
    Failed(String),
}

/// A started fetch: send `query`, then pass the outcome with `seq` to
/// [`CatalogController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ProductListQuery,
}

/// What [`CatalogController::complete`] did with an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A newer ticket was issued since; nothing changed.
    Stale,
    Applied,
    /// The requested page no longer exists; send this ticket instead.
    Refetch(FetchTicket),
}

impl Completion {
    pub fn is_applied(&self) -> bool {
        matches!(self, Completion::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct CatalogController<B: FilterBindings> {
    bindings: B,
    page_size: usize,
    price_ceiling: f64,
    current_page: usize,
    active_filters: FilterSet,
    total_results: usize,
    cache: Vec<Product>,
    status: CatalogStatus,
    requests: RequestSequence,
}

impl<B: FilterBindings> CatalogController<B> {
    pub fn new(bindings: B, page_size: usize, price_ceiling: f64) -> Self {
        Self {
            bindings,
            page_size: page_size.max(1),
            price_ceiling,
            current_page: 1,
            active_filters: FilterSet::default(),
            total_results: 0,
            cache: Vec::new(),
            status: CatalogStatus::Idle,
            requests: RequestSequence::new(),
        }
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut B {
        &mut self.bindings
    }

    /// Reads the controls into the minimal filter set: a control left at its
    /// no-op default contributes no key.
    pub fn build_filters(&self) -> FilterSet {
        let search = self.bindings.search_text().trim().to_string();
        let category = self.bindings.category().trim().to_string();
        let skin_type = self.bindings.skin_type().trim().to_string();
        let max_price = self.bindings.max_price();

        FilterSet {
            search: (!search.is_empty()).then_some(search),
            category: (!category.is_empty()).then_some(category),
            skin_type: (!skin_type.is_empty()).then_some(skin_type),
            max_price: ((max_price - self.price_ceiling).abs() > f64::EPSILON).then_some(max_price),
            in_stock: self.bindings.in_stock().then_some(true),
        }
    }

    /// Starts a fetch of the current page with `filters`, which become the
    /// active set. Any earlier ticket is superseded.
    pub fn fetch_page(&mut self, filters: FilterSet) -> FetchTicket {
        let offset = (self.current_page - 1) * self.page_size;
        let query = ProductListQuery::new(self.page_size, offset, &filters);
        self.active_filters = filters;
        self.status = CatalogStatus::Loading;
        let seq = self.requests.issue();
        log::debug!("catalog fetch #{} page {} ({} filters)", seq, self.current_page, self.active_filters.active_count());
        FetchTicket { seq, query }
    }

    /// A filter or the search text changed: back to page 1 with fresh filters.
    pub fn apply_filters(&mut self) -> FetchTicket {
        self.current_page = 1;
        let filters = self.build_filters();
        self.fetch_page(filters)
    }

    /// Re-fetches the current page with the active filters.
    pub fn refresh(&mut self) -> FetchTicket {
        let filters = self.active_filters.clone();
        self.fetch_page(filters)
    }

    /// Pages outside `1..=total_pages` are ignored.
    pub fn go_to_page(&mut self, page: usize) -> Option<FetchTicket> {
        if page < 1 || page > self.total_pages() {
            log::debug!("catalog: page {} out of range", page);
            return None;
        }
        self.current_page = page;
        Some(self.refresh())
    }

    /// Restores every control to its default and fetches page 1 unfiltered.
    pub fn reset_filters(&mut self) -> FetchTicket {
        self.bindings.restore_defaults(self.price_ceiling);
        self.current_page = 1;
        self.fetch_page(FilterSet::default())
    }

    /// Applies the outcome of ticket `seq`.
    ///
    /// When the total shrank below the requested page, nothing is rendered
    /// from that response: the page moves to the new last page and its fetch
    /// is returned as [`Completion::Refetch`].
    pub fn complete(&mut self, seq: u64, outcome: Result<ProductListResponse, ApiError>) -> Completion {
        if !self.requests.is_current(seq) {
            log::debug!("catalog: dropping stale response #{} (latest #{})", seq, self.requests.last());
            return Completion::Stale;
        }

        match outcome {
            Ok(response) => {
                let pages = total_pages(response.total, self.page_size);
                if pages > 0 && self.current_page > pages {
                    log::debug!(
                        "catalog #{}: page {} gone ({} pages left), refetching",
                        seq,
                        self.current_page,
                        pages
                    );
                    self.total_results = response.total;
                    self.current_page = pages;
                    return Completion::Refetch(self.refresh());
                }

                self.cache = response.products;
                self.total_results = response.total;
                self.status = if self.cache.is_empty() {
                    CatalogStatus::Empty
                } else {
                    CatalogStatus::Loaded
                };
                log::debug!("catalog #{}: {} of {} products", seq, self.cache.len(), self.total_results);
            }
            Err(e) => {
                log::error!("catalog fetch #{} failed: {}", seq, e);
                self.status = CatalogStatus::Failed(e.user_message());
            }
        }
        Completion::Applied
    }

    /// Re-applies the sort selected in the bindings.
    pub fn apply_selected_sort(&mut self) {
        let key = self.bindings.sort_key();
        self.apply_client_sort(key);
    }

    /// Reorders the cached page in place. No request is made.
    pub fn apply_client_sort(&mut self, key: SortKey) {
        match key {
            SortKey::Popularity => self.cache.sort_by(|a, b| b.loves().cmp(&a.loves())),
            SortKey::Rating => self
                .cache
                .sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero())),
            SortKey::PriceAsc => self
                .cache
                .sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero())),
            SortKey::PriceDesc => self
                .cache
                .sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero())),
        }
    }

    /// Controls for the pagination bar; only settled lists get one.
    pub fn page_controls(&self) -> Vec<PageControl> {
        match self.status {
            CatalogStatus::Loaded | CatalogStatus::Empty => {
                build_page_controls(self.current_page, self.total_results, self.page_size)
            }
            _ => Vec::new(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_results, self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn products(&self) -> &[Product] {
        &self.cache
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn active_filters(&self) -> &FilterSet {
        &self.active_filters
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::CONNECTION_ERROR;

    fn controller() -> CatalogController<FilterControls> {
        CatalogController::new(FilterControls::with_ceiling(200.0), 12, 200.0)
    }

    fn product(id: &str, loves: Option<i64>, price: Option<f64>, rating: Option<f64>) -> Product {
        Product {
            product_id: id.to_string(),
            loves_count: loves,
            price,
            rating,
            ..Default::default()
        }
    }

    fn page_of(count: usize, total: usize) -> ProductListResponse {
        ProductListResponse {
            products: (0..count).map(|i| product(&format!("P{}", i), None, None, None)).collect(),
            total,
        }
    }

    #[test]
    fn test_default_controls_build_empty_filter_set() {
        let c = controller();
        assert_eq!(c.build_filters(), FilterSet::default());
    }

    #[test]
    fn test_changed_controls_become_keys() {
        let mut c = controller();
        {
            let b = c.bindings_mut();
            b.search = "  vitamin c ".into();
            b.category = "Moisturizers".into();
            b.skin_type = "oily".into();
            b.max_price = 45.0;
            b.in_stock = true;
        }
        let filters = c.build_filters();
        assert_eq!(filters.search.as_deref(), Some("vitamin c"));
        assert_eq!(filters.category.as_deref(), Some("Moisturizers"));
        assert_eq!(filters.skin_type.as_deref(), Some("oily"));
        assert_eq!(filters.max_price, Some(45.0));
        assert_eq!(filters.in_stock, Some(true));
    }

    #[test]
    fn test_whitespace_search_and_ceiling_price_are_omitted() {
        let mut c = controller();
        c.bindings_mut().search = "   ".into();
        c.bindings_mut().max_price = 200.0;
        assert!(c.build_filters().is_empty());
    }

    #[test]
    fn test_fetch_page_query_uses_offset() {
        let mut c = controller();
        let first = c.apply_filters();
        assert!(c.complete(first.seq, Ok(page_of(12, 130))).is_applied());

        let ticket = c.go_to_page(3).unwrap();
        assert_eq!(ticket.query.limit, 12);
        assert_eq!(ticket.query.offset, 24);
        assert_eq!(c.status(), &CatalogStatus::Loading);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 130)));
        let t = c.go_to_page(5).unwrap();
        c.complete(t.seq, Ok(page_of(12, 130)));
        assert_eq!(c.current_page(), 5);

        c.bindings_mut().category = "Cleansers".into();
        let t = c.apply_filters();
        assert_eq!(c.current_page(), 1);
        assert_eq!(t.query.offset, 0);
        assert_eq!(t.query.category.as_deref(), Some("Cleansers"));
    }

    #[test]
    fn test_go_to_page_keeps_active_filters() {
        let mut c = controller();
        c.bindings_mut().search = "serum".into();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 40)));

        // Typed but not yet applied
        c.bindings_mut().search = "toner".into();
        let t = c.go_to_page(2).unwrap();
        assert_eq!(t.query.search.as_deref(), Some("serum"));
    }

    #[test]
    fn test_last_request_wins() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 60)));

        let a = c.go_to_page(1).unwrap();
        let b = c.go_to_page(2).unwrap();

        let mut b_page = page_of(12, 60);
        b_page.products[0].product_id = "from-b".into();
        assert!(c.complete(b.seq, Ok(b_page)).is_applied());

        let mut a_page = page_of(12, 60);
        a_page.products[0].product_id = "from-a".into();
        assert_eq!(c.complete(a.seq, Ok(a_page)), Completion::Stale);

        assert_eq!(c.current_page(), 2);
        assert_eq!(c.products()[0].product_id, "from-b");
        assert_eq!(c.status(), &CatalogStatus::Loaded);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut c = controller();
        let a = c.apply_filters();
        let b = c.apply_filters();
        c.complete(b.seq, Ok(page_of(3, 3)));
        assert_eq!(c.complete(a.seq, Err(ApiError::Network("timeout".into()))), Completion::Stale);
        assert_eq!(c.status(), &CatalogStatus::Loaded);
    }

    #[test]
    fn test_failure_keeps_cache_and_total() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 30)));

        let t = c.go_to_page(2).unwrap();
        c.complete(t.seq, Err(ApiError::Network("offline".into())));

        assert_eq!(c.status(), &CatalogStatus::Failed(CONNECTION_ERROR.to_string()));
        assert_eq!(c.products().len(), 12);
        assert_eq!(c.total_results(), 30);
        assert!(c.page_controls().is_empty());
    }

    #[test]
    fn test_empty_result_has_no_pagination() {
        let mut c = controller();
        let t = c.apply_filters();
        assert!(c.complete(t.seq, Ok(ProductListResponse::default())).is_applied());
        assert_eq!(c.status(), &CatalogStatus::Empty);
        assert!(c.page_controls().is_empty());
    }

    #[test]
    fn test_page_controls_follow_total() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 130)));
        let t = c.go_to_page(6).unwrap();
        assert!(c.page_controls().is_empty());
        c.complete(t.seq, Ok(page_of(12, 130)));

        let controls = c.page_controls();
        assert_eq!(c.total_pages(), 11);
        assert_eq!(controls.first(), Some(&PageControl::Previous(5)));
        assert_eq!(controls.last(), Some(&PageControl::Next(7)));
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 24)));
        assert!(c.go_to_page(0).is_none());
        assert!(c.go_to_page(3).is_none());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.status(), &CatalogStatus::Loaded);
    }

    #[test]
    fn test_shrunken_total_refetches_last_page() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 60)));
        let shown: Vec<String> = c.products().iter().map(|p| p.product_id.clone()).collect();

        let t = c.go_to_page(5).unwrap();
        let refetch = match c.complete(t.seq, Ok(page_of(0, 20))) {
            Completion::Refetch(ticket) => ticket,
            other => panic!("expected a refetch, got {:?}", other),
        };

        // Nothing from the out-of-range response is rendered.
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.status(), &CatalogStatus::Loading);
        assert!(c.page_controls().is_empty());
        let still_shown: Vec<String> = c.products().iter().map(|p| p.product_id.clone()).collect();
        assert_eq!(still_shown, shown);
        assert_eq!(refetch.query.offset, 12);

        // The older ticket is superseded by the refetch.
        assert_eq!(c.complete(t.seq, Ok(page_of(8, 20))), Completion::Stale);

        assert!(c.complete(refetch.seq, Ok(page_of(8, 20))).is_applied());
        assert_eq!(c.status(), &CatalogStatus::Loaded);
        assert_eq!(c.products().len(), 8);
        assert_eq!(
            c.page_controls(),
            vec![
                PageControl::Previous(1),
                PageControl::Page { number: 1, active: false },
                PageControl::Page { number: 2, active: true },
            ]
        );
    }

    #[test]
    fn test_total_dropping_to_zero_shows_empty() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 60)));
        let t = c.go_to_page(3).unwrap();
        assert!(c.complete(t.seq, Ok(ProductListResponse::default())).is_applied());
        assert_eq!(c.status(), &CatalogStatus::Empty);
        assert!(c.page_controls().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut c = controller();
        {
            let b = c.bindings_mut();
            b.search = "spf".into();
            b.in_stock = true;
            b.max_price = 20.0;
            b.sort = SortKey::Rating;
        }
        let t = c.apply_filters();
        c.complete(t.seq, Ok(page_of(12, 50)));
        let t = c.go_to_page(3).unwrap();
        c.complete(t.seq, Ok(page_of(12, 50)));

        let first = c.reset_filters();
        let controls_after_first = c.bindings().clone();
        let second = c.reset_filters();

        assert_eq!(first.query, second.query);
        assert_eq!(c.active_filters(), &FilterSet::default());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.bindings(), &controls_after_first);
        assert_eq!(c.bindings(), &FilterControls::with_ceiling(200.0));
        assert!(c.build_filters().is_empty());
    }

    #[test]
    fn test_popularity_sort() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(
            t.seq,
            Ok(ProductListResponse {
                products: vec![
                    product("a", Some(5), None, None),
                    product("b", Some(50_000), None, None),
                    product("c", Some(1), None, None),
                ],
                total: 3,
            }),
        );
        c.apply_client_sort(SortKey::Popularity);
        let loves: Vec<i64> = c.products().iter().map(Product::loves).collect();
        assert_eq!(loves, vec![50_000, 5, 1]);
    }

    #[test]
    fn test_price_sorts_treat_missing_as_zero() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(
            t.seq,
            Ok(ProductListResponse {
                products: vec![
                    product("a", None, Some(30.0), None),
                    product("b", None, Some(10.0), None),
                    product("c", None, Some(20.0), None),
                    product("d", None, None, None),
                ],
                total: 4,
            }),
        );

        c.apply_client_sort(SortKey::PriceAsc);
        let ids: Vec<&str> = c.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);

        c.apply_client_sort(SortKey::PriceDesc);
        let ids: Vec<&str> = c.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_rating_sort_is_stable_and_makes_no_request() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(
            t.seq,
            Ok(ProductListResponse {
                products: vec![
                    product("a", None, None, Some(4.0)),
                    product("b", None, None, None),
                    product("c", None, None, Some(4.8)),
                    product("d", None, None, Some(4.0)),
                ],
                total: 4,
            }),
        );
        c.apply_client_sort(SortKey::Rating);
        let ids: Vec<&str> = c.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "d", "b"]);
        assert_eq!(c.status(), &CatalogStatus::Loaded);
        assert_eq!(c.requests.last(), t.seq);
    }

    #[test]
    fn test_selected_sort_is_read_from_bindings() {
        let mut c = controller();
        let t = c.apply_filters();
        c.complete(
            t.seq,
            Ok(ProductListResponse {
                products: vec![
                    product("a", None, Some(30.0), None),
                    product("b", None, Some(10.0), None),
                    product("c", None, Some(20.0), None),
                ],
                total: 3,
            }),
        );
        c.bindings_mut().sort = SortKey::PriceAsc;
        c.apply_selected_sort();
        let ids: Vec<&str> = c.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(c.requests.last(), t.seq);
    }

    #[test]
    fn test_sort_key_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.as_value()), key);
        }
        assert_eq!(SortKey::from_value("newest"), SortKey::Popularity);
    }
}
