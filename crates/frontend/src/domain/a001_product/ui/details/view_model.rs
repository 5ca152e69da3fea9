use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_recommendation::RecommendationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::domain::a002_recommendation::api as recommendation_api;
use crate::domain::a002_recommendation::ui::state::RecommendationsState;
use crate::shared::config::config;
use crate::shared::request_seq::RequestSequence;
use crate::shared::toast::ToastService;

/// Number of highlights shown in the modal.
pub const DETAIL_HIGHLIGHTS: usize = 5;

pub fn build_recommendation_request(
    product: &Product,
    user_id: Option<i64>,
    filter_skin_type: bool,
    filter_allergies: bool,
) -> RecommendationRequest {
    RecommendationRequest {
        product_id: product.product_id.clone(),
        user_id,
        count: config().recommendations.count,
        filter_skin_type,
        filter_allergies,
    }
}

/// State of the details modal, shared through context so that any card can
/// open it.
///
/// Opening is last-click-wins: a detail response for an earlier click is
/// discarded, and so is one that arrives after the modal was closed.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub product: RwSignal<Option<Product>>,
    pub recommendations: RwSignal<RecommendationsState>,
    pub filter_skin_type: RwSignal<bool>,
    pub filter_allergies: RwSignal<bool>,
    opens: StoredValue<RequestSequence>,
    generations: StoredValue<RequestSequence>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            product: RwSignal::new(None),
            recommendations: RwSignal::new(RecommendationsState::Hint),
            filter_skin_type: RwSignal::new(true),
            filter_allergies: RwSignal::new(true),
            opens: StoredValue::new(RequestSequence::new()),
            generations: StoredValue::new(RequestSequence::new()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.product.with(Option::is_some)
    }

    pub fn open(&self, product_id: String, toasts: ToastService) {
        let mut seq = 0;
        self.opens.update_value(|s| seq = s.issue());
        let this = *self;

        spawn_local(async move {
            let outcome = api::fetch_product(&product_id).await;
            if !this.opens.with_value(|s| s.is_current(seq)) {
                log::debug!("Dropping details of {} (superseded)", product_id);
                return;
            }
            match outcome {
                Ok(product) => {
                    this.generations.update_value(|s| {
                        s.issue();
                    });
                    this.recommendations.set(RecommendationsState::Hint);
                    this.product.set(Some(product));
                }
                Err(e) => {
                    log::error!("Could not load product {}: {}", product_id, e);
                    toasts.error("Could not load product details");
                }
            }
        });
    }

    pub fn close(&self) {
        self.opens.update_value(|s| {
            s.issue();
        });
        self.generations.update_value(|s| {
            s.issue();
        });
        self.product.set(None);
        self.recommendations.set(RecommendationsState::Hint);
    }

    /// Requests recommendations for the open product.
    pub fn generate(&self, user_id: Option<i64>) {
        let Some(request) = self.product.with_untracked(|p| {
            p.as_ref().map(|p| {
                build_recommendation_request(
                    p,
                    user_id,
                    self.filter_skin_type.get_untracked(),
                    self.filter_allergies.get_untracked(),
                )
            })
        }) else {
            return;
        };

        let mut seq = 0;
        self.generations.update_value(|s| seq = s.issue());
        self.recommendations.set(RecommendationsState::Loading);
        let this = *self;

        spawn_local(async move {
            let outcome = recommendation_api::generate(&request).await;
            if let Err(e) = &outcome {
                log::error!("Recommendations for {} failed: {}", request.product_id, e);
            }
            if this.generations.with_value(|s| s.is_current(seq)) {
                this.recommendations.set(RecommendationsState::from_outcome(outcome, None));
            }
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_request() {
        let product = Product {
            product_id: "P42".into(),
            ..Default::default()
        };
        let req = build_recommendation_request(&product, Some(9), true, false);
        assert_eq!(req.product_id, "P42");
        assert_eq!(req.user_id, Some(9));
        assert_eq!(req.count, 5);
        assert!(req.filter_skin_type);
        assert!(!req.filter_allergies);

        let anonymous = build_recommendation_request(&product, None, false, false);
        let json = serde_json::to_value(&anonymous).unwrap();
        assert!(json.get("user_id").is_none());
    }
}
