use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::RecommendationsState;
use crate::domain::a001_product::ui::card::ProductCard;
use crate::domain::a002_recommendation::api;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::request_seq::RequestSequence;
use crate::system::auth::context::use_session;

/// "For you" panel fed by the cold-start profile.
///
/// Reloads whenever the signed-in user changes or `reload` ticks
/// (after a profile save).
#[component]
pub fn PersonalRecommendations(
    #[prop(into)] reload: Signal<u32>,
    on_open: Callback<String>,
) -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(RecommendationsState::Hint);
    let loads = StoredValue::new(RequestSequence::new());

    Effect::new(move |_| {
        reload.track();
        let user_id = session.user.with(|u| u.as_ref().map(|u| u.id));

        let mut seq = 0;
        loads.update_value(|s| seq = s.issue());

        let Some(user_id) = user_id else {
            state.set(RecommendationsState::Hint);
            return;
        };

        state.set(RecommendationsState::Loading);
        spawn_local(async move {
            let outcome = api::for_user(user_id).await;
            if let Err(e) = &outcome {
                log::error!("Personal recommendations for user {} failed: {}", user_id, e);
            }
            if loads.try_with_value(|s| s.is_current(seq)).unwrap_or(false) {
                let limit = config().recommendations.personal_limit;
                let _ = state.try_set(RecommendationsState::from_outcome(outcome, Some(limit)));
            }
        });
    });

    view! {
        <section class="personal-recommendations">
            <div class="section-header">
                <h2>{icon("sparkles")}" Recommended for you"</h2>
            </div>

            {move || match state.get() {
                RecommendationsState::Hint | RecommendationsState::Empty => view! {
                    <div class="placeholder">
                        <p>"Complete your skin profile to get personalized recommendations."</p>
                    </div>
                }.into_any(),
                RecommendationsState::Loading => view! {
                    <div class="placeholder"><Spinner /></div>
                }.into_any(),
                RecommendationsState::Failed(_) => view! {
                    <div class="placeholder error">
                        {icon("alert")}
                        <p>"Could not load recommendations. Check your connection."</p>
                    </div>
                }.into_any(),
                RecommendationsState::Items(items) => view! {
                    <div class="products-grid compact">
                        {items.into_iter().map(|product| view! {
                            <ProductCard product=product recommended=true on_open=on_open />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
