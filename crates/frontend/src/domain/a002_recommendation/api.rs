use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_recommendation::{RecommendationRequest, RecommendationsResponse};

use crate::shared::api_utils::{get_json, post_json};
use crate::shared::error::ApiError;

/// Products similar to `request.product_id`.
pub async fn generate(request: &RecommendationRequest) -> Result<Vec<Product>, ApiError> {
    let response: RecommendationsResponse = post_json("/recommendations", request).await?;
    Ok(response.recommendations)
}

/// Recommendations from the user's cold-start profile.
pub async fn for_user(user_id: i64) -> Result<Vec<Product>, ApiError> {
    let response: RecommendationsResponse =
        get_json(&format!("/recommendations/for-user/{}", user_id)).await?;
    Ok(response.recommendations)
}
