use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::Product;

/// Body of `POST /recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    pub count: usize,
    pub filter_skin_type: bool,
    pub filter_allergies: bool,
}

/// Response of both `POST /recommendations` and
/// `GET /recommendations/for-user/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_request_omits_user_id() {
        let req = RecommendationRequest {
            product_id: "P1".into(),
            user_id: None,
            count: 5,
            filter_skin_type: true,
            filter_allergies: false,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("user_id").is_none());
        assert_eq!(value["count"], 5);
        assert_eq!(value["filter_skin_type"], true);
    }
}
