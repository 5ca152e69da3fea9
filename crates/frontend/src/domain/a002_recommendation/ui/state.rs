use contracts::domain::a001_product::aggregate::Product;

use crate::shared::error::ApiError;

/// What a recommendation area currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecommendationsState {
    /// Nothing requested yet
    #[default]
    Hint,
    Loading,
    Items(Vec<Product>),
    Empty,
    Failed(String),
}

impl RecommendationsState {
    /// Settles a response, keeping at most `limit` items.
    pub fn from_outcome(outcome: Result<Vec<Product>, ApiError>, limit: Option<usize>) -> Self {
        match outcome {
            Ok(mut products) => {
                if let Some(limit) = limit {
                    products.truncate(limit);
                }
                if products.is_empty() {
                    RecommendationsState::Empty
                } else {
                    RecommendationsState::Items(products)
                }
            }
            Err(e) => RecommendationsState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RecommendationsState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::CONNECTION_ERROR;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                product_id: format!("P{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_limit_is_applied() {
        match RecommendationsState::from_outcome(Ok(products(10)), Some(4)) {
            RecommendationsState::Items(items) => {
                assert_eq!(items.len(), 4);
                assert_eq!(items[3].product_id, "P3");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_failed() {
        assert_eq!(
            RecommendationsState::from_outcome(Ok(Vec::new()), None),
            RecommendationsState::Empty
        );
        assert_eq!(
            RecommendationsState::from_outcome(Err(ApiError::Network("down".into())), None),
            RecommendationsState::Failed(CONNECTION_ERROR.to_string())
        );
        assert_eq!(
            RecommendationsState::from_outcome(Err(ApiError::Rejected("Product not found".into())), None),
            RecommendationsState::Failed("Product not found".to_string())
        );
    }
}
