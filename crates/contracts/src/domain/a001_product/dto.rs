use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// Minimal set of active catalog constraints.
///
/// A missing key means "unconstrained"; keys are never sent empty or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of keys that would be sent.
    pub fn active_count(&self) -> usize {
        [
            self.search.is_some(),
            self.category.is_some(),
            self.skin_type.is_some(),
            self.max_price.is_some(),
            self.in_stock.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListQuery {
    pub limit: usize,
    pub offset: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductListQuery {
    pub fn new(limit: usize, offset: usize, filters: &FilterSet) -> Self {
        Self {
            limit,
            offset,
            search: filters.search.clone(),
            category: filters.category.clone(),
            skin_type: filters.skin_type.clone(),
            max_price: filters.max_price,
            in_stock: filters.in_stock,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_set_serializes_to_empty_object() {
        let json = serde_json::to_string(&FilterSet::default()).unwrap();
        assert_eq!(json, "{}");
        assert!(FilterSet::default().is_empty());
    }

    #[test]
    fn test_only_present_keys_are_serialized() {
        let filters = FilterSet {
            category: Some("Moisturizers".into()),
            in_stock: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"category":"Moisturizers","in_stock":true}"#);
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_list_query_carries_filters() {
        let filters = FilterSet {
            search: Some("serum".into()),
            ..Default::default()
        };
        let query = ProductListQuery::new(12, 24, &filters);
        assert_eq!(query.limit, 12);
        assert_eq!(query.offset, 24);
        assert_eq!(query.search.as_deref(), Some("serum"));
        assert!(query.category.is_none());
    }

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let resp: ProductListResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.products.is_empty());
        assert_eq!(resp.total, 0);
    }
}
