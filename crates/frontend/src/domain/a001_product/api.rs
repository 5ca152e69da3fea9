use crate::shared::api_utils::{get_json, path_segment, with_query};
use crate::shared::error::ApiError;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::dto::{CategoriesResponse, ProductListQuery, ProductListResponse, ProductResponse};

/// One page of the catalog.
pub async fn fetch_products(query: &ProductListQuery) -> Result<ProductListResponse, ApiError> {
    let path = with_query("/products", query)?;
    get_json(&path).await
}

/// Full product for the details modal.
pub async fn fetch_product(product_id: &str) -> Result<Product, ApiError> {
    let path = format!("/product/{}", path_segment(product_id));
    let response: ProductResponse = get_json(&path).await?;
    Ok(response.product)
}

/// Category names for the filter select.
pub async fn fetch_categories() -> Result<Vec<String>, ApiError> {
    let response: CategoriesResponse = get_json("/categories").await?;
    Ok(response.categories)
}
