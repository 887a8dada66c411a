use serde::{Deserialize, Serialize};

use super::aggregate::{Category, Product};

/// `GET /customer/home/categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// `GET /customer/home/products_in_category/{id}`
///
/// `tax` is opaque to the storefront: it is forwarded to the global store as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub tax: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_response_without_tax() {
        let resp: ProductsResponse = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(resp.products.is_empty());
        assert!(resp.tax.is_none());
    }

    #[test]
    fn test_products_response_keeps_tax_descriptor() {
        let resp: ProductsResponse =
            serde_json::from_str(r#"{"products": [], "tax": {"type": "inclusive", "rate": 15}}"#)
                .unwrap();
        assert_eq!(resp.tax.unwrap()["type"], "inclusive");
    }
}
