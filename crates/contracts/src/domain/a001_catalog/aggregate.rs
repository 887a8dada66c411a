use serde::{Deserialize, Serialize};

pub type CategoryId = i64;
pub type ProductId = i64;

// ============================================================================
// Category
// ============================================================================

/// Catalog category. API response order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sub_category_id: Option<CategoryId>,
    #[serde(default)]
    pub favourite: bool,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_optional_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": 3, "name": "Latte"}"#).unwrap();
        assert_eq!(product.sub_category_id, None);
        assert!(!product.favourite);
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_category_nested_sub_categories() {
        let category: Category = serde_json::from_str(
            r#"{"id": 1, "name": "Drinks", "sub_categories": [{"id": 11, "name": "Hot"}]}"#,
        )
        .unwrap();
        assert_eq!(category.sub_categories.len(), 1);
        assert_eq!(category.sub_categories[0].name, "Hot");
        assert!(category.sub_categories[0].sub_categories.is_empty());
    }
}
