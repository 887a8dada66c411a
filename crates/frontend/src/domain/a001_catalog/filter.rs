use contracts::domain::a001_catalog::{CategoryId, Product};

use crate::shared::list_utils::{normalize_query, Searchable};

impl Searchable for Product {
    fn matches_filter(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Products visible for the given subcategory and search query.
///
/// Subcategory narrows first, then a case-insensitive substring match on the
/// name. A blank query matches everything. Input order is preserved.
pub fn filter_products(
    products: &[Product],
    sub_category_id: Option<CategoryId>,
    query: &str,
) -> Vec<Product> {
    let needle = normalize_query(query);

    products
        .iter()
        .filter(|p| sub_category_id.map_or(true, |sub| p.sub_category_id == Some(sub)))
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches_filter(n)))
        .cloned()
        .collect()
}
