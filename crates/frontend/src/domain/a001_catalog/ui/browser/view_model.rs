use contracts::domain::a001_catalog::{Category, CategoryId, Product};
use leptos::prelude::*;

/// Local state of the catalog browser
#[derive(Clone, Copy)]
pub struct CatalogBrowserViewModel {
    pub categories: RwSignal<Vec<Category>>,
    pub selected_category: RwSignal<Option<CategoryId>>,
    pub selected_sub_category: RwSignal<Option<CategoryId>>,
    pub search: RwSignal<String>,
    pub products: RwSignal<Vec<Product>>,
    /// Derived from `products`; replaced wholesale, never edited in place
    pub filtered: RwSignal<Vec<Product>>,
}

impl CatalogBrowserViewModel {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            selected_category: RwSignal::new(None),
            selected_sub_category: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            products: RwSignal::new(Vec::new()),
            filtered: RwSignal::new(Vec::new()),
        }
    }

    /// Switch category: subcategory and search are reset, stale products dropped.
    ///
    /// Re-selecting the current category keeps its products: the products URL
    /// does not change, so no new response would replace them.
    pub fn select_category(&self, id: CategoryId) {
        self.selected_sub_category.set(None);
        self.search.set(String::new());
        if self.selected_category.get_untracked() == Some(id) {
            return;
        }
        self.clear_products();
        self.selected_category.set(Some(id));
    }

    pub fn select_sub_category(&self, id: Option<CategoryId>) {
        self.selected_sub_category.set(id);
    }

    pub fn clear_products(&self) {
        self.products.set(Vec::new());
        self.filtered.set(Vec::new());
    }

    /// Replace products with a fresh response; the filtered view starts unfiltered
    pub fn replace_products(&self, products: Vec<Product>) {
        self.filtered.set(products.clone());
        self.products.set(products);
    }

    /// Subcategories of the selected category (tracked)
    pub fn sub_categories(&self) -> Vec<Category> {
        let selected = self.selected_category.get();
        self.categories.with(|list| {
            list.iter()
                .find(|c| Some(c.id) == selected)
                .map(|c| c.sub_categories.clone())
                .unwrap_or_default()
        })
    }
}

impl Default for CatalogBrowserViewModel {
    fn default() -> Self {
        Self::new()
    }
}
