use contracts::domain::a001_catalog::CategoryId;

use crate::shared::list_utils::normalize_query;

/// Why the product panel is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoMatch,
    NoProductsInCategory,
    SelectCategory,
}

impl EmptyReason {
    pub fn message_key(&self) -> &'static str {
        match self {
            EmptyReason::NoMatch => "products.no_match",
            EmptyReason::NoProductsInCategory => "products.empty_category",
            EmptyReason::SelectCategory => "products.select_category",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPanel {
    Loading,
    Empty(EmptyReason),
    Shown,
}

/// State of the product panel once categories are available.
///
/// Empty-state precedence: active search, then selected category, then
/// nothing selected.
pub fn product_panel_state(
    loading: bool,
    selected_category: Option<CategoryId>,
    query: &str,
    visible: usize,
) -> ProductPanel {
    if loading {
        return ProductPanel::Loading;
    }
    if visible > 0 {
        return ProductPanel::Shown;
    }
    let reason = if normalize_query(query).is_some() {
        EmptyReason::NoMatch
    } else if selected_category.is_some() {
        EmptyReason::NoProductsInCategory
    } else {
        EmptyReason::SelectCategory
    };
    ProductPanel::Empty(reason)
}
