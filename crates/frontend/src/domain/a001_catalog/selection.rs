//! Category selection rules: adopting the route category, auto-selecting the
//! first category, and following browser history.

use contracts::domain::a001_catalog::{Category, CategoryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSelection {
    /// A category is already selected, or there is nothing to choose from
    Keep,
    /// Take the category id from the `/products/:id` route
    AdoptRoute(CategoryId),
    /// Select the first category and rewrite the URL (history replace)
    AutoSelect(CategoryId),
}

/// Decide the selection after a categories response arrived
pub fn initial_selection(
    route_id: Option<CategoryId>,
    selected: Option<CategoryId>,
    categories: &[Category],
) -> InitialSelection {
    if selected.is_some() {
        return InitialSelection::Keep;
    }
    if let Some(id) = route_id {
        return InitialSelection::AdoptRoute(id);
    }
    match categories.first() {
        Some(first) => InitialSelection::AutoSelect(first.id),
        None => InitialSelection::Keep,
    }
}

/// Category to switch to when the route changed under an existing selection
/// (back/forward navigation).
pub fn history_sync(route_id: Option<CategoryId>, selected: Option<CategoryId>) -> Option<CategoryId> {
    match (route_id, selected) {
        (Some(route), Some(current)) if route != current => Some(route),
        _ => None,
    }
}

/// `/products/{id}` with an optional query string
pub fn category_path(id: CategoryId, query: &str) -> String {
    if query.is_empty() {
        format!("/products/{}", id)
    } else {
        format!("/products/{}?{}", id, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::api::navigation_query;
    use crate::domain::a001_catalog::context_resolver::OrderContext;

    fn category(id: CategoryId) -> Category {
        Category {
            id,
            name: format!("Category {}", id),
            sub_categories: vec![],
        }
    }

    #[test]
    fn test_auto_selects_first_category() {
        let categories = vec![category(1), category(2)];
        assert_eq!(
            initial_selection(None, None, &categories),
            InitialSelection::AutoSelect(1)
        );
    }

    #[test]
    fn test_route_category_wins_over_auto_select() {
        let categories = vec![category(1), category(2)];
        assert_eq!(
            initial_selection(Some(2), None, &categories),
            InitialSelection::AdoptRoute(2)
        );
    }

    #[test]
    fn test_existing_selection_is_kept() {
        let categories = vec![category(1), category(2)];
        assert_eq!(initial_selection(Some(2), Some(1), &categories), InitialSelection::Keep);
        assert_eq!(initial_selection(None, None, &[]), InitialSelection::Keep);
    }

    #[test]
    fn test_auto_select_navigation_target() {
        let categories = vec![category(1), category(2)];
        let ctx = OrderContext::parse(Some("7"), None, Some("delivery"));
        let InitialSelection::AutoSelect(id) = initial_selection(None, None, &categories) else {
            panic!("expected auto-selection");
        };
        assert_eq!(
            category_path(id, &navigation_query(&ctx)),
            "/products/1?address_id=7&order_type=delivery"
        );
    }

    #[test]
    fn test_category_path_without_query() {
        assert_eq!(category_path(3, ""), "/products/3");
    }

    #[test]
    fn test_history_sync() {
        assert_eq!(history_sync(Some(2), Some(1)), Some(2));
        assert_eq!(history_sync(Some(1), Some(1)), None);
        assert_eq!(history_sync(Some(2), None), None);
        assert_eq!(history_sync(None, Some(1)), None);
    }
}
