//! Catalog API URLs and the storefront navigation query.

use contracts::domain::a001_catalog::CategoryId;
use serde::Serialize;

use super::context_resolver::{LocationParam, OrderContext};

pub const CATEGORIES_PATH: &str = "/customer/home/categories";
pub const PRODUCTS_IN_CATEGORY_PATH: &str = "/customer/home/products_in_category";

fn split_location(context: &OrderContext) -> (Option<i64>, Option<i64>) {
    match context.location_param() {
        Some(LocationParam::Address(id)) => (Some(id), None),
        Some(LocationParam::Branch(id)) => (None, Some(id)),
        None => (None, None),
    }
}

#[derive(Serialize)]
struct CatalogQuery<'a> {
    locale: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_id: Option<i64>,
}

impl<'a> CatalogQuery<'a> {
    fn new(locale: &'a str, user_id: Option<i64>, context: &OrderContext) -> Self {
        let (address_id, branch_id) = split_location(context);
        Self {
            locale,
            user_id,
            address_id,
            branch_id,
        }
    }

    fn encode(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// `GET {base}/customer/home/categories?locale=..[&address_id=..|&branch_id=..]`
pub fn categories_url(base: &str, locale: &str, context: &OrderContext) -> String {
    let query = CatalogQuery::new(locale, None, context).encode();
    format!("{}{}?{}", base, CATEGORIES_PATH, query)
}

/// `GET {base}/customer/home/products_in_category/{id}?locale=..[&user_id=..][&address_id=..|&branch_id=..]`
///
/// `None` when no category is selected: the fetch is skipped.
pub fn products_url(
    base: &str,
    category_id: Option<CategoryId>,
    locale: &str,
    user_id: Option<i64>,
    context: &OrderContext,
) -> Option<String> {
    let category_id = category_id?;
    let query = CatalogQuery::new(locale, user_id, context).encode();
    Some(format!(
        "{}{}/{}?{}",
        base, PRODUCTS_IN_CATEGORY_PATH, category_id, query
    ))
}

#[derive(Serialize)]
struct NavigationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    address_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_type: Option<&'static str>,
}

/// Query string carried by `/products/{id}` links: the active location and
/// the order type. Empty when nothing is known.
pub fn navigation_query(context: &OrderContext) -> String {
    let (address_id, branch_id) = split_location(context);
    let query = NavigationQuery {
        address_id,
        branch_id,
        order_type: context.order_type.map(|t| t.code()),
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderType;

    const BASE: &str = "https://api.example.com";

    fn delivery_to(address_id: i64) -> OrderContext {
        OrderContext {
            address_id: Some(address_id),
            branch_id: Some(99),
            order_type: Some(OrderType::Delivery),
        }
    }

    #[test]
    fn test_categories_url_without_location() {
        assert_eq!(
            categories_url(BASE, "en", &OrderContext::default()),
            "https://api.example.com/customer/home/categories?locale=en"
        );
    }

    #[test]
    fn test_categories_url_appends_only_address_for_delivery() {
        assert_eq!(
            categories_url(BASE, "ar", &delivery_to(7)),
            "https://api.example.com/customer/home/categories?locale=ar&address_id=7"
        );
    }

    #[test]
    fn test_categories_url_appends_only_branch_for_take_away() {
        let ctx = OrderContext {
            address_id: Some(7),
            branch_id: Some(3),
            order_type: Some(OrderType::TakeAway),
        };
        assert_eq!(
            categories_url(BASE, "en", &ctx),
            "https://api.example.com/customer/home/categories?locale=en&branch_id=3"
        );
    }

    #[test]
    fn test_products_url_skipped_without_category() {
        assert_eq!(products_url(BASE, None, "en", Some(5), &delivery_to(7)), None);
    }

    #[test]
    fn test_products_url_with_user_and_location() {
        assert_eq!(
            products_url(BASE, Some(12), "en", Some(5), &delivery_to(7)).as_deref(),
            Some("https://api.example.com/customer/home/products_in_category/12?locale=en&user_id=5&address_id=7")
        );
    }

    #[test]
    fn test_products_url_anonymous() {
        assert_eq!(
            products_url(BASE, Some(12), "en", None, &OrderContext::default()).as_deref(),
            Some("https://api.example.com/customer/home/products_in_category/12?locale=en")
        );
    }

    #[test]
    fn test_navigation_query() {
        assert_eq!(navigation_query(&delivery_to(7)), "address_id=7&order_type=delivery");
        assert_eq!(navigation_query(&OrderContext::default()), "");

        let order_type_only = OrderContext {
            order_type: Some(OrderType::TakeAway),
            ..OrderContext::default()
        };
        assert_eq!(navigation_query(&order_type_only), "order_type=take_away");
    }
}
