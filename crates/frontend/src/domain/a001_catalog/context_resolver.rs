//! Reconciliation of the order context (address, branch, order type) between
//! the URL query, localStorage and the global store.
//!
//! Precedence for the effective value: URL > persisted > global. The global
//! store is written only when the winning source disagrees with it.

use contracts::enums::OrderType;

use crate::shared::error::CatalogError;

/// Parse a positive numeric identifier
pub fn parse_id(raw: &str) -> Result<i64, CatalogError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CatalogError::InvalidId(raw.to_string())),
    }
}

/// Like [`parse_id`], but a missing or malformed value is simply absent
pub fn parse_optional_id(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    match parse_id(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            log::debug!("ignoring {}", e);
            None
        }
    }
}

/// Location identifier sent to the catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationParam {
    Address(i64),
    Branch(i64),
}

/// One snapshot of the order fields. Used for each source and for the
/// resolved (effective) context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderContext {
    pub address_id: Option<i64>,
    pub branch_id: Option<i64>,
    pub order_type: Option<OrderType>,
}

impl OrderContext {
    /// Build from raw string values (URL query or localStorage)
    pub fn parse(address_id: Option<&str>, branch_id: Option<&str>, order_type: Option<&str>) -> Self {
        Self {
            address_id: parse_optional_id(address_id),
            branch_id: parse_optional_id(branch_id),
            order_type: order_type.and_then(OrderType::from_code),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.address_id.is_none() && self.branch_id.is_none() && self.order_type.is_none()
    }

    /// The single location identifier that is active for the order type.
    ///
    /// Delivery uses the address, take-away uses the branch. Never both.
    pub fn location_param(&self) -> Option<LocationParam> {
        match self.order_type? {
            OrderType::Delivery => self.address_id.map(LocationParam::Address),
            OrderType::TakeAway => self.branch_id.map(LocationParam::Branch),
        }
    }

    /// Whether an address or a branch is known, regardless of order type
    pub fn has_location(&self) -> bool {
        self.address_id.is_some() || self.branch_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldResolution<T> {
    pub effective: Option<T>,
    /// Value to write into the global store, if it has to change
    pub update: Option<T>,
}

pub fn resolve_field<T: Copy + PartialEq>(
    url: Option<T>,
    persisted: Option<T>,
    global: Option<T>,
) -> FieldResolution<T> {
    let winner = url.or(persisted);
    let update = winner.filter(|value| global != Some(*value));
    FieldResolution {
        effective: winner.or(global),
        update,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextResolution {
    pub effective: OrderContext,
    /// Fields that must be written to the global store; unset means unchanged
    pub updates: OrderContext,
}

pub fn resolve_context(
    url: &OrderContext,
    persisted: &OrderContext,
    global: &OrderContext,
) -> ContextResolution {
    let address = resolve_field(url.address_id, persisted.address_id, global.address_id);
    let branch = resolve_field(url.branch_id, persisted.branch_id, global.branch_id);
    let order_type = resolve_field(url.order_type, persisted.order_type, global.order_type);

    ContextResolution {
        effective: OrderContext {
            address_id: address.effective,
            branch_id: branch.effective,
            order_type: order_type.effective,
        },
        updates: OrderContext {
            address_id: address.update,
            branch_id: branch.update,
            order_type: order_type.update,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id(" 7 "), Ok(7));
        assert_eq!(parse_id("NaN"), Err(CatalogError::InvalidId("NaN".into())));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("12abc").is_err());
    }

    #[test]
    fn test_parse_optional_id_treats_garbage_as_absent() {
        assert_eq!(parse_optional_id(None), None);
        assert_eq!(parse_optional_id(Some("")), None);
        assert_eq!(parse_optional_id(Some("undefined")), None);
        assert_eq!(parse_optional_id(Some("15")), Some(15));
    }

    #[test]
    fn test_url_only_resolves_and_updates_global() {
        let url = OrderContext::parse(Some("7"), None, Some("delivery"));
        let resolution = resolve_context(&url, &OrderContext::default(), &OrderContext::default());

        let expected = OrderContext {
            address_id: Some(7),
            branch_id: None,
            order_type: Some(OrderType::Delivery),
        };
        assert_eq!(resolution.effective, expected);
        assert_eq!(resolution.updates, expected);
    }

    #[test]
    fn test_url_beats_persisted() {
        let field = resolve_field(Some(1), Some(2), Some(3));
        assert_eq!(field.effective, Some(1));
        assert_eq!(field.update, Some(1));
    }

    #[test]
    fn test_url_equal_to_global_ignores_persisted() {
        let field = resolve_field(Some(1), Some(2), Some(1));
        assert_eq!(field.effective, Some(1));
        assert_eq!(field.update, None);
    }

    #[test]
    fn test_persisted_used_when_url_absent() {
        let field = resolve_field(None, Some(2), Some(3));
        assert_eq!(field.effective, Some(2));
        assert_eq!(field.update, Some(2));

        let settled = resolve_field(None, Some(2), Some(2));
        assert_eq!(settled.update, None);
    }

    #[test]
    fn test_global_only_is_kept() {
        let field = resolve_field(None, None, Some(9));
        assert_eq!(field.effective, Some(9));
        assert_eq!(field.update, None);
    }

    #[test]
    fn test_resolution_settles_after_applying_updates() {
        let url = OrderContext::parse(None, Some("4"), Some("take_away"));
        let persisted = OrderContext::parse(Some("8"), None, Some("delivery"));
        let first = resolve_context(&url, &persisted, &OrderContext::default());

        let second = resolve_context(&url, &first.effective, &first.effective);
        assert!(second.updates.is_empty());
        assert_eq!(second.effective, first.effective);
    }

    #[test]
    fn test_location_param_is_gated_by_order_type() {
        let both = OrderContext {
            address_id: Some(7),
            branch_id: Some(3),
            order_type: None,
        };
        assert_eq!(both.location_param(), None);
        assert!(both.has_location());

        let delivery = OrderContext {
            order_type: Some(OrderType::Delivery),
            ..both
        };
        assert_eq!(delivery.location_param(), Some(LocationParam::Address(7)));

        let take_away = OrderContext {
            order_type: Some(OrderType::TakeAway),
            ..both
        };
        assert_eq!(take_away.location_param(), Some(LocationParam::Branch(3)));
    }

    #[test]
    fn test_delivery_without_address_has_no_location_param() {
        let ctx = OrderContext {
            address_id: None,
            branch_id: Some(3),
            order_type: Some(OrderType::Delivery),
        };
        assert_eq!(ctx.location_param(), None);
    }
}
