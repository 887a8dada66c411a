use web_sys::window;

use crate::domain::a001_catalog::context_resolver::OrderContext;

pub const ORDER_TYPE_KEY: &str = "orderType";
pub const ADDRESS_ID_KEY: &str = "selectedAddressId";
pub const BRANCH_ID_KEY: &str = "selectedBranchId";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Read the persisted order context; malformed values count as absent
pub fn load_order_context() -> OrderContext {
    OrderContext::parse(
        get_item(ADDRESS_ID_KEY).as_deref(),
        get_item(BRANCH_ID_KEY).as_deref(),
        get_item(ORDER_TYPE_KEY).as_deref(),
    )
}

/// Persist the fields that are set. Absent fields leave storage untouched.
pub fn save_order_context(context: &OrderContext) {
    if let Some(order_type) = context.order_type {
        set_item(ORDER_TYPE_KEY, order_type.code());
    }
    if let Some(address_id) = context.address_id {
        set_item(ADDRESS_ID_KEY, &address_id.to_string());
    }
    if let Some(branch_id) = context.branch_id {
        set_item(BRANCH_ID_KEY, &branch_id.to_string());
    }
}
