use contracts::enums::OrderType;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use crate::domain::a001_catalog::context_resolver::OrderContext;
use crate::shared::i18n::{t, Language};

/// Typed global store of the storefront.
///
/// Order fields are reconciled by the catalog screen against the URL and
/// localStorage; `tax_type` is published from the latest products response.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub order_type: RwSignal<Option<OrderType>>,
    pub selected_address_id: RwSignal<Option<i64>>,
    pub selected_branch_id: RwSignal<Option<i64>>,
    pub language: RwSignal<Language>,
    pub user: RwSignal<Option<UserInfo>>,
    pub tax_type: RwSignal<Option<serde_json::Value>>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        let language = web_sys::window()
            .and_then(|w| w.navigator().language())
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();

        Self {
            order_type: RwSignal::new(None),
            selected_address_id: RwSignal::new(None),
            selected_branch_id: RwSignal::new(None),
            language: RwSignal::new(language),
            user: RwSignal::new(None),
            tax_type: RwSignal::new(None),
        }
    }

    /// Current order fields (tracked)
    pub fn order_context(&self) -> OrderContext {
        OrderContext {
            address_id: self.selected_address_id.get(),
            branch_id: self.selected_branch_id.get(),
            order_type: self.order_type.get(),
        }
    }

    /// Write the fields that are set; absent fields keep their value
    pub fn apply_updates(&self, updates: &OrderContext) {
        if let Some(order_type) = updates.order_type {
            log::debug!("global orderType <- {}", order_type);
            self.order_type.set(Some(order_type));
        }
        if let Some(address_id) = updates.address_id {
            log::debug!("global selectedAddressId <- {}", address_id);
            self.selected_address_id.set(Some(address_id));
        }
        if let Some(branch_id) = updates.branch_id {
            log::debug!("global selectedBranchId <- {}", branch_id);
            self.selected_branch_id.set(Some(branch_id));
        }
    }

    pub fn user_id_untracked(&self) -> Option<i64> {
        self.user.with_untracked(|user| user.as_ref().map(|u| u.id))
    }

    /// Translate `key` in the current language (tracked)
    pub fn tr(&self, key: &'static str) -> &'static str {
        t(self.language.get(), key)
    }
}

impl Default for StorefrontContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_storefront_context() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext context not found")
}
