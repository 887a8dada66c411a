use serde::{Deserialize, Serialize};

/// Authenticated customer as exposed to the storefront.
///
/// Only `id` is used by catalog requests (`user_id` query parameter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}
