use serde::{Deserialize, Serialize};

/// How an order is fulfilled: delivery to an address or take-away from a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Delivery,
    TakeAway,
}

impl OrderType {
    /// Wire code used in query strings and localStorage
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::TakeAway => "take_away",
        }
    }

    /// Parse a wire code; unknown values are treated as absent
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "delivery" => Some(OrderType::Delivery),
            "take_away" => Some(OrderType::TakeAway),
            _ => None,
        }
    }

    pub fn all() -> [OrderType; 2] {
        [OrderType::Delivery, OrderType::TakeAway]
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for order_type in OrderType::all() {
            assert_eq!(OrderType::from_code(order_type.code()), Some(order_type));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(OrderType::from_code("pickup"), None);
        assert_eq!(OrderType::from_code(""), None);
    }

    #[test]
    fn test_serde_matches_code() {
        let json = serde_json::to_string(&OrderType::TakeAway).unwrap();
        assert_eq!(json, "\"take_away\"");
    }
}
