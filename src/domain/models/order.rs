use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single order as returned by the remote service. Shape is not interpreted.
pub type OrderRecord = Value;

/// An order collection as returned by the remote service
pub type OrderCollection = Value;

/// Order identifier taken verbatim from the `/orders/:order_id` path segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Records held by a collection body: a bare array, or an array under
/// `items` / `orders`. Anything else yields nothing.
pub fn order_items(collection: &OrderCollection) -> &[OrderRecord] {
    match collection {
        Value::Array(items) => items,
        Value::Object(fields) => ["items", "orders"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// The `id` field of a record, accepting strings and numbers
pub fn order_id_of(record: &OrderRecord) -> Option<OrderId> {
    match record.get("id")? {
        Value::String(id) => Some(OrderId::new(id.as_str())),
        Value::Number(id) => Some(OrderId::new(id.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_id_parses_any_segment() {
        let id: OrderId = "123".parse().unwrap();
        assert_eq!(id.as_str(), "123");
        assert_eq!(id.to_string(), "123");

        let id: OrderId = "ORD-7f3a".parse().unwrap();
        assert_eq!(id, OrderId::from("ORD-7f3a"));
    }

    #[test]
    fn test_order_items_from_array() {
        let body = json!([{ "id": 1 }, { "id": 2 }]);
        assert_eq!(order_items(&body).len(), 2);
    }

    #[test]
    fn test_order_items_from_wrapped_object() {
        assert!(order_items(&json!({ "items": [] })).is_empty());
        assert_eq!(order_items(&json!({ "orders": [{ "id": "a" }] })).len(), 1);
        assert!(order_items(&json!({ "count": 3 })).is_empty());
        assert!(order_items(&json!(null)).is_empty());
    }

    #[test]
    fn test_order_id_of() {
        assert_eq!(order_id_of(&json!({ "id": 1 })), Some(OrderId::from("1")));
        assert_eq!(order_id_of(&json!({ "id": "A-9" })), Some(OrderId::from("A-9")));
        assert_eq!(order_id_of(&json!({ "id": true })), None);
        assert_eq!(order_id_of(&json!({ "name": "x" })), None);
        assert_eq!(order_id_of(&json!([1, 2])), None);
    }
}
