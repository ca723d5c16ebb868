use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A persisted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

/// Request body for creating or renaming an item.
///
/// `name` is kept as raw JSON: any value the client sends is handed to
/// storage as text, only its presence is checked.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
}

impl ItemPayload {
    /// The name as it will be bound to the statement; `None` binds NULL
    pub fn bound_name(&self) -> Option<String> {
        match self.name.as_ref()? {
            Value::Null => None,
            Value::String(name) => Some(name.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The name, unless it is absent or falsy (`null`, `false`, `0`, `""`)
    pub fn present_name(&self) -> Option<String> {
        match self.name.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(name) if name.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            _ => self.bound_name(),
        }
    }
}

/// Response returned after renaming an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdatedResponse {
    pub message: String,
    pub item: Item,
}

/// Response returned after deleting an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDeletedResponse {
    pub message: String,
    #[serde(rename = "deletedItem")]
    pub deleted_item: Item,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: Value) -> ItemPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_falsy_names_are_missing() {
        for body in [json!({}), json!({ "name": null }), json!({ "name": "" }), json!({ "name": false }), json!({ "name": 0 }), json!({ "name": 0.0 })] {
            assert_eq!(payload(body.clone()).present_name(), None, "{body}");
        }
    }

    #[test]
    fn test_scalars_render_as_text() {
        assert_eq!(payload(json!({ "name": "pear" })).present_name().as_deref(), Some("pear"));
        assert_eq!(payload(json!({ "name": 5 })).present_name().as_deref(), Some("5"));
        assert_eq!(payload(json!({ "name": true })).present_name().as_deref(), Some("true"));
        assert_eq!(payload(json!({ "name": 1.5 })).bound_name().as_deref(), Some("1.5"));
    }

    #[test]
    fn test_empty_name_still_binds_on_create() {
        assert_eq!(payload(json!({ "name": "" })).bound_name().as_deref(), Some(""));
        assert_eq!(payload(json!({ "name": null })).bound_name(), None);
        assert_eq!(payload(json!({})).bound_name(), None);
    }
}
