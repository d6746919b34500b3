//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client never depends on server internals. Integration tests catch
//! any schema drift between the two crates.
//!
//! Identifiers are server-assigned and arrive either as JSON numbers or as
//! strings depending on the backend, so `Id` accepts both.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned identifier of a todo or user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Id,
    pub task: String,
    pub complete: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub task: String,
    #[serde(default)]
    pub complete: bool,
}

impl NewTodo {
    /// A fresh, not yet completed task.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            complete: false,
        }
    }
}

/// Partial update for an existing todo. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl TodoPatch {
    pub fn task(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            complete: None,
        }
    }

    pub fn complete(complete: bool) -> Self {
        Self {
            task: None,
            complete: Some(complete),
        }
    }
}

/// A user record. Everything except `id` is opaque to the client and kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let n: Id = serde_json::from_str("7").unwrap();
        assert_eq!(n, Id::Number(7));
        let s: Id = serde_json::from_str(r#""a1f3""#).unwrap();
        assert_eq!(s, Id::from("a1f3"));
        assert_eq!(n.to_string(), "7");
        assert_eq!(s.to_string(), "a1f3");
    }

    #[test]
    fn new_todo_is_not_complete() {
        let json = serde_json::to_value(NewTodo::new("Buy milk")).unwrap();
        assert_eq!(json, serde_json::json!({"task": "Buy milk", "complete": false}));
    }

    #[test]
    fn patch_omits_absent_fields() {
        let json = serde_json::to_value(TodoPatch::complete(true)).unwrap();
        assert_eq!(json, serde_json::json!({"complete": true}));
        let json = serde_json::to_value(TodoPatch::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn user_keeps_opaque_fields() {
        let raw = r#"{"id":1,"name":"Ana","email":"ana@example.com"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, Id::Number(1));
        assert_eq!(user.fields["name"], "Ana");
        assert_eq!(user.fields["email"], "ana@example.com");
        assert!(!user.fields.contains_key("id"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }
}
