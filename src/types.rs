//! The todo value type.
//!
//! # Design
//! `Todo` is a plain immutable value with field-wise equality. The store
//! never serializes it, but the web layer that consumes the store does, so
//! the type carries serde derives here where the value is defined.
//!
//! Modified variants are produced with the consuming `with_*` methods, which
//! return a new value instead of mutating in place. `create_todo` relies on
//! `with_id` to stamp the assigned id onto the caller's input.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is assigned by the store on create; the value a caller puts in the
/// `id` field of a create input is ignored. `title` is required, `content`
/// is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Todo {
    /// A todo with the given id and title and no content.
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: None,
        }
    }

    /// The same todo with `id` replaced.
    #[must_use]
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    /// The same todo with `title` replaced.
    #[must_use]
    pub fn with_title(self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self
        }
    }

    /// The same todo with `content` set to the given text.
    #[must_use]
    pub fn with_content(self, content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..self
        }
    }
}
