//! The in-memory todo store.
//!
//! # Design
//! `TodoStore` holds the authoritative set of todos for the lifetime of the
//! process: a map from id to [`Todo`] and the counter for the next assigned
//! id. Every stored todo has an `id` equal to its map key, and the counter
//! only increases — an issued id is never handed out again.
//!
//! None of the operations can fail. "Not found" is an ordinary result value
//! (`None`), not an error, so callers handle absence as a normal control
//! path. Lookups hand back owned clones; the store never leaks references
//! into its map.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::types::Todo;

/// In-memory map of todos keyed by id, plus the next-id counter.
///
/// Operations take `&self`/`&mut self` and never suspend or block. The store
/// itself has no concurrent-access contract; see [`SharedTodoStore`].
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// A store behind one exclusive lock, for concurrent-serving callers.
///
/// The map and the counter must move together: two unsynchronized
/// `create_todo` calls racing on the counter could issue the same id. One
/// `Mutex` around the whole store rules that out.
pub type SharedTodoStore = Arc<Mutex<TodoStore>>;

impl TodoStore {
    /// An empty store with the id counter at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new todo and return it.
    ///
    /// The `id` on the input is ignored; the store assigns the next counter
    /// value. Always succeeds.
    pub fn create_todo(&mut self, todo: Todo) -> Todo {
        let todo = todo.with_id(self.next_id);
        self.next_id += 1;
        self.todos.insert(todo.id, todo.clone());
        debug!(id = todo.id, "created todo");
        todo
    }

    /// Replace the stored todo whose id matches `todo.id`.
    ///
    /// The whole record is overwritten — there is no partial-field merge.
    /// Returns `None` and leaves the store untouched when no stored todo has
    /// that id.
    pub fn update_todo(&mut self, todo: Todo) -> Option<Todo> {
        if !self.todos.contains_key(&todo.id) {
            debug!(id = todo.id, "update skipped, no such todo");
            return None;
        }
        self.todos.insert(todo.id, todo.clone());
        debug!(id = todo.id, "updated todo");
        Some(todo)
    }

    /// The todo with the given id, if any.
    ///
    /// Any `i64` is legal input; an id that was never issued (negative
    /// included) simply yields `None`.
    pub fn get_todo(&self, id: i64) -> Option<Todo> {
        self.todos.get(&id).cloned()
    }

    /// All stored todos.
    ///
    /// Empty when nothing has been created. Iteration happens to be in
    /// ascending id order, but callers should not rely on any ordering.
    pub fn get_todos(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }
}
