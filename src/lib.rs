//! In-memory data-access object for a minimal todo service.
//!
//! # Overview
//! `TodoStore` owns a map from id to [`Todo`] and a counter for the next
//! assigned id. It exposes four synchronous operations — create, update,
//! get-one, get-all — and nothing else. The HTTP layer that maps these onto
//! REST verbs lives in a separate crate and only ever calls through this
//! boundary.
//!
//! # Design
//! - Absence is data: lookups and conditional updates return `Option<Todo>`.
//!   No operation can fail, so no operation returns `Result`.
//! - `Todo` is an immutable value. Modified variants are built with the
//!   consuming `with_*` methods rather than by mutating a shared instance.
//! - The store itself is single-threaded (`&mut self`); concurrent callers
//!   wrap it in [`SharedTodoStore`] so the map and the id counter are
//!   updated under one guard.

pub mod store;
pub mod types;

pub use store::{SharedTodoStore, TodoStore};
pub use types::Todo;
