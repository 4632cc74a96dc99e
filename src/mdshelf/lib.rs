//! # mdshelf Architecture
//!
//! mdshelf serves a single folder of Markdown documents over HTTP: list,
//! upload, read (raw and rendered), edit, rename, delete, and compare two
//! documents or two unsaved buffers side by side.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (web/, started by main.rs)                      │
//! │  - Routes, request structs, JSON responses, status codes    │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Sanitizes names taken from URLs and queries              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Existence checks, conflict policy, failure ordering      │
//! │  - Pure transforms: render.rs, diff.rs                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The filesystem is the database
//!
//! Every request reads or writes the storage root directly. There is no
//! cache and no locking; concurrent writes to one document are last-write-wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business rules for each operation
//! - [`sanitize`]: Untrusted filename to safe basename
//! - [`store`]: Storage abstraction and implementations
//! - [`render`]: Markdown to HTML
//! - [`diff`]: Line diff table and diff payloads
//! - [`model`]: Documents and payload types
//! - [`config`]: Startup configuration
//! - [`error`]: Error types
//! - [`web`]: axum router and handlers

pub mod api;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod render;
pub mod sanitize;
pub mod store;
pub mod web;
