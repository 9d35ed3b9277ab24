//! # Gradebook Architecture
//!
//! Gradebook keeps a roster of students and their grades in memory and lets a
//! user manage it from an interactive text menu. The roster logic is a
//! library; the menu is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu state machine, rendering, logging setup             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Prompt Layer (prompt.rs)                                   │
//! │  - Typed, validated, re-prompting input over BufRead/Write  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, dispatches to commands                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add, find, list, remove, grade editing                   │
//! │  - Returns `CmdResult` with leveled messages, no I/O        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `RosterStore` trait, `InMemoryStore`                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Bad input never escapes the prompt layer; it is re-asked. Lookup misses are
//! reported as messages. The only errors that reach `main` are I/O failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory roster
//! - [`model`]: `Student` and grade types
//! - [`prompt`]: Validated interactive input
//! - [`config`]: Session settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
