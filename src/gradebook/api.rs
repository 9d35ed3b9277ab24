//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for roster operations, whatever UI sits on top.
//!
//! It owns the store. The store is handed over at construction and never
//! shared, so there is no global roster state anywhere in the crate.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over RosterStore
//!
//! `RosterApi<S: RosterStore>` is generic over the storage backend, which is
//! `InMemoryStore` both in production and in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Student, StudentId};
use crate::store::RosterStore;

/// The main API facade for roster operations.
pub struct RosterApi<S: RosterStore> {
    store: S,
}

impl<S: RosterStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_student(&mut self, name: String, id: StudentId) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, id)
    }

    pub fn remove_student(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn find_student(&self, selector: &StudentSelector) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, selector)
    }

    pub fn list_students(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn add_grades(&mut self, id: StudentId, values: &[i64]) -> Result<commands::CmdResult> {
        commands::grades::add(&mut self.store, id, values)
    }

    pub fn clear_grades(&mut self, id: StudentId) -> Result<commands::CmdResult> {
        commands::grades::clear(&mut self.store, id)
    }

    pub fn id_exists(&self, id: StudentId) -> bool {
        self.store.id_exists(id)
    }

    /// Borrow a record for display. Valid until the next mutating call.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.store.find_by_id(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, StudentSelector};
