//! # Storage Layer
//!
//! The [`RosterStore`] trait is the one place student records live. Commands
//! only ever see the trait, so the storage choice stays out of business logic.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an insertion-ordered `Vec<Student>`.
//!   Nothing is persisted; the roster lives as long as the process.
//!
//! ## Ordering and Uniqueness
//!
//! Records are kept in insertion order until [`RosterStore::sort_by_id`]
//! reorders them. Lookups are first-match in current order.
//!
//! The store does **not** enforce id uniqueness on [`RosterStore::add`].
//! That check belongs to the caller (see `commands::add`), which keeps the
//! store a plain container.
//!
//! ## Borrowed Lookups
//!
//! `find_*` returns references into the store. A reference stays valid until
//! the next mutation, which the borrow checker enforces for us. Callers that
//! need to hold on to a record across mutations keep its [`StudentId`] and
//! look it up again.

use crate::model::{Student, StudentId};

pub mod memory;

/// Abstract interface for roster storage.
pub trait RosterStore {
    /// Append a record. Does not check for id collisions.
    fn add(&mut self, student: Student);

    /// Remove every record with this id. Returns whether anything was removed.
    fn remove_by_id(&mut self, id: StudentId) -> bool;

    fn find_by_id(&self, id: StudentId) -> Option<&Student>;

    fn find_by_id_mut(&mut self, id: StudentId) -> Option<&mut Student>;

    /// Exact, case-sensitive name match.
    fn find_by_name(&self, name: &str) -> Option<&Student>;

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Student>;

    fn id_exists(&self, id: StudentId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Stable ascending sort by id, in place.
    fn sort_by_id(&mut self);

    /// Records in current store order.
    fn students(&self) -> std::slice::Iter<'_, Student>;

    fn len(&self) -> usize {
        self.students().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
