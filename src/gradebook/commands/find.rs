use crate::commands::{CmdMessage, CmdResult, StudentSelector};
use crate::error::Result;
use crate::model::{Student, StudentId};
use crate::store::RosterStore;

/// First record matching the selector, if any.
pub fn lookup<'a, S: RosterStore>(store: &'a S, selector: &StudentSelector) -> Option<&'a Student> {
    match selector {
        StudentSelector::Id(id) => StudentId::try_from(*id)
            .ok()
            .and_then(|id| store.find_by_id(id)),
        StudentSelector::Name(name) => store.find_by_name(name),
    }
}

pub fn run<S: RosterStore>(store: &S, selector: &StudentSelector) -> Result<CmdResult> {
    match lookup(store, selector) {
        Some(student) => Ok(CmdResult::default().with_listed_students(vec![student.clone()])),
        None => Ok(CmdResult::default().with_message(CmdMessage::error("Student not found!"))),
    }
}
