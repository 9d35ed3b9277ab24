use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{Student, StudentId};
use crate::store::RosterStore;

pub fn run<S: RosterStore>(store: &mut S, name: String, id: StudentId) -> Result<CmdResult> {
    if id == 0 {
        return Err(RosterError::InvalidId(0));
    }
    if store.id_exists(id) {
        return Err(RosterError::DuplicateId(id));
    }

    log::debug!("added student {} ({:?})", id, name);
    store.add(Student::new(name, id));

    Ok(CmdResult::default().with_message(CmdMessage::success("Student added successfully!")))
}
