use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentId;
use crate::store::RosterStore;

/// Remove by id. A miss is reported as a message, not an error.
pub fn run<S: RosterStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let removed = StudentId::try_from(id)
        .map(|id| store.remove_by_id(id))
        .unwrap_or(false);

    let message = if removed {
        log::debug!("removed student {}", id);
        CmdMessage::success("Student removed!")
    } else {
        CmdMessage::error("Student not found!")
    };
    Ok(CmdResult::default().with_message(message))
}
