use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentId;
use crate::store::RosterStore;

/// Append grades to one student. Out-of-range values are skipped with a warning.
pub fn add<S: RosterStore>(store: &mut S, id: StudentId, values: &[i64]) -> Result<CmdResult> {
    let student = store
        .find_by_id_mut(id)
        .ok_or(RosterError::StudentNotFound(id))?;

    let mut result = CmdResult::default();
    let mut added = 0usize;
    for &value in values {
        match student.add_grade(value) {
            Ok(()) => added += 1,
            Err(e) => result.add_message(CmdMessage::warning(e.to_string())),
        }
    }
    log::debug!("student {}: {} of {} grades recorded", id, added, values.len());

    result.add_message(CmdMessage::success(format!("{} grades added!", added)));
    Ok(result)
}

pub fn clear<S: RosterStore>(store: &mut S, id: StudentId) -> Result<CmdResult> {
    let student = store
        .find_by_id_mut(id)
        .ok_or(RosterError::StudentNotFound(id))?;
    student.clear_grades();
    log::debug!("student {}: grades cleared", id);

    Ok(CmdResult::default().with_message(CmdMessage::success("Grades cleared!")))
}
