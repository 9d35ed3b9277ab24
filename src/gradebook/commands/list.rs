use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RosterStore;

/// Sort the roster by id, then list it.
pub fn run<S: RosterStore>(store: &mut S) -> Result<CmdResult> {
    store.sort_by_id();

    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No students found.")));
    }

    let listed = store.students().cloned().collect();
    Ok(CmdResult::default().with_listed_students(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, grades, remove};
    use crate::model::Student;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_sorted_by_id() {
        let mut store = StoreFixture::new().with_ids(&[3, 1, 2]).store;
        let result = run(&mut store).unwrap();

        let ids: Vec<_> = result.listed_students.iter().map(Student::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn sorting_mutates_store_order() {
        let mut store = StoreFixture::new().with_ids(&[2, 1]).store;
        run(&mut store).unwrap();
        let ids: Vec<_> = store.students().map(Student::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_roster_reports_no_students() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert!(result.listed_students.is_empty());
        assert_eq!(result.messages[0].content, "No students found.");
    }

    #[test]
    fn full_scenario() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ann".into(), 1).unwrap();
        add::run(&mut store, "Bob".into(), 2).unwrap();

        grades::add(&mut store, 1, &[90, 80]).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().average(), Some(85.0));

        grades::add(&mut store, 2, &[]).unwrap();
        assert_eq!(store.find_by_id(2).unwrap().average(), None);

        remove::run(&mut store, 1).unwrap();
        assert!(!store.id_exists(1));
        assert!(store.id_exists(2));

        let result = run(&mut store).unwrap();
        let ids: Vec<_> = result.listed_students.iter().map(Student::id).collect();
        assert_eq!(ids, vec![2]);
    }
}
