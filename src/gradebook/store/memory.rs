use super::RosterStore;
use crate::model::{Student, StudentId};

/// In-memory roster. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for InMemoryStore {
    fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    fn remove_by_id(&mut self, id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id() != id);
        self.students.len() != before
    }

    fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn find_by_id_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.name() == name)
    }

    fn sort_by_id(&mut self) {
        // `sort_by_key` is stable.
        self.students.sort_by_key(Student::id);
    }

    fn students(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, name: &str, id: StudentId) -> Self {
            self.store.add(Student::new(name, id));
            self
        }

        pub fn with_graded_student(mut self, name: &str, id: StudentId, grades: &[i64]) -> Self {
            let mut student = Student::new(name, id);
            for &g in grades {
                student.add_grade(g).unwrap();
            }
            self.store.add(student);
            self
        }

        /// Students named "Student N" with ids given in the order supplied.
        pub fn with_ids(mut self, ids: &[StudentId]) -> Self {
            for &id in ids {
                self.store.add(Student::new(format!("Student {}", id), id));
            }
            self
        }
    }
}
