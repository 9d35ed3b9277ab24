use crate::error::{Result, RosterError};

pub type StudentId = u32;
pub type Grade = u8;

pub const GRADE_MIN: i64 = 0;
pub const GRADE_MAX: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    pub fn new(name: impl Into<String>, id: StudentId) -> Self {
        Self {
            id,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in the order they were recorded.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Record a grade. Values outside 0-100 are rejected and leave the record untouched.
    pub fn add_grade(&mut self, value: i64) -> Result<()> {
        if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
            return Err(RosterError::GradeOutOfRange(value));
        }
        self.grades.push(value as Grade);
        Ok(())
    }

    pub fn clear_grades(&mut self) {
        self.grades.clear();
    }

    /// Arithmetic mean of the grades, or `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: u64 = self.grades.iter().map(|&g| u64::from(g)).sum();
        Some(sum as f64 / self.grades.len() as f64)
    }
}
