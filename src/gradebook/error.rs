use crate::model::StudentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Student ID already exists: {0}")]
    DuplicateId(StudentId),

    #[error("Invalid student ID: {0}")]
    InvalidId(i64),

    #[error("Grade out of range (0-100): {0}")]
    GradeOutOfRange(i64),

    #[error("Input closed")]
    InputClosed,

    #[error("Too many invalid attempts ({0})")]
    TooManyAttempts(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
