//! Text rendering for records, listings, and command messages.
//!
//! Everything here writes to a caller-supplied `Write` so the menu can target
//! stdout or a buffer. Layout is fixed-width: names are padded by display
//! width, not byte length, so accented and wide characters line up.

use colored::Colorize;
use gradebook::api::{CmdMessage, MessageLevel};
use gradebook::model::Student;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const ID_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 20;
pub const SEPARATOR_WIDTH: usize = 40;

pub const LIST_BANNER: &str = "========== STUDENT LIST ==========";

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let content = message.content.as_str();
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", content.red())?,
        }
    }
    Ok(())
}

/// One record followed by a separator line.
pub fn render_student<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    write!(
        out,
        "\nID: {:>width$} | Name: {}",
        student.id(),
        pad_to_width(student.name(), NAME_WIDTH),
        width = ID_WIDTH
    )?;

    match student.average() {
        Some(average) => {
            write!(out, "\nGrades: ")?;
            for grade in student.grades() {
                write!(out, "{} ", grade)?;
            }
            write!(out, "\nAverage: {:.2}", average)?;
        }
        None => write!(out, "\nGrades: None")?,
    }

    writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))
}

pub fn render_student_list<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}", LIST_BANNER)?;
    for student in students {
        render_student(out, student)?;
    }
    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
