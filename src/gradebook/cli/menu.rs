//! # Menu Controller
//!
//! A small state machine over [`MenuState`]. Each call to [`Menu::step`]
//! runs one screen (print, prompt, dispatch to the API) and returns the next
//! state. [`Menu::run`] steps until `Terminated`.
//!
//! ```text
//!            ┌──── 1,3,4 ────┐
//!            ▼               │
//!        MainMenu ───────────┘
//!         │  │ 5 / end of input
//!       2 │  └──────────────────────► Terminated
//!         ▼
//!     SearchMenu ── 3 / not found ──► MainMenu
//!         │ found
//!         ▼
//!   ManageStudent(id) ── 1,2 ──► ManageStudent(id)
//!         │ 3 / id gone
//!         └──────────────────────────► MainMenu
//! ```
//!
//! `ManageStudent` carries the student's id rather than a reference and looks
//! the record up again on every pass, so nothing borrowed outlives a store
//! mutation.
//!
//! End of input at any prompt behaves like choosing Exit. Running out of
//! attempts abandons the current screen and goes back to the main menu, or
//! exits if it happens at the main menu itself.

use super::render::{print_messages, render_student, render_student_list};
use gradebook::api::{CmdMessage, RosterApi, StudentSelector};
use gradebook::error::{Result, RosterError};
use gradebook::model::{StudentId, GRADE_MAX, GRADE_MIN};
use gradebook::prompt::{Bounds, Prompter};
use gradebook::store::RosterStore;
use std::io::{BufRead, Write};

const MAIN_MENU: &str = "\n====== GRADE MANAGEMENT SYSTEM ======\n\
                         1. Add Student\n\
                         2. Manage Student\n\
                         3. View All Students\n\
                         4. Remove Student\n\
                         5. Exit\n";

const SEARCH_MENU: &str = "\nSearch By:\n1. ID\n2. Name\n3. Back\n";

const MANAGE_MENU: &str = "1. Add Grades\n2. Clear Grades\n3. Back\n";

const MAX_GRADES_PER_ENTRY: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    SearchMenu,
    ManageStudent(StudentId),
    Terminated,
}

pub struct Menu<S: RosterStore, R, W> {
    api: RosterApi<S>,
    prompter: Prompter<R, W>,
    state: MenuState,
}

impl<S: RosterStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(api: RosterApi<S>, prompter: Prompter<R, W>) -> Self {
        Self {
            api,
            prompter,
            state: MenuState::MainMenu,
        }
    }

    /// Drive the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        while self.state != MenuState::Terminated {
            self.step()?;
        }
        let out = self.prompter.out();
        writeln!(out, "Goodbye!")?;
        out.flush()?;
        Ok(())
    }

    /// Run the current screen once and move to the next state.
    pub fn step(&mut self) -> Result<MenuState> {
        let outcome = match self.state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::SearchMenu => self.search_menu(),
            MenuState::ManageStudent(id) => self.manage_student(id),
            MenuState::Terminated => Ok(MenuState::Terminated),
        };

        let next = match outcome {
            Ok(next) => next,
            Err(RosterError::InputClosed) => {
                log::debug!("input closed in {:?}", self.state);
                writeln!(self.prompter.out())?;
                MenuState::Terminated
            }
            Err(e @ RosterError::TooManyAttempts(_)) => {
                print_messages(self.prompter.out(), &[CmdMessage::warning(e.to_string())])?;
                if self.state == MenuState::MainMenu {
                    MenuState::Terminated
                } else {
                    MenuState::MainMenu
                }
            }
            Err(e) => return Err(e),
        };

        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        write!(self.prompter.out(), "{}", MAIN_MENU)?;
        let choice = self
            .prompter
            .prompt_int("Choose an option: ", Bounds::new(1, 5))?;

        match choice {
            1 => {
                self.add_student()?;
                Ok(MenuState::MainMenu)
            }
            2 => Ok(MenuState::SearchMenu),
            3 => {
                self.list_students()?;
                Ok(MenuState::MainMenu)
            }
            4 => {
                self.remove_student()?;
                Ok(MenuState::MainMenu)
            }
            _ => Ok(MenuState::Terminated),
        }
    }

    fn add_student(&mut self) -> Result<()> {
        let name = self.prompter.prompt_line("Enter student name: ")?;

        let id = loop {
            let value = self
                .prompter
                .prompt_int("Enter student ID (positive number): ", Bounds::at_least(1))?;
            let id = StudentId::try_from(value).map_err(|_| RosterError::InvalidId(value))?;
            if !self.api.id_exists(id) {
                break id;
            }
            writeln!(self.prompter.out(), "This ID already exists. Try another one.")?;
        };

        let result = self.api.add_student(name, id)?;
        print_messages(self.prompter.out(), &result.messages)?;
        Ok(())
    }

    fn list_students(&mut self) -> Result<()> {
        let result = self.api.list_students()?;
        let out = self.prompter.out();
        if result.listed_students.is_empty() {
            writeln!(out)?;
        }
        render_student_list(out, &result.listed_students)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    fn remove_student(&mut self) -> Result<()> {
        let id = self
            .prompter
            .prompt_int("Enter ID to remove: ", Bounds::UNBOUNDED)?;
        let result = self.api.remove_student(id)?;
        print_messages(self.prompter.out(), &result.messages)?;
        Ok(())
    }

    fn search_menu(&mut self) -> Result<MenuState> {
        write!(self.prompter.out(), "{}", SEARCH_MENU)?;
        let selector = match self.prompter.prompt_int("Choose: ", Bounds::new(1, 3))? {
            1 => StudentSelector::Id(self.prompter.prompt_int("Enter ID: ", Bounds::UNBOUNDED)?),
            2 => StudentSelector::Name(self.prompter.prompt_line("Enter name: ")?),
            _ => return Ok(MenuState::MainMenu),
        };

        let result = self.api.find_student(&selector)?;
        match result.listed_students.first() {
            Some(student) => Ok(MenuState::ManageStudent(student.id())),
            None => {
                print_messages(self.prompter.out(), &result.messages)?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn manage_student(&mut self, id: StudentId) -> Result<MenuState> {
        let out = self.prompter.out();
        let Some(student) = self.api.student(id) else {
            print_messages(out, &[CmdMessage::error("Student not found!")])?;
            return Ok(MenuState::MainMenu);
        };
        write!(out, "\nManaging: {}\n", student.name())?;
        render_student(out, student)?;
        write!(out, "{}", MANAGE_MENU)?;

        let result = match self.prompter.prompt_int("Select option: ", Bounds::new(1, 3))? {
            1 => {
                let count = self
                    .prompter
                    .prompt_int("How many grades? ", Bounds::new(1, MAX_GRADES_PER_ENTRY))?;
                let mut grades = Vec::new();
                for _ in 0..count {
                    grades.push(
                        self.prompter
                            .prompt_int("Enter grade (0-100): ", Bounds::new(GRADE_MIN, GRADE_MAX))?,
                    );
                }
                self.api.add_grades(id, &grades)?
            }
            2 => self.api.clear_grades(id)?,
            _ => return Ok(MenuState::MainMenu),
        };

        print_messages(self.prompter.out(), &result.messages)?;
        Ok(MenuState::ManageStudent(id))
    }
}

#[cfg(test)]
impl<S: RosterStore, R: BufRead, W: Write> Menu<S, R, W> {
    fn state(&self) -> MenuState {
        self.state
    }

    fn api(&self) -> &RosterApi<S> {
        &self.api
    }

    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
