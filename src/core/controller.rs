//! # Application Controller
//!
//! Owns the roster and its storage file, and drives the menu loop through a
//! `Prompter`. One instance per session, constructed explicitly and passed to
//! whichever front end runs it.
//!
//! ```text
//!            ┌──────────────► Add ────────┐
//!            ├──────────────► View ───────┤
//! MainMenu ──┼──────────────► Search ─────┼──► MainMenu
//!            ├──────────────► Delete ─────┤
//!            ├── invalid ──► error ───────┘
//!            └──────────────► Quit (save, farewell, stop)
//! ```

use log::{debug, info, warn};
use std::path::Path;

use crate::core::action::{Action, PageKey, menu_text};
use crate::core::prompt::{INPUT_ERROR_TITLE, Prompter};
use crate::core::record::{AGE_MAX, AGE_MIN, INCOME_MAX, INCOME_MIN, UserRecord, is_valid_name};
use crate::core::roster::{DEFAULT_PAGE_SIZE, Pager, Roster, format_record};
use crate::core::storage::RosterFile;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How a delete request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(UserRecord),
    Declined,
    NotFound,
    Cancelled,
}

pub struct Controller {
    roster: Roster,
    store: RosterFile,
    page_size: usize,
}

impl Controller {
    pub fn new(store: RosterFile) -> Self {
        Self::with_roster(store, Roster::new())
    }

    pub fn with_roster(store: RosterFile, roster: Roster) -> Self {
        Self {
            roster,
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Read the storage file into the roster, reporting any failure.
    ///
    /// Records read before a bad line are kept.
    pub fn load(&mut self, ui: &mut dyn Prompter) {
        if let Err(e) = self.store.load_into(&mut self.roster) {
            warn!("Load aborted with {} records kept: {}", self.roster.len(), e);
            ui.notify_error(
                "Error Loading Data",
                &format!("An error occurred while loading user data: {e}"),
            );
        }
    }

    /// Write the roster to the storage file, reporting any failure.
    pub fn save(&self, ui: &mut dyn Prompter) {
        if let Err(e) = self.store.save(&self.roster) {
            warn!("Save failed: {}", e);
            ui.notify_error(
                "Error Saving Data",
                &format!("An error occurred while saving user data: {e}"),
            );
        }
    }

    /// Run the menu loop until the operator quits.
    pub fn run(&mut self, ui: &mut dyn Prompter) {
        info!("Menu loop started with {} records", self.roster.len());
        loop {
            let choice = ui.prompt_text("Main Menu", &menu_text());
            let action = Action::from_choice(choice.as_deref());
            if self.dispatch(ui, action) == Flow::Quit {
                break;
            }
        }
        info!("Menu loop finished");
    }

    /// Perform one menu action.
    pub fn dispatch(&mut self, ui: &mut dyn Prompter, action: Action) -> Flow {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Add => {
                self.add_user(ui);
            }
            Action::View => self.view_users(ui),
            Action::Search => self.search_users(ui),
            Action::Delete => {
                self.delete_user(ui);
            }
            Action::Quit => {
                self.quit(ui);
                return Flow::Quit;
            }
            Action::Invalid => ui.notify_error("ERROR", "YOU MUST SELECT FROM THE MENU"),
        }
        Flow::Continue
    }

    /// Collect four fields and append the record. `false` if cancelled.
    pub fn add_user(&mut self, ui: &mut dyn Prompter) -> bool {
        loop {
            let Some(first) = ask_name(ui, "First Name", "Enter first name:") else {
                return false;
            };
            let Some(last) = ask_name(ui, "Last Name", "Enter last name:") else {
                return false;
            };
            let Some(age) = ui.prompt_int("Age", "Enter age:", AGE_MIN, AGE_MAX) else {
                return false;
            };
            let Some(income) = ui.prompt_float(
                "Annual Income",
                "Enter annual income:",
                INCOME_MIN,
                INCOME_MAX,
            ) else {
                return false;
            };

            match UserRecord::new(&first, &last, age, income) {
                Ok(record) => {
                    let message = format!(
                        "{} {} has been added to the user list.",
                        record.first_name(),
                        record.last_name()
                    );
                    info!("Added {}", record.full_name());
                    self.roster.push(record);
                    ui.notify_info("User Added", &message);
                    return true;
                }
                Err(e) => {
                    // Prompt checks passed but the record did not; start over
                    warn!("Record rejected after prompt validation: {}", e);
                    ui.notify_error(INPUT_ERROR_TITLE, &e.to_string());
                }
            }
        }
    }

    /// Page through the roster until the operator exits.
    pub fn view_users(&self, ui: &mut dyn Prompter) {
        if self.roster.is_empty() {
            ui.notify_info("No Users", "There are no users to display.");
            return;
        }

        let mut pager = Pager::new(self.roster.len(), self.page_size);
        loop {
            let title = format!(
                "USER LIST - PAGE {}/{}",
                pager.page() + 1,
                pager.page_count()
            );
            let body = self.page_body(pager.page());
            let answer = ui.prompt_text(&title, &body);
            match PageKey::from_answer(answer.as_deref()) {
                PageKey::Previous => {
                    pager.previous();
                }
                PageKey::Next => {
                    pager.next();
                }
                PageKey::Exit => break,
            }
        }
    }

    /// Text of one page of the user list, navigation hint included.
    pub fn page_body(&self, page: usize) -> String {
        let mut body: String = self
            .roster
            .page(page, self.page_size)
            .iter()
            .map(|r| format_record(r) + "\n")
            .collect();
        body.push_str("\n[P] Previous Page [N] Next Page [X] Exit");
        body
    }

    /// Ask for a term and show every record whose full name contains it.
    pub fn search_users(&self, ui: &mut dyn Prompter) {
        let term = ui
            .prompt_text(
                "Search Users",
                "Enter first name, last name, or both to search:",
            )
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let Some(term) = term else {
            ui.notify_info("Search Cancelled", "User search was cancelled.");
            return;
        };

        let matches = self.roster.search(&term);
        debug!("Search {:?} matched {} records", term, matches.len());
        if matches.is_empty() {
            ui.notify_info("No Matches", "No users found matching your search criteria.");
        } else {
            let body: String = matches.iter().map(|r| format_record(r) + "\n").collect();
            ui.notify_info("Search Results", &body);
        }
    }

    /// Search, then remove one record by exact full name after confirmation.
    pub fn delete_user(&mut self, ui: &mut dyn Prompter) -> DeleteOutcome {
        self.search_users(ui);

        let name = ui
            .prompt_text(
                "Select User to Delete",
                "Enter the full name of the user you want to delete:",
            )
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let Some(name) = name else {
            ui.notify_info("Delete Cancelled", "No user was selected for deletion.");
            return DeleteOutcome::Cancelled;
        };

        let Some(index) = self.roster.position_by_full_name(&name) else {
            info!("Delete requested for unknown user {:?}", name);
            ui.notify_info("User Not Found", "The specified user was not found.");
            return DeleteOutcome::NotFound;
        };

        let full_name = match self.roster.get(index) {
            Some(record) => record.full_name(),
            None => return DeleteOutcome::NotFound,
        };
        let confirmed = ui.prompt_confirm(
            "Confirm Delete",
            &format!("Are you sure you want to delete {full_name}?"),
        );
        if !confirmed {
            ui.notify_info("Delete Cancelled", "User deletion was cancelled.");
            return DeleteOutcome::Declined;
        }

        let removed = self.roster.remove(index);
        info!("Deleted {}", full_name);
        ui.notify_info(
            "User Deleted",
            &format!("{full_name} has been deleted from the user list."),
        );
        DeleteOutcome::Deleted(removed)
    }

    /// Save and say goodbye.
    pub fn quit(&self, ui: &mut dyn Prompter) {
        self.save(ui);
        ui.notify_info("Quitting the program", "Have a nice day");
    }
}

/// Ask for a non-empty name, re-asking on bad input. Returns the trimmed answer.
fn ask_name(ui: &mut dyn Prompter, title: &str, body: &str) -> Option<String> {
    loop {
        let answer = ui.prompt_text(title, body)?;
        if answer.trim().is_empty() {
            ui.notify_error(INPUT_ERROR_TITLE, "Input cannot be empty.");
        } else if !is_valid_name(&answer) {
            ui.notify_error(
                INPUT_ERROR_TITLE,
                "Name must contain only alphabetical characters, hyphens, and spaces.",
            );
        } else {
            return Some(answer.trim().to_string());
        }
    }
}
