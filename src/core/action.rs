//! # Actions
//!
//! Everything the operator can pick becomes an `Action`. The main menu
//! answer maps to a menu action, the paginated view answer to a `PageKey`.
//!
//! ```text
//! "a" / "A"  →  Action::Add
//! cancel     →  Action::Quit
//! "?" / ""   →  Action::Invalid
//! ```
//!
//! Parsing lives here so the controller loop stays a plain `match`.

/// Main menu entries, in display order.
pub const MENU: [(char, &str); 5] = [
    ('A', "Add user"),
    ('V', "View users"),
    ('S', "Search users"),
    ('D', "Delete user"),
    ('Q', "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    View,
    Search,
    Delete,
    Quit,
    Invalid,
}

impl Action {
    /// Map the main menu answer. `None` (cancelled prompt) quits.
    pub fn from_choice(choice: Option<&str>) -> Self {
        let Some(choice) = choice else {
            return Action::Quit;
        };
        match choice.trim().to_uppercase().as_str() {
            "A" => Action::Add,
            "V" => Action::View,
            "S" => Action::Search,
            "D" => Action::Delete,
            "Q" => Action::Quit,
            _ => Action::Invalid,
        }
    }
}

/// `[A] Add user` lines, one per entry.
pub fn menu_text() -> String {
    MENU.iter()
        .map(|(key, label)| format!("[{key}] {label}\n"))
        .collect()
}

/// Navigation answer on a page of the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Previous,
    Next,
    Exit,
}

impl PageKey {
    /// `P`/`N` navigate; `X`, cancel, and anything unrecognised leave the view.
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer.map(|a| a.trim().to_uppercase()).as_deref() {
            Some("P") => PageKey::Previous,
            Some("N") => PageKey::Next,
            _ => PageKey::Exit,
        }
    }
}
