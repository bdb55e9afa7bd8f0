//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use crate::core::prompt::Prompter;
use crate::core::record::UserRecord;
use crate::core::roster::Roster;

/// One scripted operator answer.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Confirm(bool),
    Cancel,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            is_error: true,
            ..Self::info(title, body)
        }
    }
}

/// A `Prompter` that replays scripted replies and records what it was shown.
///
/// Once the script runs out every prompt is cancelled, so loops always end.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    prompts: Vec<(String, String)>,
    confirms: Vec<(String, String)>,
    notices: Vec<Notice>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn prompt_titles(&self) -> Vec<&str> {
        self.prompts.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn confirm_bodies(&self) -> Vec<&str> {
        self.confirms.iter().map(|(_, b)| b.as_str()).collect()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Bodies of every error notice, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.is_error)
            .map(|n| n.body.as_str())
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&mut self, title: &str, body: &str) -> Option<String> {
        self.prompts.push((title.to_string(), body.to_string()));
        match self.replies.pop_front() {
            Some(Reply::Text(text)) => Some(text),
            Some(Reply::Cancel) | None => None,
            Some(other) => panic!("prompt {title:?} got non-text reply {other:?}"),
        }
    }

    fn prompt_confirm(&mut self, title: &str, body: &str) -> bool {
        self.confirms.push((title.to_string(), body.to_string()));
        match self.replies.pop_front() {
            Some(Reply::Confirm(answer)) => answer,
            Some(Reply::Cancel) | None => false,
            Some(other) => panic!("confirm {title:?} got non-confirm reply {other:?}"),
        }
    }

    fn notify_info(&mut self, title: &str, body: &str) {
        self.notices.push(Notice::info(title, body));
    }

    fn notify_error(&mut self, title: &str, body: &str) {
        self.notices.push(Notice::error(title, body));
    }
}

/// A valid record; panics on bad fixture data.
pub fn record(first: &str, last: &str, age: i64, income: f64) -> UserRecord {
    UserRecord::new(first, last, age, income).unwrap()
}

/// `count` distinct valid records with varied ages and incomes.
pub fn numbered_roster(count: usize) -> Roster {
    (0..count)
        .map(|i| {
            let first = format!("User{}", letters(i));
            let age = 1 + (i as i64 % 125);
            let income = 10_000.5 + i as f64 * 1_234.25;
            record(&first, "Tester", age, income)
        })
        .collect()
}

/// 0 → "a", 25 → "z", 26 → "ba": a letters-only suffix.
fn letters(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}
