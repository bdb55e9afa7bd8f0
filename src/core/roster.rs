//! # Roster
//!
//! The in-memory, insertion-ordered list of records plus the read-side
//! helpers the controller needs: substring search, exact full-name lookup,
//! and page slicing.
//!
//! ```text
//! Roster
//! └── records: Vec<UserRecord>   // insertion order, duplicates allowed
//!
//! Pager
//! ├── page: usize                // 0-based current page
//! └── page_count: usize          // ceil(len / page_size), at least 1
//! ```

use crate::core::record::UserRecord;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Records whose lowercased `"first last"` contains the lowercased term.
    pub fn search(&self, term: &str) -> Vec<&UserRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Index of the first record whose full name equals `name`, ignoring case.
    pub fn position_by_full_name(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .position(|r| r.full_name().to_lowercase() == wanted)
    }

    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.records.get(index)
    }

    pub fn remove(&mut self, index: usize) -> UserRecord {
        self.records.remove(index)
    }

    /// Records on the 0-based `page`. Empty past the end.
    pub fn page(&self, page: usize, page_size: usize) -> &[UserRecord] {
        let page_size = page_size.max(1);
        let start = page.saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }
}

impl FromIterator<UserRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Page cursor for the paginated view. Moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_count: usize,
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page: 0,
            page_count: total.div_ceil(page_size).max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` if the page changed.
    pub fn previous(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the page changed.
    pub fn next(&mut self) -> bool {
        if self.page + 1 < self.page_count {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

/// `$1,234,567.89`: thousands separators, two decimals.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// One display line: `Ann Lee - Age: 30, Annual Income: $45,000.00`.
pub fn format_record(record: &UserRecord) -> String {
    format!(
        "{} {} - Age: {}, Annual Income: {}",
        record.first_name(),
        record.last_name(),
        record.age(),
        format_currency(record.income())
    )
}
