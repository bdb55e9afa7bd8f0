//! # User Records
//!
//! A `UserRecord` is one roster entry: first name, last name, age, income.
//!
//! Every field is private and only reachable through validating setters, so a
//! record can never be observed in an invalid state. Construction runs the
//! same setters in order and stops at the first failure.
//!
//! ```text
//! raw input ──► pattern / range check ──► normalize ──► stored
//!                    │
//!                    └─ ValidationError (nothing stored)
//! ```

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 125;
pub const INCOME_MIN: f64 = 10_000.50;
pub const INCOME_MAX: f64 = 500_000.75;

/// Letters, hyphens and spaces. Checked against the raw input, before trimming.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z -]+$").expect("name pattern is valid"));

/// Field-level contract violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} must contain only alphabetical characters, hyphens, and spaces.")]
    NameCharacters(NameField),
    #[error("{0} cannot be blank.")]
    NameBlank(NameField),
    #[error("Age must be between 1 and 125.")]
    AgeOutOfRange(i64),
    #[error("Income must be between 10,000.50 and 500,000.75.")]
    IncomeOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameField::First => write!(f, "First name"),
            NameField::Last => write!(f, "Last name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    first_name: String,
    last_name: String,
    age: i64,
    income: f64,
}

impl UserRecord {
    /// Build a record, validating first name, last name, age, income in that order.
    pub fn new(
        first_name: &str,
        last_name: &str,
        age: i64,
        income: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: normalize_name(first_name, NameField::First)?,
            last_name: normalize_name(last_name, NameField::Last)?,
            age: check_age(age)?,
            income: check_income(income)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// `"First Last"`, the key used by search and delete.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name = normalize_name(value, NameField::First)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name = normalize_name(value, NameField::Last)?;
        Ok(())
    }

    pub fn set_age(&mut self, value: i64) -> Result<(), ValidationError> {
        self.age = check_age(value)?;
        Ok(())
    }

    pub fn set_income(&mut self, value: f64) -> Result<(), ValidationError> {
        self.income = check_income(value)?;
        Ok(())
    }
}

/// True when `value` only uses the characters a name may contain.
pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

fn normalize_name(value: &str, field: NameField) -> Result<String, ValidationError> {
    if !is_valid_name(value) {
        return Err(ValidationError::NameCharacters(field));
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameBlank(field));
    }
    Ok(title_case(trimmed))
}

fn check_age(value: i64) -> Result<i64, ValidationError> {
    if (AGE_MIN..=AGE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::AgeOutOfRange(value))
    }
}

fn check_income(value: f64) -> Result<f64, ValidationError> {
    // NaN fails `contains`, so non-finite input is rejected here too
    if (INCOME_MIN..=INCOME_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::IncomeOutOfRange(value))
    }
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_letter = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
