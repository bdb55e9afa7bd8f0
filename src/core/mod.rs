//! # Core Application Logic
//!
//! This module contains the roster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • UserRecord (model)   │
//!                    │  • Roster + storage     │
//!                    │  • Controller (menu)    │
//!                    │                         │
//!                    │  Talks via Prompter.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Console   │
//!            │  Adapter   │            │  Adapter   │
//!            │ (ratatui)  │            │ (stdin)    │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: `UserRecord` and its field validation
//! - [`roster`]: the ordered record list, search, pagination
//! - [`storage`]: the flat text file the roster lives in
//! - [`prompt`]: the `Prompter` capability front ends implement
//! - [`action`]: menu and page-navigation answers
//! - [`controller`]: the menu loop
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod prompt;
pub mod record;
pub mod roster;
pub mod storage;

pub use controller::Controller;
pub use prompt::Prompter;
