//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar behind the dialogs
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputLine`: Single-line text field with cursor
//! - `Dialog`: Modal prompt/notice overlay, owns an `InputLine`
//!
//! Components receive external data as props, not by reaching into global
//! state, and each file carries its own state types, event types, rendering,
//! event handling and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── input_line.rs    (Text field)
//! └── dialog.rs        (Modal overlay)
//! ```

pub mod dialog;
pub mod input_line;
mod title_bar;

pub use dialog::{Dialog, DialogEvent, DialogKind, DialogState};
pub use title_bar::TitleBar;
