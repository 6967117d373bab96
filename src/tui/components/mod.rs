//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: simple display drawn directly in `ui.rs`
//!   (title, submit row, error line) from `App` state.
//! - **Stateful (event-driven)**: components that manage local state and
//!   emit events — `TextField` (buffer + cursor) and `AddressForm`
//!   (field focus, submission).
//!
//! Each component file contains its state types, event types, rendering,
//! event handling, and tests — self-contained on purpose.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── text_field.rs     (single-line labelled input)
//! └── address_form.rs   (zone/building/street fields + focus)
//! ```

pub mod address_form;
pub mod text_field;

pub use address_form::{AddressForm, FORM_HEIGHT, FormEvent};
pub use text_field::{FieldEvent, TextField};
