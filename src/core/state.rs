//! # Application State
//!
//! Core business state for Wain. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── resolver: Arc<dyn AddressResolver>  // geocoding backend
//! ├── maps_base_url: String               // map viewer base URL
//! ├── status_message: String              // status bar text
//! ├── is_loading: bool                    // lookup in flight (Pending)
//! ├── error: Option<String>               // user-facing error line
//! └── last_resolved: Option<Coordinates>  // most recent successful match
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::gis::{AddressResolver, Coordinates};

pub struct App {
    pub resolver: Arc<dyn AddressResolver>,
    pub maps_base_url: String,
    pub status_message: String,
    /// True strictly between Submit and LookupFinished — the Pending state.
    /// Blocks resubmission and drives the loading indicator.
    pub is_loading: bool,
    /// User-facing error line, shown only when set.
    pub error: Option<String>,
    /// Coordinates from the most recent successful lookup.
    pub last_resolved: Option<Coordinates>,
}

impl App {
    pub fn new(resolver: Arc<dyn AddressResolver>, maps_base_url: String) -> Self {
        Self {
            resolver,
            maps_base_url,
            status_message: String::from("Enter an address to locate it."),
            is_loading: false,
            error: None,
            last_resolved: None,
        }
    }

    pub fn from_config(resolver: Arc<dyn AddressResolver>, config: &ResolvedConfig) -> Self {
        Self::new(resolver, config.maps_base_url.clone())
    }
}
