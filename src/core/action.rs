//! # Actions
//!
//! Everything that can happen in Wain becomes an `Action`.
//! User presses Enter on a filled form? That's `Action::Submit(query)`.
//! The lookup task reports back? That's `Action::LookupFinished(result)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` for the event loop to execute. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The submission lifecycle is a straight line:
//!
//! ```text
//! Idle → Pending → { Success (OpenMap) | Error (message) } → Idle
//! ```
//!
//! Pending (`is_loading`) is entered only by a valid Submit and cleared by
//! every LookupFinished arm, so the loading indicator can never stick.

use log::{info, warn};

use crate::core::state::App;
use crate::gis::{maps, AddressQuery, Coordinates, GisError};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// The form was submitted with all three fields filled.
    Submit(AddressQuery),
    /// The spawned lookup task finished, one way or the other.
    LookupFinished(Result<Coordinates, GisError>),
    /// The user asked to quit.
    Quit,
}

/// Side effects the event loop must execute after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the async lookup task for this query.
    SpawnLookup(AddressQuery),
    /// Open the map viewer at this URL.
    OpenMap(String),
    Quit,
}

/// The reducer: applies an action to the state and returns the effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(query) => {
            // Pending guard: one in-flight lookup at a time.
            if app.is_loading {
                return Effect::None;
            }

            if let Err(e) = query.validate() {
                warn!("Rejected submission: {}", e);
                app.error = Some(e.user_message().to_string());
                return Effect::None;
            }

            app.error = None;
            app.is_loading = true;
            app.status_message = String::from("Looking up address...");
            Effect::SpawnLookup(query)
        }
        Action::LookupFinished(result) => {
            // Unconditional Pending exit, on every path.
            app.is_loading = false;

            match result {
                Ok(coords) => {
                    app.last_resolved = Some(coords);
                    app.status_message = format!("Found: {}, {}", coords.y, coords.x);
                    let url = maps::search_url(&app.maps_base_url, coords);
                    info!("Lookup succeeded: {}", url);
                    Effect::OpenMap(url)
                }
                Err(e) => {
                    warn!("Lookup failed: {}", e);
                    app.error = Some(e.user_message().to_string());
                    app.status_message = String::from("Enter an address to locate it.");
                    Effect::None
                }
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn valid_query() -> AddressQuery {
        AddressQuery::new("50", "320", "12")
    }

    #[test]
    fn test_submit_enters_pending_and_spawns_lookup() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit(valid_query()));
        assert_eq!(effect, Effect::SpawnLookup(valid_query()));
        assert!(app.is_loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut app = test_app();
        app.error = Some("Invalid address entered.".to_string());
        update(&mut app, Action::Submit(valid_query()));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_submit_while_pending_is_a_no_op() {
        let mut app = test_app();
        app.is_loading = true;
        let effect = update(&mut app, Action::Submit(valid_query()));
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_submit_with_non_numeric_field_never_spawns() {
        let mut app = test_app();
        let query = AddressQuery::new("50", "abc", "12");
        let effect = update(&mut app, Action::Submit(query));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(
            app.error.as_deref(),
            Some("Zone, street, and building must be numbers.")
        );
    }

    #[test]
    fn test_success_clears_pending_and_opens_map() {
        let mut app = test_app();
        update(&mut app, Action::Submit(valid_query()));

        let coords = Coordinates { x: 51.53, y: 25.28 };
        let effect = update(&mut app, Action::LookupFinished(Ok(coords)));

        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.last_resolved, Some(coords));
        assert_eq!(
            effect,
            Effect::OpenMap("https://maps.test/maps/search/?api=1&query=25.28,51.53".to_string())
        );
    }

    #[test]
    fn test_no_match_sets_invalid_address_message() {
        let mut app = test_app();
        update(&mut app, Action::Submit(valid_query()));

        let effect = update(&mut app, Action::LookupFinished(Err(GisError::NoMatch)));

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("Invalid address entered."));
    }

    #[test]
    fn test_transport_failure_sets_generic_message() {
        let mut app = test_app();
        update(&mut app, Action::Submit(valid_query()));

        let effect = update(
            &mut app,
            Action::LookupFinished(Err(GisError::Network("connection refused".to_string()))),
        );

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(
            app.error.as_deref(),
            Some("An error occurred while fetching the coordinates.")
        );
    }

    #[test]
    fn test_pending_is_cleared_on_every_completion_path() {
        for result in [
            Ok(Coordinates { x: 1.0, y: 2.0 }),
            Err(GisError::NoMatch),
            Err(GisError::Parse("bad json".to_string())),
            Err(GisError::Api { status: 503, message: "down".to_string() }),
        ] {
            let mut app = test_app();
            update(&mut app, Action::Submit(valid_query()));
            assert!(app.is_loading);
            update(&mut app, Action::LookupFinished(result));
            assert!(!app.is_loading);
        }
    }

    #[test]
    fn test_quit_action() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
