use std::fmt;

use async_trait::async_trait;

/// The three cadastral lookup keys, exactly as typed by the user.
///
/// Values are trimmed and validated digits-only before any request is built —
/// the QARS columns are numeric, and raw text must never reach the `where`
/// clause (see `validate`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub zone: String,
    pub street: String,
    pub building: String,
}

impl AddressQuery {
    pub fn new(
        zone: impl Into<String>,
        street: impl Into<String>,
        building: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            street: street.into(),
            building: building.into(),
        }
    }

    /// Checks that every field is a non-empty run of ASCII digits after
    /// trimming. Anything else would be interpolated into the query's
    /// `where` clause, so it is rejected up front.
    pub fn validate(&self) -> Result<(), GisError> {
        for (name, value) in [
            ("zone", &self.zone),
            ("street", &self.street),
            ("building", &self.building),
        ] {
            let trimmed = value.trim();
            if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GisError::InvalidField {
                    field: name,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A planar coordinate pair in the service's native spatial reference,
/// consumed as geographic by the map viewer (longitude = x, latitude = y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Errors that can occur while resolving an address.
/// `NoMatch` has its own user-facing message; everything else collapses into
/// one generic message (see `user_message`).
#[derive(Debug)]
pub enum GisError {
    /// A query field is empty or not a number. Caught before any request.
    InvalidField { field: &'static str, value: String },
    /// The service answered with zero features. The address does not exist.
    NoMatch,
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned a non-2xx response.
    Api { status: u16, message: String },
    /// The response body was not the expected feature JSON.
    Parse(String),
}

/// Shown when a field fails validation, before any request is made.
pub const INVALID_FIELD_MESSAGE: &str = "Zone, street, and building must be numbers.";

/// Shown when the service answers with zero matching features.
pub const NO_MATCH_MESSAGE: &str = "Invalid address entered.";

/// Shown for every transport-level failure, without distinguishing the cause.
pub const LOOKUP_FAILED_MESSAGE: &str = "An error occurred while fetching the coordinates.";

impl GisError {
    /// The fixed single-line message presented to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            GisError::InvalidField { .. } => INVALID_FIELD_MESSAGE,
            GisError::NoMatch => NO_MATCH_MESSAGE,
            GisError::Network(_) | GisError::Api { .. } | GisError::Parse(_) => {
                LOOKUP_FAILED_MESSAGE
            }
        }
    }
}

impl fmt::Display for GisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GisError::InvalidField { field, value } => {
                write!(f, "invalid {field} number: {value:?}")
            }
            GisError::NoMatch => write!(f, "no matching feature"),
            GisError::Network(msg) => write!(f, "network error: {msg}"),
            GisError::Api { status, message } => {
                write!(f, "GIS error (HTTP {status}): {message}")
            }
            GisError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GisError {}

/// The seam between the application and the geocoding service.
/// Production uses `QarsResolver`; tests substitute a stub.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Returns the name of the resolver.
    fn name(&self) -> &str;

    /// Resolves an address to the first matching feature's coordinates.
    async fn resolve(&self, query: &AddressQuery) -> Result<Coordinates, GisError>;
}
