//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::gis::{AddressQuery, AddressResolver, Coordinates, GisError};

/// A resolver that replays canned results, for tests that don't need
/// real HTTP. Results are consumed in order; once exhausted it returns
/// `GisError::NoMatch`.
pub struct StubResolver {
    results: Mutex<Vec<Result<Coordinates, GisError>>>,
}

impl StubResolver {
    pub fn new(results: Vec<Result<Coordinates, GisError>>) -> Self {
        Self {
            results: Mutex::new(results),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl AddressResolver for StubResolver {
    fn name(&self) -> &str {
        "stub"
    }

    async fn resolve(&self, query: &AddressQuery) -> Result<Coordinates, GisError> {
        query.validate()?;
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Err(GisError::NoMatch)
        } else {
            results.remove(0)
        }
    }
}

/// Creates a test App with a StubResolver and a fixed map viewer base.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(StubResolver::empty()),
        "https://maps.test".to_string(),
    )
}
