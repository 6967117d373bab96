pub mod maps;
pub mod qars;
pub mod resolver;

pub use qars::{DEFAULT_QARS_BASE_URL, QarsResolver};
pub use resolver::{
    AddressQuery, AddressResolver, Coordinates, GisError, INVALID_FIELD_MESSAGE,
    LOOKUP_FAILED_MESSAGE, NO_MATCH_MESSAGE,
};
