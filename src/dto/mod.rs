//! Data transfer objects exchanged between services and routes.

pub mod destinations;
pub mod errors;
