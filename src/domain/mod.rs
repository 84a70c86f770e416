//! Domain entities exposed by the federation admin service layer.

pub mod destination;
pub mod types;
