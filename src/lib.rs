//! Bygaetter engine library.
//!
//! Exposes the city catalog, geodesic scoring, session state machine, and
//! protocol modules for use by integration tests and the binary entry point.

pub mod catalog;
pub mod engine;
pub mod geo;
pub mod protocol;
pub mod session;
pub mod silhouette;
