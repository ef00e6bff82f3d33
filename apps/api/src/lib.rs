//! Profile completion scoring for athlete profiles.
//!
//! The engine lives in [`completion`]; the rest wires it into an HTTP service.

pub mod completion;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
