//! Request middleware for lifecycle concerns: trace identifiers and CORS.

pub mod cors;
pub mod trace;

pub use cors::permissive_cors;
pub use trace::Trace;
