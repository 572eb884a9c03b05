//! Domain primitives, ports, and services.
//!
//! Purpose: define the user record model and the registration/listing
//! use-cases independently of HTTP and of the document store. Inbound and
//! outbound adapters depend on this module, never the reverse.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure category and message.
//! - User / UserId: listing projection of a stored record.
//! - UserRegistration: validated registration input.
//! - UserDirectoryService: implements the registration and listing ports.

pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::registration::{RegistrationValidationError, UserRegistration};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError};
pub use self::user_directory::{EMAIL_ALREADY_EXISTS, UserDirectoryService};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
