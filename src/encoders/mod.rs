pub mod base64;
pub mod cleaner;
pub mod errors;
pub mod framing;
pub mod radix;

// Re-export error types for public API
pub use errors::{CodecError, ErrorKind, find_closest_name};
