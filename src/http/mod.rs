//! HTTP protocol layer
//!
//! MIME detection and response builders, decoupled from the static file
//! business logic.

pub mod mime;
pub mod response;

pub use response::{build_404_response, build_405_response, build_file_response};
