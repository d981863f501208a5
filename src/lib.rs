//! staticd - a small static asset server
//!
//! Binds an HTTP/1.1 listener and serves files from a local root
//! directory. GET and HEAD only; everything that does not resolve to a
//! regular file under the root is a 404.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
