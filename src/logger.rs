//! Logging utilities
//!
//! Startup banner, access logging (Common Log Format) and tagged
//! error/warning output. Everything goes to stdout/stderr; there is no
//! log file support.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

/// One access log line worth of request/response information.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF):
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static asset server started");
    println!("Listening on: http://{addr}");
    println!("Serving root: {}", config.static_files.root);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to bind {addr}: {err}");
}

pub fn log_shutdown() {
    println!("[Shutdown] Listener closed, exiting");
}
