//! Request dispatch
//!
//! Entry point for HTTP request processing: method validation, access
//! logging, and handoff to static file serving.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context carried through static file serving.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling.
///
/// Never fails; every outcome is an HTTP response.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let response = if let Some(resp) = check_http_method(&method) {
        resp
    } else {
        let ctx = RequestContext {
            path: &path,
            is_head,
        };
        static_files::serve(&ctx, &state.config.static_files).await
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path);
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Reject everything except GET and HEAD; this server only reads files.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}
