//! Static file serving
//!
//! Resolves URL paths against the configured root directory, loads file
//! contents and builds the response. All misses, including blocked
//! traversal attempts, surface as 404.

use crate::config::StaticFilesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve the file matching the request path, or 404.
pub async fn serve(ctx: &RequestContext<'_>, files: &StaticFilesConfig) -> Response<Full<Bytes>> {
    match load_from_root(&files.root, ctx.path, &files.index_files).await {
        Some((content, content_type)) => {
            http::build_file_response(content, content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve a request path to a file under `root` and read it.
///
/// The path is percent-decoded first, then sanitized, so `/my%20file.txt`
/// finds `my file.txt` while encoded traversal (`%2e%2e%2f`) is still
/// rejected. Directory targets (including `/` and paths ending in `/`)
/// are resolved through the configured index file list. Returns `None`
/// for anything that is not a readable regular file inside the root.
pub async fn load_from_root(
    root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let decoded = match urlencoding::decode(path) {
        Ok(d) => d,
        Err(e) => {
            logger::log_warning(&format!("Rejected undecodable request path: {path} ({e})"));
            return None;
        }
    };

    let relative = match sanitize_request_path(&decoded) {
        Some(p) => p,
        None => {
            logger::log_warning(&format!("Rejected request path: {path}"));
            return None;
        }
    };

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Root directory inaccessible '{root}': {e}"));
            return None;
        }
    };

    let mut file_path = root_canonical.join(&relative);

    // Directory targets go through the index file list
    if file_path.is_dir() {
        let index = index_files
            .iter()
            .map(|name| file_path.join(name))
            .find(|candidate| candidate.is_file())?;
        file_path = index;
    }

    // Containment check on the resolved path; symlinks pointing outside
    // the root are rejected here as well.
    let Ok(file_canonical) = file_path.canonicalize() else {
        // Missing file, plain 404
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(&file_canonical);
    Some((content, content_type))
}

/// Turn a request path into a relative filesystem path.
///
/// Rejects paths containing `..` components, NUL bytes, or absolute
/// components before any filesystem access happens. An empty result
/// (the `/` request) maps to the root itself.
fn sanitize_request_path(path: &str) -> Option<PathBuf> {
    if path.contains('\0') {
        return None;
    }

    let trimmed = path.trim_start_matches('/');
    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir and Prefix all escape the served tree
            _ => return None,
        }
    }
    Some(relative)
}
