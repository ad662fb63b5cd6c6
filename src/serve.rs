//! Local preview server.
//!
//! A read-only HTTP file server over the generated output tree, built on
//! `tiny_http`. Request resolution:
//!
//! 1. Exact file match → serve it
//! 2. Directory with `index.html` → serve the index
//! 3. Anything else → 404
//!
//! This is a preview tool for the just-built site, nothing more: requests
//! are handled one at a time on the calling thread, there are no timeouts,
//! and the loop blocks until the process is killed.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiny_http::{Header, Request, Response, Server, StatusCode};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot bind to port {port}: {reason}")]
    Bind { port: u16, reason: String },
}

/// Serve `root` on all interfaces at `port`. Blocks forever.
pub fn serve_site(root: &Path, port: u16) -> Result<(), ServeError> {
    let server = Server::http(("0.0.0.0", port)).map_err(|e| ServeError::Bind {
        port,
        reason: e.to_string(),
    })?;

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, root) {
            println!("request error: {e}");
        }
    }

    Ok(())
}

fn handle_request(request: Request, root: &Path) -> Result<(), ServeError> {
    match resolve_request_path(root, request.url()) {
        Some(path) => serve_file(request, &path),
        None => serve_not_found(request),
    }
}

/// Map a request URL to a file under `root`, or `None` for a 404.
///
/// Strips the query string, rejects parent-directory components, and
/// resolves directories to their `index.html`.
fn resolve_request_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path_part = url.split('?').next().unwrap_or(url);
    let request_path = path_part.trim_matches('/');

    if request_path.split('/').any(|seg| seg == "..") {
        return None;
    }

    let local = root.join(request_path);
    if local.is_file() {
        return Some(local);
    }
    if local.is_dir() {
        let index = local.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }
    None
}

fn serve_file(request: Request, path: &Path) -> Result<(), ServeError> {
    let content = fs::read(path)?;
    let response = Response::from_data(content).with_header(
        // Static byte strings always parse as a header.
        Header::from_bytes("Content-Type", guess_content_type(path)).unwrap(),
    );
    request.respond(response)?;
    Ok(())
}

fn serve_not_found(request: Request) -> Result<(), ServeError> {
    let response = Response::from_string("404 Not Found").with_status_code(StatusCode(404));
    request.respond(response)?;
    Ok(())
}

/// Guess a MIME content type from the file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
