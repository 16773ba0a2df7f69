//! Static file server for the Omnivore web app
//!
//! Serves the Leptos WASM bundle from the dist/ directory on port 8080

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const BIND_ADDR: &str = "127.0.0.1:8080";
const DIST_ROOT: &str = "dist";

fn main() {
    let listener = TcpListener::bind(BIND_ADDR).expect("Failed to bind to port 8080");

    println!("Omnivore dev server running at http://{}", BIND_ADDR);
    println!("Serving from {}/ directory", DIST_ROOT);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    // Request target is the second token of "GET /path HTTP/1.1"
    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = match full_path.split_once('?') {
        Some((path, _query)) => path,
        None => full_path,
    };

    let file_path = resolve_path(path);
    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body, content_type_for(&file_path)),
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to a file under dist/, serving index.html for
/// directories and unknown paths so client-side routes keep working.
fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from(DIST_ROOT).join("index.html");
    }

    let candidate = PathBuf::from(DIST_ROOT).join(path.trim_start_matches('/'));
    if candidate.is_dir() || !candidate.exists() {
        PathBuf::from(DIST_ROOT).join("index.html")
    } else {
        candidate
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
