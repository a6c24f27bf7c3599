//! Minimal HTTP/1.1 server serving canned pages for integration tests.
//!
//! Each path maps to a status and a body. Unknown paths get 404. The
//! `User-Agent` of every request is recorded so tests can assert on it.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

pub struct PageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(pages: Vec<(&str, Page)>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, Page>> = Arc::new(
        pages
            .into_iter()
            .map(|(path, page)| (path.to_string(), page))
            .collect(),
    );
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &pages, &seen));
        }
    });
    PageServer {
        base: format!("http://127.0.0.1:{}", port),
        user_agents,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    pages: &HashMap<String, Page>,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);
    if let Some(ua) = user_agent {
        seen.lock().unwrap().push(ua.to_string());
    }

    let not_found = Page::status(404);
    let page = pages.get(path).unwrap_or(&not_found);
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        page.status,
        reason(page.status),
        page.body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&page.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Returns (request path including query, optional User-Agent value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut path = "";
    let mut user_agent = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if path.is_empty() {
            path = line.split_whitespace().nth(1).unwrap_or("");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
