//! Minimal HTTP/1.1 server standing in for the classification service.
//!
//! Answers every request with a fixed status and body and records the
//! method, path and body of each request it received.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Handle to a running server.
pub struct PredictServer {
    pub origin: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl PredictServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server answering `200 OK` with the given JSON body.
pub fn start_json(body: &str) -> PredictServer {
    start("200 OK", body)
}

/// Starts a server answering `status` with a `Location: <location>` header.
pub fn start_redirect(status: &'static str, location: &str) -> PredictServer {
    start_with_headers(status, format!("Location: {location}\r\n"), "")
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(status: &'static str, body: &str) -> PredictServer {
    start_with_headers(status, String::new(), body)
}

fn start_with_headers(status: &'static str, headers: String, body: &str) -> PredictServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let body = body.to_string();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let recorded = Arc::clone(&recorded);
            let headers = headers.clone();
            let body = body.clone();
            thread::spawn(move || handle(stream, status, &headers, &body, &recorded));
        }
    });
    PredictServer {
        origin: format!("http://127.0.0.1:{port}"),
        requests,
    }
}

/// An origin nobody listens on: the port was bound and released.
pub fn refused_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn handle(
    mut stream: TcpStream,
    status: &str,
    headers: &str,
    body: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    recorded.lock().unwrap().push(request);
    let response = format!(
        "HTTP/1.1 {status}\r\n{headers}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = (head_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[head_end..end]).to_string();

    Some(RecordedRequest {
        method,
        path,
        content_type,
        body,
    })
}
