//! One-shot HTTP/1.1 stub for exercising the fetch path without the network.
//!
//! Answers every connection with a fixed status and body, optionally after a
//! delay, and forwards the raw request head so tests can inspect it.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub struct StubServer {
    pub base_url: url::Url,
    requests: Receiver<String>,
}

impl StubServer {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO)
    }

    /// Like `start`, but every response is held back for `delay`.
    pub fn start_delayed(status: u16, body: &str, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::channel();
        let body = body.to_string();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle(stream, status, &body, delay, &tx);
            }
        });
        Self {
            base_url: url::Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap(),
            requests: rx,
        }
    }

    /// Raw head of the next request the server received.
    pub fn next_request(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("no request received")
    }
}

fn handle(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    delay: Duration,
    requests: &Sender<String>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let _ = requests.send(String::from_utf8_lossy(&head).into_owned());
    thread::sleep(delay);
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
