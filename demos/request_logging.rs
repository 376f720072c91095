//! Request logging example
//!
//! Serves a few requests over a plain TCP listener and logs one `http` line
//! per finished request.
//!
//! Run with: cargo run --example request_logging

use marvin_logger::log_args;
use marvin_logger::prelude::*;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

struct Request {
    method: String,
    url: String,
    peer: Option<SocketAddr>,
}

impl RequestInfo for Request {
    fn method(&self) -> &str {
        &self.method
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn remote_addr(&self) -> Option<String> {
        self.peer.map(|addr| addr.ip().to_string())
    }
}

struct Response {
    status: u16,
}

impl ResponseInfo for Response {
    fn status_code(&self) -> u16 {
        self.status
    }
}

fn handle(logger: &Logger, stream: TcpStream) -> std::io::Result<()> {
    let mut timer = RequestTimer::start();
    let peer = stream.peer_addr().ok();

    let mut reader = BufReader::new(&stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut header = String::new();
    while reader.read_line(&mut header)? > 2 {
        header.clear();
    }
    let mut parts = request_line.split_whitespace();
    let request = Request {
        method: parts.next().unwrap_or("GET").to_string(),
        url: parts.next().unwrap_or("/").to_string(),
        peer,
    };

    let response = Response {
        status: if request.url == "/" { 200 } else { 404 },
    };

    let mut writer = &stream;
    write!(
        writer,
        "HTTP/1.1 {} OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n",
        response.status
    )?;
    timer.mark_headers_sent();
    writer.write_all(b"OK")?;

    if let Err(e) = logger.log_request(&timer, &request, &response) {
        eprintln!("request log failed: {}", e);
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    println!("=== Marvin Logger - Request Logging Example ===\n");

    let logger = Logger::new();
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let _ = logger.important(log_args!["[Webserver]", "Listening on", addr.to_string()]);

    let client = thread::spawn(move || -> std::io::Result<()> {
        for path in ["/", "/missing"] {
            let mut stream = TcpStream::connect(addr)?;
            write!(stream, "GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path)?;
            let mut body = String::new();
            std::io::Read::read_to_string(&mut stream, &mut body)?;
        }
        Ok(())
    });

    for stream in listener.incoming().take(2) {
        handle(&logger, stream?)?;
    }

    client
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("client thread panicked")))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
