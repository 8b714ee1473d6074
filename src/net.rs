// src/net.rs

// HTTP/1.0 GET over TCP (std-only). The server closes the connection at
// the end, so there is no chunked transfer to deal with.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

fn get_raw(host: &str, path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: lookbook/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;

    // Headers are ASCII; scan for the blank line without assuming the
    // body is valid UTF-8 (photos are not).
    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or("Malformed HTTP response")?;

    let head = String::from_utf8_lossy(&buf[..split]);
    let status = head.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }

    Ok(buf[split + 4..].to_vec())
}

/// GET returning a text body (the catalog feed).
pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let body = get_raw(host, path)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// GET returning raw bytes (catalog photos).
pub fn http_get_bytes(host: &str, path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    get_raw(host, path)
}

/// Split an http URL into (host, path-with-query). Scheme prefix optional;
/// https URLs are accepted but fetched over plain HTTP on port 80.
pub fn split_url(url: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    if host.is_empty() {
        return Err(format!("Bad URL: {}", url).into());
    }
    Ok((s!(host), join!("/", path)))
}
