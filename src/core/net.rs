// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 keeps the server from using chunked
// transfer and makes it close the connection when the body is done.

use std::{error::Error, io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Parts of an `http://host[:port]/path` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl HttpUrl {
    pub fn parse(url: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let url = url.trim();
        if url.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://")) {
            return Err(format!("TLS is not supported, use http:// or a local file: {url}").into());
        }
        let rest = match url.get(..7) {
            Some(scheme) if scheme.eq_ignore_ascii_case("http://") => &url[7..],
            _ => return Err(format!("Not an http:// URL: {url}").into()),
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => (h, p.parse::<u16>().map_err(|_| format!("Bad port in URL: {url}"))?),
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(format!("Missing host in URL: {url}").into());
        }

        Ok(Self { host: s!(host), port, path: s!(path) })
    }
}

pub fn is_http_url(s: &str) -> bool {
    let s = s.trim();
    s.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || s.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// GET `url` and return the body, decoded lossily as UTF-8.
/// Any status other than 200 is an error.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let HttpUrl { host, port, path } = HttpUrl::parse(url)?;

    let mut s = TcpStream::connect((host.as_str(), port))?;
    s.set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nAccept: text/csv, text/plain, */*\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    body_of(&buf, url)
}

/// Split a raw HTTP response into status + body.
pub(crate) fn body_of(raw: &[u8], url: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let resp = String::from_utf8_lossy(raw);

    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {status} ({url})").into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
