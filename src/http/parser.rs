use crate::http::request::{Method, Request};

/// Maximum length of the request target, matching the request buffer.
pub const MAX_TARGET_BYTES: usize = 4096;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidTarget,
    InvalidVersion,
}

/// Parses the request line out of a framed request head.
///
/// Grammar: `"GET " <target> " HTTP/1." <minor> "\r\n"`, where `<target>`
/// is a non-empty token without whitespace. Everything after the first
/// CRLF (header lines, if any) is ignored. No partial result is ever
/// produced; any mismatch is a [`ParseError`].
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf
        .windows(2)
        .position(|w| w == b"\r\n")
        .ok_or(ParseError::InvalidRequest)?;

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidRequest)?;

    // Request line: exactly three space-separated parts
    let mut parts = line.split(' ');

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    if parts.next().is_some() {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    if target.is_empty()
        || target.len() > MAX_TARGET_BYTES
        || target.chars().any(|c| c.is_whitespace())
    {
        return Err(ParseError::InvalidTarget);
    }

    let minor = version
        .strip_prefix("HTTP/1.")
        .ok_or(ParseError::InvalidVersion)?;

    if minor.is_empty() || !minor.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidVersion);
    }

    let http_minor: u8 = minor.parse().map_err(|_| ParseError::InvalidVersion)?;

    Ok(Request {
        method,
        target: target.to_string(),
        http_minor,
    })
}
