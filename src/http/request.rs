/// HTTP request methods.
///
/// The server speaks a restricted subset of HTTP/1.0: GET is the only
/// method it accepts. Anything else on the wire is a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

/// Represents a parsed request line from a client.
///
/// Derived from the framed request head; immutable once produced and
/// dropped when the connection closes. Header lines after the request
/// line are intentionally never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (always GET)
    pub method: Method,
    /// The request target (e.g., "/index.html"), as sent on the wire
    pub target: String,
    /// Minor version from "HTTP/1.<n>"
    pub http_minor: u8,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is a method this server accepts,
    /// `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserv::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }
}
