use std::path::PathBuf;

pub const HTTP_VERSION: &str = "HTTP/1.0";

/// Fixed head sent before file contents.
///
/// The content type is always `text/html`; this server does no
/// content-type inference.
pub const SUCCESS_HEAD: &str =
    "HTTP/1.0 200 OK\r\nContent-type: text/html; charset=UTF-8\r\n\r\n";

/// HTTP status codes this server can put on the wire.
///
/// Success responses carry the fixed [`SUCCESS_HEAD`]; the only defined
/// error status is 400 Bad Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserv::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
        }
    }
}

/// The single response a connection produces.
#[derive(Debug)]
pub enum Response {
    /// Stream the file at this resource path behind the fixed 200 head.
    File(PathBuf),
    /// An error head with no body, after which the connection closes.
    Error(StatusCode),
}

/// Serializes an error response: status line, `Connection: close`, no body.
pub fn error_head(status: StatusCode) -> String {
    format!(
        "{} {} {}\r\nConnection: close\r\n\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    )
}
