/// HTTP status codes the portal emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 204 No Content
    NoContent,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NoContent => 204,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoContent => "No Content",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// A response ready to be framed and written.
///
/// Bodies are always text. Framing headers (Content-Length, Cache-Control,
/// Connection) are derived by the writer, never stored here.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// 200 with a plain-text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok, TEXT_PLAIN, body)
    }

    /// 200 with an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok, TEXT_HTML, body)
    }

    /// 204; never carries a body.
    pub fn no_content() -> Self {
        Self::new(StatusCode::NoContent, TEXT_PLAIN, "")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound, TEXT_PLAIN, "Not found")
    }

    pub fn server_error() -> Self {
        Self::new(StatusCode::InternalServerError, TEXT_PLAIN, "Server error")
    }
}
