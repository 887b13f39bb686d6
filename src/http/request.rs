/// HTTP request methods.
///
/// Anything outside this set parses to `None` and can only reach the 404
/// catch-all route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed request.
///
/// Only the request line and the two headers the server interprets are kept;
/// the body is drained off the socket and discarded. A request that failed
/// to parse carries the defaults (`method: None`, `path: "/"`).
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Option<Method>,
    pub path: String,
    pub host: Option<String>,
    pub content_length: usize,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: None,
            path: "/".to_string(),
            host: None,
            content_length: 0,
        }
    }
}
