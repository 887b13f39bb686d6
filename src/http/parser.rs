use crate::http::request::Method;

/// Parses a request line into method and path.
///
/// Best-effort: a garbled or truncated line degrades to `(None, "/")`
/// rather than erroring, so the connection still gets an answer.
pub fn parse_request_line(line: &str) -> (Option<Method>, String) {
    let mut parts = line.split_whitespace();

    let method = parts.next().and_then(Method::from_str);
    let path = parts.next().unwrap_or("/").to_string();

    (method, path)
}

/// Splits a `Name: value` header line. Lines without a colon yield `None`
/// and are ignored by the caller.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    Some((name.trim(), value.trim()))
}
