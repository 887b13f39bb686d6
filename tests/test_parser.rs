use tiltportal::http::parser::{parse_header, parse_request_line};
use tiltportal::http::request::Method;

#[test]
fn test_parse_simple_get_request_line() {
    let (method, path) = parse_request_line("GET /angle HTTP/1.1");

    assert_eq!(method, Some(Method::GET));
    assert_eq!(path, "/angle");
}

#[test]
fn test_parse_post_request_line() {
    let (method, path) = parse_request_line("POST /recalibrate HTTP/1.1");

    assert_eq!(method, Some(Method::POST));
    assert_eq!(path, "/recalibrate");
}

#[test]
fn test_parse_various_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected) in methods {
        let line = format!("{} / HTTP/1.1", method_str);
        let (method, _) = parse_request_line(&line);
        assert_eq!(method, Some(expected));
    }
}

#[test]
fn test_unknown_method_degrades_to_none() {
    let (method, path) = parse_request_line("BREW /coffee HTCPCP/1.0");

    assert_eq!(method, None);
    assert_eq!(path, "/coffee");
}

#[test]
fn test_lowercase_method_is_not_recognized() {
    let (method, _) = parse_request_line("get / HTTP/1.1");

    assert_eq!(method, None);
}

#[test]
fn test_empty_line_degrades_to_defaults() {
    let (method, path) = parse_request_line("");

    assert_eq!(method, None);
    assert_eq!(path, "/");
}

#[test]
fn test_method_only_line_defaults_the_path() {
    let (method, path) = parse_request_line("GET");

    assert_eq!(method, Some(Method::GET));
    assert_eq!(path, "/");
}

#[test]
fn test_path_with_query_string_is_kept_verbatim() {
    let (_, path) = parse_request_line("GET /index.html?source=probe HTTP/1.1");

    assert_eq!(path, "/index.html?source=probe");
}

#[test]
fn test_parse_header_splits_and_trims() {
    assert_eq!(
        parse_header("Content-Length:  42 "),
        Some(("Content-Length", "42"))
    );
    assert_eq!(
        parse_header("Host: 192.168.4.1"),
        Some(("Host", "192.168.4.1"))
    );
}

#[test]
fn test_header_value_may_contain_colons() {
    assert_eq!(
        parse_header("Referer: http://192.168.4.1/"),
        Some(("Referer", "http://192.168.4.1/"))
    );
}

#[test]
fn test_header_without_colon_is_rejected() {
    assert_eq!(parse_header("BrokenHeader"), None);
}
