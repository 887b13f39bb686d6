//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server: every response closes the
//! connection, bodies are drained but never interpreted, and malformed
//! requests degrade to defaults instead of failing the connection; captive
//! clients send all sorts of half-formed probes and the portal must answer
//! them all.
//!
//! - **`request`**: method and the two interpreted headers
//! - **`parser`**: best-effort request line and header parsing
//! - **`router`**: the pure (method, path) -> route table
//! - **`response`** / **`writer`**: status plus text body, framed at write time
//! - **`connection`**: per-connection task: read, drain, dispatch, write

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
