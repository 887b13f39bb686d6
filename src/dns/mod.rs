//! Catch-all DNS responder.
//!
//! Every query, regardless of name or record type, is answered with a single
//! A record pointing at the portal so captive-portal detection on client
//! devices resolves here.

pub mod codec;
pub mod responder;

pub use responder::DnsResponder;
