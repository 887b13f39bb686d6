//! DNS wire format for the spoofed response.

use bytes::{BufMut, BytesMut};
use std::net::Ipv4Addr;

/// Fixed DNS header size: id, flags and the four section counts.
pub const HEADER_LEN: usize = 12;

/// Standard response, recursion available, no error.
const RESPONSE_FLAGS: u16 = 0x8180;

/// TYPE A
const TYPE_A: u16 = 1;
/// CLASS IN
const CLASS_IN: u16 = 1;
/// Compression pointer to the question name at offset 12.
const NAME_POINTER: u16 = 0xC00C;
const ANSWER_TTL: u32 = 60;

/// Builds the spoofed response for a query datagram.
///
/// The transaction id, question count and question section are echoed from
/// the query; one synthetic A record pointing back at the question name is
/// appended. Returns `None` for datagrams shorter than the header, which
/// are dropped without an answer.
pub fn build_response(query: &[u8], answer: Ipv4Addr) -> Option<Vec<u8>> {
    if query.len() < HEADER_LEN {
        return None;
    }

    let mut buf = BytesMut::with_capacity(query.len() + 16);

    // Header
    buf.put_slice(&query[0..2]);
    buf.put_u16(RESPONSE_FLAGS);
    buf.put_slice(&query[4..6]);
    buf.put_u16(1); // ANCOUNT
    buf.put_u16(0); // NSCOUNT
    buf.put_u16(0); // ARCOUNT

    // Question section, verbatim
    buf.put_slice(&query[HEADER_LEN..]);

    // Single answer record
    buf.put_u16(NAME_POINTER);
    buf.put_u16(TYPE_A);
    buf.put_u16(CLASS_IN);
    buf.put_u32(ANSWER_TTL);
    buf.put_u16(4);
    buf.put_slice(&answer.octets());

    Some(buf.to_vec())
}
