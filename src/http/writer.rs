use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Frames a response: status line, derived headers, blank line, body.
/// 204 responses never carry body bytes.
fn serialize_response(resp: &Response) -> Vec<u8> {
    let header = format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.body.len(),
    );

    let mut buf = header.into_bytes();
    if resp.status != StatusCode::NoContent {
        buf.extend_from_slice(resp.body.as_bytes());
    }

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
