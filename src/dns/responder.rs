use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use crate::dns::codec;

/// Maximum plain-DNS datagram size.
const MAX_DATAGRAM: usize = 512;

pub struct DnsResponder {
    socket: UdpSocket,
    answer: Ipv4Addr,
}

impl DnsResponder {
    /// Binds the UDP endpoint. A bind failure is fatal and propagates.
    pub async fn bind(addr: &str, answer: Ipv4Addr) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!("DNS catch-all listening on {}", socket.local_addr()?);

        Ok(Self { socket, answer })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Answers every query with the configured address until the process
    /// ends. Receive and send failures are logged and the loop keeps going.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut buf = [0u8; MAX_DATAGRAM];

        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!("DNS receive failed: {e}");
                    continue;
                }
            };

            // Too short to carry a header: malformed, not worth answering
            let Some(response) = codec::build_response(&buf[..len], self.answer) else {
                debug!("dropping {len}-byte datagram from {peer}");
                continue;
            };

            if let Err(e) = self.socket.send_to(&response, peer).await {
                warn!("DNS send to {peer} failed: {e}");
            }
        }
    }
}
