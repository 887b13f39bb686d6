use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::{self, Route};
use crate::http::writer::ResponseWriter;
use crate::portal;
use crate::sensor::Accelerometer;
use crate::server::AppState;

/// Rendered for `/angle` when the sensor is unavailable.
const ANGLE_PLACEHOLDER: &str = "--.--";

/// One accepted client connection: read the request, drain its body,
/// dispatch, write one response, close.
pub struct Connection<A> {
    stream: TcpStream,
    state: Arc<AppState<A>>,
}

impl<A: Accelerometer> Connection<A> {
    pub fn new(stream: TcpStream, state: Arc<AppState<A>>) -> Self {
        Self { stream, state }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = self.stream.split();
        let mut reader = BufReader::new(read_half);

        let Some(request) = read_request(&mut reader).await? else {
            // Peer closed before sending a request line; nothing to answer
            return Ok(());
        };

        let route = router::route(request.method, &request.path);
        debug!(?route, path = %request.path, "dispatching request");

        // A handler fault becomes a 500 while the stream is still writable
        let response = match dispatch(&self.state, route).await {
            Ok(response) => response,
            Err(e) => {
                warn!("handler failed: {e}");
                Response::server_error()
            }
        };

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut write_half).await?;

        Ok(())
    }
}

/// Reads the request line, headers and declared body off the socket.
///
/// Returns `None` when the peer closed before sending anything. Malformed
/// lines degrade to the request defaults rather than failing the
/// connection. Only Content-Length and Host are interpreted; the body is
/// discarded, tolerating a short read.
async fn read_request<R>(reader: &mut R) -> anyhow::Result<Option<Request>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line).await? == 0 {
        return Ok(None);
    }

    let start_line = String::from_utf8_lossy(&line);
    let (method, path) = parser::parse_request_line(start_line.trim());
    let mut request = Request {
        method,
        path,
        ..Default::default()
    };

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&line);
        let text = text.trim();
        if text.is_empty() {
            break;
        }

        if let Some((name, value)) = parser::parse_header(text) {
            if name.eq_ignore_ascii_case("content-length") {
                request.content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("host") {
                request.host = Some(value.to_string());
            }
        }
    }

    if request.content_length > 0 {
        let mut sink = tokio::io::sink();
        let _ = tokio::io::copy(&mut reader.take(request.content_length as u64), &mut sink).await;
    }

    Ok(Some(request))
}

async fn dispatch<A: Accelerometer>(
    state: &AppState<A>,
    route: Route,
) -> anyhow::Result<Response> {
    let response = match route {
        Route::Generate204 => Response::no_content(),
        Route::CaptiveSuccess => Response::html("Success"),
        Route::ConnectTest => Response::text("Microsoft Connect Test"),
        Route::Ncsi => Response::text("Microsoft NCSI"),
        Route::Portal => Response::html(portal::render(
            state.config.angle_mode.as_str(),
            &state.config.ssid,
        )),
        Route::Angle => {
            let mut tracker = state.tracker.lock().await;
            match tracker.delta().await {
                Ok(delta) => Response::text(format!("{delta:+.2}")),
                Err(e) => {
                    debug!("angle unavailable: {e}");
                    Response::text(ANGLE_PLACEHOLDER)
                }
            }
        }
        Route::Recalibrate => {
            let mut tracker = state.tracker.lock().await;
            match tracker.recalibrate().await {
                Ok(()) => Response::text("OK"),
                Err(e) => {
                    warn!("recalibration failed: {e}");
                    Response::text("ERR")
                }
            }
        }
        Route::NotFound => Response::not_found(),
    };

    Ok(response)
}
