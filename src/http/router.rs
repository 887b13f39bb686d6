use crate::http::request::Method;

/// The route a request resolves to.
///
/// Probe routes exist so the connectivity checks built into client operating
/// systems accept the portal as a gateway; the rest is the application
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Android probe: 204 with an empty body
    Generate204,
    /// iOS/macOS probe: the literal body "Success"
    CaptiveSuccess,
    /// Windows probe: "Microsoft Connect Test"
    ConnectTest,
    /// Windows probe: "Microsoft NCSI"
    Ncsi,
    /// The portal page itself
    Portal,
    /// Live angle reading
    Angle,
    /// Capture a new reference vector
    Recalibrate,
    NotFound,
}

/// Resolves (method, path) to a route.
///
/// Pure first-match dispatch; arm order is the priority order. A request
/// whose method failed to parse can only reach the catch-all.
pub fn route(method: Option<Method>, path: &str) -> Route {
    use Method::{GET, POST};

    match (method, path) {
        (Some(GET), "/generate_204" | "/gen_204") => Route::Generate204,
        (Some(GET), "/hotspot-detect.html" | "/library/test/success.html") => {
            Route::CaptiveSuccess
        }
        (Some(GET), "/connecttest.txt") => Route::ConnectTest,
        (Some(GET), "/ncsi.txt") => Route::Ncsi,
        (Some(GET), p) if p == "/" || p.starts_with("/index.html") => Route::Portal,
        (Some(GET), "/angle") => Route::Angle,
        (Some(GET) | Some(POST), "/recalibrate") => Route::Recalibrate,
        _ => Route::NotFound,
    }
}
