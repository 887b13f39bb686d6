//! Connection acceptance and the state shared across connections.

pub mod listener;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::sensor::tracker::AngleTracker;

/// State every connection handler sees.
///
/// The tracker sits behind one async mutex shared with the background
/// sampler, so a bus transaction (including its retry sleeps) never
/// interleaves with another.
pub struct AppState<A> {
    pub tracker: Arc<Mutex<AngleTracker<A>>>,
    pub config: Config,
}

impl<A> AppState<A> {
    pub fn new(tracker: Arc<Mutex<AngleTracker<A>>>, config: Config) -> Self {
        Self { tracker, config }
    }
}
