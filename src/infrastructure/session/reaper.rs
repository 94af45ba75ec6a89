//! Background task that purges expired sessions.

use std::sync::Arc;
use std::time::Duration;

use super::SessionStore;

/// Purges expired sessions from `store` every `period`, forever.
///
/// Spawned once at server start.
pub async fn run_session_reaper(store: Arc<SessionStore>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let purged = store.purge_expired().await;
        if purged > 0 {
            tracing::info!(purged, "Expired sessions purged");
        }
    }
}
