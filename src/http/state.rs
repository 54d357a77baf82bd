use crate::scheduler::MeetingScheduler;
use std::sync::Arc;

/// Shared application state for HTTP handlers
///
/// Read-only; nothing is shared mutably between requests.
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<MeetingScheduler>,
}

impl AppState {
    pub fn new(scheduler: MeetingScheduler) -> Self {
        Self {
            scheduler: Arc::new(scheduler),
        }
    }
}
