use assist_core::log_store::LogStore;
use assist_core::ticket::TicketRegistry;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TicketRegistry>,
    pub log: Arc<LogStore>,
}

impl AppState {
    pub fn new(registry: TicketRegistry, log: LogStore) -> Self {
        Self {
            registry: Arc::new(registry),
            log: Arc::new(log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_store() {
        let state = AppState::new(
            TicketRegistry::seeded(),
            LogStore::new("/tmp/assist-test/accepted_log.json"),
        );
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.log, &other.log));
        assert_eq!(other.registry.len(), 2);
    }
}
