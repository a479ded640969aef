use std::{cell::Cell, rc::Rc};

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Hands out increasing tickets; only the most recent ticket is current.
///
/// Each keystroke takes a ticket and waits. When the wait ends the work runs
/// only if no newer ticket was taken in the meantime.
#[derive(Clone, Default)]
pub struct DebounceGate {
    latest: Rc<Cell<u64>>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }

    /// Invalidates every outstanding ticket.
    pub fn cancel(&self) {
        self.ticket();
    }

    /// Waits `delay_ms` and reports whether `ticket` is still the latest.
    pub async fn settle(&self, ticket: u64, delay_ms: u32) -> bool {
        sleep(delay_ms).await;
        self.is_current(ticket)
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(_delay_ms: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let gate = DebounceGate::new();
        let first = gate.ticket();
        let second = gate.ticket();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let gate = DebounceGate::new();
        let other = gate.clone();
        let ticket = gate.ticket();
        other.ticket();
        assert!(!gate.is_current(ticket));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let gate = DebounceGate::new();
        let ticket = gate.ticket();
        gate.cancel();
        assert!(!gate.is_current(ticket));
    }

    #[test]
    fn superseded_run_never_fires() {
        let gate = DebounceGate::new();
        let stale = gate.ticket();
        let fresh = gate.ticket();
        let (stale_runs, fresh_runs) = futures::executor::block_on(async {
            (
                gate.settle(stale, SEARCH_DEBOUNCE_MS).await,
                gate.settle(fresh, SEARCH_DEBOUNCE_MS).await,
            )
        });
        assert!(!stale_runs);
        assert!(fresh_runs);
    }
}
