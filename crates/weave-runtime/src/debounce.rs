use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::debug;

use weave_core::models::{ChangeEvent, RelationshipId};

/// Default quiet period before a burst of changes is considered settled.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(1_500);
/// How often the pump checks for settled work.
const TICK: Duration = Duration::from_millis(250);

/// What a drain produced: settled relationship ids, and whether a
/// network-wide invalidation (e.g. a preferences change) is pending.
#[derive(Debug, Default)]
pub struct ReadySet {
    pub ids: Vec<RelationshipId>,
    pub bulk: bool,
}

impl ReadySet {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && !self.bulk
    }
}

/// Coalesces change events per relationship: a burst of rapid changes to
/// one relationship triggers a single recomputation once the burst goes
/// quiet.
pub struct Debouncer {
    quiet: Duration,
    pending: DashMap<RelationshipId, Instant>,
    bulk_pending: AtomicBool,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: DashMap::new(),
            bulk_pending: AtomicBool::new(false),
        }
    }

    /// Note a change event. Each new event restarts the quiet period for
    /// the relationships it touches.
    pub fn mark(&self, event: &ChangeEvent) {
        let now = Instant::now();
        match event {
            ChangeEvent::PreferencesChanged => {
                self.bulk_pending.store(true, Ordering::SeqCst);
            }
            _ => {
                for id in event.affected_relationships() {
                    self.pending.insert(id.clone(), now);
                }
            }
        }
    }

    /// Drain everything whose quiet period has elapsed as of `at`.
    pub fn drain_ready(&self, at: Instant) -> ReadySet {
        let ids: Vec<RelationshipId> = self
            .pending
            .iter()
            .filter(|entry| at.duration_since(*entry.value()) >= self.quiet)
            .map(|entry| entry.key().clone())
            .collect();
        for id in &ids {
            self.pending.remove(id);
        }

        ReadySet {
            ids,
            bulk: self.bulk_pending.swap(false, Ordering::SeqCst),
        }
    }

    /// Drain everything regardless of elapsed time (shutdown flush).
    pub fn drain_all(&self) -> ReadySet {
        let ids: Vec<RelationshipId> =
            self.pending.iter().map(|entry| entry.key().clone()).collect();
        self.pending.clear();

        ReadySet {
            ids,
            bulk: self.bulk_pending.swap(false, Ordering::SeqCst),
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

/// Pump change events from the host into the debouncer, invoking
/// `on_ready` with each settled batch. Runs until the sender side closes,
/// then flushes whatever is still pending.
pub async fn pump<F>(
    mut events: mpsc::UnboundedReceiver<ChangeEvent>,
    debouncer: Arc<Debouncer>,
    mut on_ready: F,
) where
    F: FnMut(ReadySet),
{
    let mut tick = tokio::time::interval(TICK);
    loop {
        tokio::select! {
            maybe = events.recv() => {
                match maybe {
                    Some(event) => debouncer.mark(&event),
                    None => break,
                }
            }
            _ = tick.tick() => {
                let ready = debouncer.drain_ready(Instant::now());
                if !ready.is_empty() {
                    debug!(count = ready.ids.len(), bulk = ready.bulk, "changes settled");
                    on_ready(ready);
                }
            }
        }
    }

    let leftovers = debouncer.drain_all();
    if !leftovers.is_empty() {
        on_ready(leftovers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(id: &str) -> ChangeEvent {
        ChangeEvent::RelationshipChanged { id: id.to_string() }
    }

    #[test]
    fn bursts_coalesce_to_one_entry() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        for _ in 0..5 {
            debouncer.mark(&changed("r-1"));
        }
        assert_eq!(debouncer.pending_len(), 1);
    }

    #[test]
    fn drain_respects_the_quiet_period() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();
        debouncer.mark(&changed("r-1"));

        assert!(debouncer.drain_ready(start).is_empty());

        let settled = debouncer.drain_ready(start + Duration::from_millis(150));
        assert_eq!(settled.ids, vec!["r-1".to_string()]);
        assert_eq!(debouncer.pending_len(), 0);
    }

    #[test]
    fn preference_changes_flag_a_bulk_invalidation() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        debouncer.mark(&ChangeEvent::PreferencesChanged);

        let ready = debouncer.drain_ready(Instant::now());
        assert!(ready.bulk);
        assert!(ready.ids.is_empty());

        // The flag is one-shot.
        assert!(!debouncer.drain_ready(Instant::now()).bulk);
    }
}
