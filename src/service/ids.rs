use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use clap::ValueEnum;

/// How new users are assigned their `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch at creation time. Two registrations
    /// in the same millisecond receive the same id.
    #[default]
    Timestamp,
    /// Monotonic counter starting at 1, unique for the process lifetime.
    Sequential,
}

/// Source of user ids, shared by every service that creates users.
#[derive(Clone)]
pub struct IdGenerator {
    next_id_fn: Arc<dyn Fn() -> u64 + Send + Sync>,
}

impl IdGenerator {
    pub fn new(next_id_fn: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self { next_id_fn: Arc::new(next_id_fn) }
    }

    pub fn from_strategy(strategy: IdStrategy) -> Self {
        match strategy {
            IdStrategy::Timestamp => Self::timestamp(),
            IdStrategy::Sequential => Self::sequential(),
        }
    }

    pub fn timestamp() -> Self {
        Self::new(|| u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default())
    }

    pub fn sequential() -> Self {
        let counter = Arc::new(AtomicU64::new(1));
        Self::new(move || counter.fetch_add(1, Ordering::SeqCst))
    }

    pub fn next_id(&self) -> u64 {
        (self.next_id_fn)()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
