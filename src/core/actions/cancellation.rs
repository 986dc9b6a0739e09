use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Monotonic generation source shared by every unit of work a controller issues.
///
/// Issuing a new generation implicitly invalidates every token issued before it.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation and returns its token.
    #[must_use]
    pub fn advance(self: &Arc<Self>) -> GenerationToken {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;

        GenerationToken {
            generation,
            counter: Arc::clone(self),
        }
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

/// Ticket carried by one in-flight unit of work. Compared against the shared
/// counter at completion time; no per-request flag is allocated.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    generation: u64,
    counter: Arc<GenerationCounter>,
}

impl GenerationToken {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.counter.current() == self.generation
    }
}

impl CancelToken for GenerationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        !self.is_current()
    }
}
