use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide round-robin position over the default pool.
///
/// Starts at 0, is never reset and is not persisted. Each step is a single
/// atomic read-modify-write that stores a value already reduced modulo the
/// pool length, so the cursor never leaves `[0, len)`. Concurrent callers may
/// be served in an order that differs from arrival order.
pub struct RotationCursor {
    position: AtomicUsize,
}

impl RotationCursor {
    pub fn new() -> Self {
        Self {
            position: AtomicUsize::new(0),
        }
    }

    /// Returns the current index and advances by one, wrapping at `len`.
    pub fn advance(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let previous = self
            .position
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| {
                Some((i % len + 1) % len)
            })
            .unwrap_or_else(|i| i);
        previous % len
    }

    pub fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }
}

impl Default for RotationCursor {
    fn default() -> Self {
        Self::new()
    }
}
