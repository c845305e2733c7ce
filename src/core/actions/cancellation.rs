use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// How many pixels a row task computes between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("render cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// A shareable flag for abandoning a render from another thread, for example
/// when the client that asked for the image goes away.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;
        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let observer = flag.clone();

        assert!(!observer.is_cancelled());

        flag.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn cancelled_display() {
        assert_eq!(Cancelled.to_string(), "render cancelled");
    }
}
