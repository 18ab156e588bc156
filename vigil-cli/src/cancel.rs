//! Cancellation token
//!
//! The watch loop has no natural stopping point of its own, so cancellation
//! is threaded through it explicitly: the binary wires the handle to Ctrl+C,
//! and tests trigger it directly to end the loop deterministically.

use std::time::Duration;

use tokio::sync::watch;

/// Requests cancellation; held by whoever decides when to stop
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Observes cancellation; threaded through the watch loop
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

/// Create a connected handle/token pair
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    /// Request cancellation
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelToken {
    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Sleep for `duration`, waking early on cancellation
    ///
    /// Returns true if cancellation cut the sleep short. A dropped handle
    /// never counts as cancellation; the sleep then always runs to
    /// completion.
    pub async fn sleep(&self, duration: Duration) -> bool {
        let mut rx = self.rx.clone();
        let cancelled = async move {
            if rx.wait_for(|c| *c).await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = tokio::time::sleep(duration) => false,
            _ = cancelled => true,
        }
    }
}
