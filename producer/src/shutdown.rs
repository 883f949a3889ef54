//! Cooperative shutdown signal for the publish loop.

use tokio::sync::watch;

/// Receiving half, checked by the loop between publishes.
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Check if shutdown was requested.
    ///
    /// A dropped sender counts as a request.
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait until shutdown is requested.
    pub async fn cancelled(&mut self) {
        // wait_for errors only when the sender is gone
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}

/// Sending half, owned by whoever decides when the loop ends.
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Ask the loop to stop after the current iteration.
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a shutdown channel.
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_token_starts_running() {
        let (_tx, token) = shutdown_channel();
        assert!(!token.is_shutdown());
    }

    #[tokio::test]
    async fn test_shutdown_wakes_waiter() {
        let (tx, mut token) = shutdown_channel();

        let waiter = tokio::spawn(async move {
            token.cancelled().await;
            token.is_shutdown()
        });

        tx.shutdown();
        let seen = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .expect("waiter should not panic");
        assert!(seen);
    }

    #[tokio::test]
    async fn test_dropped_sender_counts_as_shutdown() {
        let (tx, mut token) = shutdown_channel();
        drop(tx);

        assert!(token.is_shutdown());
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("cancelled should resolve once the sender is gone");
    }
}
