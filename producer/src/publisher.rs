//! Publish loop - keeps the task queue fed at a fixed cadence.
//!
//! Startup runs connect → channel → declare once; any failure there is
//! returned to the caller. After that the loop publishes the same message
//! every interval until its shutdown token fires. A failed publish is
//! logged and dropped, never retried.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::queue::{AmqpBroker, Broker, Message, QueueSpec};
use crate::shutdown::ShutdownToken;

/// Pause between publish attempts.
pub const PUBLISH_INTERVAL: Duration = Duration::from_millis(100);

/// Connect, open a channel and declare the task queue.
///
/// Nothing is published here; the returned publisher is ready to `run`.
pub async fn bootstrap(config: &Config) -> Result<Publisher<AmqpBroker>> {
    let broker = AmqpBroker::connect(&config.amqp_url()).await?;
    Publisher::declare(broker).await
}

/// Counters reported when the loop stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PublishStats {
    /// Messages accepted by the broker
    pub sent: u64,
    /// Attempts that failed and were dropped
    pub failed: u64,
}

/// Publishes one message repeatedly to a single routing key.
pub struct Publisher<B> {
    broker: B,
    routing_key: String,
    message: Message,
    interval: Duration,
}

impl<B: Broker> Publisher<B> {
    /// Create a publisher for the task message at the default cadence.
    pub fn new(broker: B, routing_key: impl Into<String>) -> Self {
        Self {
            broker,
            routing_key: routing_key.into(),
            message: Message::task(),
            interval: PUBLISH_INTERVAL,
        }
    }

    /// Declare the task queue on `broker` and publish to it.
    ///
    /// The broker-confirmed queue name becomes the routing key.
    pub async fn declare(broker: B) -> Result<Self> {
        let queue = broker.declare_queue(&QueueSpec::task_queue()).await?;
        Ok(Self::new(broker, queue))
    }

    #[cfg(test)]
    fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The broker this publisher sends through.
    pub fn broker(&self) -> &B {
        &self.broker
    }

    /// Give the broker back, e.g. to close it.
    pub fn into_broker(self) -> B {
        self.broker
    }

    /// One publish attempt.
    pub async fn publish_once(&self) -> Result<()> {
        self.broker.publish(&self.routing_key, &self.message).await
    }

    /// Publish until `shutdown` fires.
    ///
    /// Every iteration makes exactly one attempt, then sleeps the interval.
    /// The sleep is cut short when shutdown is requested.
    pub async fn run(&self, mut shutdown: ShutdownToken) -> PublishStats {
        let mut stats = PublishStats::default();

        info!(
            queue = %self.routing_key,
            interval_ms = self.interval.as_millis() as u64,
            "publisher_started"
        );

        while !shutdown.is_shutdown() {
            match self.publish_once().await {
                Ok(()) => {
                    stats.sent += 1;
                    info!(
                        queue = %self.routing_key,
                        body = %self.message.body_text(),
                        body_length = self.message.body.len(),
                        "message_sent"
                    );
                }
                Err(e) => {
                    stats.failed += 1;
                    error!(
                        queue = %self.routing_key,
                        error = %e,
                        "message_publish_failed"
                    );
                }
            }

            tokio::select! {
                _ = sleep(self.interval) => {}
                _ = shutdown.cancelled() => {}
            }
        }

        info!(sent = stats.sent, failed = stats.failed, "publisher_stopped");
        stats
    }
}
