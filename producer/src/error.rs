//! Error types for the producer.
//!
//! Startup stages (connect, channel, declare) are fatal; a failed publish
//! only costs the message it was carrying.

use thiserror::Error;

/// Errors raised while talking to the broker.
#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("failed to connect to RabbitMQ: {0}")]
    Connect(#[source] lapin::Error),

    #[error("failed to open a channel: {0}")]
    Channel(#[source] lapin::Error),

    #[error("failed to declare queue {queue}: {source}")]
    DeclareQueue {
        queue: String,
        #[source]
        source: lapin::Error,
    },

    #[error("failed to publish a message to {routing_key}: {source}")]
    Publish {
        routing_key: String,
        #[source]
        source: lapin::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProducerError>;
