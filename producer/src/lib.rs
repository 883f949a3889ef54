//! Task producer - keeps a durable RabbitMQ work queue fed.
//!
//! The library holds everything the `task-producer` binary does:
//! - `config`: broker host and credentials from the environment
//! - `queue`: queue/message descriptors and the broker seam
//! - `publisher`: startup sequence and the fixed-cadence publish loop
//!
//! ## Flow
//!
//! ```text
//! Config → connect → channel → declare task_queue → publish every 100ms
//! ```

pub mod config;
pub mod error;
pub mod publisher;
pub mod queue;
pub mod shutdown;

// Re-export commonly used types
pub use config::Config;
pub use error::{ProducerError, Result};
pub use publisher::{bootstrap, PublishStats, Publisher, PUBLISH_INTERVAL};
pub use queue::{AmqpBroker, Broker, Message, QueueSpec, TASK_QUEUE};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
