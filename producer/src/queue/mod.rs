//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - Queue and message descriptors for the task queue
//! - The `Broker` seam and its lapin implementation
//!
//! ## Flow
//!
//! ```text
//! Producer → default exchange ("") → task_queue
//! ```

pub mod broker;
pub mod types;

pub use broker::{AmqpBroker, Broker};
pub use types::{Message, QueueSpec, PERSISTENT, TASK_BODY, TASK_QUEUE, TEXT_PLAIN};
