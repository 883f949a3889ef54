//! Queue and message descriptors for the task queue.
//!
//! This module defines:
//! - the `task_queue` declaration (durable, shared, kept when unused)
//! - the fixed plain-text message published onto it

use lapin::{options::QueueDeclareOptions, BasicProperties};

/// Queue name for published tasks.
pub const TASK_QUEUE: &str = "task_queue";

/// Body of every published task.
pub const TASK_BODY: &str = "Hello World!";

/// Content type of every published task.
pub const TEXT_PLAIN: &str = "text/plain";

/// AMQP delivery mode asking the broker to write the message to disk.
pub const PERSISTENT: u8 = 2;

/// Properties a queue is declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSpec {
    /// Queue name, also the routing key on the default exchange
    pub name: String,
    /// Survives a broker restart
    pub durable: bool,
    /// Restricted to the declaring connection
    pub exclusive: bool,
    /// Deleted once the last consumer goes away
    pub auto_delete: bool,
}

impl QueueSpec {
    /// The durable work queue tasks are published to.
    pub fn task_queue() -> Self {
        Self {
            name: TASK_QUEUE.to_string(),
            durable: true,
            exclusive: false,
            auto_delete: false,
        }
    }

    /// Options for `queue.declare`. Never passive and never no-wait, so
    /// the broker always answers with the declared queue.
    pub fn declare_options(&self) -> QueueDeclareOptions {
        QueueDeclareOptions {
            passive: false,
            durable: self.durable,
            exclusive: self.exclusive,
            auto_delete: self.auto_delete,
            nowait: false,
        }
    }
}

/// A message as handed to the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub body: Vec<u8>,
    pub content_type: String,
    pub delivery_mode: u8,
}

impl Message {
    /// The fixed task message.
    pub fn task() -> Self {
        Self {
            body: TASK_BODY.as_bytes().to_vec(),
            content_type: TEXT_PLAIN.to_string(),
            delivery_mode: PERSISTENT,
        }
    }

    /// AMQP properties: content type and delivery mode, nothing else.
    pub fn properties(&self) -> BasicProperties {
        BasicProperties::default()
            .with_delivery_mode(self.delivery_mode)
            .with_content_type(self.content_type.clone().into())
    }

    /// Body as text, for logging.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_queue_flags() {
        let spec = QueueSpec::task_queue();
        assert_eq!(spec.name, "task_queue");

        let options = spec.declare_options();
        assert!(options.durable);
        assert!(!options.exclusive);
        assert!(!options.auto_delete);
        assert!(!options.passive);
        assert!(!options.nowait);
    }

    #[test]
    fn test_task_message() {
        let message = Message::task();
        assert_eq!(message.body, b"Hello World!");
        assert_eq!(message.body_text(), "Hello World!");
    }

    #[test]
    fn test_task_message_properties() {
        let properties = Message::task().properties();

        assert_eq!(properties.delivery_mode(), &Some(PERSISTENT));
        assert_eq!(
            properties.content_type().as_ref().map(|s| s.as_str()),
            Some("text/plain")
        );
        assert!(properties.message_id().is_none());
        assert!(properties.correlation_id().is_none());
        assert!(properties.headers().is_none());
    }
}
