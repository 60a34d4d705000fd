use std::sync::Arc;

use serde_json::Value;

use crate::domains::context::Context;
use crate::error::InvokerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReference {
    pub domain: String,
    pub service: String,
}

impl ServiceReference {
    pub fn new(domain: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum MessageContent {
    #[default]
    Empty,
    Data(Value),
    Fault(Arc<InvokerError>),
}

impl MessageContent {
    pub fn from_value(value: Option<Value>) -> Self {
        value.map(MessageContent::Data).unwrap_or_default()
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            MessageContent::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_fault(&self) -> Option<&InvokerError> {
        match self {
            MessageContent::Fault(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MessageContent::Empty)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Message {
    pub content: MessageContent,
}

impl Message {
    pub fn new(content: MessageContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn set_content(&mut self, content: MessageContent) -> &mut Self {
        self.content = content;
        self
    }
}

/// Local service call handed to a remote invoker.
///
/// The exchange is already bound to a resolved provider and carries the
/// outbound message; the invoker answers through `send` or `send_fault`.
pub trait Exchange {
    fn provider(&self) -> ServiceReference;
    fn message(&self) -> &Message;
    fn message_mut(&mut self) -> &mut Message;
    fn context(&self) -> &Context;
    fn context_mut(&mut self) -> &mut Context;
    fn create_message(&self) -> Message {
        Message::default()
    }
    fn send(&mut self, message: Message);
    fn send_fault(&mut self, message: Message);
}
