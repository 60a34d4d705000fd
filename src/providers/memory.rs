use serde_json::Value;

use crate::domains::context::Context;
use crate::interfaces::exchange::{Exchange, Message, MessageContent, ServiceReference};

/// In-process exchange that records what the invoker answered.
#[derive(Debug, Clone)]
pub struct MemoryExchange {
    provider: ServiceReference,
    message: Message,
    context: Context,
    sent: Vec<Message>,
    faults: Vec<Message>,
}

impl MemoryExchange {
    pub fn new(provider: ServiceReference, content: Option<Value>) -> Self {
        Self {
            provider,
            message: Message::new(MessageContent::from_value(content)),
            context: Context::new(),
            sent: Vec::new(),
            faults: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn sent(&self) -> &[Message] {
        &self.sent
    }

    pub fn faults(&self) -> &[Message] {
        &self.faults
    }

    pub fn last_reply(&self) -> Option<&Message> {
        self.sent.last()
    }

    pub fn last_fault(&self) -> Option<&Message> {
        self.faults.last()
    }
}

impl Exchange for MemoryExchange {
    fn provider(&self) -> ServiceReference {
        self.provider.clone()
    }

    fn message(&self) -> &Message {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    fn send(&mut self, message: Message) {
        self.message = message.clone();
        self.sent.push(message);
    }

    fn send_fault(&mut self, message: Message) {
        self.message = message.clone();
        self.faults.push(message);
    }
}
