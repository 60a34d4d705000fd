use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domains::context::Context;

/// Wire-level request or reply for a remote service call.
///
/// A request carries the caller's context as seen at call time; a reply
/// carries whatever context the remote side returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub domain: String,
    pub service: String,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub context: Context,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn set_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn set_content(mut self, content: Option<Value>) -> Self {
        self.content = content;
        self
    }

    pub fn set_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn into_content(self) -> Option<Value> {
        self.content
    }
}
