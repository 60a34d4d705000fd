use std::sync::Arc;

use serde_json::Value;

use crate::domains::envelope::Envelope;
use crate::error::{InvokerError, Result};
use crate::interfaces::exchange::Exchange;

/// What `invoke` delivered to the exchange.
#[derive(Debug, Clone)]
pub enum InvocationOutcome {
    Reply(Option<Value>),
    Fault(Arc<InvokerError>),
}

impl InvocationOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, InvocationOutcome::Fault(_))
    }
}

pub trait RemoteInvoker: Send + Sync {
    /// Runs the full round trip for `exchange` and answers it through its
    /// reply or fault path. Failures never escape as errors.
    fn invoke(&self, exchange: &mut dyn Exchange) -> InvocationOutcome;

    /// Sends one envelope and returns the decoded reply, or `None` when the
    /// endpoint answered without a reply body to read.
    fn invoke_envelope(&self, request: Envelope) -> Result<Option<Envelope>>;
}
