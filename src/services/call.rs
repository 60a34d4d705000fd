use std::fmt;

use tracing::trace;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Idle,
    Connecting,
    Sending,
    AwaitingStatus,
    Receiving,
    NoReply,
    Done,
    Failed,
}

impl CallState {
    pub fn is_terminal(self) -> bool {
        matches!(self, CallState::Done | CallState::Failed)
    }

    pub fn can_advance_to(self, next: CallState) -> bool {
        use CallState::*;
        match (self, next) {
            (Idle, Connecting)
            | (Connecting, Sending)
            | (Sending, AwaitingStatus)
            | (AwaitingStatus, Receiving)
            | (AwaitingStatus, NoReply)
            | (Receiving, Done)
            | (NoReply, Done) => true,
            (current, Failed) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Progress of a single remote call. A fresh value is used for every call.
#[derive(Debug)]
pub struct RemoteCall {
    service: String,
    state: CallState,
    history: Vec<CallState>,
}

impl RemoteCall {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            state: CallState::Idle,
            history: vec![CallState::Idle],
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn history(&self) -> &[CallState] {
        &self.history
    }

    pub fn advance(&mut self, next: CallState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal call transition {} -> {}",
            self.state,
            next
        );
        trace!(service = %self.service, from = %self.state, to = %next, "call state");
        self.state = next;
        self.history.push(next);
    }

    pub fn fail(&mut self) {
        if !self.state.is_terminal() {
            self.advance(CallState::Failed);
        }
    }

    /// Enters `next` and runs `op`; an error moves the call to `Failed`.
    pub fn step<T>(&mut self, next: CallState, op: impl FnOnce() -> Result<T>) -> Result<T> {
        self.advance(next);
        let result = op();
        if result.is_err() {
            self.fail();
        }
        result
    }
}
