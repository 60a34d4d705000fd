use std::io::{Read, Write};
use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, warn};

use crate::config::{InvokerConfig, StatusPolicy};
use crate::domains::envelope::Envelope;
use crate::error::{InvokerError, Result};
use crate::factories::serializer_factory::{FormatSerializer, SerializerFactory};
use crate::interfaces::exchange::{Exchange, MessageContent};
use crate::interfaces::invoker::{InvocationOutcome, RemoteInvoker};
use crate::interfaces::serializer::{FormatType, Serializer};
use crate::interfaces::transport::{Transport, STATUS_OK};
use crate::services::call::{CallState, RemoteCall};
use crate::services::context_filter::clean_context;
use crate::services::transport::HttpTransport;

/// Remote service invoker which uses HTTP as a transport.
///
/// Holds nothing mutable: concurrent calls are safe as long as the
/// serializer is.
pub struct HttpInvoker<S: Serializer = FormatSerializer> {
    endpoint: Url,
    serializer: S,
    transport: Arc<dyn Transport>,
    status_policy: StatusPolicy,
}

impl HttpInvoker {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| InvokerError::invalid_address(endpoint, e))?;
        Self::from_url(url)
    }

    pub fn from_url(endpoint: Url) -> Result<Self> {
        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InvokerError::invalid_address(
                    endpoint.as_str(),
                    format!("unsupported scheme `{other}`"),
                ))
            }
        }
        if endpoint.host_str().map_or(true, str::is_empty) {
            return Err(InvokerError::invalid_address(endpoint.as_str(), "missing host"));
        }
        Ok(Self {
            endpoint,
            serializer: SerializerFactory::create_with(FormatType::Json, true),
            transport: Arc::new(HttpTransport::new()?),
            status_policy: StatusPolicy::default(),
        })
    }

    pub fn from_config(config: &InvokerConfig) -> Result<Self> {
        let serializer =
            SerializerFactory::create_with(config.format(), config.pretty.unwrap_or(true));
        Ok(Self::new(&config.endpoint)?
            .with_serializer(serializer)
            .with_status_policy(config.status_policy()))
    }
}

impl<S: Serializer> HttpInvoker<S> {
    pub fn with_serializer<T: Serializer>(self, serializer: T) -> HttpInvoker<T> {
        HttpInvoker {
            endpoint: self.endpoint,
            serializer,
            transport: self.transport,
            status_policy: self.status_policy,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Runs one request through `call`, which records every state the call
    /// passes through. `call` must be fresh; a used one is rejected untouched.
    pub fn execute(&self, call: &mut RemoteCall, mut request: Envelope) -> Result<Option<Envelope>> {
        if call.state() != CallState::Idle {
            return Err(InvokerError::CallReused(request.service().to_string()));
        }
        debug!(service = request.service(), endpoint = %self.endpoint, "invoking remote service");

        let content_type = self.serializer.format().content_type();
        let mut conn = call.step(CallState::Connecting, || {
            let mut conn = self.transport.open(&self.endpoint, content_type)?;
            conn.set_do_output(true);
            conn.connect()?;
            Ok(conn)
        })?;

        clean_context(request.context_mut());

        call.step(CallState::Sending, || {
            let out = conn.output_stream()?;
            self.serializer.serialize(&request, &mut *out)?;
            out.flush()?;
            conn.close_output()
        })?;

        let status = call.step(CallState::AwaitingStatus, || conn.response_code())?;
        if status != STATUS_OK {
            return match self.status_policy {
                StatusPolicy::EmptyReply => {
                    warn!(service = request.service(), status, "remote endpoint sent no reply");
                    call.advance(CallState::NoReply);
                    call.advance(CallState::Done);
                    Ok(None)
                }
                StatusPolicy::Fault => {
                    call.fail();
                    Err(InvokerError::UnexpectedStatus(status))
                }
            };
        }

        debug!(service = request.service(), "processing reply");
        let reply = call.step(CallState::Receiving, || {
            let mut body = Vec::new();
            conn.input_stream()?.read_to_end(&mut body)?;
            self.serializer.deserialize::<Envelope, _>(body.as_slice())
        })?;
        call.advance(CallState::Done);
        Ok(Some(reply))
    }

    fn request_from(exchange: &dyn Exchange) -> Envelope {
        let provider = exchange.provider();
        Envelope::new()
            .set_domain(provider.domain)
            .set_service(provider.service)
            .set_content(exchange.message().content().as_value().cloned())
            .set_context(exchange.context().clone())
    }
}

impl<S: Serializer> RemoteInvoker for HttpInvoker<S> {
    fn invoke(&self, exchange: &mut dyn Exchange) -> InvocationOutcome {
        let request = Self::request_from(exchange);
        match self.invoke_envelope(request) {
            Ok(reply) => {
                let content = reply.and_then(Envelope::into_content);
                exchange
                    .message_mut()
                    .set_content(MessageContent::from_value(content.clone()));
                let message = exchange.message().clone();
                exchange.send(message);
                InvocationOutcome::Reply(content)
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "remote invocation failed");
                let err = Arc::new(err);
                let mut fault = exchange.create_message();
                fault.set_content(MessageContent::Fault(Arc::clone(&err)));
                exchange.send_fault(fault);
                InvocationOutcome::Fault(err)
            }
        }
    }

    fn invoke_envelope(&self, request: Envelope) -> Result<Option<Envelope>> {
        let mut call = RemoteCall::new(request.service());
        self.execute(&mut call, request)
    }
}
