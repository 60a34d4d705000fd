use std::io::{Read, Write};

use reqwest::blocking::{Client, Response};
use reqwest::header::{CONNECTION, CONTENT_TYPE};
use reqwest::Url;

use crate::error::{InvokerError, Result};
use crate::interfaces::transport::{BoxedConnection, Connection, Transport};

/// Blocking HTTP transport: one POST per connection. Idle connections are
/// never pooled, so no socket is shared between calls.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| InvokerError::TransportIo(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn open(&self, endpoint: &Url, content_type: &str) -> Result<BoxedConnection> {
        Ok(Box::new(HttpConnection {
            client: self.client.clone(),
            endpoint: endpoint.clone(),
            content_type: content_type.to_string(),
            do_output: false,
            phase: Phase::Open,
            body: Vec::new(),
        }))
    }
}

enum Phase {
    Open,
    Connected,
    Responded(Response),
}

/// Request body is buffered until the output side is closed, at which point
/// the request is sent and the response head is read.
pub struct HttpConnection {
    client: Client,
    endpoint: Url,
    content_type: String,
    do_output: bool,
    phase: Phase,
    body: Vec<u8>,
}

impl HttpConnection {
    fn response(&mut self) -> Result<&mut Response> {
        if !matches!(self.phase, Phase::Responded(_)) {
            self.close_output()?;
        }
        match &mut self.phase {
            Phase::Responded(response) => Ok(response),
            _ => Err(InvokerError::TransportIo("no response available".to_string())),
        }
    }
}

impl Connection for HttpConnection {
    fn set_do_output(&mut self, enabled: bool) {
        self.do_output = enabled;
    }

    /// Only arms the connection for output. The TCP handshake happens when
    /// the request is sent in `close_output`, so a refused connection is
    /// reported from there.
    fn connect(&mut self) -> Result<()> {
        if let Phase::Open = self.phase {
            self.phase = Phase::Connected;
        }
        Ok(())
    }

    fn output_stream(&mut self) -> Result<&mut dyn Write> {
        if !self.do_output {
            return Err(InvokerError::TransportIo(
                "connection was not opened for output".to_string(),
            ));
        }
        match self.phase {
            Phase::Connected => Ok(&mut self.body),
            Phase::Open => Err(InvokerError::TransportIo(
                "connection not established".to_string(),
            )),
            Phase::Responded(_) => Err(InvokerError::TransportIo(
                "output already closed".to_string(),
            )),
        }
    }

    fn close_output(&mut self) -> Result<()> {
        match self.phase {
            Phase::Open => {
                return Err(InvokerError::TransportIo("connection not established".to_string()))
            }
            Phase::Responded(_) => return Ok(()),
            Phase::Connected => {}
        }
        let body = std::mem::take(&mut self.body);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, self.content_type.as_str())
            .header(CONNECTION, "close")
            .body(body)
            .send()
            .map_err(|e| InvokerError::TransportIo(e.to_string()))?;
        self.phase = Phase::Responded(response);
        Ok(())
    }

    fn response_code(&mut self) -> Result<u16> {
        Ok(self.response()?.status().as_u16())
    }

    fn input_stream(&mut self) -> Result<Box<dyn Read + '_>> {
        let response = self.response()?;
        Ok(Box::new(response))
    }
}
