#![allow(dead_code)]

use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::Url;
use serde_json::Value;

use remote_invoker::domains::{Context, Envelope};
use remote_invoker::error::{InvokerError, Result};
use remote_invoker::interfaces::exchange::ServiceReference;
use remote_invoker::interfaces::transport::{BoxedConnection, Connection, Transport};
use remote_invoker::providers::memory::MemoryExchange;
use remote_invoker::services::invoker::HttpInvoker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailAt {
    Nowhere,
    Connect,
    Write,
    Status,
    Read,
}

#[derive(Clone, Debug)]
pub enum Reply {
    Echo,
    Bytes(Vec<u8>),
}

struct Script {
    status: u16,
    reply: Reply,
    fail_at: FailAt,
    requests: Mutex<Vec<Vec<u8>>>,
    content_types: Mutex<Vec<String>>,
    opened: AtomicUsize,
    released: AtomicUsize,
}

/// In-process transport that answers from a script and records what was sent.
#[derive(Clone)]
pub struct ScriptedTransport {
    script: Arc<Script>,
}

impl ScriptedTransport {
    pub fn new(status: u16, reply: Reply) -> Self {
        Self::failing(status, reply, FailAt::Nowhere)
    }

    pub fn echo() -> Self {
        Self::new(200, Reply::Echo)
    }

    pub fn failing(status: u16, reply: Reply, fail_at: FailAt) -> Self {
        Self {
            script: Arc::new(Script {
                status,
                reply,
                fail_at,
                requests: Mutex::new(Vec::new()),
                content_types: Mutex::new(Vec::new()),
                opened: AtomicUsize::new(0),
                released: AtomicUsize::new(0),
            }),
        }
    }

    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.script.requests.lock().unwrap().clone()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.script.content_types.lock().unwrap().clone()
    }

    pub fn opened(&self) -> usize {
        self.script.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.script.released.load(Ordering::SeqCst)
    }

    pub fn invoker(&self) -> HttpInvoker {
        HttpInvoker::new("http://remote.test/switchyard-remote")
            .unwrap()
            .with_transport(Arc::new(self.clone()))
    }
}

impl Transport for ScriptedTransport {
    fn open(&self, _endpoint: &Url, content_type: &str) -> Result<BoxedConnection> {
        self.script.opened.fetch_add(1, Ordering::SeqCst);
        self.script
            .content_types
            .lock()
            .unwrap()
            .push(content_type.to_string());
        Ok(Box::new(ScriptedConnection {
            script: Arc::clone(&self.script),
            body: Vec::new(),
            broken: BrokenPipe,
            sent: None,
        }))
    }
}

struct ScriptedConnection {
    script: Arc<Script>,
    body: Vec<u8>,
    broken: BrokenPipe,
    sent: Option<Vec<u8>>,
}

impl Drop for ScriptedConnection {
    fn drop(&mut self) {
        self.script.released.fetch_add(1, Ordering::SeqCst);
    }
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset while reading"))
    }
}

impl Connection for ScriptedConnection {
    fn set_do_output(&mut self, _enabled: bool) {}

    fn connect(&mut self) -> Result<()> {
        if self.script.fail_at == FailAt::Connect {
            return Err(InvokerError::TransportIo("connection refused".to_string()));
        }
        Ok(())
    }

    fn output_stream(&mut self) -> Result<&mut dyn Write> {
        if self.script.fail_at == FailAt::Write {
            return Ok(&mut self.broken);
        }
        Ok(&mut self.body)
    }

    fn close_output(&mut self) -> Result<()> {
        let body = std::mem::take(&mut self.body);
        self.script.requests.lock().unwrap().push(body.clone());
        self.sent = Some(body);
        Ok(())
    }

    fn response_code(&mut self) -> Result<u16> {
        if self.script.fail_at == FailAt::Status {
            return Err(InvokerError::TransportIo("connection reset".to_string()));
        }
        Ok(self.script.status)
    }

    fn input_stream(&mut self) -> Result<Box<dyn Read + '_>> {
        if self.script.fail_at == FailAt::Read {
            return Ok(Box::new(&mut self.broken));
        }
        let bytes = match &self.script.reply {
            Reply::Echo => self.sent.clone().unwrap_or_default(),
            Reply::Bytes(bytes) => bytes.clone(),
        };
        Ok(Box::new(io::Cursor::new(bytes)))
    }
}

pub fn exchange(domain: &str, service: &str, content: Value) -> MemoryExchange {
    MemoryExchange::new(ServiceReference::new(domain, service), Some(content))
}

pub fn exchange_with_context(
    domain: &str,
    service: &str,
    content: Value,
    context: Context,
) -> MemoryExchange {
    exchange(domain, service, content).with_context(context)
}

pub fn envelope(domain: &str, service: &str, content: Value) -> Envelope {
    Envelope::new()
        .set_domain(domain)
        .set_service(service)
        .set_content(Some(content))
}
