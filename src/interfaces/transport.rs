use std::io::{Read, Write};

use reqwest::Url;

use crate::error::Result;

pub const STATUS_OK: u16 = 200;

/// One request/response exchange with a remote endpoint.
///
/// Callers write the whole request through [`Connection::output_stream`],
/// then call [`Connection::close_output`] before asking for the status.
/// Dropping the connection releases everything it holds.
pub trait Connection: Send {
    fn set_do_output(&mut self, enabled: bool);
    fn connect(&mut self) -> Result<()>;
    fn output_stream(&mut self) -> Result<&mut dyn Write>;
    fn close_output(&mut self) -> Result<()>;
    fn response_code(&mut self) -> Result<u16>;
    fn input_stream(&mut self) -> Result<Box<dyn Read + '_>>;
}

pub type BoxedConnection = Box<dyn Connection>;

pub trait Transport: Send + Sync {
    fn open(&self, endpoint: &Url, content_type: &str) -> Result<BoxedConnection>;
}
