use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{InvokerError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Json,
    MsgPack,
}

impl FormatType {
    pub fn content_type(&self) -> &'static str {
        match self {
            FormatType::Json => "application/json",
            FormatType::MsgPack => "application/msgpack",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatType::Json => f.write_str("json"),
            FormatType::MsgPack => f.write_str("msgpack"),
        }
    }
}

impl FromStr for FormatType {
    type Err = InvokerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(FormatType::Json),
            "msgpack" | "messagepack" => Ok(FormatType::MsgPack),
            other => Err(InvokerError::Config(format!("unknown format `{other}`"))),
        }
    }
}

/// Encodes and decodes values of a declared type in one wire format.
///
/// Implementations are shared by every call an invoker makes and are not
/// synchronized by the caller.
pub trait Serializer: Send + Sync {
    fn format(&self) -> FormatType;

    fn serialize<T, W>(&self, value: &T, out: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write;

    /// Fails with [`InvokerError::Decoding`] on malformed or truncated
    /// input, including a stream that yields no bytes at all, and with
    /// [`InvokerError::TransportIo`] when reading the stream fails.
    fn deserialize<T, R>(&self, input: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read;
}

/// Drains `input` fully, rejecting an empty stream. A failing reader is a
/// transport problem, not a malformed document.
pub(crate) fn read_document<R: Read>(mut input: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    if buf.is_empty() {
        return Err(InvokerError::Decoding("stream yielded no data".to_string()));
    }
    Ok(buf)
}
