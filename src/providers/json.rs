use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{InvokerError, Result};
use crate::interfaces::serializer::{read_document, FormatType, Serializer};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Serializer for JsonSerializer {
    fn format(&self) -> FormatType {
        FormatType::Json
    }

    fn serialize<T, W>(&self, value: &T, out: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let written = if self.pretty {
            serde_json::to_writer_pretty(out, value)
        } else {
            serde_json::to_writer(out, value)
        };
        written.map_err(|e| {
            if e.is_io() {
                InvokerError::TransportIo(e.to_string())
            } else {
                InvokerError::Encoding(e.to_string())
            }
        })
    }

    fn deserialize<T, R>(&self, input: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let bytes = read_document(input)?;
        serde_json::from_slice(&bytes).map_err(|e| InvokerError::Decoding(e.to_string()))
    }
}
