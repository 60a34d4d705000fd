use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{InvokerError, Result};
use crate::interfaces::serializer::{read_document, FormatType, Serializer};

/// MessagePack with named struct fields, so envelopes stay self-describing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackSerializer;

impl Serializer for MsgPackSerializer {
    fn format(&self) -> FormatType {
        FormatType::MsgPack
    }

    fn serialize<T, W>(&self, value: &T, mut out: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        rmp_serde::encode::write_named(&mut out, value).map_err(|e| match e {
            rmp_serde::encode::Error::InvalidValueWrite(io) => {
                InvokerError::TransportIo(io.to_string())
            }
            other => InvokerError::Encoding(other.to_string()),
        })
    }

    fn deserialize<T, R>(&self, input: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let bytes = read_document(input)?;
        rmp_serde::from_slice(&bytes).map_err(|e| InvokerError::Decoding(e.to_string()))
    }
}
