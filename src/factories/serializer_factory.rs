use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::interfaces::serializer::{FormatType, Serializer};
use crate::providers::json::JsonSerializer;
use crate::providers::msgpack::MsgPackSerializer;

/// Serializer for a format picked at construction time.
#[derive(Debug, Clone, Copy)]
pub enum FormatSerializer {
    Json(JsonSerializer),
    MsgPack(MsgPackSerializer),
}

impl Default for FormatSerializer {
    fn default() -> Self {
        SerializerFactory::create(FormatType::default())
    }
}

impl Serializer for FormatSerializer {
    fn format(&self) -> FormatType {
        match self {
            FormatSerializer::Json(s) => s.format(),
            FormatSerializer::MsgPack(s) => s.format(),
        }
    }

    fn serialize<T, W>(&self, value: &T, out: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        match self {
            FormatSerializer::Json(s) => s.serialize(value, out),
            FormatSerializer::MsgPack(s) => s.serialize(value, out),
        }
    }

    fn deserialize<T, R>(&self, input: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        match self {
            FormatSerializer::Json(s) => s.deserialize(input),
            FormatSerializer::MsgPack(s) => s.deserialize(input),
        }
    }
}

pub struct SerializerFactory;

impl SerializerFactory {
    pub fn create(format: FormatType) -> FormatSerializer {
        Self::create_with(format, false)
    }

    /// `pretty` only affects text formats.
    pub fn create_with(format: FormatType, pretty: bool) -> FormatSerializer {
        match format {
            FormatType::Json => FormatSerializer::Json(JsonSerializer::pretty(pretty)),
            FormatType::MsgPack => FormatSerializer::MsgPack(MsgPackSerializer),
        }
    }
}
