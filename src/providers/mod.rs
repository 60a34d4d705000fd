pub mod json;
pub mod memory;
pub mod msgpack;
