pub mod exchange;
pub mod invoker;
pub mod serializer;
pub mod transport;
