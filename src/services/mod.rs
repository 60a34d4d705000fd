pub mod call;
pub mod context_filter;
pub mod invoker;
pub mod transport;
