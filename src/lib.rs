pub mod config;
pub mod domains;
pub mod error;
pub mod factories;
pub mod interfaces;
pub mod providers;
pub mod services;

pub use crate::config::{InvokerConfig, StatusPolicy};
pub use crate::domains::{Context, Envelope, Property, Scope};
pub use crate::error::{InvokerError, Result};
pub use crate::interfaces::exchange::{Exchange, Message, MessageContent, ServiceReference};
pub use crate::interfaces::invoker::{InvocationOutcome, RemoteInvoker};
pub use crate::interfaces::serializer::{FormatType, Serializer};
pub use crate::services::invoker::HttpInvoker;
