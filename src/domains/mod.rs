pub mod context;
pub mod envelope;

pub use context::{Context, Property, Scope};
pub use envelope::Envelope;
