use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokerError {
    #[error("invalid URL for remote endpoint `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("transport error: {0}")]
    TransportIo(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("decoding error: {0}")]
    Decoding(String),
    #[error("remote endpoint answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("call to `{0}` was already run")]
    CallReused(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl InvokerError {
    pub fn invalid_address(address: &str, reason: impl ToString) -> Self {
        Self::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for InvokerError {
    fn from(err: std::io::Error) -> Self {
        Self::TransportIo(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InvokerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = InvokerError::invalid_address("nope", "relative URL without a base");
        assert!(format!("{err}").contains("`nope`"));

        let err = InvokerError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert!(matches!(err, InvokerError::TransportIo(_)));
        assert!(format!("{err}").contains("refused"));

        let err = InvokerError::UnexpectedStatus(503);
        assert!(format!("{err}").contains("503"));
    }
}
