/// Network service errors
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Service initialization failed
    #[error("Failed to initialize network service: {0}")]
    ServiceInitializationFailed(String),

    /// No saved connection carries the given UUID
    #[error("Connection {0} not found")]
    ConnectionNotFound(String),

    /// Network operation failed
    #[error("Network operation failed: {operation} - {reason}")]
    OperationFailed {
        /// The operation that failed
        operation: &'static str,
        /// The reason the operation failed
        reason: String,
    },

    /// Data conversion or parsing failed
    #[error("Failed to parse {data_type}: {reason}")]
    DataConversionFailed {
        /// Type of data that failed to convert.
        data_type: String,
        /// Reason for conversion failure.
        reason: String,
    },

    /// The key generation command failed or printed something unexpected
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),
}

impl NetworkError {
    /// The service's own wording of the failure, without the operation prefix.
    pub fn operator_message(&self) -> String {
        match self {
            Self::OperationFailed { reason, .. } => reason.clone(),
            Self::DbusError(zbus::Error::MethodError(_, Some(text), _)) => text.clone(),
            other => other.to_string(),
        }
    }
}
