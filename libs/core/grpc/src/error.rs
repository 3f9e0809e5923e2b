use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors surfaced by gRPC channel construction and unary calls
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Address could not be parsed into an endpoint URI
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// TLS settings were rejected by the transport
  #[error("TLS configuration failed: {0}")]
  Tls(tonic::transport::Error),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  /// The connection handle was closed before or during the call
  #[error("Connection closed")]
  Closed,

  /// Status returned by the transport or the remote service, kept as received
  #[error(transparent)]
  Status(#[from] tonic::Status),
}

impl GrpcError {
  /// The original status when the failure came from the wire
  pub fn status(&self) -> Option<&tonic::Status> {
    match self {
      GrpcError::Status(status) => Some(status),
      _ => None,
    }
  }

  /// gRPC code for this error, mirroring what `tonic::Status::from` would produce
  pub fn code(&self) -> tonic::Code {
    match self {
      GrpcError::Status(status) => status.code(),
      GrpcError::Closed => tonic::Code::Cancelled,
      GrpcError::InvalidUri(_) | GrpcError::Tls(_) | GrpcError::InvalidConfig(_) => {
        tonic::Code::InvalidArgument
      }
    }
  }

  pub fn is_closed(&self) -> bool {
    matches!(self, GrpcError::Closed)
  }
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::Status(status) => status,
      GrpcError::Closed => tonic::Status::cancelled(err.to_string()),
      GrpcError::InvalidUri(_) | GrpcError::Tls(_) | GrpcError::InvalidConfig(_) => {
        tonic::Status::invalid_argument(err.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_passes_through_unchanged() {
    let original = tonic::Status::unauthenticated("bad password");
    let err = GrpcError::from(original);

    assert_eq!(err.code(), tonic::Code::Unauthenticated);
    assert_eq!(err.status().map(|s| s.message()), Some("bad password"));

    let back: tonic::Status = err.into();
    assert_eq!(back.code(), tonic::Code::Unauthenticated);
    assert_eq!(back.message(), "bad password");
  }

  #[test]
  fn test_closed_maps_to_cancelled() {
    let err = GrpcError::Closed;
    assert!(err.is_closed());
    assert!(err.status().is_none());

    let status: tonic::Status = err.into();
    assert_eq!(status.code(), tonic::Code::Cancelled);
    assert_eq!(status.message(), "Connection closed");
  }

  #[test]
  fn test_invalid_config_maps_to_invalid_argument() {
    let err = GrpcError::InvalidConfig("address must not be empty".to_string());
    assert_eq!(err.code(), tonic::Code::InvalidArgument);
    assert!(err.to_string().contains("address must not be empty"));
  }
}
