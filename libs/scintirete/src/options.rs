use std::time::Duration;

use grpc_client::{GrpcError, GrpcResult};
use tonic::metadata::{AsciiMetadataKey, AsciiMetadataValue, MetadataMap};

/// Per-call overrides forwarded to a single RPC
///
/// # Example
/// ```ignore
/// let options = CallOptions::new()
///     .with_timeout(Duration::from_secs(2))
///     .with_metadata("x-tenant", "acme")?;
/// api.search(request, Some(options)).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
  /// Deadline for this call; falls back to the connection's default deadline
  pub timeout: Option<Duration>,
  /// Extra ASCII metadata sent with the call
  pub metadata: MetadataMap,
}

impl CallOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Add one metadata entry, rejecting keys or values that are not valid gRPC ASCII metadata
  pub fn with_metadata(mut self, key: &str, value: &str) -> GrpcResult<Self> {
    let name: AsciiMetadataKey = key
      .parse()
      .map_err(|_| GrpcError::InvalidConfig(format!("invalid metadata key {key:?}")))?;
    let value: AsciiMetadataValue = value
      .parse()
      .map_err(|_| GrpcError::InvalidConfig(format!("invalid metadata value for {key:?}")))?;
    self.metadata.insert(name, value);
    Ok(self)
  }

  pub fn with_metadata_map(mut self, metadata: MetadataMap) -> Self {
    self.metadata = metadata;
    self
  }

  /// Wrap a message into a request carrying these options
  pub(crate) fn into_request<T>(
    self,
    message: T,
    default_deadline: Option<Duration>,
  ) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    *request.metadata_mut() = self.metadata;
    if let Some(timeout) = self.timeout.or(default_deadline) {
      request.set_timeout(timeout);
    }
    request
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_options_produce_plain_request() {
    let request = CallOptions::default().into_request("payload", None);
    assert!(request.metadata().is_empty());
    assert_eq!(*request.get_ref(), "payload");
  }

  #[test]
  fn test_metadata_is_forwarded() {
    let options = CallOptions::new()
      .with_metadata("x-tenant", "acme")
      .unwrap();
    let request = options.into_request((), None);
    assert_eq!(request.metadata().get("x-tenant").unwrap(), "acme");
  }

  #[test]
  fn test_invalid_metadata_is_rejected() {
    let result = CallOptions::new().with_metadata("bad key", "v");
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));

    let result = CallOptions::new().with_metadata("x-ok", "line\nbreak");
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }

  #[test]
  fn test_timeout_becomes_grpc_timeout() {
    let request = CallOptions::new()
      .with_timeout(Duration::from_secs(2))
      .into_request((), None);
    assert!(request.metadata().get("grpc-timeout").is_some());
  }

  #[test]
  fn test_default_deadline_applies_without_override() {
    let request = CallOptions::new().into_request((), Some(Duration::from_millis(500)));
    assert!(request.metadata().get("grpc-timeout").is_some());

    let request = CallOptions::new().into_request((), None);
    assert!(request.metadata().get("grpc-timeout").is_none());
  }

  #[test]
  fn test_per_call_timeout_wins_over_default() {
    let with_override = CallOptions::new()
      .with_timeout(Duration::from_secs(7))
      .into_request((), Some(Duration::from_millis(500)));
    let expected = CallOptions::new()
      .with_timeout(Duration::from_secs(7))
      .into_request((), None);

    assert_eq!(
      with_override.metadata().get("grpc-timeout"),
      expected.metadata().get("grpc-timeout")
    );
  }
}
