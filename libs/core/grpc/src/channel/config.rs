use std::time::Duration;
use tonic::transport::Endpoint;

use crate::error::{GrpcError, GrpcResult};

/// 64 MiB, the default cap for both inbound and outbound messages
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for gRPC channel creation
///
/// Every field starts from a default and can be overridden with a `with_*`
/// builder.
///
/// Message size limits are not endpoint settings in tonic; they are applied
/// to the generated client by the caller (see `max_receive_message_size`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Option<Duration>,
  pub request_timeout: Option<Duration>,

  // Message limits
  pub max_receive_message_size: usize,
  pub max_send_message_size: usize,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,

  pub user_agent: Option<String>,
}

impl Default for ChannelConfig {
  /// Keepalive ping every 30s with a 10s ack timeout, 64 MiB messages in
  /// both directions, and no client-enforced request deadline.
  fn default() -> Self {
    Self {
      keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: None,
      request_timeout: None,
      max_receive_message_size: DEFAULT_MAX_MESSAGE_SIZE,
      max_send_message_size: DEFAULT_MAX_MESSAGE_SIZE,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
      user_agent: None,
    }
  }
}

impl ChannelConfig {
  /// Create a new configuration with the defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the HTTP/2 keep-alive ping interval
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new()
  ///     .with_keep_alive_interval(Duration::from_secs(60));
  /// ```
  pub fn with_keep_alive_interval(mut self, interval: Duration) -> Self {
    self.keep_alive_interval = Some(interval);
    self
  }

  /// Set how long to wait for a keep-alive ack before closing the connection
  pub fn with_keep_alive_timeout(mut self, timeout: Duration) -> Self {
    self.keep_alive_timeout = timeout;
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.keep_alive_interval = None;
    self
  }

  /// Bound the time spent establishing the TCP/TLS connection
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = Some(timeout);
    self
  }

  /// Set a channel-wide timeout for every RPC
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = Some(timeout);
    self
  }

  /// Set the largest message the client will decode
  pub fn with_max_receive_message_size(mut self, limit: usize) -> Self {
    self.max_receive_message_size = limit;
    self
  }

  /// Set the largest message the client will encode
  pub fn with_max_send_message_size(mut self, limit: usize) -> Self {
    self.max_send_message_size = limit;
    self
  }

  /// Set both message limits to the same value
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new()
  ///     .with_max_message_size(16 * 1024 * 1024); // 16MB each way
  /// ```
  pub fn with_max_message_size(mut self, limit: usize) -> Self {
    self.max_receive_message_size = limit;
    self.max_send_message_size = limit;
    self
  }

  pub fn with_tcp_keepalive(mut self, keepalive: Option<Duration>) -> Self {
    self.tcp_keepalive = keepalive;
    self
  }

  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  /// Apply this configuration to a tonic Endpoint
  pub(crate) fn apply_to_endpoint(&self, mut endpoint: Endpoint) -> GrpcResult<Endpoint> {
    // HTTP/2 keep-alive
    if let Some(interval) = self.keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle);

    // Connection settings
    if let Some(timeout) = self.connect_timeout {
      endpoint = endpoint.connect_timeout(timeout);
    }
    if let Some(timeout) = self.request_timeout {
      endpoint = endpoint.timeout(timeout);
    }

    // TCP settings
    endpoint = endpoint
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive);

    if let Some(ref agent) = self.user_agent {
      endpoint = endpoint
        .user_agent(agent.as_str())
        .map_err(|e| GrpcError::InvalidConfig(format!("invalid user agent {agent:?}: {e}")))?;
    }

    Ok(endpoint)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ChannelConfig::default();
    assert_eq!(config.keep_alive_interval, Some(Duration::from_secs(30)));
    assert_eq!(config.keep_alive_timeout, Duration::from_secs(10));
    assert_eq!(config.max_receive_message_size, 64 * 1024 * 1024);
    assert_eq!(config.max_send_message_size, 64 * 1024 * 1024);
    assert_eq!(config.request_timeout, None);
    assert_eq!(config.connect_timeout, None);
    assert!(config.tcp_nodelay);
  }

  #[test]
  fn test_overrides_merge_over_defaults() {
    let config = ChannelConfig::new()
      .with_keep_alive_interval(Duration::from_secs(60))
      .with_max_receive_message_size(1024);

    assert_eq!(config.keep_alive_interval, Some(Duration::from_secs(60)));
    assert_eq!(config.max_receive_message_size, 1024);
    // untouched fields keep their defaults
    assert_eq!(config.keep_alive_timeout, Duration::from_secs(10));
    assert_eq!(config.max_send_message_size, DEFAULT_MAX_MESSAGE_SIZE);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(3))
      .with_request_timeout(Duration::from_secs(120))
      .with_max_message_size(2 * 1024 * 1024)
      .with_user_agent("scintirete-test");

    assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(120)));
    assert_eq!(config.max_receive_message_size, 2 * 1024 * 1024);
    assert_eq!(config.max_send_message_size, 2 * 1024 * 1024);
    assert_eq!(config.user_agent.as_deref(), Some("scintirete-test"));
  }

  #[test]
  fn test_disable_keep_alive() {
    let config = ChannelConfig::new().without_keep_alive();
    assert_eq!(config.keep_alive_interval, None);
  }

  #[test]
  fn test_apply_rejects_invalid_user_agent() {
    let endpoint = Endpoint::from_static("http://127.0.0.1:50051");
    let config = ChannelConfig::new().with_user_agent("bad\nagent");
    let result = config.apply_to_endpoint(endpoint);
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }
}
