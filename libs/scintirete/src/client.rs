//! Connection handle: channel, credentials, auth injection, and teardown

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use grpc_client::{
  ChannelConfig, ClientTracingInterceptor, GrpcError, GrpcResult, TransportSecurity,
  create_channel_lazy,
};
use protos::scintirete::v1::AuthInfo;
use protos::scintirete::v1::scintirete_service_client::ScintireteServiceClient;
use tokio::sync::watch;
use tonic::codec::CompressionEncoding;
use tonic::metadata::AsciiMetadataValue;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;

use crate::auth::{WithAuth, auth_for};

/// The generated stub as configured by [`ScintireteClient::new`]
pub type RawClient = ScintireteServiceClient<InterceptedService<Channel, ClientTracingInterceptor>>;

/// Construction options for [`ScintireteClient`]
///
/// # Example
/// ```ignore
/// let options = ScintireteClientOptions::new("127.0.0.1:50051")
///     .with_password("secret")
///     .with_default_deadline(Duration::from_secs(5));
/// ```
#[derive(Clone, Default)]
pub struct ScintireteClientOptions {
  /// `host:port`, optionally with an `http://` or `https://` scheme
  pub address: String,
  /// Shared secret sent in every request body; `None` or empty disables auth
  pub password: Option<String>,
  pub use_tls: bool,
  /// Channel tuning merged over the defaults
  pub channel: ChannelConfig,
  /// Deadline applied to calls that do not set their own
  pub default_deadline: Option<Duration>,
  pub enable_gzip: bool,
  /// Sent as `x-source-service` on every call
  pub service_name: Option<String>,
}

impl ScintireteClientOptions {
  pub fn new(address: impl Into<String>) -> Self {
    Self {
      address: address.into(),
      ..Default::default()
    }
  }

  pub fn with_password(mut self, password: impl Into<String>) -> Self {
    self.password = Some(password.into());
    self
  }

  pub fn with_tls(mut self, use_tls: bool) -> Self {
    self.use_tls = use_tls;
    self
  }

  pub fn with_channel_config(mut self, channel: ChannelConfig) -> Self {
    self.channel = channel;
    self
  }

  pub fn with_default_deadline(mut self, deadline: Duration) -> Self {
    self.default_deadline = Some(deadline);
    self
  }

  pub fn with_gzip(mut self, enable_gzip: bool) -> Self {
    self.enable_gzip = enable_gzip;
    self
  }

  pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
    self.service_name = Some(service_name.into());
    self
  }
}

impl fmt::Debug for ScintireteClientOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScintireteClientOptions")
      .field("address", &self.address)
      .field("password", &self.password.as_ref().map(|_| "<redacted>"))
      .field("use_tls", &self.use_tls)
      .field("channel", &self.channel)
      .field("default_deadline", &self.default_deadline)
      .field("enable_gzip", &self.enable_gzip)
      .field("service_name", &self.service_name)
      .finish()
  }
}

/// Handle to one Scintirete server
///
/// Cloning is cheap and every clone shares the same channel and lifecycle:
/// closing any clone closes them all. The channel multiplexes concurrent
/// calls, so the handle needs no locking on the call path beyond taking a
/// copy of the stub.
#[derive(Clone)]
pub struct ScintireteClient {
  inner: Arc<Inner>,
}

struct Inner {
  address: String,
  auth: Option<AuthInfo>,
  default_deadline: Option<Duration>,
  raw: Mutex<Option<RawClient>>,
  closed: watch::Sender<bool>,
}

impl ScintireteClient {
  /// Build a handle without dialing the server
  ///
  /// Configuration problems (empty address, malformed URI, bad TLS or
  /// metadata settings) fail here. An unreachable server does not; the
  /// first call reports it instead. Outside a Tokio runtime this returns
  /// `InvalidConfig`.
  pub fn new(options: ScintireteClientOptions) -> GrpcResult<Self> {
    let ScintireteClientOptions {
      address,
      password,
      use_tls,
      channel,
      default_deadline,
      enable_gzip,
      service_name,
    } = options;

    let interceptor = match service_name {
      Some(name) => {
        name.parse::<AsciiMetadataValue>().map_err(|_| {
          GrpcError::InvalidConfig(format!("service name {name:?} is not valid metadata"))
        })?;
        ClientTracingInterceptor::with_service_name(name)
      }
      None => ClientTracingInterceptor::new(),
    };

    let security = TransportSecurity::from_use_tls(use_tls);
    let transport = create_channel_lazy(&address, &channel, security)?;

    let mut raw = ScintireteServiceClient::with_interceptor(transport, interceptor)
      .max_decoding_message_size(channel.max_receive_message_size)
      .max_encoding_message_size(channel.max_send_message_size);
    if enable_gzip {
      raw = raw
        .send_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Gzip);
    }

    let auth = auth_for(password);

    tracing::debug!(
      target: "scintirete",
      address = %address,
      tls = use_tls,
      gzip = enable_gzip,
      authenticated = auth.is_some(),
      default_deadline = ?default_deadline,
      "Created Scintirete client"
    );

    let (closed, _) = watch::channel(false);

    Ok(Self {
      inner: Arc::new(Inner {
        address,
        auth,
        default_deadline,
        raw: Mutex::new(Some(raw)),
        closed,
      }),
    })
  }

  /// A copy of the generated stub bound to this handle's channel
  pub fn raw(&self) -> GrpcResult<RawClient> {
    if self.is_closed() {
      return Err(GrpcError::Closed);
    }
    self
      .inner
      .raw
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
      .ok_or(GrpcError::Closed)
  }

  /// Return `request` with its `auth` field set from the configured secret
  ///
  /// The field is always written: `Some(AuthInfo)` when a password is
  /// configured, `None` otherwise, overwriting whatever the caller put there.
  pub fn with_auth<R: WithAuth>(&self, request: R) -> R {
    request.with_auth(self.inner.auth.clone())
  }

  /// Release the channel and fail every outstanding and future call
  ///
  /// Safe to call more than once; repeated calls only log a warning.
  pub fn close(&self) {
    if self.inner.closed.send_replace(true) {
      tracing::warn!(
        target: "scintirete",
        address = %self.inner.address,
        "close() called on an already closed Scintirete client"
      );
      return;
    }

    self
      .inner
      .raw
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .take();

    tracing::debug!(
      target: "scintirete",
      address = %self.inner.address,
      "Closed Scintirete client"
    );
  }

  pub fn is_closed(&self) -> bool {
    *self.inner.closed.borrow()
  }

  pub fn address(&self) -> &str {
    &self.inner.address
  }

  pub fn is_authenticated(&self) -> bool {
    self.inner.auth.is_some()
  }

  pub fn default_deadline(&self) -> Option<Duration> {
    self.inner.default_deadline
  }

  /// Resolves once [`close`](Self::close) has been called
  ///
  /// Subscribe before taking the stub so a close racing with a new call is
  /// never missed.
  pub(crate) fn closed(&self) -> impl Future<Output = ()> + Send + 'static {
    let mut closed = self.inner.closed.subscribe();
    async move {
      // Err means every sender is gone, which only happens once the handle is dropped
      let _ = closed.wait_for(|closed| *closed).await;
    }
  }
}

impl fmt::Debug for ScintireteClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScintireteClient")
      .field("address", &self.inner.address)
      .field("authenticated", &self.is_authenticated())
      .field("default_deadline", &self.inner.default_deadline)
      .field("closed", &self.is_closed())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use protos::scintirete::v1::{CreateDatabaseRequest, ListDatabasesRequest};

  #[tokio::test]
  async fn test_create_client_with_default_options() {
    let client = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051")).unwrap();

    assert_eq!(client.address(), "127.0.0.1:50051");
    assert!(!client.is_authenticated());
    assert!(!client.is_closed());
    assert!(client.raw().is_ok());
    assert_eq!(client.default_deadline(), None);

    client.close();
  }

  #[tokio::test]
  async fn test_injects_auth_when_password_is_provided() {
    let client = ScintireteClient::new(
      ScintireteClientOptions::new("127.0.0.1:50051").with_password("test-password"),
    )
    .unwrap();

    let authed = client.with_auth(CreateDatabaseRequest {
      name: "test".to_string(),
      ..Default::default()
    });

    assert_eq!(
      authed,
      CreateDatabaseRequest {
        auth: Some(AuthInfo {
          password: "test-password".to_string()
        }),
        name: "test".to_string(),
      }
    );
  }

  #[tokio::test]
  async fn test_leaves_auth_empty_without_password() {
    let client = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051")).unwrap();

    let request = CreateDatabaseRequest {
      name: "test".to_string(),
      ..Default::default()
    };
    let authed = client.with_auth(request.clone());
    assert_eq!(authed, request);
    assert!(authed.auth.is_none());
  }

  #[tokio::test]
  async fn test_auth_injection_is_idempotent() {
    let client = ScintireteClient::new(
      ScintireteClientOptions::new("127.0.0.1:50051").with_password("secret"),
    )
    .unwrap();

    let once = client.with_auth(ListDatabasesRequest::default());
    let twice = client.with_auth(client.with_auth(ListDatabasesRequest::default()));
    assert_eq!(once, twice);
  }

  #[tokio::test]
  async fn test_empty_address_fails_fast() {
    let result = ScintireteClient::new(ScintireteClientOptions::new(""));
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }

  #[tokio::test]
  async fn test_invalid_service_name_fails_fast() {
    let result = ScintireteClient::new(
      ScintireteClientOptions::new("127.0.0.1:50051").with_service_name("bad\nname"),
    );
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }

  #[test]
  fn test_new_outside_runtime_returns_error() {
    let result = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051"));
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }

  #[tokio::test]
  async fn test_unreachable_address_is_not_a_construction_error() {
    let result = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:1").with_gzip(true));
    assert!(result.is_ok());
  }

  #[tokio::test]
  async fn test_close_is_idempotent_and_shared_by_clones() {
    let client = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051")).unwrap();
    let clone = client.clone();

    client.close();
    client.close();

    assert!(clone.is_closed());
    assert!(matches!(clone.raw(), Err(GrpcError::Closed)));
  }

  #[tokio::test]
  async fn test_closed_future_resolves_after_close() {
    let client = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051")).unwrap();
    let closed = client.closed();

    client.close();
    tokio::time::timeout(Duration::from_secs(1), closed)
      .await
      .expect("closed future should resolve");
  }

  #[test]
  fn test_debug_redacts_password() {
    let options = ScintireteClientOptions::new("127.0.0.1:50051").with_password("hunter2");
    let rendered = format!("{options:?}");
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
  }
}
