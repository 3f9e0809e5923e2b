pub mod config;

pub use config::{ChannelConfig, DEFAULT_MAX_MESSAGE_SIZE};

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

/// Transport credentials used for the channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportSecurity {
  /// Plaintext HTTP/2 (h2c)
  #[default]
  Plaintext,
  /// TLS verified against the webpki root store
  Tls,
}

impl TransportSecurity {
  pub fn from_use_tls(use_tls: bool) -> Self {
    if use_tls {
      TransportSecurity::Tls
    } else {
      TransportSecurity::Plaintext
    }
  }

  fn scheme(self) -> &'static str {
    match self {
      TransportSecurity::Plaintext => "http",
      TransportSecurity::Tls => "https",
    }
  }
}

/// Turn a `host:port` target into an endpoint URI
///
/// Bare addresses get a scheme matching the transport security. Explicit
/// schemes are kept, but a plaintext `http://` target cannot be combined
/// with TLS.
pub fn normalize_address(addr: &str, security: TransportSecurity) -> GrpcResult<String> {
  let addr = addr.trim();
  if addr.is_empty() {
    return Err(GrpcError::InvalidConfig(
      "address must not be empty".to_string(),
    ));
  }

  if let Some((scheme, rest)) = addr.split_once("://") {
    if rest.is_empty() {
      return Err(GrpcError::InvalidConfig(format!(
        "address {addr:?} has no host"
      )));
    }
    if security == TransportSecurity::Tls && scheme.eq_ignore_ascii_case("http") {
      return Err(GrpcError::InvalidConfig(format!(
        "address {addr:?} uses http:// but TLS was requested"
      )));
    }
    return Ok(addr.to_string());
  }

  Ok(format!("{}://{}", security.scheme(), addr))
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Returns immediately without dialing, so an unreachable address is not
/// an error here; the failure surfaces on the first RPC instead. Called
/// outside a Tokio runtime it returns `InvalidConfig`.
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_lazy, ChannelConfig, TransportSecurity};
///
/// let channel = create_channel_lazy(
///     "127.0.0.1:50051",
///     &ChannelConfig::default(),
///     TransportSecurity::Plaintext,
/// )?;
/// ```
pub fn create_channel_lazy(
  addr: &str,
  config: &ChannelConfig,
  security: TransportSecurity,
) -> GrpcResult<Channel> {
  // connect_lazy spawns the channel worker and panics without a runtime
  tokio::runtime::Handle::try_current().map_err(|_| {
    GrpcError::InvalidConfig("gRPC channels must be created inside a Tokio runtime".to_string())
  })?;

  let uri = normalize_address(addr, security)?;
  let endpoint = build_endpoint(&uri, config, security)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %uri,
    ?security,
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

fn build_endpoint(
  uri: &str,
  config: &ChannelConfig,
  security: TransportSecurity,
) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(uri.to_string()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %uri, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  let mut endpoint = config.apply_to_endpoint(endpoint)?;

  if security == TransportSecurity::Tls {
    endpoint = endpoint
      .tls_config(ClientTlsConfig::new().with_webpki_roots())
      .map_err(GrpcError::Tls)?;
  }

  Ok(endpoint)
}
