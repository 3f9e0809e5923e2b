//! # gRPC Client Library
//!
//! Transport plumbing shared by the Scintirete client: lazily connected
//! channels with keepalive and message-size tuning, plaintext or TLS
//! credentials, a tracing interceptor for request correlation, the error
//! type every call returns, and JSON ↔ protobuf `Struct` conversions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{create_channel_lazy, ChannelConfig, ClientTracingInterceptor, TransportSecurity};
//! use protos::scintirete::v1::scintirete_service_client::ScintireteServiceClient;
//!
//! let config = ChannelConfig::default()
//!     .with_keep_alive_interval(Duration::from_secs(60));
//! let channel = create_channel_lazy("127.0.0.1:50051", &config, TransportSecurity::Plaintext)?;
//! let client = ScintireteServiceClient::with_interceptor(channel, ClientTracingInterceptor::new())
//!     .max_decoding_message_size(config.max_receive_message_size)
//!     .max_encoding_message_size(config.max_send_message_size);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod interceptors;

// Re-export main types and functions for convenience
pub use channel::{
  ChannelConfig, DEFAULT_MAX_MESSAGE_SIZE, TransportSecurity, create_channel_lazy,
  normalize_address,
};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::ClientTracingInterceptor;
