//! Client-side gRPC interceptors
//!
//! These run on every outgoing call, after per-call metadata has been set.

pub mod tracing;

pub use tracing::ClientTracingInterceptor;
