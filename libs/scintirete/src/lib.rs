//! # Scintirete client
//!
//! Async client for the Scintirete vector database. [`ScintireteClient`]
//! owns the channel and the shared secret; [`Scintirete`] wraps it with one
//! typed method per RPC.
//!
//! ```ignore
//! use scintirete::{CreateDatabaseRequest, Scintirete, ScintireteClient, ScintireteClientOptions};
//!
//! let client = ScintireteClient::new(
//!     ScintireteClientOptions::new("127.0.0.1:50051").with_password("secret"),
//! )?;
//! let api = Scintirete::new(client.clone());
//!
//! api.create_database(
//!     CreateDatabaseRequest { name: "example_db".into(), ..Default::default() },
//!     None,
//! )
//! .await?;
//!
//! client.close();
//! ```
//!
//! Failures from the server or the transport come back as
//! [`GrpcError::Status`] holding the original `tonic::Status`.

pub mod api;
pub mod auth;
pub mod client;
pub mod options;
pub mod types;

pub use api::Scintirete;
pub use auth::WithAuth;
pub use client::{RawClient, ScintireteClient, ScintireteClientOptions};
pub use options::CallOptions;
pub use types::{ConnectionConfig, MetadataExt, SearchOptions, TextData, VectorData};

pub use grpc_client::{ChannelConfig, GrpcError, GrpcResult};

// Generated messages and stubs
pub use protos::scintirete::v1 as proto;
pub use protos::scintirete::v1::*;
