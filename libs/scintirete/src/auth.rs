//! Per-request authentication
//!
//! Scintirete authenticates inside the message body: every request carries
//! an optional `AuthInfo` in field 1. The client fills it from the shared
//! secret configured on the connection, replacing anything already there.

use protos::scintirete::v1::{
  AuthInfo, BgSaveRequest, CreateCollectionRequest, CreateDatabaseRequest, DeleteVectorsRequest,
  DropCollectionRequest, DropDatabaseRequest, EmbedAndInsertRequest, EmbedAndSearchRequest,
  EmbedTextRequest, GetCollectionInfoRequest, InsertVectorsRequest, ListCollectionsRequest,
  ListDatabasesRequest, ListEmbeddingModelsRequest, SaveRequest, SearchRequest,
};

/// Request messages that carry an `auth` field
pub trait WithAuth: Sized {
  /// Return the request with `auth` replaced by the given value
  fn with_auth(self, auth: Option<AuthInfo>) -> Self;

  fn auth(&self) -> Option<&AuthInfo>;
}

macro_rules! impl_with_auth {
  ($($request:ty),+ $(,)?) => {
    $(
      impl WithAuth for $request {
        fn with_auth(self, auth: Option<AuthInfo>) -> Self {
          Self { auth, ..self }
        }

        fn auth(&self) -> Option<&AuthInfo> {
          self.auth.as_ref()
        }
      }
    )+
  };
}

impl_with_auth!(
  CreateDatabaseRequest,
  DropDatabaseRequest,
  ListDatabasesRequest,
  CreateCollectionRequest,
  DropCollectionRequest,
  GetCollectionInfoRequest,
  ListCollectionsRequest,
  InsertVectorsRequest,
  DeleteVectorsRequest,
  SearchRequest,
  EmbedAndInsertRequest,
  EmbedAndSearchRequest,
  EmbedTextRequest,
  ListEmbeddingModelsRequest,
  SaveRequest,
  BgSaveRequest,
);

/// Build the auth block for a configured secret; an empty secret means none
pub(crate) fn auth_for(password: Option<String>) -> Option<AuthInfo> {
  password
    .filter(|password| !password.is_empty())
    .map(|password| AuthInfo { password })
}
