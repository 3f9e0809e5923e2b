//! Typed, async façade over the generated Scintirete stub
//!
//! Every method makes exactly one unary call: the request gets the
//! connection's auth block, the per-call options are applied, and the
//! response payload or the original `tonic::Status` is handed back. There
//! is no retry, batching, or local validation; the server decides what is
//! a bad request.

use std::future::Future;

use grpc_client::{GrpcError, GrpcResult};
use protos::scintirete::v1::{
  BgSaveRequest, BgSaveResponse, CollectionInfo, CreateCollectionRequest,
  CreateCollectionResponse, CreateDatabaseRequest, CreateDatabaseResponse, DeleteVectorsRequest,
  DeleteVectorsResponse, DropCollectionRequest, DropCollectionResponse, DropDatabaseRequest,
  DropDatabaseResponse, EmbedAndInsertRequest, EmbedAndInsertResponse, EmbedAndSearchRequest,
  EmbedTextRequest, EmbedTextResponse, GetCollectionInfoRequest, InsertVectorsRequest,
  InsertVectorsResponse, ListCollectionsRequest, ListCollectionsResponse, ListDatabasesRequest,
  ListDatabasesResponse, ListEmbeddingModelsRequest, ListEmbeddingModelsResponse, SaveRequest,
  SaveResponse, SearchRequest, SearchResponse,
};

use crate::auth::WithAuth;
use crate::client::{RawClient, ScintireteClient};
use crate::options::CallOptions;

/// One async method per Scintirete RPC
///
/// Holds nothing but the connection handle, so it is as cheap to clone as
/// the handle and safe to share across tasks.
///
/// # Example
/// ```ignore
/// let client = ScintireteClient::new(ScintireteClientOptions::new("127.0.0.1:50051"))?;
/// let api = Scintirete::new(client);
///
/// api.create_database(CreateDatabaseRequest { name: "example_db".into(), ..Default::default() }, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Scintirete {
  client: ScintireteClient,
}

impl Scintirete {
  pub fn new(client: ScintireteClient) -> Self {
    Self { client }
  }

  pub fn client(&self) -> &ScintireteClient {
    &self.client
  }

  /// Run one unary call, resolving exactly once
  ///
  /// The call races the handle's close signal, so closing the client while
  /// this is awaiting drops the in-flight RPC and yields `GrpcError::Closed`.
  async fn call_unary<Req, Resp, F, Fut>(
    &self,
    method: &'static str,
    request: Req,
    options: Option<CallOptions>,
    invoke: F,
  ) -> GrpcResult<Resp>
  where
    Req: WithAuth,
    F: FnOnce(RawClient, tonic::Request<Req>) -> Fut,
    Fut: Future<Output = Result<tonic::Response<Resp>, tonic::Status>>,
  {
    let closed = self.client.closed();
    let raw = self.client.raw()?;

    let request = self.client.with_auth(request);
    let request = options
      .unwrap_or_default()
      .into_request(request, self.client.default_deadline());

    tracing::debug!(target: "scintirete", method, "Dispatching unary call");

    tokio::select! {
      result = invoke(raw, request) => result
        .map(tonic::Response::into_inner)
        .map_err(GrpcError::from),
      () = closed => {
        tracing::debug!(target: "scintirete", method, "Call abandoned because the client was closed");
        Err(GrpcError::Closed)
      }
    }
  }

  // ===== Databases =====

  pub async fn create_database(
    &self,
    request: CreateDatabaseRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<CreateDatabaseResponse> {
    self
      .call_unary("CreateDatabase", request, options, |mut raw, req| async move {
        raw.create_database(req).await
      })
      .await
  }

  pub async fn drop_database(
    &self,
    request: DropDatabaseRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<DropDatabaseResponse> {
    self
      .call_unary("DropDatabase", request, options, |mut raw, req| async move {
        raw.drop_database(req).await
      })
      .await
  }

  pub async fn list_databases(
    &self,
    request: ListDatabasesRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<ListDatabasesResponse> {
    self
      .call_unary("ListDatabases", request, options, |mut raw, req| async move {
        raw.list_databases(req).await
      })
      .await
  }

  // ===== Collections =====

  pub async fn create_collection(
    &self,
    request: CreateCollectionRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<CreateCollectionResponse> {
    self
      .call_unary("CreateCollection", request, options, |mut raw, req| async move {
        raw.create_collection(req).await
      })
      .await
  }

  pub async fn drop_collection(
    &self,
    request: DropCollectionRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<DropCollectionResponse> {
    self
      .call_unary("DropCollection", request, options, |mut raw, req| async move {
        raw.drop_collection(req).await
      })
      .await
  }

  pub async fn get_collection_info(
    &self,
    request: GetCollectionInfoRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<CollectionInfo> {
    self
      .call_unary("GetCollectionInfo", request, options, |mut raw, req| async move {
        raw.get_collection_info(req).await
      })
      .await
  }

  pub async fn list_collections(
    &self,
    request: ListCollectionsRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<ListCollectionsResponse> {
    self
      .call_unary("ListCollections", request, options, |mut raw, req| async move {
        raw.list_collections(req).await
      })
      .await
  }

  // ===== Vectors =====

  pub async fn insert_vectors(
    &self,
    request: InsertVectorsRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<InsertVectorsResponse> {
    self
      .call_unary("InsertVectors", request, options, |mut raw, req| async move {
        raw.insert_vectors(req).await
      })
      .await
  }

  pub async fn delete_vectors(
    &self,
    request: DeleteVectorsRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<DeleteVectorsResponse> {
    self
      .call_unary("DeleteVectors", request, options, |mut raw, req| async move {
        raw.delete_vectors(req).await
      })
      .await
  }

  /// Nearest-neighbour search with a caller-supplied query vector
  pub async fn search(
    &self,
    request: SearchRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<SearchResponse> {
    self
      .call_unary("Search", request, options, |mut raw, req| async move {
        raw.search(req).await
      })
      .await
  }

  // ===== Text embedding =====

  /// Embed texts server-side and insert the resulting vectors
  pub async fn embed_and_insert(
    &self,
    request: EmbedAndInsertRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<EmbedAndInsertResponse> {
    self
      .call_unary("EmbedAndInsert", request, options, |mut raw, req| async move {
        raw.embed_and_insert(req).await
      })
      .await
  }

  /// Embed the query text server-side, then search with it
  pub async fn embed_and_search(
    &self,
    request: EmbedAndSearchRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<SearchResponse> {
    self
      .call_unary("EmbedAndSearch", request, options, |mut raw, req| async move {
        raw.embed_and_search(req).await
      })
      .await
  }

  pub async fn embed_text(
    &self,
    request: EmbedTextRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<EmbedTextResponse> {
    self
      .call_unary("EmbedText", request, options, |mut raw, req| async move {
        raw.embed_text(req).await
      })
      .await
  }

  pub async fn list_embedding_models(
    &self,
    request: ListEmbeddingModelsRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<ListEmbeddingModelsResponse> {
    self
      .call_unary("ListEmbeddingModels", request, options, |mut raw, req| async move {
        raw.list_embedding_models(req).await
      })
      .await
  }

  // ===== Persistence =====

  /// Synchronous snapshot; returns once the server has written it
  pub async fn save(
    &self,
    request: SaveRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<SaveResponse> {
    self
      .call_unary("Save", request, options, |mut raw, req| async move {
        raw.save(req).await
      })
      .await
  }

  /// Ask the server to snapshot in the background
  pub async fn bg_save(
    &self,
    request: BgSaveRequest,
    options: Option<CallOptions>,
  ) -> GrpcResult<BgSaveResponse> {
    self
      .call_unary("BgSave", request, options, |mut raw, req| async move {
        raw.bg_save(req).await
      })
      .await
  }
}
