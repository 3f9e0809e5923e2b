//! Convenience types layered over the generated messages

use std::time::Duration;

use grpc_client::conversions::{json_to_struct, opt_struct_to_json};
use protos::scintirete::v1::{
  EmbedAndSearchRequest, SearchRequest, SearchResultItem, TextWithMetadata, Vector,
};
use serde_json::{Map, Value};

use crate::client::ScintireteClientOptions;

/// A vector to insert, with JSON metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorData {
  /// Leave empty to let the server assign an id
  pub id: Option<String>,
  pub elements: Vec<f32>,
  pub metadata: Option<Map<String, Value>>,
}

impl VectorData {
  pub fn new(elements: Vec<f32>) -> Self {
    Self {
      elements,
      ..Default::default()
    }
  }

  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
    self.metadata = Some(metadata);
    self
  }
}

impl From<VectorData> for Vector {
  fn from(data: VectorData) -> Self {
    Vector {
      id: data.id.unwrap_or_default(),
      elements: data.elements,
      metadata: data.metadata.map(json_to_struct),
    }
  }
}

/// A text to embed server-side, with JSON metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextData {
  pub id: Option<String>,
  pub text: String,
  pub metadata: Option<Map<String, Value>>,
}

impl TextData {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      ..Default::default()
    }
  }

  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
    self.metadata = Some(metadata);
    self
  }
}

impl From<TextData> for TextWithMetadata {
  fn from(data: TextData) -> Self {
    TextWithMetadata {
      id: data.id.unwrap_or_default(),
      text: data.text,
      metadata: data.metadata.map(json_to_struct),
    }
  }
}

/// Search knobs shared by vector and text queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
  pub top_k: i32,
  /// HNSW beam width at query time; server default when `None`
  pub ef_search: Option<i32>,
  pub include_vector: Option<bool>,
}

impl SearchOptions {
  pub fn new(top_k: i32) -> Self {
    Self {
      top_k,
      ef_search: None,
      include_vector: None,
    }
  }

  pub fn with_ef_search(mut self, ef_search: i32) -> Self {
    self.ef_search = Some(ef_search);
    self
  }

  pub fn with_include_vector(mut self, include_vector: bool) -> Self {
    self.include_vector = Some(include_vector);
    self
  }

  pub fn search_request(
    &self,
    db_name: impl Into<String>,
    collection_name: impl Into<String>,
    query_vector: Vec<f32>,
  ) -> SearchRequest {
    SearchRequest {
      auth: None,
      db_name: db_name.into(),
      collection_name: collection_name.into(),
      query_vector,
      top_k: self.top_k,
      ef_search: self.ef_search,
      include_vector: self.include_vector,
    }
  }

  /// An empty `embedding_model` selects the server's default model
  pub fn embed_search_request(
    &self,
    db_name: impl Into<String>,
    collection_name: impl Into<String>,
    query_text: impl Into<String>,
    embedding_model: impl Into<String>,
  ) -> EmbedAndSearchRequest {
    EmbedAndSearchRequest {
      auth: None,
      db_name: db_name.into(),
      collection_name: collection_name.into(),
      query_text: query_text.into(),
      top_k: self.top_k,
      embedding_model: embedding_model.into(),
      ef_search: self.ef_search,
      include_vector: self.include_vector,
    }
  }
}

/// Minimal connection settings, convertible into full client options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
  pub address: String,
  pub password: Option<String>,
  pub use_tls: bool,
  /// Becomes the default per-call deadline
  pub timeout: Option<Duration>,
}

impl From<ConnectionConfig> for ScintireteClientOptions {
  fn from(config: ConnectionConfig) -> Self {
    ScintireteClientOptions {
      address: config.address,
      password: config.password,
      use_tls: config.use_tls,
      default_deadline: config.timeout,
      ..Default::default()
    }
  }
}

/// JSON view of the `google.protobuf.Struct` metadata on generated messages
pub trait MetadataExt {
  /// Metadata as a JSON object; absent metadata is an empty object
  fn metadata_json(&self) -> Map<String, Value>;
}

impl MetadataExt for Vector {
  fn metadata_json(&self) -> Map<String, Value> {
    opt_struct_to_json(self.metadata.as_ref())
  }
}

impl MetadataExt for TextWithMetadata {
  fn metadata_json(&self) -> Map<String, Value> {
    opt_struct_to_json(self.metadata.as_ref())
  }
}

impl MetadataExt for SearchResultItem {
  fn metadata_json(&self) -> Map<String, Value> {
    opt_struct_to_json(self.metadata.as_ref())
  }
}
