// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AuthInfo {
    #[prost(string, tag = "1")]
    pub password: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct HnswConfig {
    #[prost(int32, tag = "1")]
    pub m: i32,
    #[prost(int32, tag = "2")]
    pub ef_construction: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vector {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(float, repeated, tag = "2")]
    pub elements: ::prost::alloc::vec::Vec<f32>,
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextWithMetadata {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResultItem {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(float, tag = "2")]
    pub distance: f32,
    #[prost(message, optional, tag = "3")]
    pub vector: ::core::option::Option<Vector>,
    #[prost(message, optional, tag = "4")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CollectionInfo {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub dimension: i32,
    #[prost(int64, tag = "3")]
    pub vector_count: i64,
    #[prost(int64, tag = "4")]
    pub deleted_count: i64,
    #[prost(int64, tag = "5")]
    pub memory_bytes: i64,
    #[prost(enumeration = "DistanceMetric", tag = "6")]
    pub metric_type: i32,
    #[prost(message, optional, tag = "7")]
    pub hnsw_config: ::core::option::Option<HnswConfig>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EmbeddingModel {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub dimension: i32,
    #[prost(bool, tag = "4")]
    pub available: bool,
    #[prost(string, tag = "5")]
    pub description: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmbedTextResult {
    #[prost(string, tag = "1")]
    pub text: ::prost::alloc::string::String,
    #[prost(float, repeated, tag = "2")]
    pub embedding: ::prost::alloc::vec::Vec<f32>,
    #[prost(int32, tag = "3")]
    pub index: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateDatabaseRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateDatabaseResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DropDatabaseRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DropDatabaseResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub dropped_collections: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListDatabasesRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListDatabasesResponse {
    #[prost(string, repeated, tag = "1")]
    pub names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(enumeration = "DistanceMetric", tag = "4")]
    pub metric_type: i32,
    #[prost(message, optional, tag = "5")]
    pub hnsw_config: ::core::option::Option<HnswConfig>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateCollectionResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DropCollectionRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DropCollectionResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub dropped_vectors: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetCollectionInfoRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListCollectionsRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListCollectionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub collections: ::prost::alloc::vec::Vec<CollectionInfo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InsertVectorsRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub vectors: ::prost::alloc::vec::Vec<Vector>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct InsertVectorsResponse {
    #[prost(string, repeated, tag = "1")]
    pub inserted_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub inserted_count: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteVectorsRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteVectorsResponse {
    #[prost(int64, tag = "1")]
    pub deleted_count: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(float, repeated, tag = "4")]
    pub query_vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(int32, tag = "5")]
    pub top_k: i32,
    #[prost(int32, optional, tag = "6")]
    pub ef_search: ::core::option::Option<i32>,
    #[prost(bool, optional, tag = "7")]
    pub include_vector: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: ::prost::alloc::vec::Vec<SearchResultItem>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmbedAndInsertRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub texts: ::prost::alloc::vec::Vec<TextWithMetadata>,
    #[prost(string, tag = "5")]
    pub embedding_model: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EmbedAndInsertResponse {
    #[prost(string, repeated, tag = "1")]
    pub inserted_ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub inserted_count: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EmbedAndSearchRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, tag = "2")]
    pub db_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub query_text: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub top_k: i32,
    #[prost(string, tag = "6")]
    pub embedding_model: ::prost::alloc::string::String,
    #[prost(int32, optional, tag = "7")]
    pub ef_search: ::core::option::Option<i32>,
    #[prost(bool, optional, tag = "8")]
    pub include_vector: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EmbedTextRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
    #[prost(string, repeated, tag = "2")]
    pub texts: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub embedding_model: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmbedTextResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: ::prost::alloc::vec::Vec<EmbedTextResult>,
    #[prost(string, tag = "2")]
    pub model: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListEmbeddingModelsRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ListEmbeddingModelsResponse {
    #[prost(message, repeated, tag = "1")]
    pub models: ::prost::alloc::vec::Vec<EmbeddingModel>,
    #[prost(string, tag = "2")]
    pub default_model: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SaveRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SaveResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub snapshot_size: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct BgSaveRequest {
    #[prost(message, optional, tag = "1")]
    pub auth: ::core::option::Option<AuthInfo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct BgSaveResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub job_id: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DistanceMetric {
    Unspecified = 0,
    L2 = 1,
    Cosine = 2,
    InnerProduct = 3,
}
impl DistanceMetric {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "DISTANCE_METRIC_UNSPECIFIED",
            Self::L2 => "DISTANCE_METRIC_L2",
            Self::Cosine => "DISTANCE_METRIC_COSINE",
            Self::InnerProduct => "DISTANCE_METRIC_INNER_PRODUCT",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "DISTANCE_METRIC_UNSPECIFIED" => Some(Self::Unspecified),
            "DISTANCE_METRIC_L2" => Some(Self::L2),
            "DISTANCE_METRIC_COSINE" => Some(Self::Cosine),
            "DISTANCE_METRIC_INNER_PRODUCT" => Some(Self::InnerProduct),
            _ => None,
        }
    }
}
include!("scintirete.v1.tonic.rs");
// @@protoc_insertion_point(module)
