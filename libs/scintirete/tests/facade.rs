//! End-to-end tests for the façade against an in-process Scintirete server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use scintirete::proto::scintirete_service_server::{ScintireteService, ScintireteServiceServer};
use scintirete::*;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::time::timeout;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::metadata::MetadataMap;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct MockState {
    required_password: Option<String>,
    calls: Mutex<Vec<&'static str>>,
    auth: Mutex<Vec<Option<AuthInfo>>>,
    metadata: Mutex<Vec<MetadataMap>>,
    create_database: Mutex<Vec<CreateDatabaseRequest>>,
    list_databases: Mutex<Vec<ListDatabasesRequest>>,
    save_started: Notify,
    release_save: Notify,
    bg_save_started: Notify,
}

impl MockState {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockScintirete(Arc<MockState>);

impl MockScintirete {
    fn record<T: WithAuth>(&self, method: &'static str, request: &Request<T>) -> Result<(), Status> {
        self.0.calls.lock().unwrap().push(method);
        self.0.auth.lock().unwrap().push(request.get_ref().auth().cloned());
        self.0.metadata.lock().unwrap().push(request.metadata().clone());

        match &self.0.required_password {
            Some(expected) => {
                let given = request.get_ref().auth().map(|auth| auth.password.as_str());
                if given == Some(expected.as_str()) {
                    Ok(())
                } else {
                    Err(Status::unauthenticated("invalid password"))
                }
            }
            None => Ok(()),
        }
    }
}

#[tonic::async_trait]
impl ScintireteService for MockScintirete {
    async fn create_database(
        &self,
        request: Request<CreateDatabaseRequest>,
    ) -> Result<Response<CreateDatabaseResponse>, Status> {
        self.record("CreateDatabase", &request)?;
        self.0.create_database.lock().unwrap().push(request.into_inner());
        Ok(Response::new(CreateDatabaseResponse {
            success: true,
            message: "created".to_string(),
        }))
    }

    async fn drop_database(
        &self,
        request: Request<DropDatabaseRequest>,
    ) -> Result<Response<DropDatabaseResponse>, Status> {
        self.record("DropDatabase", &request)?;
        Ok(Response::new(DropDatabaseResponse {
            success: true,
            dropped_collections: 1,
            ..Default::default()
        }))
    }

    async fn list_databases(
        &self,
        request: Request<ListDatabasesRequest>,
    ) -> Result<Response<ListDatabasesResponse>, Status> {
        self.record("ListDatabases", &request)?;
        self.0.list_databases.lock().unwrap().push(request.into_inner());
        Ok(Response::new(ListDatabasesResponse {
            names: vec!["example_db".to_string()],
        }))
    }

    async fn create_collection(
        &self,
        request: Request<CreateCollectionRequest>,
    ) -> Result<Response<CreateCollectionResponse>, Status> {
        self.record("CreateCollection", &request)?;
        Ok(Response::new(CreateCollectionResponse {
            success: true,
            ..Default::default()
        }))
    }

    async fn drop_collection(
        &self,
        request: Request<DropCollectionRequest>,
    ) -> Result<Response<DropCollectionResponse>, Status> {
        self.record("DropCollection", &request)?;
        Ok(Response::new(DropCollectionResponse::default()))
    }

    async fn get_collection_info(
        &self,
        request: Request<GetCollectionInfoRequest>,
    ) -> Result<Response<CollectionInfo>, Status> {
        self.record("GetCollectionInfo", &request)?;
        let request = request.into_inner();
        if request.collection_name != "vectors" {
            return Err(Status::not_found(format!(
                "collection {} not found",
                request.collection_name
            )));
        }
        Ok(Response::new(CollectionInfo {
            name: request.collection_name,
            dimension: 4,
            vector_count: 3,
            metric_type: DistanceMetric::Cosine as i32,
            hnsw_config: Some(HnswConfig {
                m: 16,
                ef_construction: 200,
            }),
            ..Default::default()
        }))
    }

    async fn list_collections(
        &self,
        request: Request<ListCollectionsRequest>,
    ) -> Result<Response<ListCollectionsResponse>, Status> {
        self.record("ListCollections", &request)?;
        Ok(Response::new(ListCollectionsResponse::default()))
    }

    async fn insert_vectors(
        &self,
        request: Request<InsertVectorsRequest>,
    ) -> Result<Response<InsertVectorsResponse>, Status> {
        self.record("InsertVectors", &request)?;
        let vectors = request.into_inner().vectors;
        let ids: Vec<String> = (1..=vectors.len()).map(|i| format!("v-{i}")).collect();
        Ok(Response::new(InsertVectorsResponse {
            inserted_count: ids.len() as i64,
            inserted_ids: ids,
        }))
    }

    async fn delete_vectors(
        &self,
        request: Request<DeleteVectorsRequest>,
    ) -> Result<Response<DeleteVectorsResponse>, Status> {
        self.record("DeleteVectors", &request)?;
        Ok(Response::new(DeleteVectorsResponse {
            deleted_count: request.into_inner().ids.len() as i64,
        }))
    }

    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<SearchResponse>, Status> {
        self.record("Search", &request)?;
        let request = request.into_inner();
        let metadata = serde_json::json!({ "title": "Document 1" });
        Ok(Response::new(SearchResponse {
            results: vec![SearchResultItem {
                id: "v-1".to_string(),
                distance: 0.05,
                vector: request.include_vector.unwrap_or(false).then(|| Vector {
                    id: "v-1".to_string(),
                    elements: request.query_vector.clone(),
                    metadata: None,
                }),
                metadata: Some(grpc_client::conversions::json_to_struct(
                    metadata.as_object().cloned().unwrap(),
                )),
            }],
        }))
    }

    async fn embed_and_insert(
        &self,
        request: Request<EmbedAndInsertRequest>,
    ) -> Result<Response<EmbedAndInsertResponse>, Status> {
        self.record("EmbedAndInsert", &request)?;
        Ok(Response::new(EmbedAndInsertResponse {
            inserted_count: request.into_inner().texts.len() as i64,
            ..Default::default()
        }))
    }

    async fn embed_and_search(
        &self,
        request: Request<EmbedAndSearchRequest>,
    ) -> Result<Response<SearchResponse>, Status> {
        self.record("EmbedAndSearch", &request)?;
        Ok(Response::new(SearchResponse::default()))
    }

    async fn embed_text(
        &self,
        request: Request<EmbedTextRequest>,
    ) -> Result<Response<EmbedTextResponse>, Status> {
        self.record("EmbedText", &request)?;
        let request = request.into_inner();
        Ok(Response::new(EmbedTextResponse {
            results: request
                .texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| EmbedTextResult {
                    text,
                    embedding: vec![0.0; 3],
                    index: index as i32,
                })
                .collect(),
            model: "mock-embed".to_string(),
        }))
    }

    async fn list_embedding_models(
        &self,
        request: Request<ListEmbeddingModelsRequest>,
    ) -> Result<Response<ListEmbeddingModelsResponse>, Status> {
        self.record("ListEmbeddingModels", &request)?;
        Ok(Response::new(ListEmbeddingModelsResponse {
            models: vec![EmbeddingModel {
                id: "mock-embed".to_string(),
                name: "Mock".to_string(),
                dimension: 3,
                available: true,
                description: String::new(),
            }],
            default_model: "mock-embed".to_string(),
        }))
    }

    /// Blocks until the test releases it
    async fn save(&self, request: Request<SaveRequest>) -> Result<Response<SaveResponse>, Status> {
        self.record("Save", &request)?;
        self.0.save_started.notify_one();
        self.0.release_save.notified().await;
        Ok(Response::new(SaveResponse {
            success: true,
            snapshot_size: 1024,
            ..Default::default()
        }))
    }

    /// Never completes
    async fn bg_save(
        &self,
        request: Request<BgSaveRequest>,
    ) -> Result<Response<BgSaveResponse>, Status> {
        self.record("BgSave", &request)?;
        self.0.bg_save_started.notify_one();
        std::future::pending::<()>().await;
        Ok(Response::new(BgSaveResponse::default()))
    }
}

async fn spawn_server(state: MockState) -> (SocketAddr, Arc<MockState>) {
    let state = Arc::new(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = ScintireteServiceServer::new(MockScintirete(state.clone()))
        .accept_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Gzip);

    tokio::spawn(
        Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener)),
    );

    (addr, state)
}

fn connect(options: ScintireteClientOptions) -> (ScintireteClient, Scintirete) {
    let client = ScintireteClient::new(options).unwrap();
    let api = Scintirete::new(client.clone());
    (client, api)
}

#[tokio::test]
async fn test_create_database_sends_configured_password() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) =
        connect(ScintireteClientOptions::new(addr.to_string()).with_password("secret"));

    let response = api
        .create_database(
            CreateDatabaseRequest {
                name: "example_db".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert!(response.success);

    let received = state.create_database.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![CreateDatabaseRequest {
            name: "example_db".to_string(),
            auth: Some(AuthInfo {
                password: "secret".to_string()
            }),
        }]
    );
}

#[tokio::test]
async fn test_no_password_sends_empty_auth() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(ScintireteClientOptions::new(addr.to_string()));

    api.create_database(
        CreateDatabaseRequest {
            name: "x".to_string(),
            // whatever the caller puts here is replaced
            auth: Some(AuthInfo {
                password: "ignored".to_string(),
            }),
        },
        None,
    )
    .await
    .unwrap();

    let received = state.create_database.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![CreateDatabaseRequest {
            name: "x".to_string(),
            auth: None,
        }]
    );
}

#[tokio::test]
async fn test_repeated_calls_inject_identical_auth() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) =
        connect(ScintireteClientOptions::new(addr.to_string()).with_password("secret"));

    api.list_databases(ListDatabasesRequest::default(), None)
        .await
        .unwrap();
    api.list_databases(ListDatabasesRequest::default(), None)
        .await
        .unwrap();

    let received = state.list_databases.lock().unwrap().clone();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0], received[1]);
    assert_eq!(
        received[0].auth,
        Some(AuthInfo {
            password: "secret".to_string()
        })
    );
}

#[tokio::test]
async fn test_service_error_is_returned_unchanged_without_retry() {
    let (addr, state) = spawn_server(MockState {
        required_password: Some("right".to_string()),
        ..Default::default()
    })
    .await;
    let (_client, api) =
        connect(ScintireteClientOptions::new(addr.to_string()).with_password("wrong"));

    let err = api
        .create_database(
            CreateDatabaseRequest {
                name: "example_db".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();

    let status = err.status().expect("service error should carry the status");
    assert_eq!(status.code(), tonic::Code::Unauthenticated);
    assert_eq!(status.message(), "invalid password");
    assert_eq!(state.calls(), vec!["CreateDatabase"]);
}

#[tokio::test]
async fn test_not_found_surfaces_as_status() {
    let (addr, _state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(ScintireteClientOptions::new(addr.to_string()));

    let err = api
        .get_collection_info(
            GetCollectionInfoRequest {
                db_name: "example_db".to_string(),
                collection_name: "missing".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), tonic::Code::NotFound);
}

#[tokio::test]
async fn test_slow_call_does_not_block_fast_call() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(ScintireteClientOptions::new(addr.to_string()));

    let slow = {
        let api = api.clone();
        tokio::spawn(async move { api.save(SaveRequest::default(), None).await })
    };
    timeout(WAIT, state.save_started.notified())
        .await
        .expect("save should reach the server");

    let fast = timeout(WAIT, api.list_databases(ListDatabasesRequest::default(), None))
        .await
        .expect("fast call must not wait for the slow one")
        .unwrap();
    assert_eq!(fast.names, vec!["example_db".to_string()]);
    assert!(!slow.is_finished());

    state.release_save.notify_one();
    let saved = timeout(WAIT, slow).await.unwrap().unwrap().unwrap();
    assert_eq!(saved.snapshot_size, 1024);
}

#[tokio::test]
async fn test_calls_after_close_fail_instead_of_hanging() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (client, api) = connect(ScintireteClientOptions::new(addr.to_string()));

    client.close();
    client.close();

    let result = timeout(WAIT, api.list_databases(ListDatabasesRequest::default(), None))
        .await
        .expect("call after close must not hang");
    let err = result.unwrap_err();
    assert!(err.is_closed());
    assert_eq!(err.code(), tonic::Code::Cancelled);
    assert!(state.calls().is_empty());
}

#[tokio::test]
async fn test_close_cancels_in_flight_calls() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (client, api) = connect(ScintireteClientOptions::new(addr.to_string()));

    let pending = {
        let api = api.clone();
        tokio::spawn(async move { api.bg_save(BgSaveRequest::default(), None).await })
    };
    timeout(WAIT, state.bg_save_started.notified())
        .await
        .expect("bg_save should reach the server");

    client.close();

    let result = timeout(WAIT, pending)
        .await
        .expect("in-flight call must finish after close")
        .unwrap();
    assert!(matches!(result, Err(GrpcError::Closed)));
}

#[tokio::test]
async fn test_call_options_metadata_reaches_server() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(
        ScintireteClientOptions::new(addr.to_string()).with_service_name("facade-tests"),
    );

    let options = CallOptions::new()
        .with_metadata("x-tenant", "acme")
        .unwrap();
    let mut replacement = MetadataMap::new();
    replacement.insert("x-trace-tag", "batch-7".parse().unwrap());
    let replaced = CallOptions::new()
        .with_metadata("x-tenant", "dropped")
        .unwrap()
        .with_metadata_map(replacement);

    api.list_collections(
        ListCollectionsRequest {
            db_name: "example_db".to_string(),
            ..Default::default()
        },
        Some(replaced),
    )
    .await
    .unwrap();
    api.list_collections(
        ListCollectionsRequest {
            db_name: "example_db".to_string(),
            ..Default::default()
        },
        Some(options),
    )
    .await
    .unwrap();

    let recorded = state.metadata.lock().unwrap().clone();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].get("x-trace-tag").unwrap(), "batch-7");
    assert!(recorded[0].get("x-tenant").is_none());

    let metadata = recorded[1].clone();
    assert_eq!(metadata.get("x-tenant").unwrap(), "acme");
    assert_eq!(metadata.get("x-source-service").unwrap(), "facade-tests");
    assert!(metadata.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_default_deadline_bounds_slow_calls() {
    let (addr, _state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(
        ScintireteClientOptions::new(addr.to_string())
            .with_default_deadline(Duration::from_millis(100)),
    );

    let result = timeout(WAIT, api.save(SaveRequest::default(), None))
        .await
        .expect("deadline should end the call");

    let err = result.unwrap_err();
    assert!(err.status().is_some());
    assert!(matches!(
        err.code(),
        tonic::Code::Cancelled | tonic::Code::DeadlineExceeded
    ));
}

#[tokio::test]
async fn test_gzip_round_trip() {
    let (addr, _state) = spawn_server(MockState::default()).await;
    let (_client, api) = connect(ScintireteClientOptions::new(addr.to_string()).with_gzip(true));

    let response = api
        .embed_text(
            EmbedTextRequest {
                texts: vec![
                    "Natural language processing".to_string(),
                    "Computer vision algorithms".to_string(),
                ],
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.model, "mock-embed");
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[1].index, 1);
}

#[tokio::test]
async fn test_vector_workflow() {
    let (addr, state) = spawn_server(MockState::default()).await;
    let (_client, api) =
        connect(ScintireteClientOptions::new(addr.to_string()).with_password("secret"));

    api.create_collection(
        CreateCollectionRequest {
            db_name: "example_db".to_string(),
            collection_name: "vectors".to_string(),
            metric_type: DistanceMetric::Cosine as i32,
            hnsw_config: Some(HnswConfig {
                m: 16,
                ef_construction: 200,
            }),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();

    let metadata = serde_json::json!({ "title": "Document 1", "category": "tech" });
    let inserted = api
        .insert_vectors(
            InsertVectorsRequest {
                db_name: "example_db".to_string(),
                collection_name: "vectors".to_string(),
                vectors: vec![
                    VectorData::new(vec![0.1, 0.2, 0.3, 0.4])
                        .with_metadata(metadata.as_object().cloned().unwrap())
                        .into(),
                    VectorData::new(vec![0.2, 0.3, 0.4, 0.5]).into(),
                ],
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(inserted.inserted_count, 2);

    let info = api
        .get_collection_info(
            GetCollectionInfoRequest {
                db_name: "example_db".to_string(),
                collection_name: "vectors".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(info.dimension, 4);
    assert_eq!(info.metric_type(), DistanceMetric::Cosine);

    let found = api
        .search(
            SearchOptions::new(2)
                .with_include_vector(true)
                .search_request("example_db", "vectors", vec![0.15, 0.25, 0.35, 0.45]),
            None,
        )
        .await
        .unwrap();
    assert_eq!(found.results.len(), 1);
    assert_eq!(found.results[0].metadata_json()["title"], "Document 1");
    assert!(found.results[0].vector.is_some());

    let deleted = api
        .delete_vectors(
            DeleteVectorsRequest {
                db_name: "example_db".to_string(),
                collection_name: "vectors".to_string(),
                ids: inserted.inserted_ids[..1].to_vec(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(deleted.deleted_count, 1);

    api.drop_collection(
        DropCollectionRequest {
            db_name: "example_db".to_string(),
            collection_name: "vectors".to_string(),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();

    api.drop_database(
        DropDatabaseRequest {
            name: "example_db".to_string(),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();

    assert_eq!(
        state.calls(),
        vec![
            "CreateCollection",
            "InsertVectors",
            "GetCollectionInfo",
            "Search",
            "DeleteVectors",
            "DropCollection",
            "DropDatabase"
        ]
    );

    let secret = Some(AuthInfo {
        password: "secret".to_string(),
    });
    let auth = state.auth.lock().unwrap().clone();
    assert_eq!(auth.len(), 7);
    assert!(auth.iter().all(|received| *received == secret));
}

#[tokio::test]
async fn test_text_embedding_workflow() {
    let (addr, state) = spawn_server(MockState {
        required_password: Some("secret".to_string()),
        ..Default::default()
    })
    .await;
    let (_client, api) =
        connect(ScintireteClientOptions::new(addr.to_string()).with_password("secret"));

    let models = api
        .list_embedding_models(ListEmbeddingModelsRequest::default(), None)
        .await
        .unwrap();
    assert_eq!(models.default_model, "mock-embed");

    let inserted = api
        .embed_and_insert(
            EmbedAndInsertRequest {
                db_name: "text_db".to_string(),
                collection_name: "documents".to_string(),
                texts: vec![
                    TextData::new("The quick brown fox jumps over the lazy dog").into(),
                    TextData::new("Python is a high-level programming language").into(),
                ],
                embedding_model: models.default_model.clone(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(inserted.inserted_count, 2);

    api.embed_and_search(
        SearchOptions::new(2).embed_search_request(
            "text_db",
            "documents",
            "programming languages",
            models.default_model,
        ),
        None,
    )
    .await
    .unwrap();

    api.bg_save(BgSaveRequest::default(), Some(CallOptions::new().with_timeout(Duration::from_millis(100))))
        .await
        .unwrap_err();

    assert_eq!(
        state.calls(),
        vec!["ListEmbeddingModels", "EmbedAndInsert", "EmbedAndSearch", "BgSave"]
    );
}
