//! End-to-end walk-throughs against a live server
//!
//! Each demo creates its own database and drops it afterwards, whether or
//! not the steps in between succeeded.

use eyre::{Result, WrapErr};
use scintirete::{
    CreateCollectionRequest, CreateDatabaseRequest, DeleteVectorsRequest, DistanceMetric,
    DropDatabaseRequest, EmbedAndInsertRequest, EmbedTextRequest, GetCollectionInfoRequest,
    HnswConfig, InsertVectorsRequest, ListEmbeddingModelsRequest, MetadataExt, Scintirete,
    SearchOptions, TextData, TextWithMetadata, Vector, VectorData,
};
use serde_json::{Map, Value, json};
use tracing::{info, warn};

const CRUD_DB: &str = "example_db";
const CRUD_COLLECTION: &str = "vectors";
const TEXT_DB: &str = "text_db";
const TEXT_COLLECTION: &str = "documents";

const QUERIES: [&str; 4] = [
    "programming languages",
    "artificial intelligence",
    "animal behavior",
    "database technology",
];

pub async fn basic_crud(api: &Scintirete) -> Result<()> {
    let outcome = run_basic_crud(api).await;
    drop_database(api, CRUD_DB).await;
    outcome
}

pub async fn text_embedding(api: &Scintirete) -> Result<()> {
    let outcome = run_text_embedding(api).await;
    drop_database(api, TEXT_DB).await;
    outcome
}

async fn run_basic_crud(api: &Scintirete) -> Result<()> {
    api.create_database(
        CreateDatabaseRequest {
            name: CRUD_DB.to_string(),
            ..Default::default()
        },
        None,
    )
    .await
    .wrap_err("Failed to create database")?;
    info!(db = CRUD_DB, "Database created");

    api.create_collection(
        CreateCollectionRequest {
            db_name: CRUD_DB.to_string(),
            collection_name: CRUD_COLLECTION.to_string(),
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
    .wrap_err("Failed to create collection")?;
    info!(collection = CRUD_COLLECTION, "Collection created");

    let vectors: Vec<Vector> = [
        (vec![0.1, 0.2, 0.3, 0.4], json!({ "title": "Document 1", "category": "tech" })),
        (vec![0.2, 0.3, 0.4, 0.5], json!({ "title": "Document 2", "category": "science" })),
        (vec![0.5, 0.4, 0.3, 0.2], json!({ "title": "Document 3", "category": "tech" })),
    ]
    .into_iter()
    .map(|(elements, metadata)| Vector::from(VectorData::new(elements).with_metadata(object(metadata))))
    .collect();

    let inserted = api
        .insert_vectors(
            InsertVectorsRequest {
                db_name: CRUD_DB.to_string(),
                collection_name: CRUD_COLLECTION.to_string(),
                vectors,
                ..Default::default()
            },
            None,
        )
        .await
        .wrap_err("Failed to insert vectors")?;
    info!(
        count = inserted.inserted_count,
        ids = ?inserted.inserted_ids,
        "Inserted vectors"
    );

    let collection = api
        .get_collection_info(
            GetCollectionInfoRequest {
                db_name: CRUD_DB.to_string(),
                collection_name: CRUD_COLLECTION.to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .wrap_err("Failed to fetch collection info")?;
    info!(
        name = %collection.name,
        dimension = collection.dimension,
        vector_count = collection.vector_count,
        memory_bytes = collection.memory_bytes,
        "Collection info"
    );

    let found = api
        .search(
            SearchOptions::new(2).with_include_vector(true).search_request(
                CRUD_DB,
                CRUD_COLLECTION,
                vec![0.15, 0.25, 0.35, 0.45],
            ),
            None,
        )
        .await
        .wrap_err("Search failed")?;
    for (rank, result) in found.results.iter().enumerate() {
        println!("  {}. ID: {}, Distance: {}", rank + 1, result.id, result.distance);
        println!("     Metadata: {}", Value::Object(result.metadata_json()));
    }

    if let Some(first) = inserted.inserted_ids.first() {
        let deleted = api
            .delete_vectors(
                DeleteVectorsRequest {
                    db_name: CRUD_DB.to_string(),
                    collection_name: CRUD_COLLECTION.to_string(),
                    ids: vec![first.clone()],
                    ..Default::default()
                },
                None,
            )
            .await
            .wrap_err("Failed to delete vector")?;
        info!(count = deleted.deleted_count, "Deleted vectors");
    }

    Ok(())
}

async fn run_text_embedding(api: &Scintirete) -> Result<()> {
    api.create_database(
        CreateDatabaseRequest {
            name: TEXT_DB.to_string(),
            ..Default::default()
        },
        None,
    )
    .await
    .wrap_err("Failed to create database")?;
    api.create_collection(
        CreateCollectionRequest {
            db_name: TEXT_DB.to_string(),
            collection_name: TEXT_COLLECTION.to_string(),
            metric_type: DistanceMetric::Cosine as i32,
            ..Default::default()
        },
        None,
    )
    .await
    .wrap_err("Failed to create collection")?;
    info!(db = TEXT_DB, collection = TEXT_COLLECTION, "Setup complete");

    let models = api
        .list_embedding_models(ListEmbeddingModelsRequest::default(), None)
        .await
        .wrap_err("Failed to list embedding models")?;
    for model in &models.models {
        println!("  - {}: {} ({}D)", model.id, model.name, model.dimension);
    }
    println!("Default model: {}", models.default_model);

    let texts: Vec<TextWithMetadata> = [
        (
            "The quick brown fox jumps over the lazy dog",
            json!({ "category": "animals", "source": "example1.txt" }),
        ),
        (
            "Python is a high-level programming language",
            json!({ "category": "programming", "source": "example2.txt" }),
        ),
        (
            "Machine learning algorithms can process large datasets",
            json!({ "category": "ai", "source": "example3.txt" }),
        ),
        (
            "Vector databases are optimized for similarity search",
            json!({ "category": "database", "source": "example4.txt" }),
        ),
    ]
    .into_iter()
    .map(|(text, metadata)| TextWithMetadata::from(TextData::new(text).with_metadata(object(metadata))))
    .collect();

    let inserted = api
        .embed_and_insert(
            EmbedAndInsertRequest {
                db_name: TEXT_DB.to_string(),
                collection_name: TEXT_COLLECTION.to_string(),
                texts,
                embedding_model: models.default_model.clone(),
                ..Default::default()
            },
            None,
        )
        .await
        .wrap_err("Failed to embed and insert documents")?;
    info!(count = inserted.inserted_count, "Inserted documents");

    let search = SearchOptions::new(2).with_include_vector(false);
    for query in QUERIES {
        let found = api
            .embed_and_search(
                search.embed_search_request(TEXT_DB, TEXT_COLLECTION, query, ""),
                None,
            )
            .await
            .wrap_err_with(|| format!("Text search for {query:?} failed"))?;

        println!("\nQuery: {query:?}");
        for (rank, result) in found.results.iter().enumerate() {
            let metadata = result.metadata_json();
            println!("  {}. Distance: {:.4}", rank + 1, result.distance);
            println!("     Category: {}", field(&metadata, "category"));
            println!("     Source: {}", field(&metadata, "source"));
        }
    }

    let embedded = api
        .embed_text(
            EmbedTextRequest {
                texts: vec![
                    "Natural language processing".to_string(),
                    "Computer vision algorithms".to_string(),
                ],
                embedding_model: models.default_model,
                ..Default::default()
            },
            None,
        )
        .await
        .wrap_err("Failed to embed text")?;
    for result in &embedded.results {
        let head: Vec<String> = result
            .embedding
            .iter()
            .take(3)
            .map(|x| format!("{x:.3}"))
            .collect();
        println!("  Text: {:?}", result.text);
        println!("  Vector length: {}", result.embedding.len());
        println!("  First few dimensions: [{}...]", head.join(", "));
    }

    Ok(())
}

/// Best effort; a failed drop is logged, never returned
async fn drop_database(api: &Scintirete, name: &str) {
    let request = DropDatabaseRequest {
        name: name.to_string(),
        ..Default::default()
    };
    match api.drop_database(request, None).await {
        Ok(_) => info!(db = name, "Database cleaned up"),
        Err(error) => warn!(db = name, %error, "Cleanup failed"),
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn field(metadata: &Map<String, Value>, key: &str) -> String {
    match metadata.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_formats_metadata_values() {
        let metadata = object(json!({ "category": "ai", "rank": 2 }));
        assert_eq!(field(&metadata, "category"), "ai");
        assert_eq!(field(&metadata, "rank"), "2");
        assert_eq!(field(&metadata, "source"), "-");
    }

    #[test]
    fn test_object_ignores_non_objects() {
        assert!(object(json!([1, 2])).is_empty());
        assert_eq!(object(json!({ "a": 1 })).len(), 1);
    }
}
