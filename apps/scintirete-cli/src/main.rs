//! Scintirete CLI
//!
//! Runs the basic-CRUD and text-embedding walk-throughs, or a single admin
//! call, against one Scintirete server.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};
use scintirete::{
    BgSaveRequest, ListCollectionsRequest, ListDatabasesRequest, ListEmbeddingModelsRequest,
    SaveRequest, Scintirete, ScintireteClient, ScintireteClientOptions,
};
use tracing::info;

mod demos;
mod telemetry;

use telemetry::{Environment, init_tracing, install_color_eyre};

#[derive(Parser)]
#[command(name = "scintirete-cli")]
#[command(about = "Talk to a Scintirete vector database over gRPC")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Server address as host:port
    #[arg(long, env = "SCINTIRETE_ADDRESS", default_value = "127.0.0.1:50051", global = true)]
    address: String,

    /// Shared secret; omit for servers without auth
    #[arg(long, env = "SCINTIRETE_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Connect over TLS using the bundled web PKI roots
    #[arg(long, global = true)]
    tls: bool,

    /// Gzip request and response bodies
    #[arg(long, global = true)]
    gzip: bool,

    /// Deadline for each call, in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
}

impl ConnectionArgs {
    fn client_options(&self) -> ScintireteClientOptions {
        let mut options = ScintireteClientOptions::new(&self.address)
            .with_tls(self.tls)
            .with_gzip(self.gzip)
            .with_service_name(env!("CARGO_PKG_NAME"));
        if let Some(password) = &self.password {
            options = options.with_password(password);
        }
        if let Some(ms) = self.timeout_ms {
            options = options.with_default_deadline(Duration::from_millis(ms));
        }
        options
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a database and collection, insert, search, delete, then clean up
    BasicCrud,

    /// Insert and search documents using server-side embeddings
    TextEmbedding,

    /// List databases
    Databases,

    /// List collections in a database
    Collections {
        #[arg(long)]
        db: String,
    },

    /// List embedding models
    Models,

    /// Snapshot the server's data
    Save {
        /// Return immediately and let the server snapshot in the background
        #[arg(long)]
        background: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    init_tracing(Environment::from_env());

    let client = ScintireteClient::new(cli.connection.client_options())
        .wrap_err_with(|| format!("Invalid connection settings for {}", cli.connection.address))?;
    let api = Scintirete::new(client.clone());

    let outcome = run(&api, cli.command).await;
    client.close();
    outcome
}

async fn run(api: &Scintirete, command: Commands) -> Result<()> {
    match command {
        Commands::BasicCrud => {
            info!("Running basic CRUD walk-through");
            demos::basic_crud(api).await?;
        }

        Commands::TextEmbedding => {
            info!("Running text embedding walk-through");
            demos::text_embedding(api).await?;
        }

        Commands::Databases => {
            let response = api
                .list_databases(ListDatabasesRequest::default(), None)
                .await
                .wrap_err("Failed to list databases")?;
            for name in response.names {
                println!("{name}");
            }
        }

        Commands::Collections { db } => {
            let response = api
                .list_collections(
                    ListCollectionsRequest {
                        db_name: db.clone(),
                        ..Default::default()
                    },
                    None,
                )
                .await
                .wrap_err_with(|| format!("Failed to list collections in {db}"))?;
            for collection in response.collections {
                println!(
                    "{}\tdim={}\tvectors={}\tmetric={}",
                    collection.name,
                    collection.dimension,
                    collection.vector_count,
                    collection.metric_type().as_str_name()
                );
            }
        }

        Commands::Models => {
            let response = api
                .list_embedding_models(ListEmbeddingModelsRequest::default(), None)
                .await
                .wrap_err("Failed to list embedding models")?;
            for model in response.models {
                let marker = if model.id == response.default_model { "*" } else { " " };
                println!(
                    "{marker} {}\t{}\t{}D\tavailable={}",
                    model.id, model.name, model.dimension, model.available
                );
            }
        }

        Commands::Save { background: true } => {
            let response = api
                .bg_save(BgSaveRequest::default(), None)
                .await
                .wrap_err("Background save failed")?;
            info!(job_id = %response.job_id, message = %response.message, "Background save started");
        }

        Commands::Save { background: false } => {
            let response = api
                .save(SaveRequest::default(), None)
                .await
                .wrap_err("Save failed")?;
            info!(
                snapshot_size = response.snapshot_size,
                message = %response.message,
                "Snapshot written"
            );
        }
    }

    Ok(())
}
