//! Example: ingest a text file into an in-memory vector store and query it
//! Run with: cargo run --bin ingest -- notes.txt "what is osmosis"

use std::path::PathBuf;

use clap::Parser;
use textpack::document_loaders::TextLoader;
use textpack::embeddings::MockEmbeddings;
use textpack::ingestion::MaterialIngestor;
use textpack::traits::DocumentLoader;
use textpack::vectorstores::MemoryVectorStore;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(about = "Chunk, embed and store a text file, then query it")]
struct Args {
    /// Text file to ingest
    path: PathBuf,

    /// Query to run against the stored chunks
    query: String,

    /// Number of chunks to return
    #[arg(long, default_value_t = 3)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let docs = TextLoader::new(&args.path).load().await?;
    let ingestor = MaterialIngestor::new(MockEmbeddings::new(384), MemoryVectorStore::new());

    let material_id = Uuid::new_v4();
    let pod_id = Uuid::new_v4();
    for doc in &docs {
        let report = ingestor.ingest(material_id, pod_id, &doc.page_content).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    println!("Search results:");
    for chunk in ingestor.retrieve(&args.query, Some(material_id), None, args.limit).await? {
        println!("[{}] {}", chunk.chunk_index, chunk.text);
    }

    Ok(())
}
