//! Example: chunk a text file and print the chunks
//! Run with: cargo run --bin chunk -- notes.txt --config chunker.json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use textpack::document_loaders::TextLoader;
use textpack::traits::DocumentLoader;
use textpack::{ChunkerConfig, TieredTextSplitter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Split a text file into overlapping, token-bounded chunks")]
struct Args {
    /// Text file to chunk
    path: PathBuf,

    /// JSON file with target_chunk_size, max_chunk_size and overlap_size
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print chunks as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading config {}", path.display()))?;
            ChunkerConfig::from_json(&json)?
        }
        None => ChunkerConfig::default(),
    };

    let docs = TextLoader::new(&args.path).load().await?;
    let splitter = TieredTextSplitter::new(config);

    for doc in docs {
        for chunk in splitter.chunk(&doc.page_content) {
            if args.json {
                println!("{}", serde_json::to_string(&chunk)?);
            } else {
                println!("--- chunk {} ({} tokens) ---", chunk.index, chunk.token_count);
                println!("{}", chunk.text);
            }
        }
    }

    Ok(())
}
