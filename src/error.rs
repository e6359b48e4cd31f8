use thiserror::Error;

/// Error type for textpack
#[derive(Error, Debug)]
pub enum Error {
    /// Chunker configuration violates its invariants
    #[error("Invalid chunker config: {0}")]
    InvalidConfig(String),

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Document loader error
    #[error("Document loader error: {0}")]
    DocumentLoader(String),

    /// Embedding model error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector store error
    #[error("Vector store error: {0}")]
    VectorStore(String),

    /// Material ingestion error
    #[error("Ingestion error: {0}")]
    Ingestion(String),
}
