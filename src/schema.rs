use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Document represents a piece of text and associated metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The document's content
    pub page_content: String,

    /// Metadata associated with the document
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a new document with the given content
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create a new document with content and metadata
    pub fn with_metadata(
        page_content: impl Into<String>,
        metadata: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            page_content: page_content.into(),
            metadata,
        }
    }
}

/// A chunk of an uploaded material together with its embedding, as persisted
/// in a vector store. Stores key records by `(material_id, chunk_index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialChunk {
    /// Record ID
    pub id: Uuid,

    /// Material the chunk was cut from
    pub material_id: Uuid,

    /// Pod the material belongs to
    pub pod_id: Uuid,

    /// Position of the chunk within the material
    pub chunk_index: usize,

    /// The chunk text
    pub text: String,

    /// Embedding of `text`
    pub embedding: Vec<f32>,

    /// Free-form metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl MaterialChunk {
    /// Create a new material chunk with a fresh ID
    pub fn new(
        material_id: Uuid,
        pod_id: Uuid,
        chunk_index: usize,
        text: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id,
            pod_id,
            chunk_index,
            text: text.into(),
            embedding,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the chunk
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Outcome of ingesting one material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    /// Chunks were embedded and stored
    Ready,
    /// Extraction, chunking, embedding or storage failed
    ProcessingFailed,
}

/// Summary of an ingestion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// The ingested material
    pub material_id: Uuid,

    /// Final status
    pub status: IngestStatus,

    /// Number of chunks stored
    pub chunk_count: usize,

    /// Whitespace-delimited words in the source text
    pub word_count: usize,

    /// Failure description, when `status` is `ProcessingFailed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
