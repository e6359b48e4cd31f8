use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::schema::{IngestReport, IngestStatus, MaterialChunk};
use crate::text_splitters::{ChunkerConfig, TieredTextSplitter};
use crate::traits::{EmbeddingModel, Runnable, VectorStore};
use crate::Result;

/// Turns extracted material text into embedded, stored chunks.
///
/// Chunks are embedded in order and stored under `(material_id, chunk_index)`.
/// Re-ingesting a material replaces every chunk previously stored for it.
pub struct MaterialIngestor<E, S> {
    splitter: TieredTextSplitter,
    embeddings: E,
    store: S,
}

impl<E, S> MaterialIngestor<E, S>
where
    E: EmbeddingModel,
    S: VectorStore,
{
    /// Create an ingestor with the default chunker configuration
    pub fn new(embeddings: E, store: S) -> Self {
        Self {
            splitter: TieredTextSplitter::default(),
            embeddings,
            store,
        }
    }

    /// Use a custom chunker configuration
    pub fn with_config(mut self, config: ChunkerConfig) -> Self {
        self.splitter = TieredTextSplitter::new(config);
        self
    }

    /// Vector store the ingestor writes to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Chunk, embed and store the text of one material
    pub async fn ingest(
        &self,
        material_id: Uuid,
        pod_id: Uuid,
        text: &str,
    ) -> Result<IngestReport> {
        if text.trim().is_empty() {
            return Err(Error::Ingestion("no text extracted from material".to_string()));
        }

        let chunks = self.splitter.chunk(text);
        if chunks.is_empty() {
            return Err(Error::Ingestion("no chunks generated from text".to_string()));
        }

        info!(
            material_id = %material_id,
            chunk_count = chunks.len(),
            "generated chunks"
        );

        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let embeddings = self.embeddings.embed_batch(texts).await?;
        if embeddings.len() != chunks.len() {
            return Err(Error::Embedding(format!(
                "model {} returned {} embeddings for {} chunks",
                self.embeddings.model_name(),
                embeddings.len(),
                chunks.len()
            )));
        }

        if let Some(first) = embeddings.first() {
            debug!(
                embedding_count = embeddings.len(),
                embedding_dimension = first.len(),
                "generated embeddings"
            );
        }

        let material_chunks: Vec<MaterialChunk> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| {
                MaterialChunk::new(material_id, pod_id, chunk.index, chunk.text, embedding)
                    .with_metadata("token_count", chunk.token_count.to_string())
            })
            .collect();
        let chunk_count = material_chunks.len();

        self.store.delete_by_material(material_id).await?;
        self.store.upsert(material_chunks).await?;

        info!(
            material_id = %material_id,
            pod_id = %pod_id,
            chunk_count,
            "stored material chunks"
        );

        Ok(IngestReport {
            material_id,
            status: IngestStatus::Ready,
            chunk_count,
            word_count: text.split_whitespace().count(),
            error: None,
        })
    }

    /// Like [`ingest`](Self::ingest), but reports failures as a
    /// `ProcessingFailed` report instead of an error
    pub async fn process(&self, material_id: Uuid, pod_id: Uuid, text: &str) -> IngestReport {
        match self.ingest(material_id, pod_id, text).await {
            Ok(report) => report,
            Err(err) => {
                error!(material_id = %material_id, error = %err, "failed to process material");
                IngestReport {
                    material_id,
                    status: IngestStatus::ProcessingFailed,
                    chunk_count: 0,
                    word_count: 0,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Remove every stored chunk of a material
    pub async fn delete(&self, material_id: Uuid) -> Result<()> {
        info!(material_id = %material_id, "deleting material chunks");
        if let Err(err) = self.store.delete_by_material(material_id).await {
            error!(material_id = %material_id, error = %err, "failed to delete material chunks");
            return Err(err);
        }
        Ok(())
    }

    /// Find the stored chunks most relevant to `query`
    pub async fn retrieve(
        &self,
        query: &str,
        material_id: Option<Uuid>,
        pod_id: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<MaterialChunk>> {
        let query_embedding = self.embeddings.invoke(query.to_string()).await?;
        let chunks = self
            .store
            .search(Some(query_embedding.as_slice()), material_id, pod_id, limit)
            .await?;
        if chunks.is_empty() {
            warn!(query, "no relevant chunks found");
        }
        Ok(chunks)
    }
}
