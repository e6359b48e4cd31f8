use async_trait::async_trait;
use uuid::Uuid;

use crate::schema::{Document, MaterialChunk};
use crate::Result;

/// Trait for any component that can be invoked with an input and produces an output asynchronously.
///
/// Embedding models and text splitters both implement it, so pipelines can
/// treat them uniformly.
#[async_trait]
pub trait Runnable<Input: Send + 'static, Output: 'static> {
    /// Run the component on the given input and return the output.
    async fn invoke(&self, input: Input) -> Result<Output>;

    /// Run the component on a batch of inputs.
    async fn batch(&self, inputs: Vec<Input>) -> Result<Vec<Result<Output>>>
    where
        Self: Sync,
        Input: Sync,
        Output: Send,
    {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(self.invoke(input).await);
        }
        Ok(results)
    }
}

/// Trait for document loaders (e.g. file, web, etc.).
#[async_trait]
pub trait DocumentLoader {
    /// Load documents from a source.
    async fn load(&self) -> Result<Vec<Document>>;
}

/// Trait for text splitters (chunking documents/text).
pub trait TextSplitter {
    /// Split a document into chunks.
    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>>;
    /// Split text into chunks.
    fn split_text(&self, text: &str) -> Result<Vec<String>>;
}

/// Trait for embedding models (text to vector).
#[async_trait]
pub trait EmbeddingModel: Runnable<String, Vec<f32>> + Send + Sync {
    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
    /// Get the dimension of the embeddings produced by this model.
    fn embedding_dimension(&self) -> usize;
    /// Embed multiple texts in a single batch call (default: loop invoke).
    ///
    /// Implementations must return one embedding per input, in input order.
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.invoke(text).await?);
        }
        Ok(embeddings)
    }
}

/// Trait for stores of embedded material chunks.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert chunks, replacing any stored chunk with the same material and index.
    async fn upsert(&self, chunks: Vec<MaterialChunk>) -> Result<()>;
    /// Find chunks nearest to `embedding`, optionally restricted to a material
    /// or pod. Without an embedding, matching chunks come back in index order.
    async fn search(
        &self,
        embedding: Option<&[f32]>,
        material_id: Option<Uuid>,
        pod_id: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<MaterialChunk>>;
    /// Delete every chunk of a material.
    async fn delete_by_material(&self, material_id: Uuid) -> Result<()>;
}
