use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::Error;
use crate::schema::MaterialChunk;
use crate::traits::VectorStore;
use crate::Result;

use super::similarity::{cosine_similarity, distance_to_similarity, dot_product, euclidean_distance};

/// Similarity metrics for comparing vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// Cosine similarity (higher is more similar)
    #[default]
    Cosine,
    /// Euclidean distance (lower is more similar)
    Euclidean,
    /// Dot product (higher is more similar)
    DotProduct,
}

/// An in-memory store of embedded material chunks
#[derive(Clone, Default)]
pub struct MemoryVectorStore {
    chunks: Arc<RwLock<Vec<MaterialChunk>>>,
    similarity_metric: SimilarityMetric,
}

impl MemoryVectorStore {
    /// Create a new in-memory vector store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity metric
    pub fn with_similarity_metric(mut self, metric: SimilarityMetric) -> Self {
        self.similarity_metric = metric;
        self
    }

    /// Number of stored chunks
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no chunks
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Calculate similarity between two vectors based on selected metric
    fn calculate_similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        match self.similarity_metric {
            SimilarityMetric::Cosine => cosine_similarity(a, b),
            SimilarityMetric::Euclidean => distance_to_similarity(euclidean_distance(a, b)),
            SimilarityMetric::DotProduct => dot_product(a, b),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<MaterialChunk>>> {
        self.chunks.read().map_err(|_| {
            Error::VectorStore("Failed to acquire read lock on vector store".to_string())
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<MaterialChunk>>> {
        self.chunks.write().map_err(|_| {
            Error::VectorStore("Failed to acquire write lock on vector store".to_string())
        })
    }
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn upsert(&self, chunks: Vec<MaterialChunk>) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let mut storage = self.write()?;
        for chunk in chunks {
            match storage.iter_mut().find(|stored| {
                stored.material_id == chunk.material_id && stored.chunk_index == chunk.chunk_index
            }) {
                Some(stored) => *stored = chunk,
                None => storage.push(chunk),
            }
        }
        Ok(())
    }

    async fn search(
        &self,
        embedding: Option<&[f32]>,
        material_id: Option<Uuid>,
        pod_id: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<MaterialChunk>> {
        let storage = self.read()?;

        let matching = storage.iter().filter(|chunk| {
            material_id.map_or(true, |id| chunk.material_id == id)
                && pod_id.map_or(true, |id| chunk.pod_id == id)
        });

        let results = match embedding {
            Some(embedding) => {
                let mut scored: Vec<(f32, &MaterialChunk)> = matching
                    .map(|chunk| (self.calculate_similarity(embedding, &chunk.embedding), chunk))
                    .collect();
                // Sort by similarity (highest first)
                scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
                scored
                    .into_iter()
                    .take(limit)
                    .map(|(_, chunk)| chunk.clone())
                    .collect()
            }
            None => {
                let mut ordered: Vec<&MaterialChunk> = matching.collect();
                ordered.sort_by_key(|chunk| (chunk.material_id, chunk.chunk_index));
                ordered.into_iter().take(limit).cloned().collect()
            }
        };

        Ok(results)
    }

    async fn delete_by_material(&self, material_id: Uuid) -> Result<()> {
        let mut storage = self.write()?;
        storage.retain(|chunk| chunk.material_id != material_id);
        Ok(())
    }
}
