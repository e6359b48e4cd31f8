use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::Error;
use crate::traits::{EmbeddingModel, Runnable};
use crate::Result;

/// A deterministic embeddings model for tests and demos
pub struct MockEmbeddings {
    dimension: usize,
    embeddings: HashMap<String, Vec<f32>>,
}

impl Default for MockEmbeddings {
    fn default() -> Self {
        Self {
            dimension: 4,
            embeddings: HashMap::new(),
        }
    }
}

impl MockEmbeddings {
    /// Create a new mock embeddings model
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            embeddings: HashMap::new(),
        }
    }

    /// Add a pre-defined embedding for a text
    pub fn with_embedding(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Result<Self> {
        if embedding.len() != self.dimension {
            return Err(Error::Embedding(format!(
                "Embedding dimension {} doesn't match expected dimension {}",
                embedding.len(),
                self.dimension
            )));
        }
        self.embeddings.insert(text.into(), embedding);
        Ok(self)
    }

    /// Generate a deterministic embedding from text
    fn generate_embedding(&self, text: &str) -> Vec<f32> {
        let mut result = vec![0.0; self.dimension];
        if self.dimension == 0 {
            return result;
        }

        for (i, c) in text.chars().enumerate() {
            let pos = i % self.dimension;
            result[pos] += (c as u32 % 100) as f32 / 100.0;
        }

        let magnitude: f32 = result.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for val in &mut result {
                *val /= magnitude;
            }
        }

        result
    }
}

#[async_trait]
impl Runnable<String, Vec<f32>> for MockEmbeddings {
    async fn invoke(&self, input: String) -> Result<Vec<f32>> {
        if let Some(embedding) = self.embeddings.get(&input) {
            return Ok(embedding.clone());
        }

        Ok(self.generate_embedding(&input))
    }
}

impl EmbeddingModel for MockEmbeddings {
    fn model_name(&self) -> &str {
        "mock-embeddings"
    }

    fn embedding_dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_and_normalized() {
        let model = MockEmbeddings::new(8);
        let a = model.invoke("hello world".to_string()).await.unwrap();
        let b = model.invoke("hello world".to_string()).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);

        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_predefined_embedding() {
        let model = MockEmbeddings::new(2)
            .with_embedding("fixed", vec![1.0, 0.0])
            .unwrap();
        assert_eq!(model.invoke("fixed".to_string()).await.unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_predefined_embedding_dimension_mismatch() {
        let result = MockEmbeddings::new(3).with_embedding("bad", vec![1.0]);
        assert!(matches!(result, Err(Error::Embedding(_))));
    }

    #[tokio::test]
    async fn test_embed_batch_preserves_order() {
        let model = MockEmbeddings::default();
        let texts = vec!["first".to_string(), "second".to_string()];
        let batch = model.embed_batch(texts).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1], model.invoke("second".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_text_is_zero_vector() {
        let model = MockEmbeddings::new(4);
        let embedding = model.invoke(String::new()).await.unwrap();
        assert_eq!(embedding, vec![0.0; 4]);
    }
}
