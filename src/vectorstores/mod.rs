pub mod memory;
mod similarity;

pub use memory::{MemoryVectorStore, SimilarityMetric};
pub use similarity::{cosine_similarity, distance_to_similarity, dot_product, euclidean_distance};
