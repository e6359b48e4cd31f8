pub mod document_loaders;
pub mod embeddings;
pub mod error;
pub mod ingestion;
pub mod schema;
pub mod text_splitters;
pub mod traits;
pub mod vectorstores;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use text_splitters::{chunk_text, Chunk, ChunkerConfig, TieredTextSplitter};

/// Re-exports for common types
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::ingestion::*;
    pub use crate::schema::*;
    pub use crate::text_splitters::*;
    pub use crate::traits::*;
    pub use crate::Result;
}
