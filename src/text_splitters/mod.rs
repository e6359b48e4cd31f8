pub mod chunk;
pub mod normalize;
pub mod overlap;
pub mod structure;
pub mod tiered;
pub mod tokens;

pub use chunk::{Chunk, ChunkerConfig};
pub use normalize::normalize;
pub use overlap::compute_overlap;
pub use structure::{split_paragraphs, split_sentences};
pub use tiered::{chunk_text, TieredTextSplitter};
pub use tokens::estimate_tokens;
