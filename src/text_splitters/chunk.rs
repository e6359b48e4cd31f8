use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// Token budgets that drive the tiered chunker.
///
/// A value of this type always satisfies `0 < target_chunk_size <= max_chunk_size`.
/// Construction and deserialization both go through [`ChunkerConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChunkerConfig")]
pub struct ChunkerConfig {
    /// Soft limit: packing stops adding units once this would be exceeded
    target_chunk_size: usize,
    /// Hard limit: units estimated above this are split at the next finer tier
    max_chunk_size: usize,
    /// Approximate token budget carried from one chunk into the next
    overlap_size: usize,
}

/// Unvalidated shape of a config as it appears on the wire
#[derive(Debug, Deserialize)]
struct RawChunkerConfig {
    target_chunk_size: usize,
    max_chunk_size: usize,
    #[serde(default = "default_overlap_size")]
    overlap_size: usize,
}

fn default_overlap_size() -> usize {
    ChunkerConfig::DEFAULT_OVERLAP_SIZE
}

impl TryFrom<RawChunkerConfig> for ChunkerConfig {
    type Error = Error;

    fn try_from(raw: RawChunkerConfig) -> Result<Self> {
        Self::new(raw.target_chunk_size, raw.max_chunk_size, raw.overlap_size)
    }
}

impl ChunkerConfig {
    pub const DEFAULT_TARGET_CHUNK_SIZE: usize = 750;
    pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;
    pub const DEFAULT_OVERLAP_SIZE: usize = 100;

    /// Create a new chunker configuration, rejecting invalid budgets
    pub fn new(
        target_chunk_size: usize,
        max_chunk_size: usize,
        overlap_size: usize,
    ) -> Result<Self> {
        if target_chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "target_chunk_size must be greater than zero".to_string(),
            ));
        }
        if target_chunk_size > max_chunk_size {
            return Err(Error::InvalidConfig(format!(
                "target_chunk_size ({}) must not exceed max_chunk_size ({})",
                target_chunk_size, max_chunk_size
            )));
        }
        Ok(Self {
            target_chunk_size,
            max_chunk_size,
            overlap_size,
        })
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy with a different target size, revalidated
    pub fn with_target(self, target_chunk_size: usize) -> Result<Self> {
        Self::new(target_chunk_size, self.max_chunk_size, self.overlap_size)
    }

    /// Copy with a different max size, revalidated
    pub fn with_max(self, max_chunk_size: usize) -> Result<Self> {
        Self::new(self.target_chunk_size, max_chunk_size, self.overlap_size)
    }

    /// Copy with a different overlap budget
    pub fn with_overlap(self, overlap_size: usize) -> Result<Self> {
        Self::new(self.target_chunk_size, self.max_chunk_size, overlap_size)
    }

    /// Soft per-chunk token limit
    pub fn target_chunk_size(&self) -> usize {
        self.target_chunk_size
    }

    /// Hard per-unit token limit
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Token budget carried between chunks
    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            target_chunk_size: Self::DEFAULT_TARGET_CHUNK_SIZE,
            max_chunk_size: Self::DEFAULT_MAX_CHUNK_SIZE,
            overlap_size: Self::DEFAULT_OVERLAP_SIZE,
        }
    }
}

/// A bounded segment of normalized source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Zero-based position in the chunker's output
    pub index: usize,
    /// Trimmed chunk content
    pub text: String,
    /// Estimated token cost of the chunk
    pub token_count: usize,
}
