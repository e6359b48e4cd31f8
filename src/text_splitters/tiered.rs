use async_trait::async_trait;
use tracing::debug;

use crate::schema::Document;
use crate::traits::{Runnable, TextSplitter};
use crate::Result;

use super::chunk::{Chunk, ChunkerConfig};
use super::normalize::{normalize, PARAGRAPH_BREAK};
use super::overlap::compute_overlap;
use super::structure::{split_paragraphs, split_sentences};
use super::tokens::estimate_tokens;

/// Granularity at which the packer works, coarsest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Paragraph,
    Sentence,
    Word,
}

impl Tier {
    /// String placed between units joined into one chunk
    fn separator(self) -> &'static str {
        match self {
            Tier::Paragraph => PARAGRAPH_BREAK,
            Tier::Sentence | Tier::Word => " ",
        }
    }

    /// Tier that oversized units fall back to; words are terminal
    fn finer(self) -> Option<Tier> {
        match self {
            Tier::Paragraph => Some(Tier::Sentence),
            Tier::Sentence => Some(Tier::Word),
            Tier::Word => None,
        }
    }

    fn split(self, text: &str) -> Vec<String> {
        match self {
            Tier::Paragraph => split_paragraphs(text),
            Tier::Sentence => split_sentences(text),
            Tier::Word => text.split_whitespace().map(String::from).collect(),
        }
    }
}

/// Chunk content produced by a tier. Only [`chunk_text`] turns these into
/// indexed [`Chunk`]s.
#[derive(Debug)]
struct ChunkPiece {
    text: String,
    token_count: usize,
}

/// Accumulates units of one tier into pieces
struct Packer<'a> {
    config: &'a ChunkerConfig,
    tier: Tier,
    pieces: Vec<ChunkPiece>,
    buffer: String,
    buffer_tokens: usize,
}

impl<'a> Packer<'a> {
    fn new(config: &'a ChunkerConfig, tier: Tier) -> Self {
        Self {
            config,
            tier,
            pieces: Vec::new(),
            buffer: String::new(),
            buffer_tokens: 0,
        }
    }

    fn push_unit(&mut self, unit: String) {
        let unit_tokens = estimate_tokens(&unit);

        if unit_tokens > self.config.max_chunk_size() {
            self.flush();
            match self.tier.finer() {
                Some(finer) => {
                    debug!(
                        tier = ?self.tier,
                        fallback = ?finer,
                        unit_tokens,
                        max_chunk_size = self.config.max_chunk_size(),
                        "unit exceeds max chunk size, splitting at finer tier"
                    );
                    let units = finer.split(&unit);
                    self.pieces.extend(pack(units, finer, self.config));
                }
                None => self.pieces.push(ChunkPiece {
                    text: unit,
                    token_count: unit_tokens,
                }),
            }
            return;
        }

        if !self.buffer.is_empty()
            && self.buffer_tokens + unit_tokens > self.config.target_chunk_size()
        {
            let overlap = compute_overlap(&self.buffer, self.config.overlap_size());
            self.flush();
            if !overlap.is_empty() {
                self.buffer_tokens = estimate_tokens(&overlap);
                self.buffer = overlap;
            }
        }

        if !self.buffer.is_empty() {
            self.buffer.push_str(self.tier.separator());
        }
        self.buffer.push_str(&unit);
        self.buffer_tokens += unit_tokens;
    }

    /// Emit the buffer as a piece if it holds anything, leaving it empty
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = self.buffer.trim().to_string();
            self.pieces.push(ChunkPiece {
                text,
                token_count: self.buffer_tokens,
            });
        }
        self.buffer.clear();
        self.buffer_tokens = 0;
    }

    fn finish(mut self) -> Vec<ChunkPiece> {
        self.flush();
        self.pieces
    }
}

/// Pack `units` of `tier` into pieces, recursing into finer tiers for units
/// above the hard limit
fn pack(units: Vec<String>, tier: Tier, config: &ChunkerConfig) -> Vec<ChunkPiece> {
    let mut packer = Packer::new(config, tier);
    for unit in units {
        packer.push_unit(unit);
    }
    packer.finish()
}

/// Split `text` into ordered, overlapping chunks.
///
/// Paragraphs are packed up to the target size. A paragraph above the max
/// size is packed sentence by sentence instead, and a sentence above the max
/// size word by word. Empty or whitespace-only input yields no chunks.
pub fn chunk_text(text: &str, config: &ChunkerConfig) -> Vec<Chunk> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let paragraphs = Tier::Paragraph.split(&normalized);
    let paragraph_count = paragraphs.len();

    let chunks: Vec<Chunk> = pack(paragraphs, Tier::Paragraph, config)
        .into_iter()
        .enumerate()
        .map(|(index, piece)| Chunk {
            index,
            text: piece.text,
            token_count: piece.token_count,
        })
        .collect();

    debug!(
        paragraph_count,
        chunk_count = chunks.len(),
        target_chunk_size = config.target_chunk_size(),
        "chunked text"
    );

    chunks
}

/// Text splitter that packs paragraphs, then sentences, then words into
/// token-bounded chunks
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredTextSplitter {
    config: ChunkerConfig,
}

impl TieredTextSplitter {
    /// Create a new splitter with the given configuration
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Budgets this splitter packs against
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split text into indexed chunks
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        chunk_text(text, &self.config)
    }
}

impl TextSplitter for TieredTextSplitter {
    fn split_text(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.chunk(text).into_iter().map(|chunk| chunk.text).collect())
    }

    fn split_documents(&self, documents: Vec<Document>) -> Result<Vec<Document>> {
        let mut result = Vec::new();

        for doc in documents {
            for chunk in self.chunk(&doc.page_content) {
                let mut new_doc = Document::new(chunk.text);
                new_doc.metadata = doc.metadata.clone();
                new_doc
                    .metadata
                    .insert("chunk_index".to_string(), chunk.index.into());
                new_doc
                    .metadata
                    .insert("token_count".to_string(), chunk.token_count.into());
                result.push(new_doc);
            }
        }

        Ok(result)
    }
}

#[async_trait]
impl Runnable<String, Vec<Chunk>> for TieredTextSplitter {
    async fn invoke(&self, input: String) -> Result<Vec<Chunk>> {
        Ok(self.chunk(&input))
    }
}
