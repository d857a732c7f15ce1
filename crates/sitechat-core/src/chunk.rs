//! Paragraph-boundary text chunker for crawled pages.
//!
//! Splits page text into [`Chunk`]s of at most `max_tokens` (estimated at
//! four characters per token). Paragraphs (`\n\n`) are packed together
//! while they fit; a paragraph longer than the limit is hard-split at the
//! last newline or space before the limit. Crawled text usually arrives
//! as one long line, so the hard-split path does most of the work there.
//!
//! Every chunk gets a fresh UUID and a SHA-256 of its text, which the
//! embedding backfill uses to spot stale vectors.
//!
//! ```rust
//! use sitechat_core::chunk::chunk_text;
//!
//! let chunks = chunk_text("page-1", "Opening hours.\n\nRefund policy.", 700);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].chunk_index, 0);
//! ```

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::Chunk;

/// Approximate characters-per-token ratio.
const CHARS_PER_TOKEN: usize = 4;

/// Split `text` into chunks with contiguous indices starting at 0.
///
/// Always returns at least one chunk, even for empty text.
pub fn chunk_text(document_id: &str, text: &str, max_tokens: usize) -> Vec<Chunk> {
    let max_chars = (max_tokens * CHARS_PER_TOKEN).max(1);
    let mut out = ChunkSink::new(document_id);
    let mut buf = String::new();

    for para in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        let joined_len = if buf.is_empty() {
            para.len()
        } else {
            buf.len() + 2 + para.len()
        };
        if joined_len > max_chars && !buf.is_empty() {
            out.push(&buf);
            buf.clear();
        }

        if para.len() > max_chars {
            for piece in hard_split(para, max_chars) {
                out.push(piece);
            }
            continue;
        }

        if !buf.is_empty() {
            buf.push_str("\n\n");
        }
        buf.push_str(para);
    }

    if !buf.is_empty() {
        out.push(&buf);
    }

    let mut chunks = out.chunks;
    if chunks.is_empty() {
        chunks.push(make_chunk(document_id, 0, text.trim()));
    }
    chunks
}

/// Collects chunks and hands out contiguous indices.
struct ChunkSink<'a> {
    document_id: &'a str,
    chunks: Vec<Chunk>,
}

impl<'a> ChunkSink<'a> {
    fn new(document_id: &'a str) -> Self {
        Self {
            document_id,
            chunks: Vec::new(),
        }
    }

    fn push(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let index = self.chunks.len() as i64;
        self.chunks.push(make_chunk(self.document_id, index, text));
    }
}

/// Cut an oversized paragraph into pieces of at most `max_chars` bytes,
/// preferring the last newline or space before the limit.
fn hard_split(para: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = para;

    while !rest.is_empty() {
        if rest.len() <= max_chars {
            pieces.push(rest);
            break;
        }
        let limit = floor_char_boundary(rest, max_chars);
        let cut = rest[..limit]
            .rfind(['\n', ' '])
            .map(|pos| pos + 1)
            .unwrap_or(limit);
        // A single char wider than the limit still has to make progress.
        let cut = if cut == 0 {
            rest.chars().next().map(char::len_utf8).unwrap_or(rest.len())
        } else {
            cut
        };
        pieces.push(&rest[..cut]);
        rest = &rest[cut..];
    }

    pieces
}

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn make_chunk(document_id: &str, index: i64, text: &str) -> Chunk {
    let hash = format!("{:x}", Sha256::digest(text.as_bytes()));

    Chunk {
        id: Uuid::new_v4().to_string(),
        document_id: document_id.to_string(),
        chunk_index: index,
        text: text.to_string(),
        hash,
    }
}
