use tracing::{debug, warn};

use super::*;
use crate::{PngError, PngResult};

/// How [`Png::extract_with`] finds the payload chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtractStrategy {
  /// Only look at the [insertion index](Png::insertion_index).
  Index,
  /// Use the last `pUNK` chunk before `IEND`.
  Scan,
  /// Look at the insertion index, and scan if the payload isn't there.
  #[default]
  IndexThenScan,
}

impl Png {
  /// Puts the payload in a new `pUNK` chunk right before `IEND`.
  ///
  /// Any chunks after `IEND` are dropped, since they shouldn't be there. Each
  /// call adds another payload chunk, old ones are left in place unless you
  /// [remove](Self::remove_payloads) them first.
  ///
  /// ## Failure
  /// * [`EmbedWithoutAnchor`](PngError::EmbedWithoutAnchor) if this `Png`
  ///   never had an `IEND` chunk.
  /// * [`ChunkTooLong`](PngError::ChunkTooLong) if the payload is too big for
  ///   one chunk.
  pub fn embed(&mut self, payload: impl Into<Vec<u8>>) -> PngResult<()> {
    let iend_index = self.iend_index.ok_or(PngError::EmbedWithoutAnchor)?;
    let chunk = payload_chunk(payload)?;
    let trailing = self.chunks.len() - (iend_index + 1);
    if trailing > 0 {
      warn!(trailing, "dropping chunks found after IEND");
    }
    debug!(at = iend_index, length = chunk.length(), crc = chunk.declared_crc(), "embedding payload");
    self.chunks.insert(iend_index, chunk);
    self.chunks.truncate(iend_index + 2);
    self.iend_index = Some(iend_index + 1);
    Ok(())
  }

  /// Gets the payload using [`ExtractStrategy::default`].
  #[inline]
  pub fn extract(&self) -> PngResult<&[u8]> {
    self.extract_with(ExtractStrategy::default())
  }

  /// Gets the payload's data, exactly as it was stored.
  ///
  /// ## Failure
  /// * [`MarkerNotFound`](PngError::MarkerNotFound) if the strategy doesn't
  ///   turn up a `pUNK` chunk.
  pub fn extract_with(&self, strategy: ExtractStrategy) -> PngResult<&[u8]> {
    let found = match strategy {
      ExtractStrategy::Index => self.payload_at_insertion_index(),
      ExtractStrategy::Scan => self.last_payload_before_iend(),
      ExtractStrategy::IndexThenScan => {
        self.payload_at_insertion_index().or_else(|| self.last_payload_before_iend())
      }
    };
    found.map(Chunk::data).ok_or(PngError::MarkerNotFound)
  }

  /// Every payload chunk's data, in stream order.
  pub fn payloads(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.chunks.iter().filter(|c| c.chunk_ty() == ChunkType::pUNK).map(Chunk::data)
  }

  /// Removes every payload chunk, giving how many there were.
  pub fn remove_payloads(&mut self) -> usize {
    if let Some(iend_index) = self.iend_index {
      let shift =
        self.chunks[..iend_index].iter().filter(|c| c.chunk_ty() == ChunkType::pUNK).count();
      self.iend_index = Some(iend_index - shift);
    }
    let before = self.chunks.len();
    self.chunks.retain(|c| c.chunk_ty() != ChunkType::pUNK);
    let removed = before - self.chunks.len();
    debug!(removed, "removed payload chunks");
    removed
  }

  fn payload_at_insertion_index(&self) -> Option<&Chunk> {
    self.chunks.get(self.insertion_index()?).filter(|c| c.chunk_ty() == ChunkType::pUNK)
  }

  fn last_payload_before_iend(&self) -> Option<&Chunk> {
    let end = self.iend_index.unwrap_or(self.chunks.len());
    self.chunks[..end].iter().rev().find(|c| c.chunk_ty() == ChunkType::pUNK)
  }
}
