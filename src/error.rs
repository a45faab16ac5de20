use thiserror::Error;

use crate::png::ChunkType;

/// Shorthand for results from this crate.
pub type PngResult<T> = Result<T, PngError>;

/// An error from the `pngstash` crate.
#[derive(Debug, Error)]
pub enum PngError {
  /// The underlying stream ended inside a chunk, or a write failed.
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// The first eight bytes are not the PNG signature.
  #[error("not a PNG: bad signature {0:02X?}")]
  BadSignature([u8; 8]),

  /// The chunk stream ended cleanly before an `IEND` chunk was read.
  #[error("chunk stream ended without an IEND chunk")]
  MissingIend,

  /// A chunk's data is longer than PNG allows (`2^31 - 1` bytes).
  #[error("chunk length {0} exceeds the PNG limit")]
  ChunkTooLong(u64),

  /// A chunk's declared CRC doesn't match its type and data.
  #[error("CRC mismatch in chunk #{index} ({chunk_ty}): declared {declared:#010X}, actual {actual:#010X}")]
  CrcMismatch {
    /// Position of the chunk in the stream.
    index: usize,
    /// Type of the offending chunk.
    chunk_ty: ChunkType,
    /// The CRC stored in the stream.
    declared: u32,
    /// The CRC computed over the type and data.
    actual: u32,
  },

  /// No payload chunk where one was looked for.
  #[error("no payload chunk found")]
  MarkerNotFound,

  /// The image never had an `IEND` chunk, so there's nowhere to embed.
  #[error("image has no IEND chunk to embed before")]
  EmbedWithoutAnchor,
}
impl PngError {
  /// If this error means the bytes aren't a well-formed PNG container.
  #[inline]
  #[must_use]
  pub const fn is_format_error(&self) -> bool {
    matches!(self, Self::BadSignature(_) | Self::MissingIend | Self::ChunkTooLong(_))
  }
}
