use super::*;
use crate::PngResult;

/// Wraps a payload in a new [`pUNK`](ChunkType::pUNK) chunk with a correct CRC.
///
/// An empty payload is fine: the chunk has length 0 and the CRC covers just
/// the four type bytes.
///
/// ## Failure
/// * [`ChunkTooLong`](crate::PngError::ChunkTooLong) if the payload is longer
///   than [`MAX_CHUNK_LEN`].
#[inline]
pub fn payload_chunk(payload: impl Into<Vec<u8>>) -> PngResult<Chunk> {
  Chunk::new(ChunkType::pUNK, payload)
}
