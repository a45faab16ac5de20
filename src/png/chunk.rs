use bytemuck::{Pod, Zeroable};

use super::*;
use crate::{PngError, PngResult, U32BE};

/// The largest data length a PNG chunk may declare.
pub const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

/// The fixed 8 bytes at the front of every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub(crate) struct ChunkHeader {
  pub(crate) length: U32BE,
  pub(crate) chunk_ty: ChunkType,
}

/// One chunk of a PNG, with owned data.
///
/// The length is always `data.len()`, so it can't disagree with the data.
/// The CRC is whatever was *declared*: for a chunk read from a stream that's
/// the value in the stream, which might not be correct.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
  chunk_ty: ChunkType,
  data: Vec<u8>,
  declared_crc: u32,
}
impl Chunk {
  /// Makes a chunk and computes its CRC.
  ///
  /// ## Failure
  /// * [`ChunkTooLong`](PngError::ChunkTooLong) if the data is longer than
  ///   [`MAX_CHUNK_LEN`].
  pub fn new(chunk_ty: ChunkType, data: impl Into<Vec<u8>>) -> PngResult<Self> {
    let data = data.into();
    check_len(data.len())?;
    let declared_crc = chunk_crc(chunk_ty, &data);
    Ok(Self { chunk_ty, data, declared_crc })
  }

  /// Makes a chunk that declares the CRC given, correct or not.
  ///
  /// ## Failure
  /// * [`ChunkTooLong`](PngError::ChunkTooLong) if the data is longer than
  ///   [`MAX_CHUNK_LEN`].
  pub fn with_declared_crc(
    chunk_ty: ChunkType, data: impl Into<Vec<u8>>, declared_crc: u32,
  ) -> PngResult<Self> {
    let data = data.into();
    check_len(data.len())?;
    Ok(Self { chunk_ty, data, declared_crc })
  }

  #[inline]
  #[must_use]
  pub const fn chunk_ty(&self) -> ChunkType {
    self.chunk_ty
  }
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  /// The length field, which is the data's length.
  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    // constructors hold data to MAX_CHUNK_LEN
    self.data.len() as u32
  }
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// Computes the CRC this chunk *should* declare.
  #[inline]
  #[must_use]
  pub fn compute_crc(&self) -> u32 {
    chunk_crc(self.chunk_ty, &self.data)
  }
  #[inline]
  #[must_use]
  pub fn is_crc_valid(&self) -> bool {
    self.declared_crc == self.compute_crc()
  }

  /// Bytes this chunk takes up in a stream: length, type, data, and crc.
  #[inline]
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    core::mem::size_of::<ChunkHeader>() + self.data.len() + 4
  }

  pub(crate) fn header(&self) -> ChunkHeader {
    ChunkHeader { length: U32BE::from_u32(self.length()), chunk_ty: self.chunk_ty }
  }
}
impl core::fmt::Debug for Chunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

fn check_len(len: usize) -> PngResult<()> {
  if len > MAX_CHUNK_LEN as usize {
    Err(PngError::ChunkTooLong(len as u64))
  } else {
    Ok(())
  }
}
