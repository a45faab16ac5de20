use std::io::{Read, Write};

use super::*;
use crate::{PngError, PngResult};

/// A PNG held as its list of chunks.
///
/// The signature isn't stored, since a decoded `Png` always had exactly
/// [`PNG_SIGNATURE`] and encoding always writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Png {
  pub(crate) chunks: Vec<Chunk>,
  /// Where the terminal `IEND` chunk is, if one has been seen.
  pub(crate) iend_index: Option<usize>,
}
impl Png {
  /// An empty PNG with no chunks, to be filled with [`push_chunk`](Self::push_chunk).
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { chunks: Vec::new(), iend_index: None }
  }

  /// Decodes a PNG from a reader, without checking chunk CRCs.
  ///
  /// ## Failure
  /// * [`BadSignature`](PngError::BadSignature) if the first eight bytes are
  ///   wrong. No chunks are read in that case.
  /// * Anything that [`decode_chunks`] can fail with.
  #[inline]
  pub fn decode<R: Read + ?Sized>(r: &mut R) -> PngResult<Self> {
    Self::decode_with(r, DecodeOptions::default())
  }

  /// Decodes a PNG from a reader with the options given.
  pub fn decode_with<R: Read + ?Sized>(r: &mut R, opts: DecodeOptions) -> PngResult<Self> {
    let signature = read_signature(r)?;
    if !is_png_signature(&signature) {
      return Err(PngError::BadSignature(signature));
    }
    let DecodedChunks { chunks, iend_index } = decode_chunks(r, opts)?;
    Ok(Self { chunks, iend_index: Some(iend_index) })
  }

  /// Decodes a PNG from bytes in memory.
  #[inline]
  pub fn from_bytes(mut bytes: &[u8]) -> PngResult<Self> {
    Self::decode(&mut bytes)
  }

  /// Adds a chunk to the end.
  ///
  /// Pushing an `IEND` chunk marks it as the terminal chunk, which is what
  /// gives a hand-built `Png` somewhere to [`embed`](Self::embed).
  pub fn push_chunk(&mut self, chunk: Chunk) {
    if chunk.chunk_ty() == ChunkType::IEND {
      self.iend_index = Some(self.chunks.len());
    }
    self.chunks.push(chunk);
  }

  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  /// Index of the terminal `IEND` chunk, if there is one.
  #[inline]
  #[must_use]
  pub const fn iend_index(&self) -> Option<usize> {
    self.iend_index
  }

  /// The slot right before `IEND`.
  ///
  /// Just after an [`embed`](Self::embed), or after decoding an image that was
  /// embedded into, this is where the payload chunk is. It's `None` when
  /// there's no `IEND`, or when `IEND` is the first chunk.
  #[inline]
  #[must_use]
  pub fn insertion_index(&self) -> Option<usize> {
    self.iend_index?.checked_sub(1)
  }

  /// Size in bytes of [`to_bytes`](Self::to_bytes) output.
  #[inline]
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    PNG_SIGNATURE.len() + self.chunks.iter().map(Chunk::encoded_len).sum::<usize>()
  }

  /// Encodes the signature and all chunks into a new buffer.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> Vec<u8> {
    encode_chunks(&self.chunks)
  }

  /// Encodes into a buffer, then writes the whole buffer out.
  ///
  /// ## Failure
  /// * [`Io`](PngError::Io) if the writer fails.
  pub fn encode_to<W: Write + ?Sized>(&self, w: &mut W) -> PngResult<()> {
    w.write_all(&self.to_bytes())?;
    Ok(())
  }
}
