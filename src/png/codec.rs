use std::io::{self, Read};

use tracing::{debug, trace, warn};

use super::*;
use crate::{PngError, PngResult};

/// Controls how careful chunk decoding is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
  /// Recompute every chunk's CRC and fail on the first one that doesn't match
  /// what the chunk declares.
  pub verify_crc: bool,
}
impl DecodeOptions {
  /// Options that verify every CRC.
  #[inline]
  #[must_use]
  pub const fn strict() -> Self {
    Self { verify_crc: true }
  }
}

/// The chunks of a stream, up to and including `IEND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedChunks {
  /// Every chunk in stream order, `IEND` last.
  pub chunks: Vec<Chunk>,
  /// Where `IEND` is within `chunks` (always the last index).
  pub iend_index: usize,
}

/// Reads chunks until the `IEND` chunk has been read.
///
/// The reader should already be past the signature. Nothing after `IEND` is
/// read.
///
/// ## Failure
/// * [`MissingIend`](PngError::MissingIend) if the stream ends cleanly between
///   two chunks without having had an `IEND`.
/// * [`Io`](PngError::Io) if the stream ends in the middle of a chunk, or the
///   reader otherwise fails.
/// * [`ChunkTooLong`](PngError::ChunkTooLong) if a length is over
///   [`MAX_CHUNK_LEN`].
/// * [`CrcMismatch`](PngError::CrcMismatch) for the first bad chunk, only when
///   [`verify_crc`](DecodeOptions::verify_crc) is set.
pub fn decode_chunks<R: Read + ?Sized>(
  r: &mut R, opts: DecodeOptions,
) -> PngResult<DecodedChunks> {
  let mut chunks: Vec<Chunk> = Vec::new();
  loop {
    let header = match read_chunk_header(r)? {
      Some(header) => header,
      None => {
        debug!(chunks = chunks.len(), "stream ended before IEND");
        return Err(PngError::MissingIend);
      }
    };
    let length = header.length.to_u32();
    if length > MAX_CHUNK_LEN {
      return Err(PngError::ChunkTooLong(u64::from(length)));
    }
    // `take` keeps a lying length from allocating more than the stream holds
    let mut data = Vec::new();
    (&mut *r).take(u64::from(length)).read_to_end(&mut data)?;
    if data.len() != length as usize {
      return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    let mut crc_bytes = [0_u8; 4];
    r.read_exact(&mut crc_bytes)?;
    let chunk =
      Chunk::with_declared_crc(header.chunk_ty, data, u32::from_be_bytes(crc_bytes))?;

    let index = chunks.len();
    trace!(index, chunk_ty = %chunk.chunk_ty(), length, declared_crc = chunk.declared_crc(), "read chunk");
    if opts.verify_crc {
      let actual = chunk.compute_crc();
      if actual != chunk.declared_crc() {
        warn!(index, chunk_ty = %chunk.chunk_ty(), "chunk CRC mismatch");
        return Err(PngError::CrcMismatch {
          index,
          chunk_ty: chunk.chunk_ty(),
          declared: chunk.declared_crc(),
          actual,
        });
      }
    }

    let is_end = chunk.chunk_ty() == ChunkType::IEND;
    chunks.push(chunk);
    if is_end {
      debug!(chunks = chunks.len(), "decoded through IEND");
      return Ok(DecodedChunks { chunks, iend_index: index });
    }
  }
}

/// Fills a chunk header, or gives `None` if the stream is already over.
fn read_chunk_header<R: Read + ?Sized>(r: &mut R) -> PngResult<Option<ChunkHeader>> {
  let mut bytes = [0_u8; 8];
  let mut filled = 0;
  while filled < bytes.len() {
    match r.read(&mut bytes[filled..]) {
      Ok(0) if filled == 0 => return Ok(None),
      Ok(0) => return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
      Ok(n) => filled += n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e.into()),
    }
  }
  Ok(Some(bytemuck::cast(bytes)))
}

/// Writes the signature and then every chunk, exactly as declared.
///
/// No CRC is recomputed here.
#[must_use]
pub fn encode_chunks(chunks: &[Chunk]) -> Vec<u8> {
  let total = PNG_SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
  let mut out = Vec::with_capacity(total);
  out.extend_from_slice(&PNG_SIGNATURE);
  for chunk in chunks {
    out.extend_from_slice(bytemuck::bytes_of(&chunk.header()));
    out.extend_from_slice(chunk.data());
    out.extend_from_slice(&chunk.declared_crc().to_be_bytes());
  }
  out
}
