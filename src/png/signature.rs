use std::io::Read;

use crate::PngResult;

/// The first eight bytes of a PNG datastream should match these bytes.
///
/// `\x89`, then `PNG`, then a DOS line ending, a DOS end-of-file, and a unix
/// line ending. Each of those bytes catches a different kind of transfer
/// mangling, so all eight are compared.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes start with the full PNG signature.
///
/// Bytes past the first eight are ignored. Too-short input is just `false`.
#[inline]
#[must_use]
pub const fn is_png_signature(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Reads exactly eight bytes, which should be the signature.
///
/// This doesn't check them, see [`is_png_signature`].
///
/// ## Failure
/// * A short read is an [`Io`](crate::PngError::Io) error.
pub fn read_signature<R: Read + ?Sized>(r: &mut R) -> PngResult<[u8; 8]> {
  let mut bytes = [0_u8; 8];
  r.read_exact(&mut bytes)?;
  Ok(bytes)
}
