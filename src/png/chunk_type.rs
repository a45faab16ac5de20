use core::fmt::Write;

use bytemuck::{Pod, Zeroable};

/// The four ASCII bytes naming a chunk's type.
///
/// The case of each letter is a property bit (bit 5 of each byte):
///
/// * byte 0: uppercase is critical, lowercase is ancillary.
/// * byte 1: uppercase is public, lowercase is private.
/// * byte 2: reserved, must be uppercase.
/// * byte 3: uppercase is unsafe to copy, lowercase is safe to copy.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");
  /// Stashed payload.
  ///
  /// Ancillary, so any reader that doesn't know about it is allowed to skip
  /// it. The uppercase second and fourth letters mark it public and unsafe to
  /// copy; the tag is kept as-is so images stashed by older tools still read.
  pub const pUNK: Self = Self(*b"pUNK");

  /// The type as a big-endian `u32`.
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Makes a type from a big-endian `u32`.
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  /// The raw type bytes, as they appear in the stream.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks must be understood to display the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 0x20) == 0
  }
  /// Public chunks are the ones registered in the PNG spec.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 0x20) == 0
  }
  /// The third letter must be uppercase in this version of PNG.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 0x20) == 0
  }
  /// Editors may copy a safe-to-copy chunk even if they've changed critical
  /// chunks they don't understand.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 0x20) != 0
  }
}
impl core::fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')?;
    Ok(())
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}
