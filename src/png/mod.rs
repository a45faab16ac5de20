#![forbid(unsafe_code)]

//! Module for working with PNG chunk streams.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is an 8 byte [signature](PNG_SIGNATURE) followed by a series of
//! "chunks". Each chunk is laid out as:
//!
//! | Field  | Size          | Encoding                             |
//! |--------|---------------|--------------------------------------|
//! | length | 4 bytes       | `u32`, big-endian                    |
//! | type   | 4 bytes       | ASCII                                |
//! | data   | `length`      | opaque                               |
//! | crc    | 4 bytes       | `u32`, big-endian, CRC-32 over type+data |
//!
//! The last chunk is always `IEND`.
//!
//! ## Decoding
//!
//! [`Png::decode`] reads the signature and then chunks until it has read the
//! `IEND` chunk. Anything after `IEND` is never read.
//!
//! By default the CRC of each chunk is read and kept, but *not* checked. PNG
//! comes from an era when disks and networks mangled data a lot more than they
//! do now, and most readers skip the check. Pass [`DecodeOptions::strict`] to
//! [`Png::decode_with`] if you want each chunk checked, in which case the first
//! bad chunk gives [`PngError::CrcMismatch`](crate::PngError::CrcMismatch).
//!
//! ## Stashing
//!
//! * [`Png::embed`] puts a new [`pUNK`](ChunkType::pUNK) chunk immediately
//!   before `IEND`.
//! * [`Png::extract`] gives back the data of that chunk.
//!
//! ## Encoding
//!
//! [`Png::to_bytes`] and [`Png::encode_to`] write the signature and every chunk
//! as-is. The declared CRC of each chunk is written back out without being
//! recomputed, so a corrupt chunk stays exactly as corrupt as it was.

mod chunk_type;
pub use chunk_type::*;

mod crc32;
pub use crc32::*;

mod signature;
pub use signature::*;

mod chunk;
pub use chunk::*;

mod codec;
pub use codec::*;

mod payload;
pub use payload::*;

mod image;
pub use image::*;

mod stash;
pub use stash::*;
