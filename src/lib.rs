#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for hiding data inside PNG files.
//!
//! The payload rides along as one extra ancillary chunk (type
//! `pUNK`) placed right before the `IEND` chunk. Every other chunk is carried
//! through byte-for-byte, so the image itself decodes exactly as it did
//! before.
//!
//! ```
//! use pngstash::png::*;
//! # fn main() -> Result<(), pngstash::PngError> {
//! # let mut png = Png::new();
//! # png.push_chunk(Chunk::new(ChunkType::IHDR, vec![0_u8; 13])?);
//! # png.push_chunk(Chunk::new(ChunkType::IEND, b"".to_vec())?);
//! # let original: Vec<u8> = png.to_bytes();
//! let mut png = Png::from_bytes(&original)?;
//! png.embed(b"hello".to_vec())?;
//! let stashed: Vec<u8> = png.to_bytes();
//!
//! let png = Png::from_bytes(&stashed)?;
//! assert_eq!(png.extract()?, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! Payloads are stored in the clear. There's no encryption or
//! authentication, beyond the CRC that every PNG chunk carries.

mod int_endian;
pub use int_endian::*;

mod error;
pub use error::*;

pub mod png;
