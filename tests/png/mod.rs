use pngstash::{
  png::{chunk_crc, Chunk, ChunkType, DecodeOptions, ExtractStrategy, Png, PNG_SIGNATURE},
  PngError,
};
use proptest::prelude::*;

/// A small PNG: IHDR, a couple of ancillary chunks, IDAT, IEND.
fn sample_png() -> Png {
  let mut png = Png::new();
  png.push_chunk(Chunk::new(ChunkType::IHDR, [0_u8, 0, 0, 4, 0, 0, 0, 4, 8, 2, 0, 0, 0]).unwrap());
  png.push_chunk(Chunk::new(ChunkType(*b"gAMA"), 45455_u32.to_be_bytes()).unwrap());
  png.push_chunk(Chunk::new(ChunkType(*b"tEXt"), b"Title\0sample".to_vec()).unwrap());
  png.push_chunk(Chunk::new(ChunkType::IDAT, super::rand_bytes(64)).unwrap());
  png.push_chunk(Chunk::new(ChunkType::IEND, b"".to_vec()).unwrap());
  png
}

#[test]
fn test_decode_no_panics() {
  // totally random data should never panic the decoder, with or without a
  // correct signature up front.
  for _ in 0..100 {
    let v = super::rand_bytes(256);
    let _ = Png::from_bytes(&v);
    let mut with_sig = PNG_SIGNATURE.to_vec();
    with_sig.extend_from_slice(&v);
    let _ = Png::from_bytes(&with_sig);
  }
}

#[test]
fn test_random_payload_round_trip() {
  let bytes = sample_png().to_bytes();
  for len in [0, 1, 13, 4096, 70_000] {
    let payload = super::rand_bytes(len);
    let mut png = Png::from_bytes(&bytes).unwrap();
    png.embed(payload.clone()).unwrap();
    let stashed = png.to_bytes();
    assert_eq!(stashed.len(), bytes.len() + 12 + len);

    let png = Png::decode_with(&mut &stashed[..], DecodeOptions::strict()).unwrap();
    for strategy in [ExtractStrategy::Index, ExtractStrategy::Scan, ExtractStrategy::IndexThenScan]
    {
      assert_eq!(png.extract_with(strategy).unwrap(), &payload[..]);
    }
    // everything but the new chunk is untouched
    let original = Png::from_bytes(&bytes).unwrap();
    let mut now_chunks = png.chunks().to_vec();
    now_chunks.remove(now_chunks.len() - 2);
    assert_eq!(now_chunks, original.chunks());
  }
}

#[test]
fn test_plain_png_has_no_marker() {
  let png = Png::from_bytes(&sample_png().to_bytes()).unwrap();
  assert!(matches!(png.extract(), Err(PngError::MarkerNotFound)));
}

#[test]
fn test_error_display() {
  let e = PngError::CrcMismatch {
    index: 2,
    chunk_ty: ChunkType::IDAT,
    declared: 1,
    actual: chunk_crc(ChunkType::IDAT, &[]),
  };
  let s = e.to_string();
  assert!(s.contains("#2"), "{s}");
  assert!(s.contains("IDAT"), "{s}");
  assert!(PngError::BadSignature([0; 8]).to_string().contains("signature"));
}

proptest! {
  #[test]
  fn prop_embed_extract_round_trip(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
    let mut png = sample_png();
    png.embed(payload.clone()).unwrap();
    let png = Png::from_bytes(&png.to_bytes()).unwrap();
    prop_assert_eq!(png.extract().unwrap(), &payload[..]);

    let chunks = png.chunks();
    prop_assert_eq!(chunks.last().map(Chunk::chunk_ty), Some(ChunkType::IEND));
    prop_assert_eq!(chunks[chunks.len() - 2].chunk_ty(), ChunkType::pUNK);
    for c in chunks {
      prop_assert_eq!(c.length() as usize, c.data().len());
      prop_assert!(c.is_crc_valid());
    }
  }

  #[test]
  fn prop_crc_is_deterministic(ty in any::<[u8; 4]>(), data in prop::collection::vec(any::<u8>(), 0..512)) {
    let ty = ChunkType(ty);
    prop_assert_eq!(chunk_crc(ty, &data), chunk_crc(ty, &data));
    let c = Chunk::new(ty, data.clone()).unwrap();
    prop_assert_eq!(c.declared_crc(), chunk_crc(ty, &data));
  }

  #[test]
  fn prop_bad_signature_rejected(
    sig in any::<[u8; 8]>().prop_filter("not the PNG signature", |s| s != &PNG_SIGNATURE)
  ) {
    let mut bytes = sample_png().to_bytes();
    bytes[..8].copy_from_slice(&sig);
    prop_assert!(matches!(Png::from_bytes(&bytes), Err(PngError::BadSignature(s)) if s == sig));
  }
}
