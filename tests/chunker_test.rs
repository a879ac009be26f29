// Integration tests for the chunking front ends
// Tests cover: cut invariants, determinism, windowed input, readers, golden vectors

use std::io::{Cursor, Read};
use std::path::PathBuf;

use cutpoint::{
    Chunk, ChunkConfig, ChunkError, Chunker, HashConfig, StreamChunker, ceil_div, center_size,
    log2_round, mask,
};

/// Deterministic xorshift32 byte stream.
fn pseudo_random(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// Chunks `data` in windows of `window` bytes, resuming at each undecided tail.
fn chunk_windowed(
    data: &[u8],
    window: usize,
    min: u32,
    avg: u32,
    max: u32,
) -> (Vec<Chunk>, Vec<usize>) {
    let mut chunks = Vec::new();
    let mut groups = Vec::new();
    let mut pos = 0usize;

    while pos < data.len() {
        let end = (pos + window).min(data.len());
        let eof = end == data.len();
        let slice = &data[pos..end];
        let mut chunker = Chunker::with_eof(slice, min, avg, max, eof).unwrap();

        let base = pos as u32;
        let mut group = 0;
        for c in chunker.chunks() {
            chunks.push(Chunk::new(c.hash, c.offset + base, c.length));
            group += 1;
        }
        groups.push(group);
        pos += chunker.bytes_processed() as usize;
    }

    (chunks, groups)
}

/// Reader that hands out at most `step` bytes per call.
struct Trickle {
    inner: Cursor<Vec<u8>>,
    step: usize,
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.step);
        self.inner.read(&mut buf[..n])
    }
}

// ============================================================================
// Cut Invariants
// ============================================================================

#[test]
fn test_chunks_tile_the_source() {
    let data = pseudo_random(200_000);
    let chunks: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();

    let mut expected_offset = 0;
    for chunk in &chunks {
        assert_eq!(chunk.offset, expected_offset, "Chunks must be contiguous");
        expected_offset = chunk.end();
    }
    assert_eq!(
        expected_offset as usize,
        data.len(),
        "Chunks must cover the whole source"
    );
}

#[test]
fn test_chunk_sizes_within_bounds() {
    let data = pseudo_random(200_000);
    let chunks: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();
    let (last, rest) = chunks.split_last().unwrap();

    for chunk in rest {
        assert!(chunk.length > 256, "Non-final chunk must exceed min_size");
        assert!(chunk.length <= 4096, "Chunk must not exceed max_size");
    }
    assert!(last.length >= 1 && last.length <= 4096);
}

#[test]
fn test_known_cut_points() {
    let data = pseudo_random(65536);
    let chunks: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();

    assert_eq!(chunks.len(), 64);
    assert_eq!(
        &chunks[..6],
        &[
            Chunk::new(2_635_017_728, 0, 1248),
            Chunk::new(2_361_548_288, 1248, 2070),
            Chunk::new(2_414_037_504, 3318, 2002),
            Chunk::new(3_197_841_920, 5320, 837),
            Chunk::new(3_296_866_304, 6157, 2263),
            Chunk::new(3_312_687_104, 8420, 1015),
        ]
    );
}

#[test]
fn test_large_parameters() {
    let data = pseudo_random(65536);
    let chunks: Vec<_> = Chunker::new(&data, 8192, 16384, 32768).unwrap().collect();

    assert_eq!(
        chunks,
        vec![
            Chunk::new(2_243_289_088, 0, 10419),
            Chunk::new(1_297_481_728, 10419, 16378),
            Chunk::new(2_805_014_528, 26797, 12570),
            Chunk::new(3_185_426_432, 39367, 8572),
            Chunk::new(2_346_147_840, 47939, 9224),
            Chunk::new(2_744_530_581, 57163, 8373),
        ]
    );
}

#[test]
fn test_all_zeros_are_forced_to_max() {
    let data = vec![0u8; 10240];
    let chunks: Vec<_> = Chunker::new(&data, 64, 256, 1024).unwrap().collect();

    assert_eq!(chunks.len(), 10);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.offset, i as u32 * 1024);
        assert_eq!(chunk.length, 1024);
        assert_eq!(chunk.hash, 3_106_636_015);
    }
}

// ============================================================================
// Determinism and Locality
// ============================================================================

#[test]
fn test_same_input_same_chunks() {
    let data = pseudo_random(100_000);
    let first: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();
    let second: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_insertion_only_moves_nearby_boundaries() {
    let data = pseudo_random(65536);
    let mut edited = data[..30000].to_vec();
    edited.extend_from_slice(b"XYZ");
    edited.extend_from_slice(&data[30000..]);

    let before: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();
    let after: Vec<_> = Chunker::new(&edited, 256, 1024, 4096).unwrap().collect();

    let after_keys: Vec<(u32, u32)> = after.iter().map(|c| (c.hash, c.length)).collect();
    let shared = before
        .iter()
        .filter(|c| after_keys.contains(&(c.hash, c.length)))
        .count();
    assert_eq!(before.len(), 64);
    assert_eq!(after.len(), 64);
    assert_eq!(shared, 63, "Only the edited chunk should change");
}

// ============================================================================
// Windowed Input
// ============================================================================

#[test]
fn test_windowed_matches_one_shot() {
    let data = pseudo_random(65536);
    let one_shot: Vec<_> = Chunker::new(&data, 8192, 16384, 32768).unwrap().collect();

    let (windowed, groups) = chunk_windowed(&data, 32768, 8192, 16384, 32768);
    assert_eq!(windowed, one_shot);
    assert_eq!(groups, vec![2, 3, 1]);
}

#[test]
fn test_windowed_small_parameters() {
    let data = pseudo_random(65536);
    let one_shot: Vec<_> = Chunker::new(&data, 256, 1024, 4096).unwrap().collect();

    let (windowed, groups) = chunk_windowed(&data, 4096, 256, 1024, 4096);
    assert_eq!(windowed, one_shot);
    assert_eq!(groups.len(), 19);
}

#[test]
fn test_undecided_tail_without_eof() {
    let (min, avg, max) = (64, 256, 1024);

    // No cut point and shorter than max_size: nothing is decided yet
    let zeros = vec![0u8; 1000];
    let mut chunker = Chunker::with_eof(&zeros, min, avg, max, false).unwrap();
    assert_eq!(chunker.chunks().count(), 0);
    assert_eq!(chunker.bytes_processed(), 0);
    assert_eq!(chunker.bytes_remaining(), 1000);

    // A full max_size window is always cut, even without eof
    let zeros = vec![0u8; 1024];
    let chunks: Vec<_> = Chunker::with_eof(&zeros, min, avg, max, false)
        .unwrap()
        .collect();
    assert_eq!(chunks, vec![Chunk::new(3_106_636_015, 0, 1024)]);

    let zeros = vec![0u8; 2048];
    let chunks: Vec<_> = Chunker::with_eof(&zeros, min, avg, max, false)
        .unwrap()
        .collect();
    assert_eq!(chunks.len(), 2);
}

#[test]
fn test_tail_at_min_size() {
    let data = vec![0xAAu8; 64];

    let mut chunker = Chunker::with_eof(&data, 64, 256, 1024, false).unwrap();
    assert!(chunker.next().is_none(), "Short tail waits for more input");

    let chunks: Vec<_> = Chunker::new(&data, 64, 256, 1024).unwrap().collect();
    assert_eq!(chunks, vec![Chunk::new(0, 0, 64)], "Tail emitted at eof");
}

// ============================================================================
// Reader Adapters
// ============================================================================

#[test]
fn test_stream_chunker_matches_chunker() {
    let data = pseudo_random(150_000);
    let config = ChunkConfig::new(256, 1024, 4096).unwrap();
    let expected: Vec<_> = Chunker::with_config(&data, &config, true)
        .unwrap()
        .collect();

    let reader = Trickle {
        inner: Cursor::new(data.clone()),
        step: 333,
    };
    let chunks: Vec<_> = StreamChunker::new(reader, config)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(chunks.len(), expected.len());
    for (got, want) in chunks.iter().zip(&expected) {
        assert_eq!(got.offset, u64::from(want.offset));
        assert_eq!(got.hash, want.hash);
        assert_eq!(&got.data[..], want.slice(&data).unwrap());
    }
}

#[test]
fn test_stream_chunker_hash_config() {
    let data = pseudo_random(20_000);
    let config = ChunkConfig::new(256, 1024, 4096)
        .unwrap()
        .with_hash_config(HashConfig::disabled());

    for chunk in StreamChunker::new(Cursor::new(&data), config).unwrap() {
        assert!(chunk.unwrap().digest.is_none());
    }
}

#[cfg(feature = "hash-blake3")]
#[test]
fn test_stream_chunker_digests_identify_content() {
    let data = pseudo_random(20_000);
    let mut doubled = data.clone();
    doubled.extend_from_slice(&data);
    let config = ChunkConfig::new(256, 1024, 4096).unwrap();

    let chunks: Vec<_> = StreamChunker::new(Cursor::new(&doubled), config)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    for chunk in &chunks {
        assert!(chunk.digest.is_some());
    }

    // Repeated content yields repeated digests
    let unique: std::collections::HashSet<_> = chunks.iter().filter_map(|c| c.digest).collect();
    assert!(unique.len() < chunks.len());
}

// ============================================================================
// Validation and Helpers
// ============================================================================

#[test]
fn test_validation_errors() {
    let data = [1u8; 16];

    assert!(matches!(
        Chunker::new(&[], 64, 256, 1024),
        Err(ChunkError::EmptySource)
    ));
    assert!(matches!(
        Chunker::new(&data, 63, 256, 1024),
        Err(ChunkError::MinSizeOutOfRange { value: 63 })
    ));
    assert!(matches!(
        Chunker::new(&data, 64, 255, 1024),
        Err(ChunkError::AvgSizeOutOfRange { value: 255 })
    ));
    assert!(matches!(
        Chunker::new(&data, 64, 256, 1023),
        Err(ChunkError::MaxSizeOutOfRange { value: 1023 })
    ));
    assert!(matches!(
        Chunker::new(&data, 512, 256, 1024),
        Err(ChunkError::MinAboveAvg { min: 512, avg: 256 })
    ));
    assert!(matches!(
        Chunker::new(&data, 64, 2048, 1024),
        Err(ChunkError::AvgAboveMax { avg: 2048, max: 1024 })
    ));

    let err = Chunker::new(&data, 64, 2048, 1024).unwrap_err();
    assert!(err.is_invalid_config());
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_helpers() {
    assert_eq!(log2_round(16384), 14);
    assert_eq!(log2_round(12000), 14);
    assert_eq!(ceil_div(10, 3), 4);
    assert_eq!(ceil_div(9, 3), 3);
    assert_eq!(mask(14).unwrap(), 0x3fff);
    assert!(matches!(mask(0), Err(ChunkError::MaskBitsOutOfRange { bits: 0 })));
    assert!(mask(32).is_err());
    assert_eq!(center_size(16384, 8192, 32768), 4096);
    assert_eq!(center_size(256, 64, 100), 100);
}

// ============================================================================
// Golden Vectors
// ============================================================================

/// Loads the reference image; the golden tests are ignored by default since
/// the fixture is not redistributed.
fn sekien() -> Vec<u8> {
    let path: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "tests",
        "fixtures",
        "SekienAkashita.jpg",
    ]
    .iter()
    .collect();
    match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) => panic!("cannot read {}: {}", path.display(), e),
    }
}

fn as_triples(chunks: &[Chunk]) -> Vec<(u32, u32, u32)> {
    chunks.iter().map(|c| (c.offset, c.length, c.hash)).collect()
}

#[test]
#[ignore = "requires tests/fixtures/SekienAkashita.jpg"]
fn test_sekien_16k() {
    let data = sekien();
    let chunks: Vec<_> = Chunker::new(&data, 8192, 16384, 32768).unwrap().collect();

    assert_eq!(
        as_triples(&chunks),
        vec![
            (0, 22366, 1_527_472_128),
            (22366, 8282, 1_174_757_376),
            (30648, 16303, 2_687_197_184),
            (46951, 18696, 1_210_105_856),
            (65647, 32768, 2_984_739_645),
            (98415, 11051, 1_121_740_051),
        ]
    );
}

#[test]
#[ignore = "requires tests/fixtures/SekienAkashita.jpg"]
fn test_sekien_32k() {
    let data = sekien();
    let chunks: Vec<_> = Chunker::new(&data, 16384, 32768, 65536).unwrap().collect();

    assert_eq!(
        as_triples(&chunks),
        vec![
            (0, 32857, 2_772_598_784),
            (32857, 16408, 1_651_589_120),
            (49265, 60201, 1_121_740_051),
        ]
    );
}

#[test]
#[ignore = "requires tests/fixtures/SekienAkashita.jpg"]
fn test_sekien_64k() {
    let data = sekien();
    let chunks: Vec<_> = Chunker::new(&data, 32768, 65536, 131072).unwrap().collect();

    assert_eq!(
        as_triples(&chunks),
        vec![(0, 32857, 2_772_598_784), (32857, 76609, 1_121_740_051)]
    );
}

#[test]
#[ignore = "requires tests/fixtures/SekienAkashita.jpg"]
fn test_sekien_windowed() {
    let data = sekien();
    assert_eq!(data.len(), 109_466);

    let (chunks, groups) = chunk_windowed(&data, 32768, 8192, 16384, 32768);
    let offsets: Vec<u32> = chunks.iter().map(|c| c.offset).collect();
    let lengths: Vec<u32> = chunks.iter().map(|c| c.length).collect();

    assert_eq!(groups, vec![2, 1, 1, 1, 1]);
    assert_eq!(offsets, vec![0, 22366, 30648, 46951, 65647, 98415]);
    assert_eq!(lengths, vec![22366, 8282, 16303, 18696, 32768, 11051]);
}
