#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use cutpoint::{ChunkConfig, Chunker, StreamChunker};

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    let config = ChunkConfig::new(64, 256, 1024).unwrap();
    let expected: Vec<_> = Chunker::with_config(&data, &config, true).unwrap().collect();

    let chunks: Vec<_> = StreamChunker::new(Cursor::new(&data), config)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    // Verify: the reader adapter cuts exactly where the buffer producer does
    assert_eq!(chunks.len(), expected.len());
    for (got, want) in chunks.iter().zip(&expected) {
        assert_eq!(got.offset, u64::from(want.offset));
        assert_eq!(got.hash, want.hash);
        assert_eq!(&got.data[..], &data[want.range()]);
        assert!(got.digest.is_some());
    }
});
