#![no_main]

use libfuzzer_sys::fuzz_target;
use cutpoint::Chunker;

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() || data.len() > u32::MAX as usize {
        return;
    }

    let configs = [
        // Smallest valid parameters
        (64, 256, 1024),
        (256, 1024, 4096),
        (8192, 16384, 32768),
    ];

    for (min, avg, max) in configs {
        let chunks: Vec<_> = Chunker::new(&data, min, avg, max).unwrap().collect();

        // Verify: chunks tile the input and respect the size bounds
        let mut expected_offset = 0u32;
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.offset, expected_offset);
            assert!(chunk.length >= 1 && chunk.length <= max);
            if i < chunks.len() - 1 {
                assert!(chunk.length > min);
            }
            expected_offset = chunk.end();
        }
        assert_eq!(expected_offset as usize, data.len());

        // Verify: split into two windows, the cuts are unchanged
        let split = (data.len() / 2).max(max as usize).min(data.len());
        let eof = split == data.len();
        let prefix = &data[..split];
        let mut head = Chunker::with_eof(prefix, min, avg, max, eof).unwrap();
        let mut resumed: Vec<_> = head.chunks().collect();
        let pos = head.bytes_processed();
        if (pos as usize) < data.len() {
            let tail = Chunker::new(&data[pos as usize..], min, avg, max).unwrap();
            for c in tail {
                resumed.push(cutpoint::Chunk::new(c.hash, c.offset + pos, c.length));
            }
        }
        assert_eq!(resumed, chunks);
    }
});
