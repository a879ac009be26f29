//! File chunking example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use cutpoint::{ChunkConfig, StreamChunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    let config = ChunkConfig::new(
        8 * 1024,  // min: 8 KiB
        16 * 1024, // avg: 16 KiB
        32 * 1024, // max: 32 KiB
    )?;

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    for chunk in StreamChunker::new(file, config)? {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += chunk.len();

        println!(
            "Chunk {}: offset={:>10}, len={:>8}, gear={:08x}, digest={}",
            total_chunks,
            chunk.offset,
            chunk.len(),
            chunk.hash,
            chunk.digest.map(|d| d.to_hex()).unwrap_or_default()
        );
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}
