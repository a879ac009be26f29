//! Windowed chunking example.
//!
//! Feeds a file to [`Chunker`] one fixed-size window at a time. Windows
//! before the last are chunked with `eof = false`; the undecided tail of
//! each window is carried into the next one.
//!
//! Run with:
//!     cargo run --example windowed -- /path/to/file

use std::env;

use cutpoint::Chunker;

const MIN: u32 = 8 * 1024;
const AVG: u32 = 16 * 1024;
const MAX: u32 = 32 * 1024;

// The window must hold at least one max-size chunk.
const WINDOW: usize = MAX as usize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let data = std::fs::read(&path)?;

    println!(
        "Chunking {} ({} bytes) in {} byte windows\n",
        path,
        data.len(),
        WINDOW
    );

    let mut pos = 0usize;
    let mut window_index = 0;

    while pos < data.len() {
        let end = (pos + WINDOW).min(data.len());
        let eof = end == data.len();
        let mut chunker = Chunker::with_eof(&data[pos..end], MIN, AVG, MAX, eof)?;

        window_index += 1;
        println!("Window {} @ {} (eof={})", window_index, pos, eof);

        for chunk in chunker.chunks() {
            println!(
                "  offset={:>10}, len={:>8}, gear={:08x}",
                pos + chunk.offset as usize,
                chunk.length,
                chunk.hash
            );
        }

        pos += chunker.bytes_processed() as usize;
    }

    Ok(())
}
