//! Async file chunking example.
//!
//! Chunks several files concurrently on the tokio runtime, adapting each
//! tokio reader with `tokio_util::compat`.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- FILE...

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use cutpoint::{ChunkConfig, ChunkError, chunk_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    println!("Processing {} files concurrently...\n", paths.len());

    let config = ChunkConfig::default();

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| tokio::spawn(async move { process_file(path, config).await }))
        .collect();

    for handle in handles {
        let (path, chunk_count, total_bytes) = handle.await??;
        println!("{}: {} chunks, {} bytes", path, chunk_count, total_bytes);
    }

    Ok(())
}

async fn process_file(
    path: String,
    config: ChunkConfig,
) -> Result<(String, usize, usize), ChunkError> {
    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), config)?;

    let mut chunk_count = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        chunk_count += 1;
        total_bytes += chunk.len();
    }

    Ok((path, chunk_count, total_bytes))
}
