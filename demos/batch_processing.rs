use snapblock::batch::{BatchCompressor, BatchDecompressor};

fn main() {
    let buffers: Vec<Vec<u8>> = (0..8)
        .map(|i| format!("buffer {} ", i).repeat(200).into_bytes())
        .collect();
    let inputs: Vec<&[u8]> = buffers.iter().map(|b| b.as_slice()).collect();

    let compressed = BatchCompressor::new(6).compress_batch(&inputs);
    for (i, c) in compressed.iter().enumerate() {
        println!("buffer {}: {} -> {} bytes", i, inputs[i].len(), c.len());
    }

    let refs: Vec<&[u8]> = compressed.iter().map(|c| c.as_slice()).collect();
    let restored = BatchDecompressor::new().decompress_batch(&refs);
    let ok = restored
        .iter()
        .zip(&buffers)
        .all(|(r, b)| r.as_deref() == Some(b.as_slice()));
    println!("All buffers restored: {}", ok);
}
