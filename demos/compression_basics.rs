use snapblock::{Compressor, Decompressor};
use std::io;

fn main() -> io::Result<()> {
    let data = b"The quick brown fox jumps over the lazy dog. ".repeat(10);
    println!("Original size: {}", data.len());

    let compressor = Compressor::new(6)?;
    let compressed = compressor.compress(&data)?;
    println!("Compressed size: {}", compressed.len());

    let decompressor = Decompressor::new();
    let restored = decompressor.decompress(&compressed)?;

    assert_eq!(data.as_slice(), restored.as_slice());
    println!("Decompression successful!");

    Ok(())
}
