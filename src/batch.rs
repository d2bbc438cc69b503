//! Parallel helpers for compressing and decompressing many independent
//! buffers. Each buffer is its own block; there is no container format.

use crate::api::{Compressor, Decompressor};
use rayon::prelude::*;

pub struct BatchCompressor {
    level: usize,
}

impl BatchCompressor {
    pub fn new(level: usize) -> Self {
        Self { level }
    }

    /// Compress every input on the rayon pool. Inputs that cannot be
    /// compressed (empty, oversized) yield an empty Vec.
    pub fn compress_batch(&self, inputs: &[&[u8]]) -> Vec<Vec<u8>> {
        inputs
            .par_iter()
            .map_init(
                || Compressor::new(self.level),
                |compressor, &input| match compressor {
                    Ok(c) => c.compress(input).unwrap_or_default(),
                    Err(_) => Vec::new(),
                },
            )
            .collect()
    }
}

pub struct BatchDecompressor;

impl BatchDecompressor {
    pub fn new() -> Self {
        Self
    }

    pub fn decompress_batch(&self, inputs: &[&[u8]]) -> Vec<Option<Vec<u8>>> {
        inputs
            .par_iter()
            .map_init(Decompressor::new, |decompressor, &input| {
                decompressor.decompress(input).ok()
            })
            .collect()
    }
}

impl Default for BatchDecompressor {
    fn default() -> Self {
        Self::new()
    }
}
