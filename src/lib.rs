//! Byte-oriented lossless block compression with a Snappy-style LZ77 wire
//! format: a varint length prefix, tag-dispatched literal and copy elements,
//! and four trailing guard bytes counted in the compressed length.
//!
//! The codec operates on whole in-memory buffers and is fully reentrant;
//! every call owns its own transient state.

pub mod api;
pub mod batch;
pub mod common;
pub mod compress;
pub mod decompress;
pub mod varint;

pub use api::{Compressor, Decompressor};
pub use compress::{compress, max_compressed_len, CompressError};
pub use decompress::{decompress, decompressed_len, DecompressError};
