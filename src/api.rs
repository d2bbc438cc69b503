use crate::common::{MAX_COMPRESSION_LEVEL, MAX_INPUT_SIZE};
use crate::compress::{compress, max_compressed_len, CompressError};
use crate::decompress::{decompress, decompressed_len, DecompressError};
use std::io;

fn compress_err(e: CompressError) -> io::Error {
    match e {
        CompressError::InvalidParameter => {
            io::Error::new(io::ErrorKind::InvalidInput, "unsupported input length")
        }
        CompressError::BufferTooSmall => {
            io::Error::new(io::ErrorKind::Other, "insufficient output space")
        }
    }
}

fn decompress_err(e: DecompressError) -> io::Error {
    match e {
        DecompressError::MalformedStream => {
            io::Error::new(io::ErrorKind::InvalidData, "malformed compressed stream")
        }
        DecompressError::Truncated => {
            io::Error::new(io::ErrorKind::UnexpectedEof, "truncated compressed stream")
        }
        DecompressError::BufferTooSmall => {
            io::Error::new(io::ErrorKind::Other, "insufficient output space")
        }
    }
}

pub struct Compressor {
    level: usize,
}

impl Compressor {
    pub fn new(level: usize) -> io::Result<Self> {
        if level > MAX_COMPRESSION_LEVEL {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Compression level must be between 0 and 9",
            ));
        }
        Ok(Self { level })
    }

    pub fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let bound = max_compressed_len(data.len());
        if bound == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported input length",
            ));
        }
        let mut output = vec![0u8; bound];
        let n = compress(data, &mut output, self.level).map_err(compress_err)?;
        output.truncate(n);
        Ok(output)
    }

    pub fn compress_into(&self, data: &[u8], output: &mut [u8]) -> io::Result<usize> {
        compress(data, output, self.level).map_err(compress_err)
    }

    pub fn compress_bound(size: usize) -> usize {
        max_compressed_len(size)
    }
}

pub struct Decompressor {
    max_output_size: usize,
}

impl Decompressor {
    pub fn new() -> Self {
        Self {
            max_output_size: MAX_INPUT_SIZE,
        }
    }

    /// Cap the output allocation `decompress` will make from a stream's
    /// declared length. Streams declaring more fail instead of allocating.
    pub fn set_max_output_size(&mut self, limit: usize) {
        self.max_output_size = limit;
    }

    pub fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let declared = decompressed_len(data).map_err(decompress_err)?;
        if declared > self.max_output_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "declared length exceeds the maximum output limit",
            ));
        }
        let mut output = vec![0u8; declared];
        decompress(data, &mut output).map_err(decompress_err)?;
        Ok(output)
    }

    pub fn decompress_into(&self, data: &[u8], output: &mut [u8]) -> io::Result<usize> {
        decompress(data, output).map_err(decompress_err)
    }

    pub fn decompressed_len(&self, data: &[u8]) -> io::Result<usize> {
        decompressed_len(data).map_err(decompress_err)
    }
}

impl Default for Decompressor {
    fn default() -> Self {
        Self::new()
    }
}
