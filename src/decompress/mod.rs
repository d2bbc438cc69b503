mod tables;

use self::tables::{base_len, extra_len_bytes, offset_bytes, offset_high, TAG_TABLE, WORD_MASK};
use crate::common::*;
use crate::varint::read_varint;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecompressError {
    /// The stream carries an inconsistent tag, an invalid offset, or would
    /// overshoot its declared length.
    MalformedStream,
    /// The input ended before the declared length was produced, or the
    /// trailing guard bytes are missing.
    Truncated,
    /// The declared length exceeds the caller's output capacity.
    BufferTooSmall,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::MalformedStream => write!(f, "compressed stream is malformed"),
            DecompressError::Truncated => write!(f, "compressed stream is truncated"),
            DecompressError::BufferTooSmall => {
                write!(f, "output buffer is smaller than the declared length")
            }
        }
    }
}

impl std::error::Error for DecompressError {}

/// Declared uncompressed length of a compressed stream. Reads only the
/// leading varint.
pub fn decompressed_len(input: &[u8]) -> Result<usize, DecompressError> {
    match read_varint(input) {
        Some((len, _)) => Ok(len as usize),
        None => Err(DecompressError::MalformedStream),
    }
}

/// Little-endian load of `n <= 4` bytes at `src[pos..]`. Prefers a full-width
/// word load masked to the trailer size; near the end of the buffer it
/// assembles the value byte-wise instead. The caller has already checked that
/// `n` bytes are present.
#[inline(always)]
fn load_trailer(src: &[u8], pos: usize, n: usize) -> u32 {
    if pos + 4 <= src.len() {
        let word = u32::from_le_bytes([src[pos], src[pos + 1], src[pos + 2], src[pos + 3]]);
        word & WORD_MASK[n]
    } else {
        let mut v = 0u32;
        let mut i = 0;
        while i < n {
            v |= (src[pos + i] as u32) << (8 * i);
            i += 1;
        }
        v
    }
}

/// Decompress `input` into `output`.
///
/// Returns the number of bytes produced, which always equals the stream's
/// declared length. `output` may be larger than the declared length; bytes
/// past it are scratch. On failure the buffer contents are unspecified.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, DecompressError> {
    let (declared, header) = read_varint(input).ok_or(DecompressError::MalformedStream)?;
    let declared = declared as usize;
    if declared > output.len() {
        return Err(DecompressError::BufferTooSmall);
    }

    let mut s = header;
    let mut d = 0usize;
    // Position of the element the loop refused to decode; for a well-formed
    // stream this is the first guard byte.
    let mut rejected_at = None;
    let mut failure = DecompressError::Truncated;

    while s < input.len() {
        let element_start = s;
        let entry = TAG_TABLE[input[s] as usize];
        s += 1;

        let off_bytes = offset_bytes(entry);
        let extra_bytes = extra_len_bytes(entry);
        if input.len() - s < off_bytes + extra_bytes {
            rejected_at = Some(element_start);
            failure = DecompressError::Truncated;
            break;
        }

        if off_bytes == 0 {
            // Literal run.
            let mut len = base_len(entry);
            if extra_bytes > 0 {
                len += load_trailer(input, s, extra_bytes) as usize;
                s += extra_bytes;
            }
            if len > declared - d {
                rejected_at = Some(element_start);
                failure = DecompressError::MalformedStream;
                break;
            }
            if len > input.len() - s {
                rejected_at = Some(element_start);
                failure = DecompressError::Truncated;
                break;
            }
            if len <= 16 && input.len() - s >= 16 && output.len() - d >= 16 {
                output[d..d + 16].copy_from_slice(&input[s..s + 16]);
            } else {
                output[d..d + len].copy_from_slice(&input[s..s + len]);
            }
            s += len;
            d += len;
        } else {
            // Back-reference.
            let offset = (offset_high(entry) << 8) + load_trailer(input, s, off_bytes) as usize;
            s += off_bytes;
            let mut len = base_len(entry);
            if extra_bytes > 0 {
                len += load_trailer(input, s, extra_bytes) as usize;
                s += extra_bytes;
            }
            // The emitter never writes a zero-length copy (a sentinel tag
            // with a raw length of 0); reject instead of skipping it.
            if len == 0 || offset == 0 || offset > d {
                rejected_at = Some(element_start);
                failure = DecompressError::MalformedStream;
                break;
            }
            if len > declared - d {
                rejected_at = Some(element_start);
                failure = DecompressError::MalformedStream;
                break;
            }
            if len <= 16 && offset >= 16 && output.len() - d >= 16 {
                output.copy_within(d - offset..d - offset + 16, d);
            } else if offset >= len {
                output.copy_within(d - offset..d - offset + len, d);
            } else {
                // Overlapping self-reference: duplicate the already-produced
                // prefix in doubling chunks.
                let src_pos = d - offset;
                let mut written = 0;
                let mut avail = offset;
                while written < len {
                    let chunk = avail.min(len - written);
                    output.copy_within(src_pos..src_pos + chunk, d + written);
                    written += chunk;
                    avail += chunk;
                }
            }
            d += len;
        }
    }

    // A valid stream completes its declared length and leaves the whole
    // guard unread past the rejection point.
    match rejected_at {
        Some(p) if d == declared && input.len() - p >= GUARD_SIZE => Ok(d),
        _ => {
            if d != declared {
                Err(failure)
            } else {
                Err(DecompressError::Truncated)
            }
        }
    }
}
