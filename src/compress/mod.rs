mod matchfinder;

use self::matchfinder::{next_skip, HashTable, INITIAL_SKIP};
use crate::common::*;
use crate::varint::write_varint;
use std::fmt;

/// Far matches (3-byte offset trailer) are only worth a 4-byte element when
/// they cover at least this many bytes; shorter ones would let adversarial
/// input outgrow the `max_compressed_len` bound.
const FAR_MATCH_MIN_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompressError {
    /// Input is empty or its length is at or above `MAX_INPUT_SIZE`.
    InvalidParameter,
    /// Output capacity is below `max_compressed_len` for this input.
    BufferTooSmall,
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::InvalidParameter => write!(f, "input length is unsupported"),
            CompressError::BufferTooSmall => {
                write!(f, "output buffer is smaller than max_compressed_len")
            }
        }
    }
}

impl std::error::Error for CompressError {}

/// Worst-case compressed size for an input of `input_len` bytes, covering an
/// all-literal encoding plus header and guard overhead. Returns 0 when the
/// input length itself is unsupported.
pub fn max_compressed_len(input_len: usize) -> usize {
    if input_len >= MAX_INPUT_SIZE {
        0
    } else {
        32 + input_len + input_len / 6
    }
}

#[inline(always)]
fn load32(src: &[u8], i: usize) -> u32 {
    u32::from_le_bytes([src[i], src[i + 1], src[i + 2], src[i + 3]])
}

#[inline(always)]
fn load64(src: &[u8], i: usize) -> u64 {
    u64::from_le_bytes([
        src[i],
        src[i + 1],
        src[i + 2],
        src[i + 3],
        src[i + 4],
        src[i + 5],
        src[i + 6],
        src[i + 7],
    ])
}

/// Length of the common prefix of `src[a..]` and `src[b..]`, with `a < b`,
/// comparing word-at-a-time and finishing byte-wise. Never reads past `limit`
/// on the `b` side.
#[inline(always)]
fn extend_match(src: &[u8], a: usize, b: usize, limit: usize) -> usize {
    let mut n = 0;
    while b + n + 8 <= limit {
        let x = load64(src, a + n) ^ load64(src, b + n);
        if x != 0 {
            return n + (x.trailing_zeros() >> 3) as usize;
        }
        n += 8;
    }
    if b + n + 4 <= limit {
        let x = load32(src, a + n) ^ load32(src, b + n);
        if x != 0 {
            return n + (x.trailing_zeros() >> 3) as usize;
        }
        n += 4;
    }
    while b + n < limit && src[a + n] == src[b + n] {
        n += 1;
    }
    n
}

/// Encode one run of unmatched bytes at `dst[d..]`; returns the new cursor.
fn emit_literal(dst: &mut [u8], mut d: usize, lit: &[u8]) -> usize {
    debug_assert!(!lit.is_empty());
    let n = lit.len() - 1;
    if n < 60 {
        dst[d] = TAG_LITERAL | ((n as u8) << 2);
        d += 1;
    } else {
        let tag_at = d;
        d += 1;
        let mut rem = n;
        let mut count = 0u8;
        while rem > 0 {
            dst[d] = rem as u8;
            d += 1;
            rem >>= 8;
            count += 1;
        }
        dst[tag_at] = TAG_LITERAL | ((59 + count) << 2);
    }
    dst[d..d + lit.len()].copy_from_slice(lit);
    d + lit.len()
}

/// Encode a single copy element with `length <= MAX_ELEMENT_COPY_LEN`.
fn emit_copy_element(dst: &mut [u8], mut d: usize, offset: usize, len: usize) -> usize {
    debug_assert!(len >= MIN_MATCH_LEN && len <= MAX_ELEMENT_COPY_LEN);
    debug_assert!(offset >= 1 && offset < WINDOW_SIZE);

    if len <= 11 && offset < MAX_COPY1_OFFSET {
        dst[d] = TAG_COPY1 | (((len - MIN_MATCH_LEN) as u8) << 2) | (((offset >> 8) as u8) << 5);
        dst[d + 1] = offset as u8;
        return d + 2;
    }

    let (tag, off_bytes) = if offset < MAX_COPY2_OFFSET {
        (TAG_COPY2, 2)
    } else {
        (TAG_COPY3, 3)
    };
    let m: u8 = if len <= 62 {
        (len - 1) as u8
    } else if len <= 318 {
        62
    } else {
        63
    };
    dst[d] = tag | (m << 2);
    d += 1;
    for i in 0..off_bytes {
        dst[d + i] = (offset >> (8 * i)) as u8;
    }
    d += off_bytes;
    if m == 62 {
        dst[d] = (len - 63) as u8;
        d += 1;
    } else if m == 63 {
        dst[d] = len as u8;
        dst[d + 1] = (len >> 8) as u8;
        d += 2;
    }
    d
}

/// Encode a back-reference, chunking matches a single element cannot express.
/// The final chunk is never shorter than `MIN_MATCH_LEN`.
fn emit_copy(dst: &mut [u8], mut d: usize, offset: usize, mut len: usize) -> usize {
    while len > MAX_ELEMENT_COPY_LEN + 3 {
        d = emit_copy_element(dst, d, offset, MAX_ELEMENT_COPY_LEN);
        len -= MAX_ELEMENT_COPY_LEN;
    }
    if len > MAX_ELEMENT_COPY_LEN {
        d = emit_copy_element(dst, d, offset, len - MIN_MATCH_LEN);
        len = MIN_MATCH_LEN;
    }
    emit_copy_element(dst, d, offset, len)
}

fn compress_fragment(src: &[u8], dst: &mut [u8], mut d: usize, level: usize) -> usize {
    let mut table = HashTable::new(src.len(), level);

    // Positions past this limit are never probed so the 4- and 8-byte loads
    // during matching stay inside the input.
    let ip_limit = src.len() - INPUT_MARGIN;
    let mut ip = 1usize;
    let mut anchor = 0usize;

    'outer: loop {
        let mut skip = INITIAL_SKIP;
        let mut candidate;
        loop {
            if ip > ip_limit {
                break 'outer;
            }
            let cur = load32(src, ip);
            candidate = table.lookup_and_replace(cur, ip as u32);
            if candidate < ip && ip - candidate < WINDOW_SIZE && load32(src, candidate) == cur {
                break;
            }
            let advance = (skip >> 5) as usize;
            skip = next_skip(skip);
            ip += advance;
        }

        // Keep taking matches back-to-back; fall back to the skip-governed
        // scan only once a probe fails.
        loop {
            let offset = ip - candidate;
            let len = MIN_MATCH_LEN
                + extend_match(src, candidate + MIN_MATCH_LEN, ip + MIN_MATCH_LEN, src.len());
            if offset >= MAX_COPY2_OFFSET && len < FAR_MATCH_MIN_LEN {
                ip += 1;
                break;
            }
            if ip > anchor {
                d = emit_literal(dst, d, &src[anchor..ip]);
            }
            d = emit_copy(dst, d, offset, len);
            ip += len;
            anchor = ip;
            if ip > ip_limit {
                break 'outer;
            }
            if level > 0 {
                table.insert(load32(src, ip - 1), (ip - 1) as u32);
                if level > 6 {
                    table.insert(load32(src, ip - 2), (ip - 2) as u32);
                }
            }
            let cur = load32(src, ip);
            candidate = table.lookup_and_replace(cur, ip as u32);
            if !(candidate < ip && ip - candidate < WINDOW_SIZE && load32(src, candidate) == cur) {
                ip += 1;
                break;
            }
        }
    }

    if anchor < src.len() {
        d = emit_literal(dst, d, &src[anchor..]);
    }
    d
}

/// Compress `input` into `output` at the given level (0..=9, clamped).
///
/// Returns the number of bytes written, which includes the varint length
/// prefix and the four trailing guard bytes. `output` must be at least
/// `max_compressed_len(input.len())` bytes.
pub fn compress(input: &[u8], output: &mut [u8], level: usize) -> Result<usize, CompressError> {
    if input.is_empty() || input.len() >= MAX_INPUT_SIZE {
        return Err(CompressError::InvalidParameter);
    }
    if output.len() < max_compressed_len(input.len()) {
        return Err(CompressError::BufferTooSmall);
    }
    let level = level.min(MAX_COMPRESSION_LEVEL);

    let mut d = write_varint(output, input.len() as u32);
    if input.len() < INPUT_MARGIN {
        d = emit_literal(output, d, input);
    } else {
        d = compress_fragment(input, output, d, level);
    }

    output[d..d + GUARD_SIZE].fill(0);
    Ok(d + GUARD_SIZE)
}
