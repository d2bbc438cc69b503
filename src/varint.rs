//! Base-128 varint codec for the uncompressed-length prefix.
//!
//! Least-significant group first; the top bit of each byte is set iff more
//! bytes follow. A `u32` takes at most five bytes.

pub const MAX_VARINT_LEN: usize = 5;

/// Write `v` at the start of `dst` and return the number of bytes used.
///
/// `dst` must have room for `MAX_VARINT_LEN` bytes.
pub fn write_varint(dst: &mut [u8], mut v: u32) -> usize {
    let mut i = 0;
    while v >= 0x80 {
        dst[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    dst[i] = v as u8;
    i + 1
}

/// Read a varint from the start of `src`, returning the value and the number
/// of bytes consumed.
///
/// Returns `None` if `src` ends before a terminating group, or if the fifth
/// group would overflow 32 bits.
pub fn read_varint(src: &[u8]) -> Option<(u32, usize)> {
    let mut result: u32 = 0;
    let mut shift = 0;
    for (i, &b) in src.iter().take(MAX_VARINT_LEN).enumerate() {
        let group = (b & 0x7f) as u32;
        if shift == 28 && group > 0x0f {
            return None;
        }
        result |= group << shift;
        if b & 0x80 == 0 {
            return Some((result, i + 1));
        }
        shift += 7;
    }
    None
}
