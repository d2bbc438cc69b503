//! Decode lookup tables, built at compile time.
//!
//! `TAG_TABLE` maps a tag byte to a packed `u16` describing the element that
//! follows:
//!
//! - bits 0..=7: base length; the resolved length is this plus the value of
//!   the extra length bytes, so sentinel tags store 63 (one extra byte) or 0
//!   (raw 2-byte length), and extended literals store 1,
//! - bits 8..=10: offset bits 8..=10 carried in a copy-1 tag,
//! - bits 11..=12: offset trailer width in bytes (0 for literals),
//! - bits 13..=15: extra length byte count (up to 4 for literals).
//!
//! `WORD_MASK` truncates a speculative little-endian word load to the trailer
//! width actually present.

use crate::common::{TAG_COPY1, TAG_COPY2, TAG_LITERAL};

pub const WORD_MASK: [u32; 5] = [0, 0xff, 0xffff, 0x00ff_ffff, 0xffff_ffff];

const fn build_tag_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut tag = 0usize;
    while tag < 256 {
        let m = (tag >> 2) as u16;
        table[tag] = match (tag & 3) as u8 {
            TAG_LITERAL => {
                if m < 60 {
                    m + 1
                } else {
                    ((m - 59) << 13) | 1
                }
            }
            // copy-1: length 4..=11 in the low 3 bits, offset bits 8..=10 in
            // the high 3.
            TAG_COPY1 => (1 << 11) | ((m >> 3) << 8) | (4 + (m & 7)),
            TAG_COPY2 => copy_entry(m, 2),
            _ => copy_entry(m, 3),
        };
        tag += 1;
    }
    table
}

const fn copy_entry(m: u16, off_bytes: u16) -> u16 {
    if m < 62 {
        (off_bytes << 11) | (m + 1)
    } else if m == 62 {
        (1 << 13) | (off_bytes << 11) | 63
    } else {
        (2 << 13) | (off_bytes << 11)
    }
}

pub static TAG_TABLE: [u16; 256] = build_tag_table();

#[inline(always)]
pub fn base_len(entry: u16) -> usize {
    (entry & 0xff) as usize
}

#[inline(always)]
pub fn offset_high(entry: u16) -> usize {
    ((entry >> 8) & 7) as usize
}

#[inline(always)]
pub fn offset_bytes(entry: u16) -> usize {
    ((entry >> 11) & 3) as usize
}

#[inline(always)]
pub fn extra_len_bytes(entry: u16) -> usize {
    (entry >> 13) as usize
}
