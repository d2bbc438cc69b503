use crate::common::*;

/// Hash tables at or below this many entries live in a fixed inline array;
/// anything larger is heap-allocated.
pub const INLINE_TABLE_ENTRIES: usize = 1 << 10;

pub const INITIAL_SKIP: u32 = 32;

/// Update the probe-distance counter after a failed probe. The scan advances
/// by `skip >> 5` bytes per probe, so incompressible runs are crossed faster
/// than compressible ones. The exact formula is a tuning knob and does not
/// affect the wire format.
#[inline(always)]
pub fn next_skip(skip: u32) -> u32 {
    32 + (((skip - 32) * 184) >> 8) + ((skip * 7) >> 11) + 1
}

enum Storage {
    Inline([u32; INLINE_TABLE_ENTRIES]),
    Heap(Vec<u32>),
}

/// Position index over already-scanned input: maps the hash of a 4-byte
/// prefix to the most recent scan offset that produced it. Collisions
/// overwrite silently, so a hit is only a candidate and must be byte-verified
/// by the caller. Every slot starts at offset 0, which verification also
/// makes safe.
pub struct HashTable {
    storage: Storage,
    shift: u32,
}

impl HashTable {
    /// Size the table for one compress call: the smallest power of two that
    /// is at least `MIN_HASH_TABLE_SIZE`, at most `2^(12 + level/2)`, and no
    /// larger than the input.
    pub fn new(input_len: usize, level: usize) -> Self {
        let level = level.min(MAX_COMPRESSION_LEVEL);
        let max_size = 1usize << (12 + level / 2);
        let mut size = MIN_HASH_TABLE_SIZE;
        while size < max_size && size * 2 <= input_len {
            size <<= 1;
        }
        let shift = 32 - size.trailing_zeros();
        let storage = if size <= INLINE_TABLE_ENTRIES {
            Storage::Inline([0; INLINE_TABLE_ENTRIES])
        } else {
            Storage::Heap(vec![0; size])
        };
        Self { storage, shift }
    }

    #[inline(always)]
    fn slot(&mut self, v: u32) -> &mut u32 {
        let h = (v.wrapping_mul(HASH_MULTIPLIER) >> self.shift) as usize;
        match &mut self.storage {
            Storage::Inline(arr) => &mut arr[h],
            Storage::Heap(vec) => &mut vec[h],
        }
    }

    /// Store `pos` for the 4-byte prefix `v` and return the previous occupant.
    #[inline(always)]
    pub fn lookup_and_replace(&mut self, v: u32, pos: u32) -> usize {
        let slot = self.slot(v);
        let prev = *slot;
        *slot = pos;
        prev as usize
    }

    #[inline(always)]
    pub fn insert(&mut self, v: u32, pos: u32) {
        *self.slot(v) = pos;
    }
}
