pub const TAG_LITERAL: u8 = 0x00;
pub const TAG_COPY1: u8 = 0x01;
pub const TAG_COPY2: u8 = 0x02;
pub const TAG_COPY3: u8 = 0x03;

/// Inputs of this length or more are rejected. Chosen so that the worst-case
/// expansion bound `32 + n + n/6` never overflows a 32-bit size.
pub const MAX_INPUT_SIZE: usize = 0xDB6D_B6BF;

/// Maximum distance a back-reference may cover.
pub const WINDOW_SIZE: usize = 1 << 20;

/// Zero bytes appended after the last element and counted in the compressed
/// length. They keep the decoder's fixed-width speculative reads in bounds and
/// must always be present; the decoder refuses streams that lack them.
pub const GUARD_SIZE: usize = 4;

/// The main compression loop needs this much lookahead for its word-at-a-time
/// probes; shorter inputs are emitted as a single literal run.
pub const INPUT_MARGIN: usize = 15;

pub const MIN_MATCH_LEN: usize = 4;

/// A single copy element never encodes a length above this; longer matches are
/// chunked by the emitter.
pub const MAX_ELEMENT_COPY_LEN: usize = 65535;

/// Copy-1 elements require the offset to fit in 11 bits.
pub const MAX_COPY1_OFFSET: usize = 2048;

/// Offsets at or above this need a 3-byte trailer (Copy-3).
pub const MAX_COPY2_OFFSET: usize = 65536;

pub const MAX_COMPRESSION_LEVEL: usize = 9;

pub const HASH_MULTIPLIER: u32 = 0x1e35_a7bd;
pub const MIN_HASH_TABLE_SIZE: usize = 256;
